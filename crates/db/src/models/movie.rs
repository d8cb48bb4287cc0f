//! Movie entity model and DTOs.

use cinedex_core::sort::MovieSort;
use cinedex_core::types::{DbId, Timestamp};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// Timestamps serialize as `YYYY-MM-DD HH:MM:SS`, the format the API has
/// always exposed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub rating: f64,
    /// Path relative to the asset root; empty until a banner is uploaded.
    pub image: String,
    #[serde(serialize_with = "serialize_plain_timestamp")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_plain_timestamp")]
    pub updated_at: Timestamp,
}

/// DTO for inserting a new movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image_path: String,
}

/// DTO for updating an existing movie.
///
/// `image_path` is `None` when no new banner was uploaded; the stored image
/// column is left untouched in that case.
#[derive(Debug, Clone)]
pub struct UpdateMovie {
    pub title: String,
    pub description: String,
    pub rating: f64,
    pub image_path: Option<String>,
}

/// Filter, ordering and paging parameters for a movie listing.
///
/// `page` is 1-based. A non-positive `limit` disables pagination and returns
/// the full filtered result set.
#[derive(Debug, Clone, Default)]
pub struct MovieListQuery {
    pub search: Option<String>,
    pub sort: Option<MovieSort>,
    pub page: i64,
    pub limit: i64,
}

fn serialize_plain_timestamp<S: Serializer>(ts: &Timestamp, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format("%Y-%m-%d %H:%M:%S").to_string())
}
