//! Movie use-case layer.
//!
//! Orchestrates the image store and the movie repository; enforces
//! "must exist before update/delete" and assembles paginated list responses.
//! Repository errors pass through unwrapped — the handler layer owns the
//! translation to HTTP.

use cinedex_core::error::CoreError;
use cinedex_core::pagination::PageMeta;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::{CreateMovie, Movie, MovieListQuery, UpdateMovie};
use cinedex_db::repositories::MovieRepo;
use cinedex_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::storage::ImageStore;

/// Subdirectory (under the asset root) where banner uploads are stored.
const BANNER_SUBPATH: &str = "images/banner";

/// Text fields of a create/update request, as read from the multipart form.
#[derive(Debug, Clone)]
pub struct MovieFields {
    pub title: String,
    pub description: String,
    /// Raw rating text; parsed to `f64` by the service.
    pub rating: String,
}

/// An uploaded image file.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A page of movies plus listing metadata.
#[derive(Debug, Serialize)]
pub struct MovieListResult {
    pub meta_data: PageMeta,
    pub data: Vec<Movie>,
}

pub struct MovieService {
    pool: DbPool,
    images: ImageStore,
}

impl MovieService {
    pub fn new(pool: DbPool, images: ImageStore) -> Self {
        Self { pool, images }
    }

    /// Create a movie from form fields and a required banner upload.
    ///
    /// The image is written to disk before the row exists; if the insert
    /// fails the file is removed again so no orphan is left behind.
    pub async fn create(&self, fields: MovieFields, upload: ImageUpload) -> AppResult<Movie> {
        let rating = parse_rating(&fields.rating)?;
        let image_path = self
            .images
            .save(BANNER_SUBPATH, &upload.filename, &upload.bytes)
            .await?;

        let input = CreateMovie {
            title: fields.title,
            description: fields.description,
            rating,
            image_path: image_path.clone(),
        };

        match MovieRepo::create(&self.pool, &input).await {
            Ok(movie) => Ok(movie),
            Err(err) => {
                self.images.remove(&image_path).await;
                Err(err.into())
            }
        }
    }

    /// List movies with count metadata.
    ///
    /// Zero matches is a success with empty `data`, never an error; count and
    /// items come from the same filter predicate so the metadata is
    /// consistent with the page contents.
    pub async fn list(&self, query: MovieListQuery) -> AppResult<MovieListResult> {
        let total = MovieRepo::count(&self.pool, &query).await?;
        let data = MovieRepo::list(&self.pool, &query).await?;

        Ok(MovieListResult {
            meta_data: PageMeta::new(total, query.page, query.limit),
            data,
        })
    }

    pub async fn get(&self, id: DbId) -> AppResult<Movie> {
        let movie = MovieRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Movie", id })?;
        Ok(movie)
    }

    /// Update a movie; the banner is replaced only when a new file came in.
    pub async fn update(
        &self,
        id: DbId,
        fields: MovieFields,
        upload: Option<ImageUpload>,
    ) -> AppResult<Movie> {
        // Fail fast before touching the filesystem.
        self.get(id).await?;

        let rating = parse_rating(&fields.rating)?;
        let image_path = match upload {
            Some(upload) => Some(
                self.images
                    .save(BANNER_SUBPATH, &upload.filename, &upload.bytes)
                    .await?,
            ),
            None => None,
        };

        let input = UpdateMovie {
            title: fields.title,
            description: fields.description,
            rating,
            image_path,
        };

        let movie = MovieRepo::update(&self.pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound { entity: "Movie", id })?;
        Ok(movie)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.get(id).await?;
        MovieRepo::delete(&self.pool, id).await?;
        Ok(())
    }
}

/// Parse the rating form field, rejecting non-numeric input.
fn parse_rating(raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("Rating must be numeric, got '{raw}'")))
}
