//! Sort-key allow-list for movie listings.
//!
//! Client `order` input is parsed into a [`MovieSort`] and rendered back to a
//! fixed SQL fragment, so raw request text never reaches the query string.

use std::str::FromStr;

use crate::error::CoreError;

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Rating,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    fn column(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::CreatedAt => "created_at",
            SortKey::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A validated `ORDER BY` selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl MovieSort {
    /// Render as an `ORDER BY` body, e.g. `rating DESC`.
    pub fn to_sql(self) -> String {
        format!("{} {}", self.key.column(), self.direction.keyword())
    }
}

impl FromStr for MovieSort {
    type Err = CoreError;

    /// Accepts `"<key>"` or `"<key>.<direction>"`, case-insensitive.
    ///
    /// Anything outside the allow-list is a validation error; the raw input
    /// is echoed back to the client so the mistake is obvious.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (key_part, dir_part) = match input.split_once('.') {
            Some((k, d)) => (k.trim(), Some(d.trim())),
            None => (input.trim(), None),
        };

        let key = match key_part.to_ascii_lowercase().as_str() {
            "title" => SortKey::Title,
            "rating" => SortKey::Rating,
            "created_at" => SortKey::CreatedAt,
            "updated_at" => SortKey::UpdatedAt,
            _ => {
                return Err(CoreError::Validation(format!(
                    "Unknown sort key '{input}'. \
                     Expected one of: title, rating, created_at, updated_at, \
                     optionally suffixed with .asc or .desc"
                )))
            }
        };

        let direction = match dir_part {
            None => SortDirection::default(),
            Some(d) => match d.to_ascii_lowercase().as_str() {
                "asc" => SortDirection::Asc,
                "desc" => SortDirection::Desc,
                _ => {
                    return Err(CoreError::Validation(format!(
                        "Unknown sort direction '{d}'. Expected 'asc' or 'desc'"
                    )))
                }
            },
        };

        Ok(MovieSort { key, direction })
    }
}
