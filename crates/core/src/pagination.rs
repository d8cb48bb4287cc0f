//! Pagination math and list metadata.

use serde::Serialize;

/// Fallback page number when the client sends none and config is silent.
pub const DEFAULT_PAGE: i64 = 1;

/// Fallback page size when the client sends none and config is silent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Metadata block returned alongside every movie listing.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub total_data: i64,
    pub total_page: i64,
    pub page: i64,
    pub limit: i64,
}

impl PageMeta {
    pub fn new(total_data: i64, page: i64, limit: i64) -> Self {
        Self {
            total_data,
            total_page: total_pages(total_data, limit),
            page,
            limit,
        }
    }
}

/// Number of pages needed to cover `count` rows at `limit` rows per page.
///
/// A non-positive `limit` disables pagination: the whole result set is one
/// page, so this returns 1 when any rows exist and 0 otherwise.
pub fn total_pages(count: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return i64::from(count > 0);
    }
    (count + limit - 1) / limit
}

/// Row offset for a 1-based `page` at `limit` rows per page.
///
/// Pages below 1 are clamped to the first page.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1) * limit
}
