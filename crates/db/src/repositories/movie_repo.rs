//! Repository for the `movies` table.

use sqlx::PgPool;

use cinedex_core::pagination::page_offset;
use cinedex_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieListQuery, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, rating, image, created_at, updated_at";

/// WHERE clause and bind pattern for a movie listing filter.
///
/// `count` and `list` must select the identical filtered row set so the
/// metadata stays consistent with the items; both build their predicate here
/// and nowhere else.
struct MovieFilter {
    where_clause: &'static str,
    pattern: Option<String>,
}

/// Build the search predicate for a listing query.
///
/// The search term is matched against title, description and the textual form
/// of the rating, wrapped in `%` wildcards. The three ILIKEs are grouped in
/// parentheses so the predicate composes safely with any clause appended
/// after it.
fn build_movie_filter(query: &MovieListQuery) -> MovieFilter {
    match query.search.as_deref() {
        Some(term) if !term.is_empty() => MovieFilter {
            where_clause:
                " WHERE (title ILIKE $1 OR description ILIKE $1 OR rating::text ILIKE $1)",
            pattern: Some(format!("%{term}%")),
        },
        _ => MovieFilter {
            where_clause: "",
            pattern: None,
        },
    }
}

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// Timestamps are assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, description, rating, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.rating)
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count the rows matching the query's filter, ignoring pagination.
    ///
    /// Zero is a valid count; an empty listing is not an error.
    pub async fn count(pool: &PgPool, query: &MovieListQuery) -> Result<i64, sqlx::Error> {
        let filter = build_movie_filter(query);
        let sql = format!("SELECT COUNT(*) FROM movies{}", filter.where_clause);

        let mut q = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(ref pattern) = filter.pattern {
            q = q.bind(pattern);
        }
        q.fetch_one(pool).await
    }

    /// List movies matching the query, ordered and paginated.
    ///
    /// Applies the same filter predicate as [`MovieRepo::count`]. Ordering
    /// comes from the validated sort allow-list; default order is insertion
    /// order by ID so listings are stable. `limit <= 0` returns the full
    /// filtered set.
    pub async fn list(pool: &PgPool, query: &MovieListQuery) -> Result<Vec<Movie>, sqlx::Error> {
        let filter = build_movie_filter(query);

        let mut sql = format!("SELECT {COLUMNS} FROM movies{}", filter.where_clause);

        match query.sort {
            Some(sort) => sql.push_str(&format!(" ORDER BY {}", sort.to_sql())),
            None => sql.push_str(" ORDER BY id ASC"),
        }

        let paginate = query.limit > 0;
        if paginate {
            let bind_idx = if filter.pattern.is_some() { 2 } else { 1 };
            sql.push_str(&format!(" LIMIT ${bind_idx} OFFSET ${}", bind_idx + 1));
        }

        let mut q = sqlx::query_as::<_, Movie>(&sql);
        if let Some(ref pattern) = filter.pattern {
            q = q.bind(pattern);
        }
        if paginate {
            q = q
                .bind(query.limit)
                .bind(page_offset(query.page, query.limit));
        }
        q.fetch_all(pool).await
    }

    /// Update a movie, refreshing `updated_at`.
    ///
    /// All fields are set except the image, which is only overwritten when
    /// `input.image_path` is `Some` — an update without a new upload must not
    /// clobber the stored banner. Existence checking is the caller's
    /// responsibility; returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                description = $3,
                rating = $4,
                image = COALESCE($5, image),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.rating)
            .bind(&input.image_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
