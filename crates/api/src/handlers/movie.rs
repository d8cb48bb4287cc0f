//! Handlers for the `/movie` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use cinedex_core::sort::MovieSort;
use cinedex_core::types::DbId;
use cinedex_db::models::movie::MovieListQuery;
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::service::{ImageUpload, MovieFields};
use crate::state::AppState;

/// Raw query parameters of `GET /movie`.
///
/// `limit` and `page` arrive as strings so a non-numeric value produces the
/// service's 400 envelope instead of a bare extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ListMoviesParams {
    pub search: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub order: Option<String>,
}

/// GET /movie
///
/// Missing `limit`/`page` fall back to the configured defaults; `order` goes
/// through the sort allow-list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Response> {
    let query = build_list_query(&params, &state.config)?;
    let result = state.movies.list(query).await?;
    Ok(DataResponse::ok(result))
}

/// GET /movie/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let movie = state.movies.get(id).await?;
    Ok(DataResponse::ok(movie))
}

/// POST /movie
///
/// Multipart form: `title`, `description`, `rating` and a required `image`
/// file.
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> AppResult<Response> {
    let (fields, upload) = parse_movie_form(multipart).await?;
    let upload =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'image' file".into()))?;

    let movie = state.movies.create(fields, upload).await?;
    Ok(DataResponse::created(movie))
}

/// PATCH /movie/{id}
///
/// Same form as create, but the `image` file is optional; without one the
/// stored banner stays as it is.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    let (fields, upload) = parse_movie_form(multipart).await?;
    let movie = state.movies.update(id, fields, upload).await?;
    Ok(DataResponse::ok(movie))
}

/// DELETE /movie/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    state.movies.delete(id).await?;
    Ok(DataResponse::ok("Deleted"))
}

/// Resolve raw listing parameters against configured defaults.
fn build_list_query(
    params: &ListMoviesParams,
    config: &ServerConfig,
) -> Result<MovieListQuery, AppError> {
    let limit = match params.limit.as_deref() {
        None | Some("") => config.default_limit,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("Limit must be numeric, got '{raw}'")))?,
    };

    let page = match params.page.as_deref() {
        None | Some("") => config.default_page,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("Page must be numeric, got '{raw}'")))?,
    };

    let sort = match params.order.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<MovieSort>()?),
    };

    let search = params.search.clone().filter(|s| !s.is_empty());

    Ok(MovieListQuery {
        search,
        sort,
        page,
        limit,
    })
}

/// Read the movie multipart form into text fields plus an optional upload.
///
/// Missing text fields default to empty strings (the rating check catches an
/// absent rating); unknown fields are ignored.
async fn parse_movie_form(
    mut multipart: Multipart,
) -> Result<(MovieFields, Option<ImageUpload>), AppError> {
    let mut fields = MovieFields {
        title: String::new(),
        description: String::new(),
        rating: String::new(),
    };
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                fields.title = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "description" => {
                fields.description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "rating" => {
                fields.rating = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                upload = Some(ImageUpload {
                    filename,
                    bytes: data.to_vec(),
                });
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok((fields, upload))
}
