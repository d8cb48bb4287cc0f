pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Build the movie route tree, mounted under the configured base path.
///
/// ```text
/// GET    /movie        list (?search, ?limit, ?page, ?order)
/// POST   /movie        create (multipart)
/// GET    /movie/{id}   get_by_id
/// PATCH  /movie/{id}   update (multipart, image optional)
/// DELETE /movie/{id}   delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movie", get(movie::list).post(movie::create))
        .route(
            "/movie/{id}",
            get(movie::get_by_id)
                .patch(movie::update)
                .delete(movie::delete),
        )
}
