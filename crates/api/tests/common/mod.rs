use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cinedex_api::config::ServerConfig;
use cinedex_api::router::build_app_router;
use cinedex_api::service::MovieService;
use cinedex_api::state::AppState;
use cinedex_api::storage::ImageStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the given asset root.
pub fn test_config(asset_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        base_path: "/api/v1".to_string(),
        asset_root,
        default_page: 1,
        default_limit: 10,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and asset root.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_assets(pool: PgPool, asset_root: PathBuf) -> Router {
    let config = test_config(asset_root.clone());
    let movies = Arc::new(MovieService::new(
        pool.clone(),
        ImageStore::new(asset_root),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        movies,
    };

    build_app_router(state, &config)
}

/// [`build_test_app_with_assets`] writing uploads under the OS temp dir.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_assets(pool, std::env::temp_dir().join("cinedex-test-assets"))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

const BOUNDARY: &str = "----cinedex-test-boundary";

/// Assemble a `multipart/form-data` body from text fields and an optional
/// `image` file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, bytes)) = image {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Response<Body> {
    send_multipart(app, "POST", uri, fields, image).await
}

pub async fn patch_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Response<Body> {
    send_multipart(app, "PATCH", uri, fields, image).await
}

async fn send_multipart(
    app: Router,
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Response<Body> {
    let (content_type, body) = multipart_body(fields, image);
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
