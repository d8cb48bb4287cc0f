//! HTTP-level integration tests for the movie endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_multipart, post_multipart};
use sqlx::PgPool;

const FIELDS: &[(&str, &str)] = &[
    ("title", "Arrival"),
    ("description", "First contact"),
    ("rating", "7.5"),
];

const PNG_BYTES: &[u8] = b"\x89PNG fake image bytes";

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn post_movie_returns_201_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/v1/movie",
        FIELDS,
        Some(("Poster.PNG", PNG_BYTES)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], 201);
    assert!(json["time"].is_string());
    assert_eq!(json["data"]["title"], "Arrival");
    assert_eq!(json["data"]["rating"], 7.5);
    assert_eq!(json["data"]["image"], "images/banner/poster.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_then_get_roundtrips_rating_and_image(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_multipart(app, "/api/v1/movie", FIELDS, Some(("a.png", PNG_BYTES))).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movie/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 7.5);
    assert_eq!(json["data"]["image"], "images/banner/a.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_without_file_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/v1/movie", FIELDS, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["user_message"]["en"].is_string());
    assert!(json["user_message"]["id"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn post_with_non_numeric_rating_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let fields = &[
        ("title", "Arrival"),
        ("description", "First contact"),
        ("rating", "abc"),
    ];
    let response =
        post_multipart(app, "/api/v1/movie", fields, Some(("a.png", PNG_BYTES))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_movie_returns_404_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["title"], "The data is not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_with_non_numeric_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_empty_catalog_returns_200_with_empty_data(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["meta_data"]["total_data"], 0);
    assert_eq!(json["data"]["meta_data"]["total_page"], 0);
    assert_eq!(json["data"]["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_reports_consistent_metadata(pool: PgPool) {
    for i in 0..12 {
        let title = format!("Movie {i}");
        let fields = [
            ("title", title.as_str()),
            ("description", "x"),
            ("rating", "5.0"),
        ];
        let app = common::build_test_app(pool.clone());
        post_multipart(app, "/api/v1/movie", &fields, Some(("a.png", PNG_BYTES))).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie?limit=5&page=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let meta = &json["data"]["meta_data"];
    assert_eq!(meta["total_data"], 12);
    assert_eq!(meta["total_page"], 3);
    assert_eq!(meta["page"], 2);
    assert_eq!(meta["limit"], 5);
    assert_eq!(json["data"]["data"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_search_filters_rows(pool: PgPool) {
    for (title, rating) in [("Alien", "8.1"), ("Aliens", "8.4"), ("Heat", "8.3")] {
        let fields = [("title", title), ("description", "x"), ("rating", rating)];
        let app = common::build_test_app(pool.clone());
        post_multipart(app, "/api/v1/movie", &fields, Some(("a.png", PNG_BYTES))).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie?search=alien&order=title.desc").await;
    let json = body_json(response).await;

    let titles: Vec<&str> = json["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Aliens", "Alien"]);
    assert_eq!(json["data"]["meta_data"]["total_data"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_with_non_numeric_limit_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie?limit=ten").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_with_unknown_order_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie?order=id;drop").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_without_file_keeps_existing_image(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_multipart(app, "/api/v1/movie", FIELDS, Some(("keep.png", PNG_BYTES))).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let fields = [
        ("title", "Arrival (remaster)"),
        ("description", "First contact"),
        ("rating", "8.0"),
    ];
    let app = common::build_test_app(pool);
    let response =
        patch_multipart(app, &format!("/api/v1/movie/{id}"), &fields, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Arrival (remaster)");
    assert_eq!(json["data"]["rating"], 8.0);
    assert_eq!(json["data"]["image"], "images/banner/keep.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_with_file_replaces_image(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_multipart(app, "/api/v1/movie", FIELDS, Some(("old.png", PNG_BYTES))).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_multipart(
        app,
        &format!("/api/v1/movie/{id}"),
        FIELDS,
        Some(("New.PNG", PNG_BYTES)),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["image"], "images/banner/new.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_missing_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response =
        patch_multipart(app, "/api/v1/movie/999999", FIELDS, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/movie/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_existing_movie_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_multipart(app, "/api/v1/movie", FIELDS, Some(("a.png", PNG_BYTES))).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/movie/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movie/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
