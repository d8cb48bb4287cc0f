//! Shared response envelope types for API handlers.
//!
//! Successful responses use `{ code, data, time }`; errors use
//! `{ code, title, user_message, internal_message, time }` (see
//! [`crate::error::AppError`]). `time` is RFC3339 in the service's reporting
//! zone.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::FixedOffset;
use serde::Serialize;

/// Offset of the service's reporting time zone (UTC+7, no DST).
const REPORTING_OFFSET_SECS: i32 = 7 * 3600;

/// Current time in the reporting zone, RFC3339.
pub fn response_time() -> String {
    let offset = FixedOffset::east_opt(REPORTING_OFFSET_SECS).expect("static UTC+7 offset");
    chrono::Utc::now().with_timezone(&offset).to_rfc3339()
}

/// Standard `{ code, data, time }` success envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub code: u16,
    pub data: T,
    pub time: String,
}

impl<T: Serialize> DataResponse<T> {
    /// Envelope with HTTP 200.
    pub fn ok(data: T) -> Response {
        Self::with_status(StatusCode::OK, data)
    }

    /// Envelope with HTTP 201.
    pub fn created(data: T) -> Response {
        Self::with_status(StatusCode::CREATED, data)
    }

    fn with_status(status: StatusCode, data: T) -> Response {
        let body = DataResponse {
            code: status.as_u16(),
            data,
            time: response_time(),
        };
        (status, Json(body)).into_response()
    }
}

/// Bilingual human-readable error message.
#[derive(Debug, Serialize)]
pub struct UserMessage {
    pub en: &'static str,
    pub id: &'static str,
}

/// Error envelope body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub title: &'static str,
    pub user_message: UserMessage,
    pub internal_message: String,
    pub time: String,
}
