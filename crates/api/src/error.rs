use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinedex_core::error::CoreError;

use crate::response::{response_time, ErrorResponse, UserMessage};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so the handler layer is the sole translator
/// from errors to HTTP status codes and JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const VALIDATION_TITLE: &str = "The request is invalid";
const VALIDATION_MESSAGE: UserMessage = UserMessage {
    en: "The user request is invalid, please try again",
    id: "Request user tidak sah, silahkan dicoba lagi",
};

const NOT_FOUND_TITLE: &str = "The data is not found";
const NOT_FOUND_MESSAGE: UserMessage = UserMessage {
    en: "The data is not found, please try again",
    id: "Data tidak ditemukan, silahkan dicoba lagi",
};

const INTERNAL_TITLE: &str = "Internal Server Error";
const INTERNAL_MESSAGE: UserMessage = UserMessage {
    en: "There is some problem with server, please try again",
    id: "Ada masalah dengan server, silahkan dicoba lagi",
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, user_message, internal_message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    NOT_FOUND_TITLE,
                    NOT_FOUND_MESSAGE,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    VALIDATION_TITLE,
                    VALIDATION_MESSAGE,
                    msg.clone(),
                ),
                CoreError::Storage(msg) => {
                    tracing::error!(error = %msg, "Image storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_TITLE,
                        INTERNAL_MESSAGE,
                        "An internal error occurred".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_TITLE,
                        INTERNAL_MESSAGE,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                VALIDATION_TITLE,
                VALIDATION_MESSAGE,
                msg.clone(),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_TITLE,
                    INTERNAL_MESSAGE,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            title,
            user_message,
            internal_message,
            time: response_time(),
        };

        (status, Json(body)).into_response()
    }
}

/// Classify a sqlx error into response envelope parts.
///
/// `RowNotFound` maps to 404 as a safety net; repositories normally signal
/// absence with `Option`. Everything else maps to 500 with a sanitized
/// message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, UserMessage, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            NOT_FOUND_TITLE,
            NOT_FOUND_MESSAGE,
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_TITLE,
                INTERNAL_MESSAGE,
                "An internal error occurred".to_string(),
            )
        }
    }
}
