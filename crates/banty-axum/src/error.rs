//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` categories to HTTP status codes and the
//! `{"success":false,"message":…}` body shape the frontend expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use banty_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid identity assertion.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid identity, not privileged.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            success: false,
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Auth(msg) => HttpError::Unauthorized(msg),
            CoreError::Forbidden(msg) => HttpError::Forbidden(msg),
            CoreError::NotFound(msg) => HttpError::NotFound(msg),
            CoreError::Upload(msg)
            | CoreError::Delivery(msg)
            | CoreError::Storage(msg)
            | CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}
