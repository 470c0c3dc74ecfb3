//! REST error types with structured JSON responses.
//!
//! Each variant maps to one wire shape the website frontend understands.
//! Validation failures keep per-field details so the form can attach
//! messages to inputs; everything else is a single `error` string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use springlab_core::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `400` with `{"error": "Invalid input", "details": {field: [messages]}}`.
    #[error("invalid input")]
    Validation(ValidationErrors),
    /// `404` with `{"error": "<message>"}`.
    #[error("{0}")]
    NotFound(String),
    /// `500` with `{"error": "<message>"}`.
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ValidationErrorBody {
    error: &'static str,
    details: ValidationErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody {
                    error: "Invalid input",
                    details,
                }),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}
