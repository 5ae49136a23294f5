use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Malformed request bodies never reach this type: axum's `Json` extractor
/// rejects them with 422 on its own.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any external call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream completion failure, already redacted for the caller.
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Request timed out")]
    Timeout,

    /// Failure raised by a middleware layer rather than a handler.
    #[error("Middleware error: {0}")]
    Unhandled(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            // Logged with tone context where the call failed
            AppError::Llm(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "LLM_ERROR",
                format!("AI service error: {msg}"),
            ),
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Timeout => {
                tracing::warn!("Request exceeded the configured timeout");
                (
                    StatusCode::REQUEST_TIMEOUT,
                    "REQUEST_TIMEOUT",
                    "The request took too long to complete".to_string(),
                )
            }
            AppError::Unhandled(msg) => {
                tracing::error!("Middleware error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
