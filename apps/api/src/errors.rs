use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Server-side failure. `message` is what the client sees; `cause` is only logged.
    #[error("Processing error: {message}")]
    Processing {
        message: String,
        cause: anyhow::Error,
    },
}

impl AppError {
    pub fn processing(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        AppError::Processing {
            message: message.into(),
            cause: cause.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg)
            }
            AppError::Processing { message, cause } => {
                tracing::error!("{message}: {cause:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "PROCESSING_ERROR", message)
            }
        };

        // `error` stays a plain string: the browser client renders it directly.
        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
