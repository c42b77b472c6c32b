use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Clients only ever see a status code and a short plain-text message.
        match &self {
            AppError::NotFound(msg) => tracing::error!("Missing resource: {msg}"),
            AppError::Io(e) => tracing::error!("I/O error: {e}"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Error reading ATS score").into_response()
    }
}
