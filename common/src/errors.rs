//! Unified application error types.
//!
//! One enum covers every failure the service can produce. Errors carry
//! their user-facing text and convert into the standard response envelope
//! when returned from a handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::response::ApiResponse;

/// Convenience alias for results carrying [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database connection establishment failed.
    ///
    /// Carries the raw driver message so callers can embed it verbatim;
    /// the variant itself records the kind.
    #[error("{0}")]
    DatabaseConnection(String),

    /// Input or configuration validation failed.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// HTTP status for this error when it crosses the API boundary.
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable machine-readable error code.
    fn error_code(&self) -> &'static str {
        match self {
            AppError::DatabaseConnection(_) => "DATABASE_UNAVAILABLE",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }
        let body = ApiResponse::err(self.error_code(), self.to_string());
        (status, Json(body)).into_response()
    }
}
