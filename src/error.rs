//! Error types for the record server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchRecord = 1,
    BadValue = 2,
}

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The requested id is absent from its store.
    #[error("Not found: {msg}")]
    NotFound { msg: String },

    /// A request payload was missing or malformed. Only raised at the HTTP
    /// boundary; the record services never produce it.
    #[error("Validation error: {msg}")]
    Validation { msg: String },
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound { msg: msg.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation { msg: msg.into() }
    }

    /// Human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound { msg } | AppError::Validation { msg } => msg,
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, ErrorCode::NoSuchRecord),
            AppError::Validation { msg } => {
                tracing::debug!("Rejected request payload: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue)
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
