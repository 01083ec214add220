//! Error types for the bookstore server

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::repository::StoreError;

/// Error categories exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ErrorCode {
    InvalidInput,
    NotFound,
    MethodNotAllowed,
    Timeout,
    QueryFailure,
    ScanFailure,
    InternalFailure,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Database error: {0}")]
    Database(StoreError),

    #[error("Service unavailable: {0}")]
    Unavailable(StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} {} not found", entity, id))
            }
            other => AppError::Database(other),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    pub code: ErrorCode,
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidInput(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, msg.clone())
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Lookup failed: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone())
            }
            AppError::MethodNotAllowed(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::METHOD_NOT_ALLOWED, ErrorCode::MethodNotAllowed, msg.clone())
            }
            AppError::Timeout(limit) => {
                tracing::error!("Request exceeded {:?}", limit);
                (
                    StatusCode::REQUEST_TIMEOUT,
                    ErrorCode::Timeout,
                    "Request Timeout".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    store_error_code(e),
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Unavailable(e) => {
                tracing::error!("Store unavailable: {:?}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    store_error_code(e),
                    "Service Unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalFailure,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code,
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}

fn store_error_code(err: &StoreError) -> ErrorCode {
    match err {
        StoreError::NotFound { .. } => ErrorCode::NotFound,
        StoreError::Query(_) => ErrorCode::QueryFailure,
        StoreError::Scan(_) => ErrorCode::ScanFailure,
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
