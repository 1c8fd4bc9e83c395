//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::services::error::AnalysisError;
use crate::services::report::ReportError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Request was well-formed but the data cannot support the computation
    UnprocessableEntity(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("INSUFFICIENT_DATA", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", e.to_string()))
                }
                RepositoryError::ValidationError { .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("BAD_REQUEST", e.to_string()),
                ),
                RepositoryError::InternalError { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("REPOSITORY_ERROR", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::InvalidGeometry(_) | AnalysisError::Configuration(_) => {
                AppError::BadRequest(err.to_string())
            }
            AnalysisError::InsufficientData(_) => AppError::UnprocessableEntity(err.to_string()),
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Repository(e) => AppError::Repository(e),
            ReportError::Analysis(e) => e.into(),
            ReportError::Provider(e) => AppError::Internal(format!("provider error: {}", e)),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
