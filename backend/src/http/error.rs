//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::distribution::DistributionError;

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

/// Seconds suggested to clients in `Retry-After` when storage is temporarily unavailable.
pub const RETRY_AFTER_SECS: u64 = 1;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
    /// Distribution request refused
    Distribution(DistributionError),
}

impl AppError {
    /// Whether the failure is transient and the request may be repeated as-is.
    fn is_retryable(&self) -> bool {
        match self {
            AppError::Repository(e) | AppError::Distribution(DistributionError::Repository(e)) => {
                e.is_retryable()
            }
            _ => false,
        }
    }

    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => repository_response(e),
            AppError::Distribution(DistributionError::Repository(e)) => repository_response(e),
            AppError::Distribution(e) => {
                let status = match e {
                    DistributionError::InvalidQuantity { .. } => StatusCode::BAD_REQUEST,
                    DistributionError::SchoolNotFound { .. } => StatusCode::NOT_FOUND,
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, ApiError::new(e.code(), e.to_string()))
            }
        }
    }
}

fn repository_response(e: RepositoryError) -> (StatusCode, ApiError) {
    let (status, code) = match &e {
        RepositoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        RepositoryError::ValidationError { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        RepositoryError::ConnectionError { .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, "REPOSITORY_UNAVAILABLE")
        }
        RepositoryError::ConfigurationError { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR")
        }
    };

    let mut body = ApiError::new(code, e.message());
    let context = e.context().to_string();
    if !context.is_empty() {
        body = body.with_details(context.trim_start().to_string());
    }
    (status, body)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let retryable = self.is_retryable();
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        }
        let mut response = (status, Json(error)).into_response();
        if retryable {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, header::HeaderValue::from(RETRY_AFTER_SECS));
        }
        response
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<DistributionError> for AppError {
    fn from(err: DistributionError) -> Self {
        AppError::Distribution(err)
    }
}

/// Undecodable or incomplete request bodies are client errors, reported in
/// the same JSON shape as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
