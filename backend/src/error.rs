//! Error handling for the Farm Advisory Dashboard
//!
//! Every failure is logged server-side with full detail and reported to
//! the caller as a generic message plus an optional `details` string. No
//! error is fatal to the process; each request is isolated.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required credential is not provisioned
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A third-party provider returned a non-success response or an
    /// unusable body
    #[error("{service} error: {message}")]
    Upstream {
        service: &'static str,
        status: Option<u16>,
        message: String,
    },

    /// Local I/O failure, e.g. reading the crop dataset
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(service: &'static str, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            status,
            message: message.into(),
        }
    }
}

/// Error response structure: `{ "error": ..., "details": ... }`
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full detail stays in the server log
        tracing::error!("Error: {:?}", self);

        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::Upstream {
                service, message, ..
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: format!("Failed to get {} response", service),
                    details: Some(message.clone()),
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "An internal server error occurred".to_string(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
