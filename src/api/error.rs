//! Mapping of [`NotesError`] onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::NotesError;

/// Error codes carried next to the message in every error body.
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Error response body for HTTP endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl NotesError {
    /// HTTP status and error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            NotesError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
            NotesError::Provider(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::PROVIDER_ERROR,
            ),
            NotesError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::STORAGE_ERROR,
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
            ),
        }
    }
}

impl IntoResponse for NotesError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            NotesError::Validation(msg) => msg.clone(),
            NotesError::Provider(msg) => {
                tracing::error!(error = %msg, "Summarization failed");
                msg.clone()
            }
            NotesError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                "A storage error occurred".to_string()
            }
            other => {
                tracing::error!(error = %other, "Internal error");
                "An internal error occurred".to_string()
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
