//! Error types for the API layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gateway_ingest::IngestError;
use thiserror::Error;

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Ingest(#[from] IngestError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Valid input that the downstream collaborator refused
            ApiError::Ingest(IngestError::Sink { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Ingest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        // The ingest contract promises fixed plain-text messages.
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
