//! HTTP error mapping.
//!
//! | Error | Status | Body |
//! |---|---|---|
//! | `InvalidBody` | 400 | `invalid request body: <category>` |
//! | `EmptyContent` | 400 | `content cannot be empty` |
//! | `EmptyId` | 400 | `id should not be empty` |
//! | `NotFound` | 404 | `message not found` |
//! | `Storage`, `Serialization` | 500 | `internal server error` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::storage::StorageError;

/// Client-visible body for every 500 response.
pub const INTERNAL_ERROR_BODY: &str = "internal server error";

/// Errors produced while handling a message request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not a valid message request.
    #[error("invalid request body: {0}")]
    InvalidBody(&'static str),

    /// Create request with empty content.
    #[error("content cannot be empty")]
    EmptyContent,

    /// Path id is empty.
    #[error("id should not be empty")]
    EmptyId,

    /// No message with the requested id.
    #[error("message not found")]
    NotFound,

    /// Unexpected storage failure.
    #[error("storage failure: {0}")]
    Storage(StorageError),

    /// Response could not be encoded.
    #[error("failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::EmptyContent | ApiError::EmptyId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            (status, INTERNAL_ERROR_BODY).into_response()
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
            (status, self.to_string()).into_response()
        }
    }
}
