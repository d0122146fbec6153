//! Request decoding.
//!
//! # Responsibilities
//! - Decode message request bodies into [`MessageRequest`]
//! - Translate parse failures into stable client-facing messages
//! - Build the per-request tracing span, keyed by request ID

use axum::{body::Body, http::Request};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::http::error::ApiError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageRequest {
    /// New message text. A missing field decodes as empty.
    #[serde(default)]
    pub content: String,
}

/// Decode a JSON request body.
pub fn decode_message_request(body: &[u8]) -> Result<MessageRequest, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting malformed request body");
        ApiError::InvalidBody(parse_failure(&e))
    })
}

/// Stable description of a JSON parse failure.
fn parse_failure(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        Category::Syntax => "malformed JSON",
        Category::Eof => "unexpected end of input",
        Category::Data => "unexpected field type",
        Category::Io => "unreadable input",
    }
}

/// Span for one HTTP request, tagged with its request ID.
pub fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
