//! Response encoding.
//!
//! # Responsibilities
//! - Map domain messages to the wire shape `{id, content, is_palindrome}`
//! - Serialize JSON bodies, surfacing encode failures as [`ApiError`]

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::model::Message;

/// Wire representation of a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub content: String,
    pub is_palindrome: bool,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            is_palindrome: message.is_palindrome,
        }
    }
}

/// Serialize `body` as a JSON response with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body)?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}
