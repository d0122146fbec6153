//! Message route handlers.
//!
//! Thin axum adapters: extract the path id or raw body, delegate to
//! [`MessageService`](crate::http::service::MessageService), encode the result.
//! The id is always checked before the body is decoded.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::http::error::ApiError;
use crate::http::request::decode_message_request;
use crate::http::response::{json_response, MessageResponse};
use crate::http::server::AppState;
use crate::http::service::require_id;

/// `POST /messages`
pub async fn create_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = decode_message_request(&body)?;
    let message = state.service.create(request.content).await?;

    json_response(StatusCode::CREATED, &MessageResponse::from(message))
}

/// `GET /messages`
pub async fn list_messages(State(state): State<AppState>) -> Result<Response, ApiError> {
    let messages: Vec<MessageResponse> = state
        .service
        .list()
        .await?
        .into_iter()
        .map(MessageResponse::from)
        .collect();

    json_response(StatusCode::OK, &messages)
}

/// `GET /messages/{id}`
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let message = state.service.get(&id).await?;

    json_response(StatusCode::OK, &MessageResponse::from(message))
}

/// `PUT /messages/{id}`
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    require_id(&id)?;
    let request = decode_message_request(&body)?;
    let message = state.service.update(&id, &request.content).await?;

    json_response(StatusCode::OK, &MessageResponse::from(message))
}

/// `DELETE /messages/{id}`
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state.service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// `GET|PUT|DELETE /messages/` (no id segment)
pub async fn reject_missing_id() -> ApiError {
    ApiError::EmptyId
}
