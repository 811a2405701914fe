//! Message Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{
    CreatedResponse, GetMessagesRequest, MessageListResponse, SendMessageRequest,
};
use crate::application::services::MessageService;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Send a message to a chat
pub async fn send_message(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SendMessageRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let message_service = MessageService::new(state.connector.clone());
    let message = message_service.send_message(body).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: message.id })))
}

/// Get the messages of a chat, oldest first
pub async fn get_messages(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<GetMessagesRequest>,
) -> Result<Json<MessageListResponse>, AppError> {
    let message_service = MessageService::new(state.connector.clone());
    let messages = message_service.get_messages(body).await?;

    Ok(Json(MessageListResponse { messages }))
}
