//! Chat Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{
    ChatListResponse, CreateChatRequest, CreatedResponse, GetChatsRequest,
};
use crate::application::services::ChatService;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a chat with its initial members
pub async fn create_chat(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateChatRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let chat_service = ChatService::new(state.connector.clone());
    let chat = chat_service.create_chat(body).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: chat.id })))
}

/// List the chats a user takes part in
pub async fn get_chats(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<GetChatsRequest>,
) -> Result<Json<ChatListResponse>, AppError> {
    let chat_service = ChatService::new(state.connector.clone());
    let chats = chat_service.get_chats(body).await?;

    Ok(Json(ChatListResponse { chats }))
}
