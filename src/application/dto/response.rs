//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Chat, Message};

/// Identifier of a newly created entity
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: u64,
}

/// Chats of a user
#[derive(Debug, Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<Chat>,
}

/// Messages of a chat
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
}
