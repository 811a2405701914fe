//! Chat Service
//!
//! Handles chat creation and per-user chat listing.

use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use super::{require_user, ServiceError};
use crate::application::dto::{CreateChatRequest, GetChatsRequest};
use crate::domain::{Chat, Connector};

/// Chat operations
#[derive(Clone)]
pub struct ChatService {
    connector: Arc<dyn Connector>,
}

impl ChatService {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }

    /// Create a chat with a unique name and an initial set of existing members.
    ///
    /// The name is checked first, then each member in request order; the
    /// first missing member aborts the request before anything is written.
    pub async fn create_chat(&self, request: CreateChatRequest) -> Result<Chat, ServiceError> {
        request.validate().map_err(ServiceError::empty_fields)?;

        if self.connector.check_chat_name(&request.name).await? {
            return Err(ServiceError::AlreadyExist(format!(
                "chat '{}' already exists",
                request.name
            )));
        }

        let mut checked = HashSet::with_capacity(request.users.len());
        for &user_id in &request.users {
            if checked.insert(user_id) {
                require_user(self.connector.as_ref(), user_id).await?;
            }
        }

        let chat = self
            .connector
            .create_chat(&request.name, &request.users)
            .await
            .map_err(ServiceError::from_write)?;

        tracing::info!(
            chat_id = chat.id,
            name = %chat.name,
            members = chat.members.len(),
            "Chat created"
        );
        Ok(chat)
    }

    /// Chats of an existing user that have at least one message, most recently active first.
    pub async fn get_chats(&self, request: GetChatsRequest) -> Result<Vec<Chat>, ServiceError> {
        require_user(self.connector.as_ref(), request.user).await?;

        Ok(self.connector.get_chats_for_user(request.user).await?)
    }
}
