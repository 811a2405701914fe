//! Message Service
//!
//! Handles sending and listing messages.

use std::sync::Arc;

use validator::Validate;

use super::{require_chat, require_user, ServiceError};
use crate::application::dto::{GetMessagesRequest, SendMessageRequest};
use crate::domain::{Connector, Message};

/// Message operations
#[derive(Clone)]
pub struct MessageService {
    connector: Arc<dyn Connector>,
}

impl MessageService {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }

    /// Post a message into an existing chat on behalf of an existing user.
    ///
    /// Membership of the author in the chat is not required.
    pub async fn send_message(&self, request: SendMessageRequest) -> Result<Message, ServiceError> {
        request.validate().map_err(ServiceError::empty_fields)?;

        require_chat(self.connector.as_ref(), request.chat).await?;
        require_user(self.connector.as_ref(), request.author).await?;

        let message = self
            .connector
            .send_message(request.chat, request.author, &request.text)
            .await
            .map_err(ServiceError::from_write)?;

        tracing::debug!(message_id = message.id, chat_id = message.chat_id, "Message sent");
        Ok(message)
    }

    /// Messages of an existing chat, oldest first.
    pub async fn get_messages(
        &self,
        request: GetMessagesRequest,
    ) -> Result<Vec<Message>, ServiceError> {
        require_chat(self.connector.as_ref(), request.chat).await?;

        Ok(self.connector.get_messages(request.chat).await?)
    }
}
