//! In-Memory Connector
//!
//! Process-local implementation of the [`Connector`] contract. It follows the
//! relational backend's rules (unique names, atomic chat creation, listing
//! only chats that have messages, ordering) so the HTTP layer can be run and
//! tested without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::entities::normalize_members;
use crate::domain::{Chat, Connector, ConnectorError, Message, User};
use crate::infrastructure::metrics;

const BACKEND: &str = "memory";

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    chats: Vec<Chat>,
    messages: Vec<Message>,
}

impl MemoryState {
    /// Ids start at 1 and are never reused since nothing is deleted.
    fn next_id(len: usize) -> u64 {
        len as u64 + 1
    }

    /// Timestamps never go backwards, so insertion order and time order agree.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.messages.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        }
    }

    /// Time and id of the chat's latest message. The id breaks timestamp ties.
    fn last_activity(&self, chat_id: u64) -> Option<(DateTime<Utc>, u64)> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.chat_id == chat_id)
            .map(|m| (m.created_at, m.id))
    }
}

/// In-memory connector.
///
/// All state sits behind one lock; no lock is held across an await point.
#[derive(Debug, Default)]
pub struct MemoryConnector {
    state: RwLock<MemoryState>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn create_user(&self, username: &str) -> Result<User, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "create_user");
        let mut state = self.state.write();

        if state.users.iter().any(|u| u.username == username) {
            return Err(ConnectorError::Conflict(format!(
                "user '{}' already exists",
                username
            )));
        }

        let user = User {
            id: MemoryState::next_id(state.users.len()),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        state.users.push(user.clone());

        Ok(user)
    }

    async fn check_username(&self, username: &str) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_username");
        Ok(self.state.read().users.iter().any(|u| u.username == username))
    }

    async fn check_user_id(&self, id: u64) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_user_id");
        Ok(self.state.read().users.iter().any(|u| u.id == id))
    }

    async fn create_chat(&self, name: &str, members: &[u64]) -> Result<Chat, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "create_chat");
        let mut state = self.state.write();

        if state.chats.iter().any(|c| c.name == name) {
            return Err(ConnectorError::Conflict(format!(
                "chat '{}' already exists",
                name
            )));
        }

        let chat = Chat {
            id: MemoryState::next_id(state.chats.len()),
            name: name.to_string(),
            members: normalize_members(members),
            created_at: Utc::now(),
        };
        state.chats.push(chat.clone());

        Ok(chat)
    }

    async fn check_chat_name(&self, name: &str) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_chat_name");
        Ok(self.state.read().chats.iter().any(|c| c.name == name))
    }

    async fn check_chat_id(&self, id: u64) -> Result<bool, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "check_chat_id");
        Ok(self.state.read().chats.iter().any(|c| c.id == id))
    }

    async fn get_chats_for_user(&self, user_id: u64) -> Result<Vec<Chat>, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "get_chats_for_user");
        let state = self.state.read();

        let mut active: Vec<((DateTime<Utc>, u64), &Chat)> = state
            .chats
            .iter()
            .filter(|c| c.has_member(user_id))
            .filter_map(|c| state.last_activity(c.id).map(|at| (at, c)))
            .collect();

        active.sort_by(|(a_last, a), (b_last, b)| b_last.cmp(a_last).then(b.id.cmp(&a.id)));

        Ok(active.into_iter().map(|(_, chat)| chat.clone()).collect())
    }

    async fn send_message(
        &self,
        chat_id: u64,
        author_id: u64,
        text: &str,
    ) -> Result<Message, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "send_message");
        let mut state = self.state.write();

        let message = Message {
            id: MemoryState::next_id(state.messages.len()),
            chat_id,
            author_id,
            text: text.to_string(),
            created_at: state.next_timestamp(),
        };
        state.messages.push(message.clone());

        Ok(message)
    }

    async fn get_messages(&self, chat_id: u64) -> Result<Vec<Message>, ConnectorError> {
        let _timer = metrics::storage_timer(BACKEND, "get_messages");
        Ok(self
            .state
            .read()
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn close(&self) {}
}
