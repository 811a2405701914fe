//! Storage connector contract.
//!
//! Every storage backend implements [`Connector`]. The application layer
//! holds it as `Arc<dyn Connector>` and performs all existence checks before
//! calling any of the mutating operations; the connector itself does not
//! re-validate referenced ids.

use async_trait::async_trait;

use super::{Chat, Message, User};

/// Storage layer failure.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// No backend is registered under the requested identifier.
    #[error("unknown storage backend '{name}' (expected one of: {expected})")]
    UnknownBackend { name: String, expected: String },

    /// An id outside the range the backend can store.
    #[error("id {0} is out of range for this backend")]
    InvalidId(u64),

    /// A uniqueness constraint was violated at write time.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Storage operations for users, chats and messages.
///
/// Implementations must be safe to share across request tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connector: Send + Sync {
    /// Short name of the backend, used in logs and health reports.
    fn backend(&self) -> &'static str;

    /// Insert a new user and return it with its generated id and timestamp.
    async fn create_user(&self, username: &str) -> Result<User, ConnectorError>;

    /// Whether a user with this username exists.
    async fn check_username(&self, username: &str) -> Result<bool, ConnectorError>;

    /// Whether a user with this id exists.
    async fn check_user_id(&self, id: u64) -> Result<bool, ConnectorError>;

    /// Insert a chat together with one membership row per distinct member.
    ///
    /// The chat row and its memberships are written atomically.
    async fn create_chat(&self, name: &str, members: &[u64]) -> Result<Chat, ConnectorError>;

    /// Whether a chat with this name exists.
    async fn check_chat_name(&self, name: &str) -> Result<bool, ConnectorError>;

    /// Whether a chat with this id exists.
    async fn check_chat_id(&self, id: u64) -> Result<bool, ConnectorError>;

    /// Chats the user is a member of, most recently active first.
    ///
    /// Only chats that contain at least one message are listed: activity is
    /// derived from the latest message of each chat, and chats without one
    /// drop out of the join.
    async fn get_chats_for_user(&self, user_id: u64) -> Result<Vec<Chat>, ConnectorError>;

    /// Insert a message and return it with its generated id and timestamp.
    async fn send_message(
        &self,
        chat_id: u64,
        author_id: u64,
        text: &str,
    ) -> Result<Message, ConnectorError>;

    /// Messages of a chat ordered by `created_at` ascending.
    async fn get_messages(&self, chat_id: u64) -> Result<Vec<Message>, ConnectorError>;

    /// Round trip to the store, for readiness checks.
    async fn ping(&self) -> Result<(), ConnectorError>;

    /// Release the underlying resources. Called once on shutdown.
    async fn close(&self);
}
