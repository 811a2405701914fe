//! Message entity.
//!
//! Maps to the `messages` table in the database schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message posted into a chat.
///
/// Maps to the `messages` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - chat_id: BIGINT NOT NULL REFERENCES chats(id)
/// - author_id: BIGINT NOT NULL REFERENCES users(id)
/// - text: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
///
/// Messages within a chat are ordered by `created_at` ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Store-generated identifier
    pub id: u64,

    /// Chat the message was posted into
    #[serde(rename = "chat")]
    pub chat_id: u64,

    /// User who wrote the message
    #[serde(rename = "author")]
    pub author_id: u64,

    /// Non-empty message body
    pub text: String,

    /// Send timestamp
    pub created_at: DateTime<Utc>,
}
