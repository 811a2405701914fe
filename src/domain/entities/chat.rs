//! Chat entity.
//!
//! Maps to the `chats` table plus its `chat_members` join table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named group chat.
///
/// Maps to the `chats` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Members come from `chat_members (chat_id, user_id)`, a many-to-many
/// relation written once when the chat is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Store-generated identifier
    pub id: u64,

    /// Unique, non-empty chat name
    pub name: String,

    /// Member user ids, ascending and without duplicates
    #[serde(rename = "users")]
    pub members: Vec<u64>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Check whether a user belongs to this chat.
    pub fn has_member(&self, user_id: u64) -> bool {
        self.members.binary_search(&user_id).is_ok()
    }
}

/// Collapse a requested member list into the canonical form stored on a chat:
/// sorted ascending with duplicates removed.
pub(crate) fn normalize_members(members: &[u64]) -> Vec<u64> {
    let mut members = members.to_vec();
    members.sort_unstable();
    members.dedup();
    members
}
