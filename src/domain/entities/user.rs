//! User entity.
//!
//! Maps to the `users` table in the database schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - username: TEXT NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-generated identifier
    pub id: u64,

    /// Unique, non-empty username
    pub username: String,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}
