//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Every field defaults when absent or `null`, so such a field is reported
//! the same way as an empty one instead of failing to decode.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Decode `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Register a user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

/// Create a group chat
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateChatRequest {
    #[validate(length(min = 1, message = "chat name must not be empty"))]
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Member user ids
    #[validate(length(min = 1, message = "chat must have at least one member"))]
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<u64>,
}

/// List the chats of a user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetChatsRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub user: u64,
}

/// Post a message into a chat
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SendMessageRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub chat: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub author: u64,

    #[validate(length(min = 1, message = "message text must not be empty"))]
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// List the messages of a chat
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetMessagesRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub chat: u64,
}
