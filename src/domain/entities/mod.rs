//! # Domain Entities
//!
//! The three entities of the chat backend. All of them are created once and
//! never mutated afterwards.
//!
//! - **User**: a registered participant, unique by username
//! - **Chat**: a named group with a membership fixed at creation
//! - **Message**: a text posted by a user into a chat

mod chat;
mod message;
mod user;

pub use chat::Chat;
pub(crate) use chat::normalize_members;
pub use message::Message;
pub use user::User;
