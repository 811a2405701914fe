//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{
    CreateChatRequest, CreateUserRequest, GetChatsRequest, GetMessagesRequest, SendMessageRequest,
};
pub use response::{ChatListResponse, CreatedResponse, MessageListResponse};
