//! Application Services
//!
//! Validation and orchestration on top of the storage connector.
//!
//! ## Available Services
//!
//! - **UserService**: user registration
//! - **ChatService**: chat creation and per-user chat listing
//! - **MessageService**: sending and listing messages
//!
//! Each operation short-circuits at the first failure, in this order:
//! shape validation, existence/uniqueness checks in request field order,
//! then the single mutating or reading connector call.

pub mod chat_service;
pub mod error;
pub mod message_service;
pub mod user_service;

pub use chat_service::ChatService;
pub use error::ServiceError;
pub use message_service::MessageService;
pub use user_service::UserService;

use crate::domain::Connector;

/// Fail with `NotExist` unless the user is present.
pub(crate) async fn require_user(
    connector: &dyn Connector,
    user_id: u64,
) -> Result<(), ServiceError> {
    if !connector.check_user_id(user_id).await? {
        return Err(ServiceError::NotExist(format!(
            "user with id {} does not exist",
            user_id
        )));
    }
    Ok(())
}

/// Fail with `NotExist` unless the chat is present.
pub(crate) async fn require_chat(
    connector: &dyn Connector,
    chat_id: u64,
) -> Result<(), ServiceError> {
    if !connector.check_chat_id(chat_id).await? {
        return Err(ServiceError::NotExist(format!(
            "chat with id {} does not exist",
            chat_id
        )));
    }
    Ok(())
}
