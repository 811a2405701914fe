//! User Service
//!
//! Handles user registration.

use std::sync::Arc;

use validator::Validate;

use super::ServiceError;
use crate::application::dto::CreateUserRequest;
use crate::domain::{Connector, User};

/// User operations
#[derive(Clone)]
pub struct UserService {
    connector: Arc<dyn Connector>,
}

impl UserService {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }

    /// Register a new user under a unique, non-empty username.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, ServiceError> {
        request.validate().map_err(ServiceError::empty_fields)?;

        if self.connector.check_username(&request.username).await? {
            return Err(ServiceError::AlreadyExist(format!(
                "user '{}' already exists",
                request.username
            )));
        }

        let user = self
            .connector
            .create_user(&request.username)
            .await
            .map_err(ServiceError::from_write)?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }
}
