//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{CreateUserRequest, CreatedResponse};
use crate::application::services::UserService;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let user_service = UserService::new(state.connector.clone());
    let user = user_service.create_user(body).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: user.id })))
}
