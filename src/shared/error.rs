//! Application Error Types
//!
//! Centralized error handling with Axum integration.
//!
//! Client errors are answered with `400` and a `{code, description}` body.
//! Infrastructure failures are logged here and answered with an empty `500`.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

use crate::application::services::ServiceError;
use crate::domain::ConnectorError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be read or decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Already exists: {0}")]
    AlreadyExist(String),

    #[error("Does not exist: {0}")]
    NotExist(String),

    #[error("Empty fields: {0}")]
    EmptyFields(String),

    #[error("Storage error: {0}")]
    Storage(#[from] ConnectorError),
}

/// Client-facing error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// The entity is already present
    AlreadyExist = 0,
    /// A referenced entity is absent
    NotExist = 1,
    /// A required field is missing or empty
    EmptyFields = 2,
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub description: String,
}

impl ErrorResponse {
    fn bad_request(code: ErrorCode, description: String) -> Response {
        (StatusCode::BAD_REQUEST, Json(Self { code, description })).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::AlreadyExist(msg) => AppError::AlreadyExist(msg),
            ServiceError::NotExist(msg) => AppError::NotExist(msg),
            ServiceError::EmptyFields(msg) => AppError::EmptyFields(msg),
            ServiceError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::AlreadyExist(msg) => ErrorResponse::bad_request(ErrorCode::AlreadyExist, msg),
            AppError::NotExist(msg) => ErrorResponse::bad_request(ErrorCode::NotExist, msg),
            AppError::EmptyFields(msg) => ErrorResponse::bad_request(ErrorCode::EmptyFields, msg),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
