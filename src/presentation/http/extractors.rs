//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// JSON request body.
///
/// The body is decoded as JSON whatever the `Content-Type` header says. A
/// literal `null` body decodes to the default value. Bodies that cannot be
/// read or decoded are rejected with [`AppError::BadRequest`], which answers
/// with an empty `400`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice::<Option<T>>(&bytes)?;

        Ok(JsonBody(value.unwrap_or_default()))
    }
}
