//! JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use common::AppError;

/// JSON body decoded without looking at `Content-Type`.
///
/// Only a body that fails to decode as `T` is rejected, with a validation
/// error (400). No checks run beyond deserialization.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::validation(format!("Invalid JSON body: {}", e)))?;

        Ok(JsonBody(value))
    }
}
