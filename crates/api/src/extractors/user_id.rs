//! `{id}` path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// Message returned when the path id is not an integer.
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Integer user id taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation(INVALID_USER_ID))?;

        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| AppError::validation(INVALID_USER_ID))
    }
}
