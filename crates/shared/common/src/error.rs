//! Unified error handling.
//!
//! Provides a single error type shared by the storage, service and HTTP
//! layers. Storage raises the specific kind, the service forwards it, and
//! the axum `IntoResponse` impl below is the only place a kind becomes a
//! status code.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed path parameter or request body
    #[error("{0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("User not found")]
    NotFound,

    /// Store unreachable or query failure
    #[cfg(feature = "database")]
    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    /// Failure outside the request path (bind, serve, startup)
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            #[cfg(feature = "database")]
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Storage(_) => "A database error occurred".to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
            _ => self.to_string(),
        }
    }

    /// Log the details that `user_message` hides.
    fn log(&self) {
        match self {
            #[cfg(feature = "database")]
            AppError::Storage(e) => tracing::error!("Storage error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => tracing::debug!("Request rejected: {}", self),
        }
    }

    /// True when the error is a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound)
    }
}

// Error bodies are plain text: just the description.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let message = self.user_message();

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status() {
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[cfg(feature = "database")]
    #[test]
    fn storage_errors_are_500_and_hide_details() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk I/O error".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn internal_message_hides_details() {
        let err = AppError::internal("Failed to bind to 0.0.0.0:8080");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(err.user_message(), err.user_message());
    }

    #[test]
    fn option_none_is_not_found() {
        let missing: Option<u8> = None;
        assert!(missing.ok_or_not_found().unwrap_err().is_not_found());
        assert_eq!(Some(1).ok_or_not_found().unwrap(), 1);
    }

    #[tokio::test]
    async fn response_is_plain_text() {
        let response = AppError::validation("Invalid user ID").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Invalid user ID");
    }
}
