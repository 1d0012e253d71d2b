//! Cross-origin policy for browser clients.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use common::{AppError, AppResult, CorsConfig};

/// CORS layer allowing the configured origin and the CRUD methods.
pub fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let origin: HeaderValue = config.allowed_origin.parse().map_err(|_| {
        AppError::internal(format!("Invalid CORS origin: {}", config.allowed_origin))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any))
}
