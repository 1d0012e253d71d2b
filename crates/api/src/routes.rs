//! Route configuration.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::handlers::{health_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/users", user_routes())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
