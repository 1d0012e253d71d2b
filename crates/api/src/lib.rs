//! HTTP API for the user resource.
//!
//! This crate is the handler layer: it turns requests into `UserService`
//! calls and results into responses, and owns process bootstrap.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::{AppError, AppResult, CorsConfig};
use user_service_lib::infra::Database;

use crate::config::ApiConfig;
use crate::middleware::cors_layer;
use crate::routes::create_router;
use crate::state::AppState;

/// Router with the cross-cutting layers applied.
pub fn build_app(state: AppState, cors: &CorsConfig) -> AppResult<Router> {
    Ok(create_router(state)
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http()))
}

/// Connect the database, wire the layers and serve until the listener fails.
pub async fn run_server(config: ApiConfig) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let state = AppState::from_database(db);
    let app = build_app(state, &config.cors)?;

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("{} listening on http://{}", config.server.service_name, addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
