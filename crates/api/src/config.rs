//! API configuration.

use std::env;

use common::{CorsConfig, DatabaseConfig, ServiceConfig};

/// API configuration.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Listener settings
    pub server: ServiceConfig,
    /// Store connection settings
    pub database: DatabaseConfig,
    /// Allowed browser origin
    pub cors: CorsConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server: ServiceConfig {
                service_name: defaults.server.service_name,
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT").unwrap_or(defaults.server.port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            cors: CorsConfig {
                allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .unwrap_or(defaults.cors.allowed_origin),
            },
        }
    }
}

/// Read and parse a variable, ignoring it when unset or malformed.
fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
