//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::infra::Database;
use user_service_lib::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, database: Database) -> Self {
        Self {
            user_service,
            database,
        }
    }

    /// Wire the default storage and service layers over `database`.
    pub fn from_database(database: Database) -> Self {
        let user_service = user_service_lib::build_user_service(&database);
        Self::new(user_service, database)
    }
}
