//! User Service Library
//!
//! Storage and service layers for the user resource. The storage layer
//! (`repository`) is the only code that talks to the database; the
//! service layer (`service`) is the seam the HTTP crate depends on.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::DatabaseConfig;
use tracing::info;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

pub use infra::Migrator;
pub use repository::UserRepository;

/// Build the service stack on top of an open database.
pub fn build_user_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Arc::new(UserManager::new(user_repo))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
