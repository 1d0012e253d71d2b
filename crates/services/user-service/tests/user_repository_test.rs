//! Storage layer tests against an in-memory SQLite database.

use common::{AppError, DatabaseConfig};
use sea_orm::ConnectionTrait;
use domain::UserInput;
use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};

async fn setup() -> UserStore {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    UserStore::new(db.get_connection())
}

fn john() -> UserInput {
    UserInput::new("John", "john@example.com")
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_vec() {
    let repo = setup().await;

    let users = repo.list().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_then_find_round_trips_fields() {
    let repo = setup().await;

    let created = repo.create(john()).await.unwrap();
    assert!(created.id > 0);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.name, "John");
    assert_eq!(found.email, "john@example.com");
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let repo = setup().await;

    let first = repo.create(john()).await.unwrap();
    let second = repo.create(john()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_find_missing_id_is_not_found() {
    let repo = setup().await;

    let result = repo.find_by_id(404).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_overwrites_name_and_email() {
    let repo = setup().await;
    let created = repo.create(john()).await.unwrap();

    let updated = repo
        .update(created.id, UserInput::new("Johnny", "j@x.com"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found.name, "Johnny");
    assert_eq!(found.email, "j@x.com");
}

#[tokio::test]
async fn test_update_with_same_values_succeeds() {
    let repo = setup().await;
    let created = repo.create(john()).await.unwrap();

    let updated = repo.update(created.id, john()).await.unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found_and_leaves_store_unchanged() {
    let repo = setup().await;
    let existing = repo.create(john()).await.unwrap();

    let result = repo
        .update(existing.id + 100, UserInput::new("Ghost", "ghost@example.com"))
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let users = repo.list().await.unwrap();
    assert_eq!(users, vec![existing]);
}

#[tokio::test]
async fn test_update_of_row_gone_before_write_is_not_found() {
    let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    let repo = UserStore::new(db.get_connection());
    let created = repo.create(john()).await.unwrap();

    // Lookup still sees the row, but the UPDATE touches nothing
    db.connection()
        .execute_unprepared(
            "CREATE TRIGGER skip_user_updates BEFORE UPDATE ON users \
             BEGIN SELECT RAISE(IGNORE); END;",
        )
        .await
        .unwrap();

    let result = repo
        .update(created.id, UserInput::new("Johnny", "j@x.com"))
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_delete_twice_reports_not_found_second_time() {
    let repo = setup().await;
    let created = repo.create(john()).await.unwrap();

    repo.delete(created.id).await.unwrap();
    assert!(matches!(
        repo.find_by_id(created.id).await,
        Err(AppError::NotFound)
    ));

    let second = repo.delete(created.id).await;
    assert!(matches!(second, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_storage_failure_is_not_reported_as_not_found() {
    let db = Database::connect_without_migrations(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    // No migrations: the users table does not exist
    let repo = UserStore::new(db.get_connection());

    assert!(matches!(repo.list().await, Err(AppError::Storage(_))));
    assert!(matches!(repo.find_by_id(1).await, Err(AppError::Storage(_))));
    assert!(matches!(repo.delete(1).await, Err(AppError::Storage(_))));
}
