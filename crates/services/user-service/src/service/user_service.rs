//! User service - the boundary between transport and storage.
//!
//! Every call is forwarded unchanged to the repository: same inputs, same
//! outputs, same error kinds. Business rules go here when they appear, so
//! handlers keep depending on `UserService` alone.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{User, UserInput};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Create a new user and return it with its assigned id
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// Replace name and email of an existing user
    async fn update_user(&self, id: i64, input: UserInput) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        self.repo.create(input).await
    }

    async fn update_user(&self, id: i64, input: UserInput) -> AppResult<User> {
        self.repo.update(id, input).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;

    fn create_test_user(id: i64) -> User {
        User {
            id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(7_i64))
            .times(1)
            .returning(|id| Ok(create_test_user(id)));

        let user = service(repo).get_user(7).await.unwrap();
        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn test_get_user_not_found_is_forwarded() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Err(AppError::NotFound));

        let result = service(repo).get_user(99).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_users_storage_error_is_forwarded() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| {
            Err(AppError::Storage(sea_orm::DbErr::Custom(
                "connection refused".to_string(),
            )))
        });

        let result = service(repo).list_users().await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_user_passes_input_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(UserInput::new("John", "john@example.com")))
            .times(1)
            .returning(|input| Ok(User::new(1, input)));

        let user = service(repo)
            .create_user(UserInput::new("John", "john@example.com"))
            .await
            .unwrap();
        assert_eq!(user, User::new(1, UserInput::new("John", "john@example.com")));
    }

    #[tokio::test]
    async fn test_update_user_targets_given_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(eq(3_i64), eq(UserInput::new("Johnny", "j@x.com")))
            .times(1)
            .returning(|id, input| Ok(User::new(id, input)));

        let user = service(repo)
            .update_user(3, UserInput::new("Johnny", "j@x.com"))
            .await
            .unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Johnny");
    }

    #[tokio::test]
    async fn test_delete_user_not_found_is_forwarded() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(5_i64))
            .times(1)
            .returning(|_| Err(AppError::NotFound));

        let result = service(repo).delete_user(5).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
