//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{User, UserInput};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups and mutations on a missing id fail with `AppError::NotFound`;
/// every other database failure surfaces as `AppError::Storage`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, in store order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Insert a user; the store assigns the id
    async fn create(&self, input: UserInput) -> AppResult<User>;

    /// Overwrite name and email of an existing user
    async fn update(&self, id: i64, input: UserInput) -> AppResult<User>;

    /// Permanently delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or_not_found()?;

        Ok(User::from(model))
    }

    async fn create(&self, input: UserInput) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(user_id = model.id, "user created");
        Ok(User::from(model))
    }

    async fn update(&self, id: i64, input: UserInput) -> AppResult<User> {
        // Existence check first so a missing id never issues a write
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = user.into();
        active.name = Set(input.name);
        active.email = Set(input.email);

        // The row can vanish between the lookup and the write
        match active.update(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}
