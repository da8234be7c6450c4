//! User repository backed by the `users` table.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each call runs exactly one parameterized statement; there are no
/// transactions and no retries.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user row.
    ///
    /// Fails with `Conflict` when the email is already registered.
    async fn create(&self, email: String, name: String, password_hash: String) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(email.to_owned())
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, email: String, name: String, password_hash: String) -> AppResult<User> {
        let active_model = ActiveModel {
            email: Set(email),
            name: Set(name),
            password: Set(password_hash),
        };

        // Unique violations on email are mapped to `Conflict` by `From<DbErr>`.
        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::super::entities::user::Model;

    fn row(email: &str) -> Model {
        Model {
            email: email.to_string(),
            name: "Ada".to_string(),
            password: "$argon2id$digest".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("ada@example.com")]])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let user = store.find_by_email("ada@example.com").await.unwrap().unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password_hash, "$argon2id$digest");
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("new@example.com")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let user = store
            .create(
                "new@example.com".into(),
                "Ada".into(),
                "$argon2id$digest".into(),
            )
            .await
            .unwrap();

        assert_eq!(user.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_query_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".into())])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let result = store.find_by_email("ada@example.com").await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
