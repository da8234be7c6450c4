//! Database connection lifecycle.
//!
//! The pool is opened once when the server starts, shared through the
//! application state and closed after the server has shut down.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    Statement,
};

use crate::config::Config;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open the connection pool.
    ///
    /// The `users` table is expected to exist already; no schema changes are
    /// applied.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.db_max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!("Connected to PostgreSQL");

        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Shared handle to the connection pool.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close every pooled connection.
    ///
    /// Only the last holder can close the pool; otherwise it is released
    /// when the remaining handles drop.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.connection) {
            Ok(connection) => {
                connection.close().await?;
                tracing::info!("PostgreSQL connection pool closed");
            }
            Err(shared) => {
                tracing::warn!(
                    handles = Arc::strong_count(&shared),
                    "Connection pool still in use, leaving it to close on drop"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_pool() -> Database {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        Database::from_connection(connection)
    }

    #[tokio::test]
    async fn test_clones_share_one_pool() {
        let database = mock_pool();
        let handle = database.clone();

        assert!(Arc::ptr_eq(&database.get_connection(), &handle.get_connection()));
        handle.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_close_while_shared_leaves_pool_open() {
        let database = mock_pool();
        let handle = database.get_connection();

        database.close().await.unwrap();

        assert_eq!(Arc::strong_count(&handle), 1);
    }

    #[tokio::test]
    async fn test_close_last_handle() {
        let database = mock_pool();
        let handle = database.clone();
        drop(handle);

        database.close().await.unwrap();
    }
}
