//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthService, CertificateService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub auth_service: Arc<dyn AuthService>,
    /// Certificate issuance
    pub certificate_service: Arc<dyn CertificateService>,
    /// Account store connection pool
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database pool and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            certificate_service: container.certificates(),
            database,
        }
    }
}
