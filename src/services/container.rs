//! Service Container - Centralized service access.
//!
//! Wires repositories and the renderer into the application services and
//! hands them out as trait objects.

use std::sync::Arc;

use super::{AuthService, CertificateService};
use crate::config::Config;
use crate::infra::{CertificateRenderer, SvgPdfRenderer, UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get certificate issuance service
    fn certificates(&self) -> Arc<dyn CertificateService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    certificate_service: Arc<dyn CertificateService>,
}

impl Services {
    /// Build every service on top of a repository and a renderer.
    pub fn from_parts(
        users: Arc<dyn UserRepository>,
        renderer: Arc<dyn CertificateRenderer>,
    ) -> Self {
        use super::{Authenticator, CertificateIssuer};

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone())),
            certificate_service: Arc::new(CertificateIssuer::new(users, renderer)),
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: Arc<sea_orm::DatabaseConnection>, config: &Config) -> Self {
        let users = Arc::new(UserStore::new(db));
        let renderer = Arc::new(SvgPdfRenderer::new(config.template_path.clone()));
        tracing::info!(template = %config.template_path.display(), "Certificate template configured");

        Self::from_parts(users, renderer)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn certificates(&self) -> Arc<dyn CertificateService> {
        self.certificate_service.clone()
    }
}
