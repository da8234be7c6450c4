//! Certificate issuance - resolve the holder's name, then render.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::CertificateRequest;
use crate::errors::{AppResult, CertificateError};
use crate::infra::{CertificateRenderer, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CertificateService: Send + Sync {
    /// Produce the PDF certificate for the registered user `request.email`.
    async fn issue(&self, request: CertificateRequest) -> AppResult<Vec<u8>>;
}

pub struct CertificateIssuer {
    users: Arc<dyn UserRepository>,
    renderer: Arc<dyn CertificateRenderer>,
}

impl CertificateIssuer {
    pub fn new(users: Arc<dyn UserRepository>, renderer: Arc<dyn CertificateRenderer>) -> Self {
        Self { users, renderer }
    }
}

#[async_trait]
impl CertificateService for CertificateIssuer {
    async fn issue(&self, request: CertificateRequest) -> AppResult<Vec<u8>> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(CertificateError::UnknownUser)?;

        let pdf = self
            .renderer
            .render(&user.name, &request.instructor_name)
            .await?;

        tracing::info!(email = %user.email, bytes = pdf.len(), "Certificate issued");
        Ok(pdf)
    }
}
