//! Authentication service - registration and password login.
//!
//! Password hashing is delegated to the domain `Password` value object;
//! rows are read and written through the `UserRepository`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user, storing a digest of `password`.
    async fn register(&self, email: String, name: String, password: String) -> AppResult<User>;

    /// Check `password` against the stored digest and return the user.
    ///
    /// `NotFound` for an unknown email, `InvalidCredentials` for a wrong
    /// password.
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, email: String, name: String, password: String) -> AppResult<User> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let digest = Password::hash_blocking(password).await?.into_string();
        let user = self.users.create(email, name, digest).await?;

        tracing::info!(email = %user.email, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let user = self.users.find_by_email(&email).await?.ok_or_not_found()?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify_blocking(password).await? {
            tracing::debug!(email = %user.email, "Password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
