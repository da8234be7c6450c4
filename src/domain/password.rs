//! Password value object - salted, one-way password digests.
//!
//! Argon2id with fixed cost parameters. Both hashing and verification are
//! CPU-bound; async callers should run them through [`Password::hash_blocking`]
//! and [`Password::verify_blocking`] so they yield to the scheduler.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{PASSWORD_MEMORY_COST_KIB, PASSWORD_PARALLELISM, PASSWORD_TIME_COST};
use crate::errors::{AppError, AppResult};

/// Password digest value object.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a fresh random salt.
    ///
    /// # Errors
    /// Returns an internal error if the hasher rejects its input.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Create a Password from an existing digest (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the digest string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the digest string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this digest.
    ///
    /// A mismatch is `Ok(false)`. A digest that cannot be parsed, or any
    /// other hasher failure, is an internal error rather than a mismatch.
    pub fn verify(&self, plain_text: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&self.hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

        match Self::argon2()?.verify_password(plain_text.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Password verify failed: {}", e))),
        }
    }

    /// Hash on the blocking thread pool.
    pub async fn hash_blocking(plain_text: String) -> AppResult<Self> {
        tokio::task::spawn_blocking(move || Self::new(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }

    /// Verify on the blocking thread pool.
    pub async fn verify_blocking(self, plain_text: String) -> AppResult<bool> {
        tokio::task::spawn_blocking(move || self.verify(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))?
    }

    /// Argon2id with the service-wide cost parameters.
    fn argon2() -> AppResult<Argon2<'static>> {
        let params = Params::new(
            PASSWORD_MEMORY_COST_KIB,
            PASSWORD_TIME_COST,
            PASSWORD_PARALLELISM,
            None,
        )
        .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
