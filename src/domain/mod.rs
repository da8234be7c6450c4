//! Domain layer - Core business entities and logic
//!
//! Entities and value objects that are independent of infrastructure
//! concerns (no database or HTTP types here).

pub mod certificate;
pub mod password;
pub mod user;

pub use certificate::{CertificateRequest, CertificateTemplate};
pub use password::Password;
pub use user::{User, UserResponse};
