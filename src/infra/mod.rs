//! Infrastructure layer - External systems integration
//!
//! - Postgres connection pool and the user repository
//! - SVG to PDF certificate rendering

pub mod db;
pub mod renderer;
pub mod repositories;

pub use db::Database;
pub use renderer::{CertificateRenderer, SvgPdfRenderer};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use renderer::MockCertificateRenderer;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
