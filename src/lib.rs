//! Certificate Service
//!
//! A small HTTP backend that registers users, checks their passwords and
//! issues personalized PDF certificates rendered from an SVG template.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, password digests, certificate templates
//! - **services**: Registration, login and certificate issuance
//! - **infra**: Postgres access and SVG to PDF rendering
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Render a certificate without the server
//! cargo run -- render --user-name "Ada Lovelace" --instructor-name "Dr. Hopper"
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
