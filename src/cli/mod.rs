//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `render` - Render a certificate to a file

pub mod args;

pub use args::{Cli, Commands};
