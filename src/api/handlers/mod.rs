//! HTTP request handlers.

pub mod auth_handler;
pub mod certificate_handler;

pub use auth_handler::auth_routes;
pub use certificate_handler::certificate_routes;
