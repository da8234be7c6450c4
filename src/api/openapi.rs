//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, certificate_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the certificate service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Certificate Service",
        version = "0.1.0",
        description = "User registration, login and PDF certificate issuance",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        certificate_handler::generate_certificate,
    ),
    components(
        schemas(
            UserResponse,
            auth_handler::RegisterRequest,
            auth_handler::RegisterResponse,
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            certificate_handler::GenerateCertificateRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Certificates", description = "Personalized PDF certificates")
    )
)]
pub struct ApiDoc;
