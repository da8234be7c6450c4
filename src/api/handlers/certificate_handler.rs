//! Certificate download handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{CERTIFICATE_CONTENT_TYPE, CERTIFICATE_FILENAME};
use crate::domain::CertificateRequest;
use crate::errors::AppResult;

/// Certificate generation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCertificateRequest {
    /// Email of the registered certificate holder
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Instructor name printed on the certificate
    #[validate(length(min = 1, message = "Instructor name is required"))]
    #[schema(example = "Dr. Grace Hopper")]
    pub instructor_name: String,
}

impl From<GenerateCertificateRequest> for CertificateRequest {
    fn from(request: GenerateCertificateRequest) -> Self {
        Self {
            email: request.email,
            instructor_name: request.instructor_name,
        }
    }
}

/// Create certificate routes
pub fn certificate_routes() -> Router<AppState> {
    Router::new().route("/generate-certificate", post(generate_certificate))
}

/// Render a certificate and return it as a PDF download
#[utoipa::path(
    post,
    path = "/generate-certificate",
    tag = "Certificates",
    request_body = GenerateCertificateRequest,
    responses(
        (status = 200, description = "PDF certificate attachment", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Missing field"),
        (status = 500, description = "Error generating certificate")
    )
)]
pub async fn generate_certificate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GenerateCertificateRequest>,
) -> AppResult<Response> {
    let pdf = state
        .certificate_service
        .issue(CertificateRequest::from(payload))
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", CERTIFICATE_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, CERTIFICATE_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}
