//! Render command - Writes a certificate PDF to disk without the server.

use crate::cli::args::RenderArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{CertificateRenderer, SvgPdfRenderer};

/// Execute the render command
pub async fn execute(args: RenderArgs, config: Config) -> AppResult<()> {
    let template = args.template.unwrap_or(config.template_path);
    let renderer = SvgPdfRenderer::new(template);

    let pdf = renderer
        .render(&args.user_name, &args.instructor_name)
        .await?;

    tokio::fs::write(&args.output, &pdf).await.map_err(|e| {
        AppError::internal(format!("Failed to write {}: {}", args.output.display(), e))
    })?;

    tracing::info!(
        output = %args.output.display(),
        bytes = pdf.len(),
        "Certificate written"
    );
    Ok(())
}
