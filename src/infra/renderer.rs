//! Certificate renderer - SVG template to single-page A4 PDF.
//!
//! The template is read from disk on every call, personalized, parsed with
//! usvg and placed on an A4 page via svg2pdf. Nothing is cached and nothing
//! is written back to disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use svg2pdf::usvg::{self, fontdb};
use svg2pdf::ConversionOptions;

use crate::config::{A4_HEIGHT_MM, A4_WIDTH_MM, POINTS_PER_MM};
use crate::domain::CertificateTemplate;
use crate::errors::{AppError, AppResult, CertificateError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// XObject name of the embedded certificate drawing.
const CERTIFICATE_XOBJECT: Name<'static> = Name(b"Certificate");

/// Renders personalized certificates.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CertificateRenderer: Send + Sync {
    /// Render the certificate for `user_name`, signed by `instructor_name`,
    /// and return the PDF bytes.
    async fn render(&self, user_name: &str, instructor_name: &str) -> AppResult<Vec<u8>>;
}

/// Renderer backed by an SVG template file.
pub struct SvgPdfRenderer {
    template_path: PathBuf,
    fontdb: Arc<fontdb::Database>,
}

impl SvgPdfRenderer {
    /// Create a renderer for the template at `template_path`.
    ///
    /// System fonts are indexed once here and shared by every render.
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        bind_generic_families(&mut fonts);
        tracing::debug!(faces = fonts.len(), "Indexed system fonts");

        if fonts.len() == 0 {
            tracing::warn!("No system fonts found, certificate text will not be drawn");
        }

        Self {
            template_path: template_path.into(),
            fontdb: Arc::new(fonts),
        }
    }

    /// Read the template fresh from disk.
    pub async fn load_template(&self) -> Result<CertificateTemplate, CertificateError> {
        tokio::fs::read_to_string(&self.template_path)
            .await
            .map(CertificateTemplate::new)
            .map_err(CertificateError::TemplateNotFound)
    }
}

#[async_trait]
impl CertificateRenderer for SvgPdfRenderer {
    async fn render(&self, user_name: &str, instructor_name: &str) -> AppResult<Vec<u8>> {
        let template = self.load_template().await?;
        let svg = template.personalize(user_name, instructor_name);
        let fontdb = Arc::clone(&self.fontdb);

        let pdf = tokio::task::spawn_blocking(move || svg_to_a4_pdf(&svg, fontdb))
            .await
            .map_err(|e| AppError::internal(format!("Render task failed: {}", e)))??;

        tracing::debug!(bytes = pdf.len(), "Certificate rendered");
        Ok(pdf)
    }
}

/// Point the generic `serif` and `sans-serif` families at installed faces.
///
/// fontdb resolves them to Times New Roman and Arial by default, and usvg
/// silently drops text it cannot shape.
fn bind_generic_families(fonts: &mut fontdb::Database) {
    let families: Vec<String> = fonts
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect();

    if let Some(serif) = pick_family(&families, |name| {
        name.contains("Serif") && !name.contains("Sans")
    }) {
        tracing::debug!(family = serif, "Using serif family");
        fonts.set_serif_family(serif);
    }
    if let Some(sans) = pick_family(&families, |name| name.contains("Sans")) {
        tracing::debug!(family = sans, "Using sans-serif family");
        fonts.set_sans_serif_family(sans);
    }
}

/// First family matching `wanted`, else any installed family.
fn pick_family<'a>(families: &'a [String], wanted: impl Fn(&str) -> bool) -> Option<&'a str> {
    families
        .iter()
        .map(String::as_str)
        .find(|name| wanted(name))
        .or_else(|| families.first().map(String::as_str))
}

/// Convert SVG markup into a one-page A4 PDF with the drawing stretched
/// over the whole page, anchored at the origin.
pub fn svg_to_a4_pdf(svg: &str, fonts: Arc<fontdb::Database>) -> Result<Vec<u8>, CertificateError> {
    let mut options = usvg::Options::default();
    // Text without a font-family falls back to the serif face.
    options.font_family = fonts.family_name(&fontdb::Family::Serif).to_string();
    options.fontdb = fonts;

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| CertificateError::Render(format!("Invalid SVG markup: {}", e)))?;

    let (chunk, svg_ref) = svg2pdf::to_chunk(&tree, ConversionOptions::default())
        .map_err(|e| CertificateError::Render(format!("SVG conversion failed: {}", e)))?;

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let page_id = alloc.bump();
    let content_id = alloc.bump();

    let mut renumbered = HashMap::new();
    let chunk = chunk.renumber(|old| *renumbered.entry(old).or_insert_with(|| alloc.bump()));
    let svg_id = renumbered
        .get(&svg_ref)
        .copied()
        .ok_or_else(|| CertificateError::Render("SVG XObject missing from chunk".to_string()))?;

    let width = A4_WIDTH_MM * POINTS_PER_MM;
    let height = A4_HEIGHT_MM * POINTS_PER_MM;

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, width, height));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources()
        .x_objects()
        .pair(CERTIFICATE_XOBJECT, svg_id);
    drop(page);

    // The XObject is one point square; scale it up to the page.
    let mut content = Content::new();
    content
        .save_state()
        .transform([width, 0.0, 0.0, height, 0.0, 0.0])
        .x_object(CERTIFICATE_XOBJECT)
        .restore_state();
    pdf.stream(content_id, &content.finish());

    pdf.extend(&chunk);
    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="210" height="297" viewBox="0 0 210 297">
  <rect x="5" y="5" width="200" height="287" fill="none" stroke="#1f3a5f" stroke-width="2"/>
  <text x="105" y="120" text-anchor="middle" font-size="14">{{USER_NAME}}</text>
  <text x="105" y="200" text-anchor="middle" font-size="8">{{INSTRUCTOR_NAME}}</text>
</svg>"##;

    fn template_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn empty_fontdb() -> Arc<fontdb::Database> {
        Arc::new(fontdb::Database::new())
    }

    fn families(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_pick_family_prefers_match() {
        let installed = families(&["DejaVu Sans", "DejaVu Serif", "DejaVu Sans Mono"]);

        let serif = pick_family(&installed, |n| n.contains("Serif") && !n.contains("Sans"));
        let sans = pick_family(&installed, |n| n.contains("Sans"));

        assert_eq!(serif, Some("DejaVu Serif"));
        assert_eq!(sans, Some("DejaVu Sans"));
    }

    #[test]
    fn test_pick_family_falls_back_to_any_face() {
        let installed = families(&["Noto Sans"]);

        assert_eq!(
            pick_family(&installed, |n| n.contains("Serif") && !n.contains("Sans")),
            Some("Noto Sans")
        );
        assert_eq!(pick_family(&[], |_| true), None);
    }

    #[test]
    fn test_names_are_drawn_with_system_fonts() {
        let renderer = SvgPdfRenderer::new("unused.svg");
        if renderer.fontdb.len() == 0 {
            // Nothing to draw text with on this host.
            return;
        }

        let shipped = std::fs::read_to_string(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(crate::config::DEFAULT_TEMPLATE_FILE),
        )
        .unwrap();
        let template = CertificateTemplate::new(shipped);

        let named = svg_to_a4_pdf(
            &template.personalize("Alice Example", "Dr. Bob"),
            Arc::clone(&renderer.fontdb),
        )
        .unwrap();
        let blank = svg_to_a4_pdf(&template.personalize("", ""), Arc::clone(&renderer.fontdb))
            .unwrap();

        assert!(String::from_utf8_lossy(&named).contains("/Font"));
        assert!(named.len() > blank.len());
    }

    #[test]
    fn test_untyped_text_uses_serif_face() {
        let renderer = SvgPdfRenderer::new("unused.svg");
        if renderer.fontdb.len() == 0 {
            return;
        }

        let svg = CertificateTemplate::new(TEMPLATE).personalize("Alice Example", "Dr. Bob");
        let pdf = svg_to_a4_pdf(&svg, Arc::clone(&renderer.fontdb)).unwrap();

        assert!(String::from_utf8_lossy(&pdf).contains("/Font"));
    }

    #[test]
    fn test_svg_to_a4_pdf_produces_pdf() {
        let svg = CertificateTemplate::new(TEMPLATE).personalize("Alice Example", "Dr. Bob");
        let pdf = svg_to_a4_pdf(&svg, empty_fontdb()).unwrap();

        assert!(pdf.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&pdf);
        assert!(!text.contains("{{USER_NAME}}"));
        assert!(!text.contains("{{INSTRUCTOR_NAME}}"));
        assert!(text.contains("/MediaBox"));
    }

    #[test]
    fn test_malformed_markup_is_render_error() {
        let result = svg_to_a4_pdf("<svg><text>unterminated", empty_fontdb());
        assert!(matches!(result, Err(CertificateError::Render(_))));
    }

    #[test]
    fn test_injected_markup_can_break_rendering() {
        // Names are inserted unescaped, so a stray angle bracket corrupts the
        // document instead of appearing as text.
        let svg = CertificateTemplate::new(TEMPLATE).personalize("</svg><", "Dr. Bob");
        let result = svg_to_a4_pdf(&svg, empty_fontdb());

        assert!(matches!(result, Err(CertificateError::Render(_))));
    }

    #[tokio::test]
    async fn test_render_from_template_file() {
        let file = template_file(TEMPLATE);
        let renderer = SvgPdfRenderer::new(file.path());

        let pdf = renderer.render("Alice Example", "Dr. Bob").await.unwrap();

        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_render_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SvgPdfRenderer::new(dir.path().join("absent.svg"));

        let result = renderer.render("Alice Example", "Dr. Bob").await;

        assert!(matches!(
            result,
            Err(AppError::Certificate(CertificateError::TemplateNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_template_is_reloaded_on_every_render() {
        let file = template_file("<svg");
        let renderer = SvgPdfRenderer::new(file.path());
        assert!(renderer.render("A", "B").await.is_err());

        std::fs::write(file.path(), TEMPLATE).unwrap();
        assert!(renderer.render("A", "B").await.is_ok());
    }
}
