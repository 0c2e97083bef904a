//! # Document Renderer
//!
//! Converts an [`InvoiceRecord`] plus a theme key into a complete, styled
//! HTML document the host app hands to its PDF/print backend.
//!
//! ## Per-Render State Machine
//! ```text
//! Idle ──► ResolvingAssets ──► LayoutStandardOrThermal ──► Serialized
//!              │                        │                      │
//!              │ failures stay local    │ theme.layout_class   │ HTML string
//!              ▼ (slot left empty)      ▼ picks the template   ▼ to caller
//! ```
//!
//! Each render call is independent pure computation over the inputs; calls
//! for different records can safely run concurrently. The renderer never
//! touches printers or the filesystem — templates are compiled in, output is
//! returned as a value.

use billforge_core::gateway::{DocumentPayload, ImageResolver};
use billforge_core::types::{DocumentType, InvoiceRecord};
use tera::Tera;
use tracing::debug;

use crate::assets::resolve_assets;
use crate::context::build_context;
use crate::error::{RenderError, RenderResult};
use crate::theme;

// Embedded at compile time so rendering never depends on install layout.
const STANDARD_TEMPLATE: &str = include_str!("../templates/standard.html.tera");
const THERMAL_TEMPLATE: &str = include_str!("../templates/thermal.html.tera");

// =============================================================================
// Rendered Document
// =============================================================================

/// The serialized output of one render call.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub html: String,
    pub theme_key: String,
    pub document_type: DocumentType,
    pub number: String,
}

impl RenderedDocument {
    /// Suggested file name for sharing/saving (`INV-0001.html`).
    pub fn file_name(&self) -> String {
        format!("{}.html", self.number)
    }

    /// Packages the document for an
    /// [`OutputSink`](billforge_core::gateway::OutputSink).
    pub fn into_payload(self) -> DocumentPayload {
        DocumentPayload {
            file_name: self.file_name(),
            mime_type: "text/html".to_string(),
            bytes: self.html.into_bytes(),
        }
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Theme-driven document renderer.
///
/// Construct once and reuse; it only holds the parsed templates.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Parses the embedded templates.
    ///
    /// Failure here means a template bug shipped in the binary, so hosts
    /// typically construct the renderer at startup and treat an error as
    /// fatal.
    pub fn new() -> RenderResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("standard.html", STANDARD_TEMPLATE),
            ("thermal.html", THERMAL_TEMPLATE),
        ])?;
        Ok(Renderer { tera })
    }

    /// Renders a record under the given theme.
    ///
    /// ## Errors
    /// - [`RenderError::UnknownTheme`] when the key is not in the catalog
    /// - [`RenderError::Template`] on template expansion bugs
    ///
    /// Missing optional fields never error: empty party fields, notes, and
    /// unresolvable logo/signature references are simply omitted.
    pub fn render(
        &self,
        record: &InvoiceRecord,
        theme_key: &str,
        resolver: &dyn ImageResolver,
    ) -> RenderResult<RenderedDocument> {
        let theme = theme::lookup(theme_key).ok_or_else(|| RenderError::UnknownTheme {
            key: theme_key.to_string(),
        })?;

        let assets = resolve_assets(record, resolver);
        let context = build_context(record, theme, assets);

        let html = self.tera.render(
            theme.layout_class.template(),
            &tera::Context::from_serialize(&context)?,
        )?;

        debug!(
            number = %record.number,
            theme = theme.key,
            bytes = html.len(),
            "document rendered"
        );

        Ok(RenderedDocument {
            html,
            theme_key: theme.key.to_string(),
            document_type: record.document_type,
            number: record.number.clone(),
        })
    }

    /// Renders a possibly-absent saved record.
    ///
    /// Mirrors the preview screen contract: looking up a deleted id yields
    /// `None`, which the UI must distinguish from a bad theme choice.
    pub fn render_saved(
        &self,
        record: Option<&InvoiceRecord>,
        theme_key: &str,
        resolver: &dyn ImageResolver,
    ) -> RenderResult<RenderedDocument> {
        let record = record.ok_or(RenderError::MissingInvoice)?;
        self.render(record, theme_key, resolver)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_core::builder::build;
    use billforge_core::gateway::AssetError;
    use billforge_core::types::{DocumentDraft, ImageRef, PartyInfo, RawLineItem};
    use chrono::{TimeZone, Utc};

    /// Resolver with no images at all.
    struct EmptyResolver;

    impl ImageResolver for EmptyResolver {
        fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, AssetError> {
            Err(AssetError::NotFound(image.0.clone()))
        }
    }

    fn record() -> InvoiceRecord {
        let draft = DocumentDraft {
            business: PartyInfo {
                name: "Acme Trading Co".to_string(),
                ..Default::default()
            },
            line_items: vec![RawLineItem {
                id: "1".to_string(),
                description: "Widget".to_string(),
                quantity: "1".to_string(),
                unit_price: "42".to_string(),
            }],
            currency_code: "USD".to_string(),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        build(&draft, "INV-0001", now).unwrap()
    }

    #[test]
    fn test_render_standard_and_thermal_currency_styles() {
        let renderer = Renderer::new().unwrap();
        let rec = record();

        let standard = renderer.render(&rec, "classic", &EmptyResolver).unwrap();
        assert!(standard.html.contains("$42.00"));
        assert!(!standard.html.contains("USD 42.00"));

        let thermal = renderer.render(&rec, "thermal", &EmptyResolver).unwrap();
        assert!(thermal.html.contains("USD 42.00"));
        assert!(!thermal.html.contains("$42.00"));
    }

    #[test]
    fn test_unknown_theme_is_a_hard_error() {
        let renderer = Renderer::new().unwrap();
        let err = renderer
            .render(&record(), "vaporwave", &EmptyResolver)
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownTheme { .. }));
    }

    #[test]
    fn test_render_saved_none_is_missing_invoice() {
        let renderer = Renderer::new().unwrap();
        let err = renderer
            .render_saved(None, "classic", &EmptyResolver)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingInvoice));
    }

    #[test]
    fn test_broken_logo_does_not_abort_render() {
        let renderer = Renderer::new().unwrap();
        let mut rec = record();
        rec.logo_ref = Some(ImageRef("gone.png".to_string()));

        let doc = renderer.render(&rec, "classic", &EmptyResolver).unwrap();
        assert!(!doc.html.contains("data:image"));
        assert!(doc.html.contains("Acme Trading Co"));
        assert!(doc.html.contains("INV-0001"));
    }

    #[test]
    fn test_payload_packaging() {
        let renderer = Renderer::new().unwrap();
        let doc = renderer.render(&record(), "classic", &EmptyResolver).unwrap();

        assert_eq!(doc.file_name(), "INV-0001.html");
        let payload = doc.into_payload();
        assert_eq!(payload.mime_type, "text/html");
        assert!(!payload.bytes.is_empty());
    }
}
