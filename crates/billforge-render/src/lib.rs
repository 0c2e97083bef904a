//! # billforge-render: Document Rendering for billforge
//!
//! Turns a saved [`InvoiceRecord`](billforge_core::types::InvoiceRecord) and
//! a theme into a complete, styled HTML document ready for PDF conversion.
//!
//! ## Modules
//!
//! - [`theme`] - the closed theme catalog (standard and thermal layouts)
//! - [`assets`] - logo/signature resolution to inline data URIs
//! - [`context`] - display-ready template context building
//! - [`renderer`] - the Tera-backed render pipeline
//! - [`error`] - hard render errors (missing invoice, unknown theme)
//!
//! ## Example
//!
//! ```rust
//! use billforge_core::builder::build;
//! use billforge_core::gateway::{AssetError, ImageResolver};
//! use billforge_core::types::{DocumentDraft, ImageRef, PartyInfo, RawLineItem};
//! use billforge_render::renderer::Renderer;
//! use chrono::Utc;
//!
//! struct NoImages;
//! impl ImageResolver for NoImages {
//!     fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, AssetError> {
//!         Err(AssetError::NotFound(image.0.clone()))
//!     }
//! }
//!
//! let draft = DocumentDraft {
//!     business: PartyInfo { name: "Acme".into(), ..Default::default() },
//!     line_items: vec![RawLineItem {
//!         id: "1".into(),
//!         description: "Widget".into(),
//!         quantity: "1".into(),
//!         unit_price: "42".into(),
//!     }],
//!     currency_code: "USD".into(),
//!     ..Default::default()
//! };
//!
//! let record = build(&draft, "INV-0001", Utc::now()).unwrap();
//! let renderer = Renderer::new().unwrap();
//! let document = renderer.render(&record, "classic", &NoImages).unwrap();
//! assert!(document.html.contains("$42.00"));
//! ```

pub mod assets;
pub mod context;
pub mod error;
pub mod renderer;
pub mod theme;

pub use error::{RenderError, RenderResult};
pub use renderer::{RenderedDocument, Renderer};
pub use theme::{LayoutClass, Theme, DEFAULT_THEME_KEY};
