//! # Asset Resolution
//!
//! Resolves the record's logo and signature references to inline-embeddable
//! `data:` URIs through the host app's [`ImageResolver`] port.
//!
//! Failure here is always local: a missing or unreadable logo logs a warning
//! and leaves that slot empty. It must never prevent the rest of the invoice
//! from rendering.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use billforge_core::gateway::ImageResolver;
use billforge_core::types::{ImageRef, InvoiceRecord};
use tracing::warn;

/// Inline image data for the template, one slot per optional image.
#[derive(Debug, Default)]
pub struct ResolvedAssets {
    pub logo_data_uri: Option<String>,
    pub signature_data_uri: Option<String>,
}

/// Resolves both image slots for a record.
pub fn resolve_assets(record: &InvoiceRecord, resolver: &dyn ImageResolver) -> ResolvedAssets {
    ResolvedAssets {
        logo_data_uri: resolve_slot("logo", record.logo_ref.as_ref(), resolver),
        signature_data_uri: resolve_slot("signature", record.signature_ref.as_ref(), resolver),
    }
}

fn resolve_slot(
    slot: &str,
    image: Option<&ImageRef>,
    resolver: &dyn ImageResolver,
) -> Option<String> {
    let image = image?;
    match resolver.resolve(image) {
        Ok(bytes) => Some(to_data_uri(&bytes)),
        Err(err) => {
            warn!(slot, reference = %image.0, error = %err, "asset resolution failed, rendering without it");
            None
        }
    }
}

/// Encodes image bytes as a `data:` URI, sniffing the format from magic bytes.
fn to_data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), STANDARD.encode(bytes))
}

/// Format detection from magic bytes. Unknown formats claim PNG; browsers
/// and PDF converters sniff content themselves, so a wrong label is harmless.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/png"
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use billforge_core::gateway::AssetError;
    use std::collections::HashMap;

    /// Resolver backed by a map, mirroring how tests seed device storage.
    #[derive(Default)]
    pub struct MapResolver {
        images: HashMap<String, Vec<u8>>,
    }

    impl MapResolver {
        pub fn with(mut self, reference: &str, bytes: &[u8]) -> Self {
            self.images.insert(reference.to_string(), bytes.to_vec());
            self
        }
    }

    impl ImageResolver for MapResolver {
        fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, AssetError> {
            self.images
                .get(&image.0)
                .cloned()
                .ok_or_else(|| AssetError::NotFound(image.0.clone()))
        }
    }

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_sniff_mime() {
        assert_eq!(sniff_mime(PNG_HEADER), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(b"GIF89a..."), "image/gif");
        assert_eq!(sniff_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(sniff_mime(b"mystery bytes"), "image/png");
    }

    #[test]
    fn test_data_uri_round_trip() {
        let uri = to_data_uri(PNG_HEADER);
        assert!(uri.starts_with("data:image/png;base64,"));
        let encoded = uri.rsplit(',').next().unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), PNG_HEADER);
    }

    #[test]
    fn test_missing_slot_resolves_to_none() {
        let resolver = MapResolver::default();
        assert!(resolve_slot("logo", None, &resolver).is_none());
    }

    #[test]
    fn test_failed_resolution_is_local() {
        let resolver = MapResolver::default().with("sig.png", PNG_HEADER);

        let missing = ImageRef("gone.png".to_string());
        let present = ImageRef("sig.png".to_string());

        assert!(resolve_slot("logo", Some(&missing), &resolver).is_none());
        assert!(resolve_slot("signature", Some(&present), &resolver).is_some());
    }
}
