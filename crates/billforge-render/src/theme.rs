//! # Theme Catalog
//!
//! A closed set of theme descriptors consumed by one generic layout path.
//! Adding a standard theme is a catalog entry (colors), not new rendering
//! code; only the layout class changes how a document is laid out.
//!
//! Themes are chosen per render and are not persisted with saved records:
//! the same invoice can be re-printed under a different theme later.

use serde::Serialize;
use ts_rs::TS;

// =============================================================================
// Layout Class
// =============================================================================

/// How a theme lays the document out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LayoutClass {
    /// Full-page A4 proportions: two-column header, From/To columns,
    /// tabular items, right-aligned totals.
    Standard,
    /// Narrow (≈70mm) receipt: every block stacks to a single column,
    /// fonts shrink, and currency renders as `USD 12.34` because receipt
    /// printers frequently cannot render currency glyphs.
    Thermal,
}

impl LayoutClass {
    /// Template name this class renders through.
    pub(crate) const fn template(&self) -> &'static str {
        match self {
            LayoutClass::Standard => "standard.html",
            LayoutClass::Thermal => "thermal.html",
        }
    }
}

// =============================================================================
// Theme Descriptor
// =============================================================================

/// A visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Theme {
    pub key: &'static str,
    pub display_name: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub layout_class: LayoutClass,
}

/// Theme used when none is specified (e.g. re-printing a saved record).
pub const DEFAULT_THEME_KEY: &str = "classic";

/// The static theme catalog.
pub const CATALOG: &[Theme] = &[
    Theme {
        key: "classic",
        display_name: "Classic",
        primary_color: "#1f3a5f",
        secondary_color: "#f4f6f8",
        accent_color: "#2e75b6",
        layout_class: LayoutClass::Standard,
    },
    Theme {
        key: "modern",
        display_name: "Modern",
        primary_color: "#111827",
        secondary_color: "#f9fafb",
        accent_color: "#10b981",
        layout_class: LayoutClass::Standard,
    },
    Theme {
        key: "minimal",
        display_name: "Minimal",
        primary_color: "#333333",
        secondary_color: "#ffffff",
        accent_color: "#888888",
        layout_class: LayoutClass::Standard,
    },
    Theme {
        key: "corporate",
        display_name: "Corporate",
        primary_color: "#4a148c",
        secondary_color: "#f3e5f5",
        accent_color: "#ff6f00",
        layout_class: LayoutClass::Standard,
    },
    Theme {
        key: "thermal",
        display_name: "Thermal Receipt",
        primary_color: "#000000",
        secondary_color: "#ffffff",
        accent_color: "#000000",
        layout_class: LayoutClass::Thermal,
    },
];

/// Looks up a theme by key. Unknown keys are a hard render error for the
/// caller to surface ("select a valid theme"), so this returns `Option`
/// rather than falling back silently.
pub fn lookup(key: &str) -> Option<&'static Theme> {
    CATALOG.iter().find(|theme| theme.key == key)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("classic").unwrap().layout_class, LayoutClass::Standard);
        assert_eq!(lookup("thermal").unwrap().layout_class, LayoutClass::Thermal);
        assert!(lookup("vaporwave").is_none());
    }

    #[test]
    fn test_default_theme_exists() {
        assert!(lookup(DEFAULT_THEME_KEY).is_some());
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
