//! # Render Errors
//!
//! Rendering tolerates almost everything: missing optional fields are
//! omitted, broken image references leave their slot empty, unknown currency
//! codes fall back to `$`. Only two conditions are hard errors, and they stay
//! distinguishable so the UI can show an actionable message:
//!
//! - no invoice to render ("no invoice to render")
//! - an unknown theme key ("select a valid theme")

use thiserror::Error;

/// Hard rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The caller asked to render without a record (deleted id, empty state).
    #[error("no invoice to render")]
    MissingInvoice,

    /// The requested theme key does not exist in the catalog.
    #[error("unknown theme: {key}")]
    UnknownTheme { key: String },

    /// Template expansion failed. Indicates a bug in an embedded template,
    /// not bad user data.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_actionable() {
        assert_eq!(RenderError::MissingInvoice.to_string(), "no invoice to render");
        let err = RenderError::UnknownTheme {
            key: "vaporwave".to_string(),
        };
        assert_eq!(err.to_string(), "unknown theme: vaporwave");
    }
}
