//! # Error Types
//!
//! Domain-specific error types for billforge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billforge-core errors (this file)                                      │
//! │  ├── CoreError        - Build/domain failures                           │
//! │  └── ValidationError  - Save-time form validation failures              │
//! │                                                                         │
//! │  billforge-render errors (separate crate)                               │
//! │  └── RenderError      - Missing invoice / unknown theme / template      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → host app → toast message           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error Here
//! Unparsable numeric form text is never an error — leniency is a deliberate
//! calculator contract (see the money module). Errors exist only at the
//! save boundary, where the builder is all-or-nothing.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Build and domain failures.
///
/// The builder either returns a complete, self-consistent record or one of
/// these; a half-populated record is never observable.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Save-time form validation failures.
///
/// These occur when the user hits save/print with a form the document
/// pipeline cannot accept. Mid-edit leniency means none of these fire
/// during typing.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A document must retain at least one line item with a description.
    #[error("document needs at least one line item with a description")]
    NoLineItems,

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Rate text is present but not numeric.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "business name".to_string(),
        };
        assert_eq!(err.to_string(), "business name is required");

        let err = ValidationError::NoLineItems;
        assert_eq!(
            err.to_string(),
            "document needs at least one line item with a description"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NoLineItems;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
