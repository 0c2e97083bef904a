//! # Validation Module
//!
//! Save-time validation for document drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  While typing:   NO validation — lenient parsing, zero on failure       │
//! │       │          (a half-typed form must never crash calculation)       │
//! │       ▼                                                                 │
//! │  On save/print:  THIS MODULE — the form gate                            │
//! │  ├── at least one line item with a description                          │
//! │  └── business name present                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Builder:        all-or-nothing record assembly                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Customer fields, addresses, notes, rates, and images are all optional by
//! contract: the renderer omits whatever is empty.

use crate::error::ValidationError;
use crate::types::{DocumentDraft, PartyInfo};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length accepted for free-text notes.
pub const MAX_NOTES_LEN: usize = 2000;

/// Validates a draft at the save boundary.
///
/// ## Rules
/// - Business name must be present (whose invoice is this?)
/// - At least one line item with a non-empty description must exist. Rows
///   with blank descriptions are legal and even contribute to totals, but a
///   document consisting only of them cannot be saved. The UI also forbids
///   deleting the last row; this check backs that up.
/// - Rate fields must be empty or numeric: mid-edit leniency means a typo
///   silently becomes 0%, but at save time the user gets told.
pub fn validate_draft(draft: &DocumentDraft) -> ValidationResult<()> {
    validate_party("business", &draft.business)?;

    if !draft
        .line_items
        .iter()
        .any(|row| !row.description.trim().is_empty())
    {
        return Err(ValidationError::NoLineItems);
    }

    validate_rate_field("discount rate", &draft.discount_rate)?;
    validate_rate_field("tax rate", &draft.tax_rate)?;

    if draft.notes.len() > MAX_NOTES_LEN {
        return Err(ValidationError::TooLong {
            field: "notes".to_string(),
            max: MAX_NOTES_LEN,
        });
    }

    Ok(())
}

/// Validates a party block for the given role ("business", "customer").
///
/// Only the name is a hard requirement; address, phone, email, and tax id
/// are optional and the renderer omits whatever is empty. The draft gate
/// applies this to the business side only.
pub fn validate_party(role: &str, party: &PartyInfo) -> ValidationResult<()> {
    if party.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("{role} name"),
        });
    }
    Ok(())
}

/// Validates that a rate field is empty or a non-negative number.
pub fn validate_rate_field(field: &str, raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }

    match raw.parse::<rust_decimal::Decimal>() {
        Ok(rate) if rate.is_sign_negative() && !rate.is_zero() => {
            Err(ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: "must not be negative".to_string(),
            })
        }
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a number".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PartyInfo, RawLineItem};

    fn valid_draft() -> DocumentDraft {
        DocumentDraft {
            business: PartyInfo {
                name: "Acme".to_string(),
                ..Default::default()
            },
            line_items: vec![RawLineItem {
                id: "1".to_string(),
                description: "Widget".to_string(),
                quantity: "1".to_string(),
                unit_price: "5".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn test_missing_business_name() {
        let mut draft = valid_draft();
        draft.business.name = "   ".to_string();
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_no_described_line_items() {
        let mut draft = valid_draft();
        draft.line_items[0].description = "".to_string();
        assert!(matches!(
            validate_draft(&draft),
            Err(ValidationError::NoLineItems)
        ));
    }

    #[test]
    fn test_party_name_required() {
        let ok = PartyInfo {
            name: "Acme".to_string(),
            ..Default::default()
        };
        assert!(validate_party("business", &ok).is_ok());

        let blank = PartyInfo {
            name: "   ".to_string(),
            ..Default::default()
        };
        let err = validate_party("business", &blank).unwrap_err();
        assert_eq!(err.to_string(), "business name is required");
    }

    #[test]
    fn test_rate_field_rules() {
        assert!(validate_rate_field("tax rate", "").is_ok());
        assert!(validate_rate_field("tax rate", "8.25").is_ok());
        assert!(validate_rate_field("tax rate", "0").is_ok());
        assert!(validate_rate_field("tax rate", "abc").is_err());
        assert!(validate_rate_field("tax rate", "-5").is_err());
    }

    #[test]
    fn test_customer_fields_are_optional() {
        let draft = valid_draft(); // customer is entirely empty
        assert!(validate_draft(&draft).is_ok());
    }
}
