//! # Invoice Aggregate Builder
//!
//! Assembles a [`DocumentDraft`] into an immutable [`InvoiceRecord`].
//!
//! ## All-Or-Nothing
//! Either a complete, self-consistent record comes back or an error does; a
//! half-populated record is never observable. Consumers can trust
//! `record.totals` without recomputing — and recomputing from the record's
//! own line items reproduces them exactly (asserted in tests).
//!
//! ## Snapshot Semantics
//! The builder defensively copies the draft's rows. The live form stays
//! mutable after a save; the saved record must not change under it.
//!
//! ## Customer Reference
//! The display-only customer reference (initials + timestamp suffix) is
//! generated here, once, and stored on the record. Regenerating it per
//! render would make two renders of the same record differ cosmetically.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::totals::compute_totals;
use crate::types::{DocumentDraft, DocumentStatus, InvoiceRecord, PartyInfo};
use crate::validation::validate_draft;

/// Builds an immutable record from the draft.
///
/// Pure assembly: no I/O. The caller supplies the allocated document number
/// and the wall clock, which keeps builds reproducible in tests and lets the
/// host app stamp the exact save moment.
///
/// ## Errors
/// Returns [`crate::error::CoreError::Validation`] when the draft fails the
/// save gate (no described line item, missing business name, malformed
/// rate text). Numeric leniency still applies below the gate: a row with an
/// unparsable quantity builds fine and contributes zero.
pub fn build(
    draft: &DocumentDraft,
    number: impl Into<String>,
    now: DateTime<Utc>,
) -> CoreResult<InvoiceRecord> {
    validate_draft(draft)?;

    // Defensive copy: later form edits must not mutate the saved record.
    let line_items = draft.parsed_items();
    let discount_rate = draft.discount();
    let tax_rate = draft.tax();
    let totals = compute_totals(&line_items, discount_rate, tax_rate);

    Ok(InvoiceRecord {
        id: Uuid::new_v4().to_string(),
        document_type: draft.document_type,
        number: number.into(),
        issue_date: draft.issue_date.unwrap_or_else(|| now.date_naive()),
        business: draft.business.clone(),
        customer: draft.customer.clone(),
        line_items,
        discount_rate,
        tax_rate,
        notes: draft.notes.clone(),
        currency_code: draft.currency_code.clone(),
        logo_ref: draft.logo_ref.clone(),
        signature_ref: draft.signature_ref.clone(),
        customer_ref: customer_reference(&draft.customer, now),
        totals,
        status: DocumentStatus::Saved,
        created_at: now,
    })
}

/// Derives the display-only customer reference: name initials plus a
/// base-36 suffix of the build minute (`JD-Q2M1X`).
///
/// Cosmetic by contract. Stored on the record so every render of the same
/// record shows the same reference.
pub fn customer_reference(customer: &PartyInfo, now: DateTime<Utc>) -> String {
    let initials = customer.initials();
    let prefix = if initials.is_empty() {
        "CUST"
    } else {
        initials.as_str()
    };
    format!("{}-{}", prefix, base36_upper(now.timestamp() as u64 / 60))
}

fn base36_upper(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::types::RawLineItem;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    fn draft() -> DocumentDraft {
        DocumentDraft {
            business: PartyInfo {
                name: "Acme Trading Co".to_string(),
                email: "billing@acme.test".to_string(),
                ..Default::default()
            },
            customer: PartyInfo {
                name: "Jane Doe".to_string(),
                ..Default::default()
            },
            line_items: vec![
                RawLineItem {
                    id: "1".to_string(),
                    description: "Consulting".to_string(),
                    quantity: "4".to_string(),
                    unit_price: "25".to_string(),
                },
                RawLineItem {
                    id: "2".to_string(),
                    description: "Materials".to_string(),
                    quantity: "abc".to_string(), // lenient: contributes 0
                    unit_price: "10".to_string(),
                },
            ],
            discount_rate: "10".to_string(),
            tax_rate: "15".to_string(),
            notes: "Net 30".to_string(),
            currency_code: "USD".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_produces_consistent_record() {
        let record = build(&draft(), "INV-0007", fixed_now()).unwrap();

        assert_eq!(record.number, "INV-0007");
        assert_eq!(record.status, DocumentStatus::Saved);
        assert_eq!(record.line_items.len(), 2);
        assert_eq!(record.totals.subtotal.amount(), dec("100"));
        assert_eq!(record.totals.total.amount(), dec("103.5"));
        assert_eq!(record.issue_date, fixed_now().date_naive());
    }

    #[test]
    fn test_round_trip_recomputation_matches_exactly() {
        let record = build(&draft(), "INV-0001", fixed_now()).unwrap();
        let recomputed =
            compute_totals(&record.line_items, record.discount_rate, record.tax_rate);
        assert_eq!(recomputed, record.totals);
    }

    #[test]
    fn test_build_snapshots_the_draft() {
        let mut d = draft();
        let record = build(&d, "INV-0001", fixed_now()).unwrap();

        // mutate the live form after the save
        d.line_items[0].unit_price = "9999".to_string();
        d.customer.name = "Someone Else".to_string();

        assert_eq!(record.line_items[0].unit_price, dec("25"));
        assert_eq!(record.customer.name, "Jane Doe");
    }

    #[test]
    fn test_build_is_all_or_nothing() {
        let mut d = draft();
        d.business.name.clear();
        let err = build(&d, "INV-0001", fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_customer_reference_is_stable_per_build() {
        let record = build(&draft(), "INV-0001", fixed_now()).unwrap();
        assert!(record.customer_ref.starts_with("JD-"));

        // same build inputs, same reference
        let again = build(&draft(), "INV-0001", fixed_now()).unwrap();
        assert_eq!(record.customer_ref, again.customer_ref);
    }

    #[test]
    fn test_customer_reference_without_name() {
        let anonymous = PartyInfo::default();
        let reference = customer_reference(&anonymous, fixed_now());
        assert!(reference.starts_with("CUST-"));
    }

    #[test]
    fn test_record_json_round_trip() {
        // records travel to the frontend and the store as JSON
        let record = build(&draft(), "INV-0001", fixed_now()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: crate::types::InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_base36() {
        assert_eq!(base36_upper(0), "0");
        assert_eq!(base36_upper(35), "Z");
        assert_eq!(base36_upper(36), "10");
    }
}
