//! # Totals Calculator
//!
//! The calculation pipeline behind every document:
//!
//! ```text
//! subtotal     = Σ quantity × unit_price over all line items
//! discount     = subtotal × clamp(discount_rate, ≥0) / 100
//! taxable_base = subtotal − discount
//! tax          = taxable_base × clamp(tax_rate, ≥0) / 100
//! total        = taxable_base + tax
//! ```
//!
//! Tax is computed on the **post-discount** base, never the raw subtotal —
//! this ordering is a deliberate, testable contract.
//!
//! The calculator is total: it never errors. Empty item lists yield all-zero
//! totals, unparsable rates become 0%, and rows with blank descriptions still
//! contribute if they carry numeric values. It runs on every keystroke of a
//! live form, so any failure mode here would crash mid-edit.

use crate::money::{Money, Rate};
use crate::types::{InvoiceTotals, LineItem, RawLineItem};

/// Computes document totals from parsed line items and rates.
///
/// All arithmetic is exact decimal; nothing is rounded between steps. The
/// invariant `total == subtotal − discount + tax` holds exactly, not just
/// within display rounding.
///
/// ## Example
/// ```rust
/// use billforge_core::money::Rate;
/// use billforge_core::totals::compute_totals;
/// use billforge_core::types::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![LineItem {
///     id: "1".into(),
///     description: "Consulting".into(),
///     quantity: Decimal::from(4),
///     unit_price: Decimal::from(25),
/// }];
/// let totals = compute_totals(
///     &items,
///     Rate::from_percent(Decimal::from(10)),
///     Rate::from_percent(Decimal::from(15)),
/// );
/// assert_eq!(totals.discount.amount(), Decimal::from(10));
/// assert_eq!(totals.tax.amount(), Decimal::new(135, 1)); // 13.5, on 90 not 100
/// ```
pub fn compute_totals(items: &[LineItem], discount_rate: Rate, tax_rate: Rate) -> InvoiceTotals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();

    let discount = discount_rate.apply(subtotal);
    let taxable_base = subtotal - discount;
    let tax = tax_rate.apply(taxable_base);
    let total = taxable_base + tax;

    InvoiceTotals {
        subtotal,
        discount,
        taxable_base,
        tax,
        total,
    }
}

/// Computes totals straight from live form rows and raw rate text.
///
/// This is the per-keystroke entry point: each row and rate is parsed
/// leniently (unparsable values become zero) before the pipeline runs.
pub fn compute_totals_raw(
    rows: &[RawLineItem],
    discount_rate_raw: &str,
    tax_rate_raw: &str,
) -> InvoiceTotals {
    let items: Vec<LineItem> = rows.iter().map(RawLineItem::to_line_item).collect();
    compute_totals(
        &items,
        Rate::parse_lenient(discount_rate_raw),
        Rate::parse_lenient(tax_rate_raw),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
