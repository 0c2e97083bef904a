//! # Template Context
//!
//! Display-ready data handed to the Tera templates. Everything is formatted
//! here, in Rust: currency style per layout class, dates, quantity
//! normalization, recomputed line totals. Templates only place strings.
//!
//! Totals are recomputed from the record's own line items at context-build
//! time, so the printed total always matches the printed rows even if a
//! cached value elsewhere had drifted.

use billforge_core::currency;
use billforge_core::money::Money;
use billforge_core::totals::compute_totals;
use billforge_core::types::{InvoiceRecord, LineItem, PartyInfo};
use serde::Serialize;

use crate::assets::ResolvedAssets;
use crate::theme::{LayoutClass, Theme};

// =============================================================================
// Context Types
// =============================================================================

/// The root template context.
#[derive(Debug, Serialize)]
pub struct DocumentContext {
    pub title: &'static str,
    pub number: String,
    pub issue_date: String,
    pub theme: &'static Theme,
    pub business: PartyContext,
    pub customer: PartyContext,
    pub customer_ref: String,
    pub items: Vec<ItemContext>,
    pub totals: TotalsContext,
    /// Empty notes are omitted entirely (no empty block in the output).
    pub notes: Option<String>,
    pub logo_data_uri: Option<String>,
    pub signature_data_uri: Option<String>,
}

/// One party block (From or To).
#[derive(Debug, Serialize)]
pub struct PartyContext {
    pub name: String,
    /// Contact lines in display order; empty fields are already dropped.
    pub lines: Vec<String>,
}

/// One items-table row, fully formatted.
#[derive(Debug, Serialize)]
pub struct ItemContext {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

/// The totals block.
///
/// Subtotal, tax, and total are always shown; the discount row exists only
/// when the discount is positive.
#[derive(Debug, Serialize)]
pub struct TotalsContext {
    pub subtotal: String,
    pub discount_label: Option<String>,
    /// Formatted with a leading minus (`-$10.00`).
    pub discount: Option<String>,
    pub tax_label: String,
    pub tax: String,
    pub total: String,
}

// =============================================================================
// Context Building
// =============================================================================

/// Builds the template context for one render call.
pub fn build_context(
    record: &InvoiceRecord,
    theme: &'static Theme,
    assets: ResolvedAssets,
) -> DocumentContext {
    let fmt = money_formatter(theme.layout_class);
    let code = record.currency_code.as_str();

    // Recomputed at render time from the record's own items, never cached.
    let totals = compute_totals(&record.line_items, record.discount_rate, record.tax_rate);

    let items = record
        .line_items
        .iter()
        .map(|item| item_context(item, code, fmt))
        .collect();

    let (discount_label, discount) = if totals.discount.is_positive() {
        (
            Some(format!("Discount ({})", record.discount_rate)),
            Some(fmt(Money::zero() - totals.discount, code)),
        )
    } else {
        (None, None)
    };

    DocumentContext {
        title: record.document_type.title(),
        number: record.number.clone(),
        issue_date: record.issue_date.format("%b %d, %Y").to_string(),
        theme,
        business: party_context(&record.business),
        customer: party_context(&record.customer),
        customer_ref: record.customer_ref.clone(),
        items,
        totals: TotalsContext {
            subtotal: fmt(totals.subtotal, code),
            discount_label,
            discount,
            tax_label: format!("Tax ({})", record.tax_rate),
            tax: fmt(totals.tax, code),
            total: fmt(totals.total, code),
        },
        notes: non_empty(&record.notes),
        logo_data_uri: assets.logo_data_uri,
        signature_data_uri: assets.signature_data_uri,
    }
}

/// Currency style per layout class: symbol for standard pages, `CODE amount`
/// for thermal receipts (printers lack currency glyphs).
fn money_formatter(layout_class: LayoutClass) -> fn(Money, &str) -> String {
    match layout_class {
        LayoutClass::Standard => currency::format,
        LayoutClass::Thermal => currency::format_code_style,
    }
}

fn item_context(item: &LineItem, code: &str, fmt: fn(Money, &str) -> String) -> ItemContext {
    ItemContext {
        description: item.description.clone(),
        quantity: item.quantity.normalize().to_string(),
        unit_price: fmt(Money::new(item.unit_price), code),
        // recomputed here, never read from a stored field
        line_total: fmt(item.line_total(), code),
    }
}

fn party_context(party: &PartyInfo) -> PartyContext {
    let mut lines = Vec::new();
    for field in [
        party.address.as_str(),
        party.phone.as_str(),
        party.email.as_str(),
    ] {
        if let Some(line) = non_empty(field) {
            lines.push(line);
        }
    }
    if let Some(tax_id) = party.tax_id.as_deref().and_then(|t| non_empty(t)) {
        lines.push(format!("Tax ID: {}", tax_id));
    }
    PartyContext {
        name: party.name.clone(),
        lines,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
