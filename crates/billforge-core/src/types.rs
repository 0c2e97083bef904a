//! # Domain Types
//!
//! Core domain types used throughout billforge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DocumentDraft  │   │  InvoiceRecord  │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw form text  │──►│  number, totals │   │  id (UUID)      │       │
//! │  │  mutable        │   │  immutable      │   │  sku, price     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │           build() snapshots the draft; later form edits                 │
//! │           never mutate a saved record                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Values Are Never Stored
//! `LineItem::line_total` and `InvoiceRecord.totals` are views over the line
//! items. The record carries totals for consumers' convenience, but they are
//! produced exclusively by the builder from the record's own items, and the
//! renderer recomputes line totals at render time. Nothing can drift.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{parse_decimal_lenient, Money, Rate};

// =============================================================================
// Document Type
// =============================================================================

/// Whether a document is an invoice or a receipt.
///
/// The two kinds share structure but keep independent number sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Invoice,
    Receipt,
}

impl DocumentType {
    /// Number prefix: `INV` for invoices, `RCT` for receipts.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "INV",
            DocumentType::Receipt => "RCT",
        }
    }

    /// Document title printed in the page header.
    #[inline]
    pub const fn title(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "INVOICE",
            DocumentType::Receipt => "RECEIPT",
        }
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        DocumentType::Invoice
    }
}

// =============================================================================
// Document Status
// =============================================================================

/// Lifecycle status of a saved document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Live working copy, not yet saved.
    Draft,
    /// Saved locally.
    Saved,
    /// Shared/emailed to the customer.
    Sent,
    /// Payment received.
    Paid,
    /// Past due date without payment.
    Overdue,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        DocumentStatus::Draft
    }
}

// =============================================================================
// Party Info
// =============================================================================

/// Business or customer details.
///
/// Structurally identical for both parties; only businesses carry a tax id.
/// No field is required at the data-model level — the renderer tolerates any
/// field being empty and simply omits it from output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartyInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Tax/VAT registration number. Businesses only in practice.
    pub tax_id: Option<String>,
}

impl PartyInfo {
    /// Uppercase initials of the name's words ("Acme Trading Co" → "ATC").
    ///
    /// Used for the customer reference on printed documents. Empty names
    /// yield an empty string.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// A priced row on a document.
///
/// `line_total` is derived, never stored: it must be recomputed from quantity
/// and unit price on every read so it can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// What was sold. May be blank mid-edit; blank rows still count towards
    /// totals if they carry numeric quantity/price.
    pub description: String,

    /// Quantity sold. Fractional quantities (2.5 hours) are first-class.
    #[ts(as = "String")]
    pub quantity: Decimal,

    /// Price per unit.
    #[ts(as = "String")]
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates a blank row (the "add item" button).
    pub fn blank() -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
        }
    }

    /// Creates a row from a catalog product, freezing its name and price.
    ///
    /// The snapshot matters: if the product's price changes later, documents
    /// already composed keep the price the user saw.
    pub fn from_product(product: &Product, quantity: Decimal) -> Self {
        LineItem {
            id: Uuid::new_v4().to_string(),
            description: product.name.clone(),
            quantity,
            unit_price: product.price,
        }
    }

    /// The derived row total: `quantity × unit_price`, unrounded.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::new(self.quantity * self.unit_price)
    }
}

/// A row as it exists in the live form: raw text fields.
///
/// Quantity and price stay strings until calculation so a half-typed value
/// never produces an error; [`RawLineItem::to_line_item`] parses leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawLineItem {
    pub id: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
}

impl RawLineItem {
    /// Parses the row; unparsable quantity or price becomes zero.
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            id: self.id.clone(),
            description: self.description.clone(),
            quantity: parse_decimal_lenient(&self.quantity),
            unit_price: parse_decimal_lenient(&self.unit_price),
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Computed document totals.
///
/// Always produced by [`crate::totals::compute_totals`]; amounts are exact
/// and unrounded, display rounding happens at format time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub taxable_base: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Image References
// =============================================================================

/// Opaque reference to a stored image (logo or signature).
///
/// The core never reads image bytes; resolution happens through the
/// [`crate::gateway::ImageResolver`] port during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(pub String);

// =============================================================================
// Invoice Record
// =============================================================================

/// A finalized invoice or receipt.
///
/// Created when the user saves or prints; immutable from then on. A rendered
/// PDF is a point-in-time snapshot of one of these. The live form state is a
/// separate [`DocumentDraft`] that becomes a record only through the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub document_type: DocumentType,

    /// Formatted document number (`INV-0001`).
    pub number: String,

    #[ts(as = "String")]
    pub issue_date: NaiveDate,

    pub business: PartyInfo,
    pub customer: PartyInfo,

    /// Snapshot of the draft's rows at build time.
    pub line_items: Vec<LineItem>,

    pub discount_rate: Rate,
    pub tax_rate: Rate,

    pub notes: String,

    /// Currency code, resolved through the catalog at display time.
    pub currency_code: String,

    pub logo_ref: Option<ImageRef>,
    pub signature_ref: Option<ImageRef>,

    /// Display-only customer reference (initials + build-time suffix).
    /// Generated once by the builder so repeated renders are reproducible.
    pub customer_ref: String,

    /// Totals computed from `line_items` at build time. The round-trip
    /// recomputation property is asserted in tests: recomputing from the
    /// record's own items reproduces these values exactly.
    pub totals: InvoiceTotals,

    pub status: DocumentStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Document Draft (live form state)
// =============================================================================

/// The mutable working copy behind the compose screen.
///
/// Numeric fields stay raw strings; leniency is applied when totals are
/// recalculated on each edit and when the builder snapshots the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentDraft {
    #[serde(default)]
    pub document_type: DocumentType,
    pub business: PartyInfo,
    pub customer: PartyInfo,
    pub line_items: Vec<RawLineItem>,
    pub discount_rate: String,
    pub tax_rate: String,
    pub notes: String,
    pub currency_code: String,
    pub logo_ref: Option<ImageRef>,
    pub signature_ref: Option<ImageRef>,
    #[ts(as = "Option<String>")]
    pub issue_date: Option<NaiveDate>,
}

impl DocumentDraft {
    /// Parses every row leniently into calculable line items.
    pub fn parsed_items(&self) -> Vec<LineItem> {
        self.line_items.iter().map(RawLineItem::to_line_item).collect()
    }

    /// The discount rate as typed, leniently parsed.
    pub fn discount(&self) -> Rate {
        Rate::parse_lenient(&self.discount_rate)
    }

    /// The tax rate as typed, leniently parsed.
    pub fn tax(&self) -> Rate {
        Rate::parse_lenient(&self.tax_rate)
    }
}

// =============================================================================
// Product (inventory catalog entry)
// =============================================================================

/// An inventory catalog entry.
///
/// Source of line-item defaults when the user picks from the catalog; the
/// catalog itself is managed by the host app through the store gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the picker and copied into line items.
    pub name: String,

    pub description: Option<String>,

    /// Unit price copied into line items at selection time.
    #[ts(as = "String")]
    pub price: Decimal,

    pub category: Option<String>,

    pub stock_quantity: i64,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn test_product(name: &str, price: &str) -> Product {
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            price: dec(price),
            category: None,
            stock_quantity: 10,
            sku: "SKU-1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_document_type_prefix() {
        assert_eq!(DocumentType::Invoice.prefix(), "INV");
        assert_eq!(DocumentType::Receipt.prefix(), "RCT");
        assert_eq!(DocumentType::Invoice.title(), "INVOICE");
    }

    #[test]
    fn test_party_initials() {
        let party = PartyInfo {
            name: "Acme Trading Co".to_string(),
            ..Default::default()
        };
        assert_eq!(party.initials(), "ATC");

        let empty = PartyInfo::default();
        assert_eq!(empty.initials(), "");

        let lowercase = PartyInfo {
            name: "jane doe".to_string(),
            ..Default::default()
        };
        assert_eq!(lowercase.initials(), "JD");
    }

    #[test]
    fn test_line_item_from_product_freezes_price() {
        let mut product = test_product("Widget", "9.99");
        let item = LineItem::from_product(&product, dec("3"));

        product.price = dec("19.99");

        assert_eq!(item.description, "Widget");
        assert_eq!(item.unit_price, dec("9.99"));
        assert_eq!(item.line_total().amount(), dec("29.97"));
    }

    #[test]
    fn test_line_total_is_derived() {
        let item = LineItem {
            id: "x".to_string(),
            description: "Consulting".to_string(),
            quantity: dec("2.5"),
            unit_price: dec("33.33"),
        };
        assert_eq!(item.line_total().amount(), dec("83.325"));
    }

    #[test]
    fn test_blank_row_defaults() {
        let row = LineItem::blank();
        assert_eq!(row.quantity, Decimal::ONE);
        assert!(row.line_total().is_zero());
        assert!(!row.id.is_empty());
    }

    #[test]
    fn test_raw_line_item_lenient_parse() {
        let raw = RawLineItem {
            id: "x".to_string(),
            description: "Thing".to_string(),
            quantity: "abc".to_string(),
            unit_price: "5".to_string(),
        };
        let item = raw.to_line_item();
        assert_eq!(item.quantity, Decimal::ZERO);
        assert_eq!(item.unit_price, dec("5"));
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_draft_rate_parsing() {
        let draft = DocumentDraft {
            discount_rate: "10".to_string(),
            tax_rate: "not a number".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.discount().percent(), dec("10"));
        assert!(draft.tax().is_zero());
    }
}
