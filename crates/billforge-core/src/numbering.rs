//! # Document Number Allocator
//!
//! Turns a per-document-type counter into a formatted number (`INV-0001`).
//!
//! ## Side-Effect Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Compose screen            billforge-core             Host app store    │
//! │                                                                         │
//! │  counter = 7  ───────────► format_number(Invoice, 7)                    │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                             "INV-0007"                                  │
//! │                                                                         │
//! │  user saves  ────────────────────────────────────►  save_invoice(...)   │
//! │                                                          │ success      │
//! │                                                          ▼              │
//! │                                          persist next_counter(7) = 8    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Allocation never mutates persisted state. The caller persists the
//! incremented counter only after a successful save, so an abandoned draft
//! does not permanently burn a number. Invoice and receipt counters are
//! independent sequences and never interleave.

use crate::types::DocumentType;

/// Digits the counter is zero-padded to (`INV-0001`).
pub const NUMBER_PAD_WIDTH: usize = 4;

/// Formats a document number from the current counter value.
///
/// Counters past 9999 widen naturally (`INV-10000`) rather than truncating.
///
/// ## Example
/// ```rust
/// use billforge_core::numbering::format_number;
/// use billforge_core::types::DocumentType;
///
/// assert_eq!(format_number(DocumentType::Invoice, 1), "INV-0001");
/// assert_eq!(format_number(DocumentType::Receipt, 42), "RCT-0042");
/// ```
pub fn format_number(document_type: DocumentType, counter: u32) -> String {
    format!(
        "{}-{:0width$}",
        document_type.prefix(),
        counter,
        width = NUMBER_PAD_WIDTH
    )
}

/// The counter value to persist after a successful save.
#[inline]
pub const fn next_counter(counter: u32) -> u32 {
    counter + 1
}

// =============================================================================
// Unit Tests
// =============================================================================
