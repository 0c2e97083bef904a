//! # billforge-core: Pure Business Logic for billforge
//!
//! This crate is the **heart** of billforge. It contains the whole
//! calculation side of the invoicing app as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       billforge Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host App (mobile frontend)                     │   │
//! │  │   Compose UI ──► Preview UI ──► Share/Print UI                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ billforge-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │  builder  │   │   │
//! │  │   │  records  │  │  Decimal  │  │ pipeline  │  │ assembly  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │ currency  │  │ numbering │  │  gateway  │                  │   │
//! │  │   │  catalog  │  │ INV-0001  │  │   ports   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 billforge-render (sibling crate)                │   │
//! │  │          Themes, Tera templates, asset embedding                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same form state in, same totals out, always
//! 2. **No I/O**: storage, images, and printing sit behind [`gateway`] ports
//! 3. **Exact Decimal Money**: no rounding between calculation steps;
//!    2-decimal rounding happens only at display time
//! 4. **Lenient Inputs**: unparsable numeric form text becomes zero, never
//!    an error — the calculator runs on every keystroke
//! 5. **Derived Values Are Views**: line totals and record totals are always
//!    recomputed from line items, never independently settable
//!
//! ## Example Usage
//!
//! ```rust
//! use billforge_core::totals::compute_totals_raw;
//! use billforge_core::types::RawLineItem;
//! use rust_decimal::Decimal;
//!
//! let rows = vec![RawLineItem {
//!     id: "1".into(),
//!     description: "Consulting".into(),
//!     quantity: "4".into(),
//!     unit_price: "25".into(),
//! }];
//!
//! // subtotal 100, 10% discount, 15% tax on the post-discount base
//! let totals = compute_totals_raw(&rows, "10", "15");
//! assert_eq!(totals.total.amount(), Decimal::new(1035, 1)); // 103.5
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod currency;
pub mod error;
pub mod gateway;
pub mod money;
pub mod numbering;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billforge_core::Money` instead of
// `use billforge_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Rate};
pub use types::*;
