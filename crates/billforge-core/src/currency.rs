//! # Currency Catalog
//!
//! Static table mapping a currency code to a display symbol, plus the two
//! formatting styles the renderer needs:
//!
//! - symbol style (`$12.34`) for standard page layouts
//! - code style (`USD 12.34`) for thermal receipts, whose printers
//!   frequently cannot render currency glyphs
//!
//! Unknown codes never error; they degrade to the `$` fallback so an invoice
//! saved with an exotic currency still renders.

use crate::money::Money;
use serde::Serialize;
use ts_rs::TS;

// =============================================================================
// Currency Descriptor
// =============================================================================

/// A currency known to the catalog.
///
/// Serialize-only: the catalog is static data handed to the frontend picker,
/// never read back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CurrencyDescriptor {
    /// ISO-ish 3-letter code ("USD").
    pub code: &'static str,
    /// Display symbol ("$").
    pub symbol: &'static str,
    /// Human-readable name ("US Dollar").
    pub display_name: &'static str,
}

/// Descriptor returned for codes the catalog does not know.
pub const FALLBACK: CurrencyDescriptor = CurrencyDescriptor {
    code: "USD",
    symbol: "$",
    display_name: "US Dollar",
};

/// The static currency catalog.
///
/// Order matters only for settings pickers in the host app; lookup is by code.
pub const CATALOG: &[CurrencyDescriptor] = &[
    FALLBACK,
    CurrencyDescriptor { code: "EUR", symbol: "€", display_name: "Euro" },
    CurrencyDescriptor { code: "GBP", symbol: "£", display_name: "British Pound" },
    CurrencyDescriptor { code: "JPY", symbol: "¥", display_name: "Japanese Yen" },
    CurrencyDescriptor { code: "INR", symbol: "₹", display_name: "Indian Rupee" },
    CurrencyDescriptor { code: "PKR", symbol: "₨", display_name: "Pakistani Rupee" },
    CurrencyDescriptor { code: "CAD", symbol: "C$", display_name: "Canadian Dollar" },
    CurrencyDescriptor { code: "AUD", symbol: "A$", display_name: "Australian Dollar" },
    CurrencyDescriptor { code: "CHF", symbol: "CHF ", display_name: "Swiss Franc" },
    CurrencyDescriptor { code: "CNY", symbol: "¥", display_name: "Chinese Yuan" },
    CurrencyDescriptor { code: "AED", symbol: "د.إ", display_name: "UAE Dirham" },
    CurrencyDescriptor { code: "SAR", symbol: "﷼", display_name: "Saudi Riyal" },
    CurrencyDescriptor { code: "BDT", symbol: "৳", display_name: "Bangladeshi Taka" },
    CurrencyDescriptor { code: "NGN", symbol: "₦", display_name: "Nigerian Naira" },
    CurrencyDescriptor { code: "ZAR", symbol: "R", display_name: "South African Rand" },
];

// =============================================================================
// Lookup & Formatting
// =============================================================================

/// Looks up a currency descriptor by code.
///
/// Case-insensitive. Unknown codes return [`FALLBACK`] instead of erroring;
/// unknown currencies degrade gracefully to `$`-prefixed display.
pub fn lookup(code: &str) -> &'static CurrencyDescriptor {
    CATALOG
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
        .unwrap_or(&FALLBACK)
}

/// Formats an amount in symbol style: `$12.34`, or `-$12.34` for negatives.
///
/// The leading minus sits before the symbol so a discount line reads
/// `-$12.34`, matching how the totals block displays deductions.
pub fn format(amount: Money, code: &str) -> String {
    let descriptor = lookup(code);
    if amount.is_negative() {
        format!("-{}{:.2}", descriptor.symbol, amount.abs().rounded())
    } else {
        format!("{}{:.2}", descriptor.symbol, amount.rounded())
    }
}

/// Formats an amount in code style: `USD 12.34`, or `-USD 12.34`.
///
/// Hard requirement for thermal layouts, not a styling preference: receipt
/// printers routinely lack the glyphs for `€`, `₹`, `₨`, etc.
pub fn format_code_style(amount: Money, code: &str) -> String {
    let descriptor = lookup(code);
    if amount.is_negative() {
        format!("-{} {:.2}", descriptor.code, amount.abs().rounded())
    } else {
        format!("{} {:.2}", descriptor.code, amount.rounded())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn money(s: &str) -> Money {
        Money::new(s.parse::<Decimal>().unwrap())
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup("USD").symbol, "$");
        assert_eq!(lookup("EUR").symbol, "€");
        assert_eq!(lookup("eur").symbol, "€"); // case-insensitive
        assert_eq!(lookup(" GBP ").symbol, "£");
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        let descriptor = lookup("ZZZ");
        assert_eq!(descriptor.symbol, "$");
    }

    #[test]
    fn test_format_symbol_style() {
        assert_eq!(format(money("42"), "USD"), "$42.00");
        assert_eq!(format(money("12.345"), "EUR"), "€12.34"); // banker's at display
        assert_eq!(format(money("0"), "GBP"), "£0.00");
    }

    #[test]
    fn test_format_unknown_code_never_panics() {
        assert_eq!(format(money("42"), "ZZZ"), "$42.00");
    }

    #[test]
    fn test_format_negative_puts_minus_before_symbol() {
        assert_eq!(format(money("-12.34"), "USD"), "-$12.34");
        assert_eq!(format_code_style(money("-12.34"), "USD"), "-USD 12.34");
    }

    #[test]
    fn test_format_code_style() {
        assert_eq!(format_code_style(money("42"), "USD"), "USD 42.00");
        assert_eq!(format_code_style(money("7.5"), "EUR"), "EUR 7.50");
        // unknown code falls back to the default descriptor's code
        assert_eq!(format_code_style(money("1"), "???"), "USD 1.00");
    }

    #[test]
    fn test_huge_values_format() {
        assert_eq!(format(money("99999999999.999"), "USD"), "$100000000000.00");
    }
}
