//! # Money Module
//!
//! Provides the `Money` and `Rate` types used by every calculation in billforge.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Invoices multiply fractional quantities by unit prices:                │
//! │    2.5 hours × $33.33 — integer cents cannot even represent the qty    │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic through the whole totals pipeline.          │
//! │    Rounding to 2 decimal places happens ONLY at display time, never    │
//! │    between calculation steps, so rounding error cannot compound        │
//! │    across many line items.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Leniency
//! The calculator runs on every keystroke of a live form, so numeric inputs
//! are parsed leniently: unparsable text becomes zero, never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Lenient Parsing
// =============================================================================

/// Parses a decimal out of raw form text.
///
/// Trims whitespace and returns `Decimal::ZERO` for anything that does not
/// parse. A half-typed quantity ("1." while the user is still typing, or a
/// stray "abc") must never crash the live calculation.
///
/// ## Example
/// ```rust
/// use billforge_core::money::parse_decimal_lenient;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal_lenient("2.5"), Decimal::new(25, 1));
/// assert_eq!(parse_decimal_lenient("abc"), Decimal::ZERO);
/// assert_eq!(parse_decimal_lenient(""), Decimal::ZERO);
/// ```
pub fn parse_decimal_lenient(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount.
///
/// ## Design Decisions
/// - **Decimal (signed)**: amounts are non-negative by convention, but the
///   sign is kept so discounts can be displayed as `-$12.34`
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **No mid-calculation rounding**: [`Money::rounded`] exists for display
///   formatting only
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Wraps a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Parses money out of raw form text; unparsable text becomes zero.
    #[inline]
    pub fn parse_lenient(raw: &str) -> Self {
        Money(parse_decimal_lenient(raw))
    }

    /// Returns the underlying (unrounded) decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded to 2 decimal places (banker's rounding).
    ///
    /// Display formatting only. Calculations always run on [`Money::amount`].
    #[inline]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

/// Display shows the amount rounded to 2 decimals, without a currency symbol.
///
/// ## Note
/// This is for debugging and logs. Use [`crate::currency::format`] for
/// user-facing display so symbol and fallback rules apply.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a decimal quantity (line totals).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: Decimal) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A percentage rate (discount or tax), nominally in `[0, 100]`.
///
/// Negative rates are clamped to zero when applied; values above 100 are
/// accepted as-is (observed form behavior only checks numeric-ness).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Rate(#[ts(as = "String")] Decimal);

impl Rate {
    /// Creates a rate from a percentage value (`10` = 10%).
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        Rate(percent)
    }

    /// Parses a rate out of raw form text; unparsable text becomes 0%.
    #[inline]
    pub fn parse_lenient(raw: &str) -> Self {
        Rate(parse_decimal_lenient(raw))
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }

    /// Returns the percentage value (for display annotation, e.g. "Tax (15%)").
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Applies the rate to a base amount: `base * clamp(rate, ≥0) / 100`.
    pub fn apply(&self, base: Money) -> Money {
        let clamped = if self.0 < Decimal::ZERO {
            Decimal::ZERO
        } else {
            self.0
        };
        Money::new(base.amount() * clamped / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
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

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_decimal_lenient("12.34"), dec("12.34"));
        assert_eq!(parse_decimal_lenient("  7 "), dec("7"));
        assert_eq!(parse_decimal_lenient("abc"), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient(""), Decimal::ZERO);
        assert_eq!(parse_decimal_lenient("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        assert_eq!(Money::new(dec("10.5")).to_string(), "10.50");
        assert_eq!(Money::new(dec("10")).to_string(), "10.00");
        assert_eq!(Money::new(dec("1.005")).to_string(), "1.00"); // banker's
        assert_eq!(Money::new(dec("-5.5")).to_string(), "-5.50");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 in decimal, unlike f64
        let sum = Money::new(dec("0.1")) + Money::new(dec("0.2"));
        assert_eq!(sum.amount(), dec("0.3"));

        let line = Money::new(dec("33.33")) * dec("2.5");
        assert_eq!(line.amount(), dec("83.325"));
    }

    #[test]
    fn test_sum_over_items() {
        let total: Money = [dec("1.10"), dec("2.20"), dec("3.30")]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec("6.60"));
    }

    #[test]
    fn test_rate_apply() {
        let base = Money::new(dec("100"));
        assert_eq!(Rate::from_percent(dec("10")).apply(base).amount(), dec("10"));
        assert_eq!(Rate::from_percent(dec("8.25")).apply(base).amount(), dec("8.25"));
    }

    #[test]
    fn test_negative_rate_clamped() {
        let base = Money::new(dec("100"));
        let rate = Rate::from_percent(dec("-5"));
        assert_eq!(rate.apply(base), Money::zero());
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percent(dec("10")).to_string(), "10%");
        assert_eq!(Rate::from_percent(dec("8.25")).to_string(), "8.25%");
        assert_eq!(Rate::from_percent(dec("10.0")).to_string(), "10%");
    }
}
