//! Lossless decimal numeric type backed by rust_decimal.
//!
//! Provides canonical parsing from strings and the two display formats the
//! force-close modal needs: fixed-point percentages and precision-limited
//! quantities.

use rust_decimal::{Decimal as RustDecimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lossless decimal numeric type for quantities and percentages.
///
/// Backed by rust_decimal to avoid floating-point drift.
/// Serializes to a JSON string, matching how quote amounts travel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::str")] RustDecimal);

impl Decimal {
    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Format the Decimal as a canonical string (no exponent notation).
    pub fn to_canonical_string(&self) -> String {
        let normalized = self.0.normalize();
        format!("{}", normalized)
    }

    /// Format with exactly `dp` fractional digits, rounding half away from zero.
    ///
    /// `37.5` with `dp = 2` becomes `"37.50"`.
    pub fn to_fixed(&self, dp: u32) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(dp);
        rounded.to_string()
    }

    /// Format a quantity to at most `precision` fractional digits.
    ///
    /// Excess digits are truncated toward zero and trailing zeros dropped,
    /// so a displayed amount never exceeds the real one.
    pub fn format_amount(&self, precision: u32) -> String {
        let truncated = self
            .0
            .round_dp_with_strategy(precision, RoundingStrategy::ToZero);
        Decimal(truncated).to_canonical_string()
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    /// Returns the value 100.
    pub fn hundred() -> Self {
        Decimal(RustDecimal::ONE_HUNDRED)
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(&self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_add(rhs.0).map(Decimal)
    }

    pub fn checked_sub(&self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_sub(rhs.0).map(Decimal)
    }

    pub fn checked_mul(&self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_mul(rhs.0).map(Decimal)
    }

    /// Division that yields `None` for a zero divisor or on overflow.
    pub fn checked_div(&self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_div(rhs.0).map(Decimal)
    }

    /// `self / whole * 100`, zero when `whole` is zero, `None` on overflow.
    pub fn percent_of(&self, whole: Decimal) -> Option<Decimal> {
        if whole.is_zero() {
            return Some(Decimal::zero());
        }
        self.checked_div(whole)?.checked_mul(Decimal::hundred())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(RustDecimal::from(value))
    }
}
