//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All amounts are integer paise (hundredths of a rupee). A line subtotal is
//! `price × qty`, which stays exact in integer math, so the two-decimal
//! display never rounds away value. User-typed amounts come in through
//! [`Money::parse_lenient`], which maps anything non-numeric to zero instead
//! of erroring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Example
/// ```rust
/// use tillbook_core::money::Money;
///
/// let price = Money::from_cents(2000); // Rs. 20.00
/// let line = price.multiply_quantity(2);
/// assert_eq!(line.cents(), 4000);
/// assert_eq!(format!("{}", line), "Rs. 40.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, for line subtotals.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a user-typed amount, treating anything unusable as zero.
    ///
    /// Accepts unsigned decimal text ("20", "20.5", "20.50"). Digits past
    /// two decimal places are dropped. Empty, non-numeric, or negative input
    /// parses to `Money::zero()` - editor fields recover locally instead of
    /// raising errors.
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_core::money::Money;
    ///
    /// assert_eq!(Money::parse_lenient("15").cents(), 1500);
    /// assert_eq!(Money::parse_lenient("12.345").cents(), 1234);
    /// assert_eq!(Money::parse_lenient("abc").cents(), 0);
    /// assert_eq!(Money::parse_lenient("").cents(), 0);
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Money::zero();
        }

        let (whole, frac) = match input.split_once('.') {
            Some((w, f)) => (w, f),
            None => (input, ""),
        };

        let all_digits =
            |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

        // Require digits on at least one side of the point; reject signs and
        // any other stray characters outright.
        let whole_ok = whole.is_empty() || all_digits(whole);
        let frac_ok = frac.is_empty() || all_digits(frac);
        if !whole_ok || !frac_ok || (whole.is_empty() && frac.is_empty()) {
            return Money::zero();
        }

        let rupees: i64 = if whole.is_empty() {
            0
        } else {
            match whole.parse() {
                Ok(v) => v,
                Err(_) => return Money::zero(), // overflow
            }
        };

        let frac = if frac.len() > 2 { &frac[..2] } else { frac };
        let paise: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        match rupees.checked_mul(100).and_then(|r| r.checked_add(paise)) {
            Some(cents) => Money(cents),
            None => Money::zero(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the receipt format: `Rs. 55.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rs. {}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(5500);
        assert_eq!(money.cents(), 5500);
        assert_eq!(money.rupees(), 55);
        assert_eq!(money.paise_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(5500)), "Rs. 55.00");
        assert_eq!(format!("{}", Money::from_cents(1999)), "Rs. 19.99");
        assert_eq!(format!("{}", Money::from_cents(5)), "Rs. 0.05");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-Rs. 5.50");
        assert_eq!(format!("{}", Money::zero()), "Rs. 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2000);
        let b = Money::from_cents(1500);

        assert_eq!((a + b).cents(), 3500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 3500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2000);
        assert_eq!(unit_price.multiply_quantity(2).cents(), 4000);
        assert_eq!(unit_price.multiply_quantity(0).cents(), 0);
    }

    #[test]
    fn test_parse_lenient_valid() {
        assert_eq!(Money::parse_lenient("20").cents(), 2000);
        assert_eq!(Money::parse_lenient("20.5").cents(), 2050);
        assert_eq!(Money::parse_lenient("20.50").cents(), 2050);
        assert_eq!(Money::parse_lenient(" 15 ").cents(), 1500);
        assert_eq!(Money::parse_lenient(".5").cents(), 50);
        assert_eq!(Money::parse_lenient("0").cents(), 0);
    }

    #[test]
    fn test_parse_lenient_truncates_past_two_decimals() {
        assert_eq!(Money::parse_lenient("12.345").cents(), 1234);
        assert_eq!(Money::parse_lenient("12.999").cents(), 1299);
    }

    #[test]
    fn test_parse_lenient_garbage_is_zero() {
        assert_eq!(Money::parse_lenient("").cents(), 0);
        assert_eq!(Money::parse_lenient("   ").cents(), 0);
        assert_eq!(Money::parse_lenient("abc").cents(), 0);
        assert_eq!(Money::parse_lenient("12abc").cents(), 0);
        assert_eq!(Money::parse_lenient("-3").cents(), 0);
        assert_eq!(Money::parse_lenient("1.2.3").cents(), 0);
        assert_eq!(Money::parse_lenient(".").cents(), 0);
    }

    #[test]
    fn test_parse_lenient_overflow_is_zero() {
        assert_eq!(Money::parse_lenient("99999999999999999999").cents(), 0);
    }
}
