//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A change calculator that is a penny off is worse than no change        │
//! │  calculator at all.                                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    £1.35 - £1.22 = 135 - 122 = 13 pence, exactly                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::money::Money;
//!
//! // Create from pence (preferred)
//! let cost = Money::from_pence(75); // 75p
//!
//! // Arithmetic operations
//! let due = Money::from_pence(100) - cost; // 25p
//! assert_eq!(due.pence(), 25);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(0.75); // NO SUCH METHOD EXISTS!
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoneyError;

/// Number of pence in one pound.
pub const PENCE_PER_POUND: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: the difference `tendered - cost` may be negative,
///   and the calculator treats that as "no change due" rather than an error
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized transparently as pence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let cost = Money::from_pence(122); // £1.22
    /// assert_eq!(cost.pence(), 122);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from pounds and pence.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let tendered = Money::from_pounds_pence(1, 35); // £1.35
    /// assert_eq!(tendered.pence(), 135);
    ///
    /// let refund = Money::from_pounds_pence(-2, 50); // -£2.50
    /// assert_eq!(refund.pence(), -250);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the pounds part should be negative.
    /// `from_pounds_pence(-2, 50)` = -£2.50, not -£1.50
    #[inline]
    pub const fn from_pounds_pence(pounds: i64, pence: i64) -> Self {
        if pounds < 0 {
            Money(pounds * PENCE_PER_POUND - pence)
        } else {
            Money(pounds * PENCE_PER_POUND + pence)
        }
    }

    /// Returns the value in pence (smallest currency unit).
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole-pounds portion.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(239).pounds(), 2);
    /// assert_eq!(Money::from_pence(-250).pounds(), -2);
    /// ```
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / PENCE_PER_POUND
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % PENCE_PER_POUND).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal amount string into `Money`, exactly.
///
/// The external contract of the change calculator speaks "two decimal
/// amounts", so the crate owns the string-to-pence conversion rather than
/// leaving callers to round floats.
///
/// ## Accepted Forms
/// - `"1.35"`, `"0.75"`, `"3"` (whole pounds), `"1.5"` (= £1.50)
/// - An optional leading `£` and an optional leading `-`
///
/// ## Rejected Forms
/// - `""` / whitespace → [`ParseMoneyError::Empty`]
/// - `"1.234"` (sub-penny precision) → [`ParseMoneyError::PrecisionTooFine`]
/// - anything else non-numeric → [`ParseMoneyError::InvalidFormat`]
///
/// ## Example
/// ```rust
/// use vendo_core::money::Money;
///
/// let tendered: Money = "1.35".parse().unwrap();
/// assert_eq!(tendered.pence(), 135);
///
/// assert_eq!("£0.75".parse::<Money>().unwrap().pence(), 75);
/// assert!("1.999".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('£').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            // "1." and "." carry no pence digits; ".50" is fine
            Some((_, "")) => return Err(ParseMoneyError::invalid_format(input)),
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::invalid_format(input));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError::invalid_format(input));
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError::invalid_format(input));
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::precision_too_fine(input));
        }

        let pounds: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| ParseMoneyError::invalid_format(input))?
        };

        // "1.5" means £1.50, not £1.05
        let pence: i64 = if fraction.is_empty() {
            0
        } else {
            let digits: i64 = fraction
                .parse()
                .map_err(|_| ParseMoneyError::invalid_format(input))?;
            if fraction.len() == 1 {
                digits * 10
            } else {
                digits
            }
        };

        let total = pounds
            .checked_mul(PENCE_PER_POUND)
            .and_then(|p| p.checked_add(pence))
            .ok_or_else(|| ParseMoneyError::invalid_format(input))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a coin count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(135);
        assert_eq!(money.pence(), 135);
        assert_eq!(money.pounds(), 1);
        assert_eq!(money.pence_part(), 35);
    }

    #[test]
    fn test_from_pounds_pence() {
        let money = Money::from_pounds_pence(1, 22);
        assert_eq!(money.pence(), 122);

        let negative = Money::from_pounds_pence(-2, 50);
        assert_eq!(negative.pence(), -250);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(135)), "£1.35");
        assert_eq!(format!("{}", Money::from_pence(75)), "£0.75");
        assert_eq!(format!("{}", Money::from_pence(-250)), "-£2.50");
        assert_eq!(format!("{}", Money::from_pence(0)), "£0.00");
        assert_eq!(format!("{}", Money::from_pence(300)), "£3.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(100);
        let b = Money::from_pence(75);

        assert_eq!((a - b).pence(), 25);
        assert_eq!((a + b).pence(), 175);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running.pence(), 25);

        let five_twenties: Money = Money::from_pence(20) * 5u32;
        assert_eq!(five_twenties.pence(), 100);

        let three_fifties: Money = Money::from_pence(50) * 3i64;
        assert_eq!(three_fifties.pence(), 150);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_pence(13);
        assert!(positive.is_positive());

        let negative = Money::from_pence(-13);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!("1.35".parse::<Money>().unwrap().pence(), 135);
        assert_eq!("0.75".parse::<Money>().unwrap().pence(), 75);
        assert_eq!("3".parse::<Money>().unwrap().pence(), 300);
        assert_eq!("1.5".parse::<Money>().unwrap().pence(), 150);
        assert_eq!(".50".parse::<Money>().unwrap().pence(), 50);
        assert_eq!("£2.39".parse::<Money>().unwrap().pence(), 239);
        assert_eq!("-0.01".parse::<Money>().unwrap().pence(), -1);
        assert_eq!(" 1.00 ".parse::<Money>().unwrap().pence(), 100);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!("£".parse::<Money>(), Err(ParseMoneyError::Empty));
    }

    #[test]
    fn test_parse_rejects_sub_penny_precision() {
        assert!(matches!(
            "1.234".parse::<Money>(),
            Err(ParseMoneyError::PrecisionTooFine { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["abc", "1.2.3", "1,35", ".", "1.", "--1", "1.x"] {
            assert!(
                matches!(
                    input.parse::<Money>(),
                    Err(ParseMoneyError::InvalidFormat { .. })
                ),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_pence(135)).unwrap();
        assert_eq!(json, "135");

        let parsed: Money = serde_json::from_str("135").unwrap();
        assert_eq!(parsed, Money::from_pence(135));
    }
}
