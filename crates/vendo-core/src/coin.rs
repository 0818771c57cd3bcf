//! # Coin Module
//!
//! The closed set of coin denominations the machine can hold and dispense.
//!
//! ## The Denomination Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Supported Denominations                             │
//! │                                                                         │
//! │   £1      50p      20p      10p      5p      2p      1p                 │
//! │   100  ►  50   ►   20   ►   10   ►   5   ►   2   ►   1   (pence)        │
//! │                                                                         │
//! │   Greedy change-making walks this set largest → smallest.               │
//! │   This is a canonical coin system: greedy descent is guaranteed to      │
//! │   produce the minimum coin count. That guarantee does NOT hold for      │
//! │   arbitrary denomination sets, so the set is closed.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The £2 coin could be added with limited changes to the calculator, but
//! widening the set is a contract change: the minimality guarantee would
//! have to be re-established for the new set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Coin
// =============================================================================

/// A coin denomination in general circulation.
///
/// Variants are declared from largest to smallest so that the derived `Ord`
/// follows greedy descent order: ordered collections keyed by `Coin` iterate
/// £1 first and 1p last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coin {
    /// £1 coin (100 pence).
    OnePound,
    /// 50p coin.
    FiftyPence,
    /// 20p coin.
    TwentyPence,
    /// 10p coin.
    TenPence,
    /// 5p coin.
    FivePence,
    /// 2p coin.
    TwoPence,
    /// 1p coin.
    OnePenny,
}

impl Coin {
    /// Every denomination, largest first — the order greedy descent visits.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coin::Coin;
    ///
    /// assert_eq!(Coin::ALL[0], Coin::OnePound);
    /// assert_eq!(Coin::ALL[6], Coin::OnePenny);
    /// ```
    pub const ALL: [Coin; 7] = [
        Coin::OnePound,
        Coin::FiftyPence,
        Coin::TwentyPence,
        Coin::TenPence,
        Coin::FivePence,
        Coin::TwoPence,
        Coin::OnePenny,
    ];

    /// Returns the face value of this coin.
    ///
    /// Fixing the value here keeps magic pence constants out of the
    /// change-making logic.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::coin::Coin;
    ///
    /// assert_eq!(Coin::FiftyPence.value().pence(), 50);
    /// assert_eq!(Coin::OnePenny.value().pence(), 1);
    /// ```
    #[inline]
    pub const fn value(&self) -> Money {
        match self {
            Coin::OnePound => Money::from_pence(100),
            Coin::FiftyPence => Money::from_pence(50),
            Coin::TwentyPence => Money::from_pence(20),
            Coin::TenPence => Money::from_pence(10),
            Coin::FivePence => Money::from_pence(5),
            Coin::TwoPence => Money::from_pence(2),
            Coin::OnePenny => Money::from_pence(1),
        }
    }
}

/// Display shows the name stamped on the coin, not its decimal value.
impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Coin::OnePound => "£1",
            Coin::FiftyPence => "50p",
            Coin::TwentyPence => "20p",
            Coin::TenPence => "10p",
            Coin::FivePence => "5p",
            Coin::TwoPence => "2p",
            Coin::OnePenny => "1p",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
