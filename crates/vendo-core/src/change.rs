//! # Change Calculation Module
//!
//! The heart of vendo-core: given an item cost and the amount tendered,
//! pick the coins to hand back.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Change Calculation Flow                             │
//! │                                                                         │
//! │  (item cost, amount tendered)                                           │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  due = tendered - cost ──► due <= 0 ──► empty Change (not an error)     │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  clone the canonical float ──► working copy                             │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  greedy descent £1 → 50p → 20p → 10p → 5p → 2p → 1p                     │
//! │    take a coin while: remaining ≥ value AND working copy has one        │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  Change (partial if the float ran dry — returned silently)              │
//! │                                                                         │
//! │  The canonical float is NEVER touched: cancelling the purchase          │
//! │  afterwards costs nothing.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::inventory::CoinInventory;
use crate::money::Money;

// =============================================================================
// Change
// =============================================================================

/// The coins selected to hand back for one purchase.
///
/// ## Invariants
/// - Stored counts are always positive; a denomination not part of the
///   change is absent
/// - `total() <= due` always, with equality whenever the float could cover
///   the full amount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Change {
    coins: BTreeMap<Coin, u32>,
}

impl Change {
    fn new() -> Self {
        Change::default()
    }

    fn push(&mut self, coin: Coin) {
        *self.coins.entry(coin).or_insert(0) += 1;
    }

    /// Returns how many coins of a denomination are in the change.
    ///
    /// Denominations not part of the change read as zero.
    #[inline]
    pub fn count(&self, coin: Coin) -> u32 {
        self.coins.get(&coin).copied().unwrap_or(0)
    }

    /// Total monetary value of the change: `Σ value(c) × count(c)`.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::{ChangeCalculator, Coin, CoinInventory, Money};
    ///
    /// let float: CoinInventory = [(Coin::TwentyPence, 2)].into_iter().collect();
    /// let machine = ChangeCalculator::new(float);
    ///
    /// let change = machine.calculate_change(Money::from_pence(60), Money::from_pence(100));
    /// assert_eq!(change.total().pence(), 40);
    /// ```
    pub fn total(&self) -> Money {
        self.coins
            .iter()
            .fold(Money::zero(), |sum, (coin, &count)| {
                sum + coin.value() * count
            })
    }

    /// Number of physical coins in the change.
    pub fn coin_count(&self) -> u32 {
        self.coins.values().sum()
    }

    /// True when no coins are returned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Iterates over the change, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        self.coins.iter().map(|(&coin, &count)| (coin, count))
    }
}

// =============================================================================
// Change Calculator
// =============================================================================

/// Calculates the coins to return as change for a purchase.
///
/// Owns the canonical coin float, set at construction and read-only
/// afterwards. Every calculation spends a private clone, so the canonical
/// float never changes — dispensing (and the inventory decrement that goes
/// with it) is a separate concern this type deliberately does not have.
///
/// ## Preconditions (documented, not validated)
/// Amounts are non-negative and at penny precision. Malformed input is a
/// caller contract violation, not a signalled error; `tendered < cost`
/// simply yields empty change.
///
/// ## Minimality
/// The greedy descent returns the minimum number of coins **because the
/// denomination set {100, 50, 20, 10, 5, 2, 1} is canonical**. The same
/// strategy is not optimal for arbitrary sets; do not lift the algorithm
/// out of this closed-set context.
///
/// ## Example
/// ```rust
/// use vendo_core::{ChangeCalculator, Coin, CoinInventory, Money};
///
/// let float: CoinInventory = Coin::ALL.iter().map(|&c| (c, 2)).collect();
/// let machine = ChangeCalculator::new(float);
///
/// // Buy a 75p drink with £1
/// let change = machine.calculate_change(Money::from_pence(75), Money::from_pence(100));
/// assert_eq!(change.count(Coin::TwentyPence), 1);
/// assert_eq!(change.count(Coin::FivePence), 1);
/// assert_eq!(change.total().pence(), 25);
/// ```
#[derive(Debug, Clone)]
pub struct ChangeCalculator {
    float: CoinInventory,
}

impl ChangeCalculator {
    /// Creates a calculator over an initial coin float.
    ///
    /// Denominations absent from the float are treated as holding zero
    /// coins.
    pub fn new(float: CoinInventory) -> Self {
        ChangeCalculator { float }
    }

    /// The canonical coin float. Unchanged by any calculation.
    #[inline]
    pub fn float(&self) -> &CoinInventory {
        &self.float
    }

    /// Calculates the change for an item costing `item_cost` paid for with
    /// `amount_tendered`.
    ///
    /// ## Behavior
    /// - `tendered - cost <= 0`: empty change, no error
    /// - Otherwise: greedy descent, largest coin first, constrained by the
    ///   working copy of the float
    /// - Float cannot cover the full amount: returns the coins it could
    ///   allocate and stays silent about the shortfall. Callers that care
    ///   can compare [`Change::total`] against the amount due. If the float
    ///   is completely empty the result is simply empty.
    pub fn calculate_change(&self, item_cost: Money, amount_tendered: Money) -> Change {
        let mut change = Change::new();
        let mut remaining = amount_tendered - item_cost;

        if !remaining.is_positive() {
            return change;
        }

        let mut working = self.float.clone();
        for coin in Coin::ALL {
            while remaining >= coin.value() && working.take_one(coin) {
                change.push(coin);
                remaining -= coin.value();
            }
            if remaining.is_zero() {
                break;
            }
        }

        change
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
