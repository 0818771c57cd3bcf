//! # Coin Inventory Module
//!
//! The coin float: how many coins of each denomination the machine holds
//! for making change.
//!
//! ## Invariants
//! - Stored counts are always positive; a denomination with zero coins is
//!   simply absent and reads back as zero
//! - The canonical float owned by the calculator is never mutated by a
//!   change calculation; calculations clone it and spend the clone

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::money::Money;

// =============================================================================
// Coin Inventory
// =============================================================================

/// A count of coins per denomination.
///
/// Keyed by [`Coin`], whose ordering is largest-value first, so iteration
/// always runs in greedy descent order.
///
/// ## Example
/// ```rust
/// use vendo_core::{Coin, CoinInventory};
///
/// let float: CoinInventory = [(Coin::OnePound, 1), (Coin::FiftyPence, 2)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(float.count(Coin::FiftyPence), 2);
/// assert_eq!(float.count(Coin::OnePenny), 0); // absent reads as zero
/// assert_eq!(float.total_value().pence(), 200);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinInventory {
    counts: BTreeMap<Coin, u32>,
}

impl CoinInventory {
    /// Creates an empty inventory (no coins of any denomination).
    pub fn new() -> Self {
        CoinInventory::default()
    }

    /// Returns the number of coins held for a denomination.
    ///
    /// Absent denominations read as zero.
    #[inline]
    pub fn count(&self, coin: Coin) -> u32 {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    /// Sets the count for a denomination, replacing any previous count.
    ///
    /// Setting zero removes the entry, keeping the positive-counts
    /// invariant.
    pub fn set_count(&mut self, coin: Coin, count: u32) {
        if count == 0 {
            self.counts.remove(&coin);
        } else {
            self.counts.insert(coin, count);
        }
    }

    /// Adds coins of a denomination to the float.
    pub fn add(&mut self, coin: Coin, count: u32) {
        if count > 0 {
            *self.counts.entry(coin).or_insert(0) += count;
        }
    }

    /// Removes one coin of a denomination, if one is held.
    ///
    /// Returns `false` (and changes nothing) when none are held. Only the
    /// calculator's working copy is ever spent from.
    pub(crate) fn take_one(&mut self, coin: Coin) -> bool {
        match self.counts.get_mut(&coin) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&coin);
                true
            }
            None => false,
        }
    }

    /// Total monetary value of every coin held.
    pub fn total_value(&self) -> Money {
        self.counts
            .iter()
            .fold(Money::zero(), |sum, (coin, &count)| {
                sum + coin.value() * count
            })
    }

    /// True when the float holds no coins at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over held denominations and counts, largest value first.
    pub fn iter(&self) -> impl Iterator<Item = (Coin, u32)> + '_ {
        self.counts.iter().map(|(&coin, &count)| (coin, count))
    }
}

/// Collects `(Coin, count)` pairs, summing duplicates and skipping zeros.
impl FromIterator<(Coin, u32)> for CoinInventory {
    fn from_iter<I: IntoIterator<Item = (Coin, u32)>>(pairs: I) -> Self {
        let mut inventory = CoinInventory::new();
        for (coin, count) in pairs {
            inventory.add(coin, count);
        }
        inventory
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_float() -> CoinInventory {
        [
            (Coin::OnePound, 1),
            (Coin::FiftyPence, 2),
            (Coin::TwentyPence, 2),
            (Coin::TenPence, 2),
            (Coin::FivePence, 1),
            (Coin::TwoPence, 1),
            (Coin::OnePenny, 2),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_absent_denomination_reads_zero() {
        let empty = CoinInventory::new();
        assert_eq!(empty.count(Coin::OnePound), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_set_count_zero_removes_entry() {
        let mut float = sample_float();
        float.set_count(Coin::OnePound, 0);
        assert_eq!(float.count(Coin::OnePound), 0);
        assert!(float.iter().all(|(_, count)| count > 0));
    }

    #[test]
    fn test_add_accumulates() {
        let mut float = CoinInventory::new();
        float.add(Coin::TenPence, 2);
        float.add(Coin::TenPence, 3);
        float.add(Coin::FivePence, 0);
        assert_eq!(float.count(Coin::TenPence), 5);
        assert_eq!(float.count(Coin::FivePence), 0);
    }

    #[test]
    fn test_take_one() {
        let mut float = sample_float();
        assert!(float.take_one(Coin::FivePence));
        assert!(!float.take_one(Coin::FivePence));
        assert_eq!(float.count(Coin::FivePence), 0);
    }

    #[test]
    fn test_total_value() {
        // 100 + 2×50 + 2×20 + 2×10 + 5 + 2 + 2×1 = 269p
        assert_eq!(sample_float().total_value().pence(), 269);
        assert_eq!(CoinInventory::new().total_value(), Money::zero());
    }

    #[test]
    fn test_iter_descends_by_value() {
        let float = sample_float();
        let coins: Vec<Coin> = float.iter().map(|(coin, _)| coin).collect();
        assert_eq!(coins[0], Coin::OnePound);
        assert_eq!(*coins.last().unwrap(), Coin::OnePenny);
    }

    #[test]
    fn test_duplicate_pairs_are_summed() {
        let float: CoinInventory = [(Coin::OnePenny, 1), (Coin::OnePenny, 2)]
            .into_iter()
            .collect();
        assert_eq!(float.count(Coin::OnePenny), 3);
    }

    #[test]
    fn test_serde_shape() {
        let float: CoinInventory = [(Coin::OnePound, 1), (Coin::OnePenny, 2)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&float).unwrap();
        assert_eq!(json, r#"{"one_pound":1,"one_penny":2}"#);
    }
}
