//! # vendo-core: Pure Business Logic for Vendo
//!
//! This crate is the **heart** of Vendo. It computes the optimal set of
//! coins to return as change for a purchase, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vendo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console (driver)                        │   │
//! │  │    seeds the coin float, runs purchases, prints the results     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vendo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   coin    │  │ inventory │  │  change   │  │   │
//! │  │   │   Money   │  │   Coin    │  │ CoinInv.  │  │ Calculator│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HARDWARE • NO PERSISTENCE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer pence arithmetic (no floating point!)
//! - [`coin`] - The closed denomination set
//! - [`inventory`] - The coin float (counts per denomination)
//! - [`change`] - The greedy change calculator and its result type
//! - [`error`] - The money parsing error
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input = same output
//! 2. **No I/O**: Hardware, database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in pence (i64) to avoid float errors
//! 4. **No Spending**: A calculation never decrements the canonical coin
//!    float; coins are only tentatively reserved in a per-call working copy,
//!    so a cancelled purchase costs nothing
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::{ChangeCalculator, Coin, CoinInventory, Money};
//!
//! // Load the float
//! let float: CoinInventory = [
//!     (Coin::OnePound, 1),
//!     (Coin::FiftyPence, 2),
//!     (Coin::TwentyPence, 2),
//!     (Coin::TenPence, 2),
//!     (Coin::FivePence, 1),
//!     (Coin::TwoPence, 1),
//!     (Coin::OnePenny, 2),
//! ]
//! .into_iter()
//! .collect();
//!
//! let machine = ChangeCalculator::new(float);
//!
//! // Buy a 75p drink with a £1 coin
//! let change = machine.calculate_change(Money::from_pence(75), Money::from_pence(100));
//! assert_eq!(change.total(), Money::from_pence(25)); // 20p + 5p
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod coin;
pub mod error;
pub mod inventory;
pub mod money;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`

pub use change::{Change, ChangeCalculator};
pub use coin::Coin;
pub use error::ParseMoneyError;
pub use inventory::CoinInventory;
pub use money::Money;
