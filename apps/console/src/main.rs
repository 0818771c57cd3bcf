//! # Vendo Console Driver
//!
//! Demonstration driver for the change calculator.
//!
//! ## What It Does
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Console Driver Flow                               │
//! │                                                                         │
//! │  1. Initialize logging (tracing-subscriber, RUST_LOG overridable)       │
//! │  2. Load the coin float: £1×1, 50p×2, 20p×2, 10p×2, 5p×1, 2p×1, 1p×2    │
//! │  3. Run three purchases through ChangeCalculator                        │
//! │  4. Print one line per purchase with the change given                   │
//! │                                                                         │
//! │  The calculator never spends the float, so all three purchases see      │
//! │  the full initial load.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use vendo_core::{Change, ChangeCalculator, Coin, CoinInventory, Money};

fn main() {
    init_tracing();

    info!("Starting Vendo console driver");

    // Set up the initial load of coins to use for change
    let float: CoinInventory = [
        (Coin::OnePound, 1),
        (Coin::FiftyPence, 2),
        (Coin::TwentyPence, 2),
        (Coin::TenPence, 2),
        (Coin::FivePence, 1),
        (Coin::TwoPence, 1),
        (Coin::OnePenny, 2),
    ]
    .into_iter()
    .collect();
    info!(float_value = %float.total_value(), "Coin float loaded");

    let machine = ChangeCalculator::new(float);

    // Buy a can of drink for 75p
    run_purchase(&machine, "a drink", Money::from_pence(75), Money::from_pence(100));

    // Buy another can of drink for £1.22
    run_purchase(&machine, "another drink", Money::from_pence(122), Money::from_pence(135));

    // Buy a cornish pasty for £2.39
    run_purchase(&machine, "a pasty", Money::from_pence(239), Money::from_pence(300));
}

/// Runs one purchase through the calculator and prints the result.
fn run_purchase(machine: &ChangeCalculator, item: &str, cost: Money, tendered: Money) {
    let change = machine.calculate_change(cost, tendered);
    debug!(%cost, %tendered, change = %change.total(), coins = change.coin_count(), "Purchase calculated");

    println!(
        "I've bought {} for {} and got {} in change from my {}. [{}]",
        item,
        cost,
        change.total(),
        tendered,
        describe_coins(&change),
    );
}

/// Formats the coin breakdown, largest denomination first.
fn describe_coins(change: &Change) -> String {
    if change.is_empty() {
        return "no coins".to_string();
    }

    change
        .iter()
        .map(|(coin, count)| format!("{coin} ×{count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
