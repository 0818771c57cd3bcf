//! # Error Types
//!
//! Error types for vendo-core.
//!
//! The change calculator itself raises no errors: a purchase with nothing
//! owed returns an empty result, and a coin float that cannot cover the
//! full amount returns a partial result. Both are normal outcomes of the
//! business rules, not failures. The only fallible operation in this crate
//! is parsing a decimal amount string into [`Money`](crate::Money).
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failure to parse a decimal amount string into [`Money`](crate::Money).
///
/// ## When This Occurs
/// - A caller feeds a user-entered amount through [`str::parse`]
/// - The string is empty, non-numeric, or carries sub-penny digits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The input was empty (or only whitespace / a bare currency sign).
    #[error("amount is empty")]
    Empty,

    /// The input was not a plain decimal number.
    #[error("'{input}' is not a valid decimal amount")]
    InvalidFormat { input: String },

    /// The input had more decimal places than the minor currency unit.
    ///
    /// Amounts are exact pence; "1.234" cannot be represented without
    /// rounding, and this crate never rounds money.
    #[error("'{input}' is more precise than a penny")]
    PrecisionTooFine { input: String },
}

impl ParseMoneyError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        ParseMoneyError::InvalidFormat {
            input: input.to_string(),
        }
    }

    pub(crate) fn precision_too_fine(input: &str) -> Self {
        ParseMoneyError::PrecisionTooFine {
            input: input.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
