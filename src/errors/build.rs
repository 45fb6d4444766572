//! Error types for contract call construction.
//!
//! Build errors are deterministic: they are raised while encoding a call,
//! before anything is sent to the network.

use alloy_primitives::U256;

use crate::types::decimals::TokenDecimals;

/// Errors that can occur while building a contract call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// An address or id string could not be decoded as 32 bytes.
    #[error("Invalid {field} {input:?}: {reason}")]
    InvalidAddress {
        /// Which argument was being decoded (e.g. "account address")
        field: &'static str,
        /// The rejected input
        input: String,
        /// Why decoding failed
        reason: String,
    },

    /// An amount does not fit the 64-bit width the contract expects.
    #[error("Amount {amount} exceeds the maximum encodable value {max}")]
    AmountOutOfRange {
        /// The amount in integer units
        amount: U256,
        /// Largest encodable value
        max: u64,
    },

    /// The amount was parsed with a precision other than the asset's.
    #[error("Amount has {actual} but asset {symbol} uses {expected}")]
    DecimalsMismatch {
        /// Symbol of the asset being transferred
        symbol: String,
        /// Decimals of the asset
        expected: TokenDecimals,
        /// Decimals the amount was parsed with
        actual: TokenDecimals,
    },
}

impl BuildError {
    /// Create an `InvalidAddress` error.
    pub fn invalid_address(
        field: &'static str,
        input: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        BuildError::InvalidAddress {
            field,
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an `AmountOutOfRange` error for a value wider than `u64`.
    pub fn amount_out_of_range(amount: U256) -> Self {
        BuildError::AmountOutOfRange {
            amount,
            max: u64::MAX,
        }
    }
}
