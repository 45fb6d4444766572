//! Error types for amount parsing and arithmetic.

/// Errors that can occur when converting human-readable amounts into
/// on-chain integer units.
///
/// # Examples
///
/// ```rust
/// use swayland::{Amount, AmountError, TokenDecimals};
///
/// let err = Amount::parse("12.3.4", TokenDecimals::new(6)).unwrap_err();
/// assert!(matches!(err, AmountError::InvalidNumberFormat { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The input is not a non-negative decimal number that fits the
    /// requested precision.
    #[error("Invalid number format {input:?}: {reason}")]
    InvalidNumberFormat {
        /// The rejected input
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// The value does not fit in 256 bits.
    #[error("Amount overflow: {details}")]
    Overflow {
        /// Details about the overflowing operation
        details: String,
    },
}

impl AmountError {
    /// Create an `InvalidNumberFormat` error.
    pub fn invalid_number_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AmountError::InvalidNumberFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(details: impl Into<String>) -> Self {
        AmountError::Overflow {
            details: details.into(),
        }
    }
}
