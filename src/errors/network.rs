// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Errors returned across the execution network boundary.

use std::time::Duration;

/// Errors reported by an [`crate::ExecutionNetwork`] implementation.
///
/// Implementations should attach the transaction id whenever the network has
/// already assigned one, so callers can look the transaction up later.
///
/// # Examples
///
/// ```rust
/// use swayland::NetworkError;
///
/// let error = NetworkError::reverted("NotCollateralized", Some("0xabc".to_string()));
/// assert_eq!(error.transaction_id(), Some("0xabc"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The call reverted during simulation or execution.
    #[error("Call reverted: {reason}")]
    Reverted {
        /// Revert reason reported by the network
        reason: String,
        /// Transaction id, when the revert happened after submission
        transaction_id: Option<String>,
    },

    /// The signer cannot pay for the transaction.
    #[error("Insufficient funds: {details}")]
    InsufficientFunds {
        /// Details reported by the network
        details: String,
    },

    /// A network round trip did not finish in time.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        /// The round trip that timed out
        operation: String,
        /// The elapsed budget
        timeout: Duration,
        /// Transaction id, when the timeout happened after submission
        transaction_id: Option<String>,
    },

    /// Transport-level failure (connection refused, malformed response, ...).
    #[error("Network transport failure during {operation}")]
    Transport {
        /// The round trip that failed
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl NetworkError {
    /// Create a `Reverted` error.
    pub fn reverted(reason: impl Into<String>, transaction_id: Option<String>) -> Self {
        NetworkError::Reverted {
            reason: reason.into(),
            transaction_id,
        }
    }

    /// Create an `InsufficientFunds` error.
    pub fn insufficient_funds(details: impl Into<String>) -> Self {
        NetworkError::InsufficientFunds {
            details: details.into(),
        }
    }

    /// Create a `Timeout` error.
    pub fn timeout(
        operation: impl Into<String>,
        timeout: Duration,
        transaction_id: Option<String>,
    ) -> Self {
        NetworkError::Timeout {
            operation: operation.into(),
            timeout,
            transaction_id,
        }
    }

    /// Create a `Transport` error from any error type.
    pub fn transport(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        NetworkError::Transport {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Transaction id assigned by the network, if the failure happened after
    /// the network accepted the transaction.
    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            NetworkError::Reverted { transaction_id, .. }
            | NetworkError::Timeout { transaction_id, .. } => transaction_id.as_deref(),
            NetworkError::InsufficientFunds { .. } | NetworkError::Transport { .. } => None,
        }
    }
}
