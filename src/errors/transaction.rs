// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for gas estimation and transaction submission.

use super::NetworkError;
use crate::types::gas::{GasAmount, GasLimitMultiplier};

/// Errors that can occur while estimating and submitting a transaction.
///
/// `EstimationFailed` and `GasLimitOverflow` are raised before anything is
/// submitted, so no fee has been spent. `SubmissionFailed` carries the
/// transaction id whenever the network assigned one.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Gas estimation (a dry-run simulation) failed.
    #[error("Gas estimation failed for {function}")]
    EstimationFailed {
        /// Contract function being estimated
        function: &'static str,
        /// Network failure during simulation
        #[source]
        source: NetworkError,
    },

    /// `estimated gas * multiplier` does not fit a 64-bit gas limit.
    #[error("Gas limit overflow: {gas_used} x {multiplier} exceeds u64")]
    GasLimitOverflow {
        /// Estimated gas
        gas_used: GasAmount,
        /// Configured multiplier
        multiplier: GasLimitMultiplier,
    },

    /// Submission or execution failed after estimation succeeded.
    #[error(
        "Submission of {function} failed (transaction id: {})",
        .transaction_id.as_deref().unwrap_or("unassigned")
    )]
    SubmissionFailed {
        /// Contract function being submitted
        function: &'static str,
        /// Transaction id assigned by the network, if any
        transaction_id: Option<String>,
        /// Network failure
        #[source]
        source: NetworkError,
    },
}

impl TransactionError {
    /// Create an `EstimationFailed` error.
    pub fn estimation_failed(function: &'static str, source: NetworkError) -> Self {
        TransactionError::EstimationFailed { function, source }
    }

    /// Create a `SubmissionFailed` error.
    ///
    /// When `transaction_id` is `None`, the id reported inside `source` (if
    /// any) is used instead.
    pub fn submission_failed(
        function: &'static str,
        transaction_id: Option<String>,
        source: NetworkError,
    ) -> Self {
        let transaction_id =
            transaction_id.or_else(|| source.transaction_id().map(str::to_string));
        TransactionError::SubmissionFailed {
            function,
            transaction_id,
            source,
        }
    }

    /// Transaction id for diagnosis, if the network assigned one.
    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            TransactionError::SubmissionFailed { transaction_id, .. } => transaction_id.as_deref(),
            TransactionError::EstimationFailed { .. } | TransactionError::GasLimitOverflow { .. } => {
                None
            }
        }
    }
}
