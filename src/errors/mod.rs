// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the swayland SDK.
//!
//! Every stage of the transaction pipeline has its own error type so callers
//! can react to the exact failure:
//!
//! - [`AmountError`] - parsing human amounts and multipliers
//! - [`ConfigError`] - invalid configuration values
//! - [`OptionsError`] - a write was attempted without a signer
//! - [`BuildError`] - deterministic call-encoding failures
//! - [`OracleError`] - fetching or costing oracle price updates
//! - [`TransactionError`] - gas estimation and submission
//! - [`QueryError`] - read-only queries
//!
//! [`NetworkError`] is the error returned by implementations of the execution
//! network boundary; the pipeline wraps it in the error of the stage that hit it.
//!
//! Errors raised before any network I/O (`AmountError`, `ConfigError`,
//! `OptionsError`, `BuildError`, `OracleError::EmptyFeedSet`) are
//! deterministic: retrying them without changing the input is pointless.
//!
//! # Example
//!
//! ```rust,ignore
//! use swayland::{SwayLandError, OptionsError, TransactionError};
//!
//! match sdk.supply_base(&usdc, &amount).await {
//!     Ok(result) => println!("submitted {}", result.transaction_id),
//!     Err(SwayLandError::Options(OptionsError::MissingCredential { .. })) => {
//!         eprintln!("connect a wallet first");
//!     }
//!     Err(SwayLandError::Transaction(TransactionError::SubmissionFailed {
//!         transaction_id, ..
//!     })) => {
//!         eprintln!("submission failed, transaction id: {transaction_id:?}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

mod amount;
mod build;
mod config;
mod network;
mod options;
mod oracle;
mod query;
mod transaction;

pub use amount::AmountError;
pub use build::BuildError;
pub use config::ConfigError;
pub use network::NetworkError;
pub use options::OptionsError;
pub use oracle::{OracleError, PriceServiceError};
pub use query::QueryError;
pub use transaction::TransactionError;

/// Unified error type for all swayland operations.
///
/// All module-specific error types convert into `SwayLandError` via `From`,
/// so `?` works across pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum SwayLandError {
    /// Error parsing an amount.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error in the SDK configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error resolving call options (missing signer).
    #[error("Options error: {0}")]
    Options(#[from] OptionsError),

    /// Error encoding a contract call.
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Error fetching or costing oracle price updates.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Error estimating or submitting a transaction.
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    /// Error running a read-only query.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Error returned directly by the execution network.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}
