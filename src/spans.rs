//! Tracing span helpers for swayland operations.
//!
//! Span creation is kept out of business logic: each instrumented operation
//! has a helper here, and the operation attaches the returned span to its
//! future with [`tracing::Instrument`].
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, value: u64) -> Result<T, E> {
//!     let span = spans::my_operation(value);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use tracing::{Level, Span};

use crate::call::ContractFunction;
use crate::network::Wallet;

/// Create span for a state-mutating market or token factory operation.
///
/// Parent: None (root span for this operation)
/// Children: price_update_package (price-dependent writes), estimate_and_send
#[inline]
pub(crate) fn write_operation(function: ContractFunction) -> Span {
    tracing::span!(
        Level::INFO,
        "swayland.write_operation",
        function = %function,
    )
}

/// Create span for fetching and costing a price update package.
///
/// Parent: write_operation span, or None when called directly
/// Children: oracle HTTP request, update_fee simulation
#[inline]
pub(crate) fn price_update_package(feed_count: usize) -> Span {
    tracing::debug_span!("swayland.price_update_package", feed_count = feed_count)
}

/// Create span for estimating, submitting and awaiting a call.
///
/// Parent: write_operation span
#[inline]
pub(crate) fn estimate_and_send(function: &'static str, wallet: &Wallet) -> Span {
    tracing::debug_span!(
        "swayland.estimate_and_send",
        function = function,
        wallet = %wallet.address(),
    )
}

/// Create span for a read-only query.
#[inline]
pub(crate) fn read_query(function: ContractFunction) -> Span {
    tracing::debug_span!("swayland.read_query", function = %function)
}
