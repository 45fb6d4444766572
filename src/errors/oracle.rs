// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the price oracle bridge.

use super::{BuildError, NetworkError};

/// Errors reported by a [`crate::oracle::PriceService`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum PriceServiceError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Request to {url} failed")]
    Http {
        /// Request URL
        url: String,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Oracle service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnosis
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to parse oracle response: {0}")]
    ParseResponse(String),

    /// The service did not answer within the configured timeout.
    #[error("Oracle service request timed out")]
    Timeout,
}

/// Errors that can occur while assembling a price update package.
///
/// No variant is ever replaced by a default value: a failed fetch or fee
/// query always reaches the caller.
///
/// # Examples
///
/// ```rust,ignore
/// use swayland::OracleError;
///
/// match sdk.price_update_package(feed_ids).await {
///     Ok(package) => println!("fee: {}", package.update_fee),
///     Err(OracleError::PriceFetchFailed { source, .. }) => eprintln!("oracle down: {source}"),
///     Err(e) => eprintln!("other: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// No feed ids were supplied.
    #[error("At least one price feed id is required")]
    EmptyFeedSet,

    /// The oracle service could not deliver signed updates.
    #[error("Failed to fetch signed price updates for {feed_count} feed(s)")]
    PriceFetchFailed {
        /// Number of feeds requested
        feed_count: usize,
        /// The service failure
        #[source]
        source: PriceServiceError,
    },

    /// The on-chain oracle contract rejected the fee query.
    #[error("Oracle update fee query failed: {details}")]
    FeeQueryFailed {
        /// Details about the failure
        details: String,
        /// Network failure, when the query reached the network
        #[source]
        source: Option<NetworkError>,
    },

    /// The fee query call could not be encoded.
    #[error("Failed to build fee query: {0}")]
    Build(#[from] BuildError),
}

impl OracleError {
    /// Create a `PriceFetchFailed` error.
    pub fn price_fetch_failed(feed_count: usize, source: PriceServiceError) -> Self {
        OracleError::PriceFetchFailed { feed_count, source }
    }

    /// Create a `FeeQueryFailed` error caused by a network failure.
    pub fn fee_query_failed(source: NetworkError) -> Self {
        OracleError::FeeQueryFailed {
            details: "network rejected the update_fee call".to_string(),
            source: Some(source),
        }
    }

    /// Create a `FeeQueryFailed` error for an undecodable fee value.
    pub fn unexpected_fee(details: impl Into<String>) -> Self {
        OracleError::FeeQueryFailed {
            details: details.into(),
            source: None,
        }
    }
}
