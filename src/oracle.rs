// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Price oracle bridge
//!
//! Price-dependent operations need fresh signed price updates from an
//! external service (Pyth Hermes) plus the fee the on-chain oracle charges to
//! verify them. [`PriceOracle::price_update_package`] fetches both, in that
//! order, without retries: a retried fetch could return a newer price than
//! the one that was costed.
//!
//! # Example
//!
//! ```rust,ignore
//! use swayland::oracle::FeedId;
//!
//! let eth_usd: FeedId = "0xff61491a931112ddf1bd8147cd1b641375f79f5825126d665480874634fd0ace"
//!     .parse()?;
//! let package = sdk.price_update_package(eth_usd).await?;
//! println!("{} payload(s), fee {}", package.update_data.len(), package.update_fee);
//! ```

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{hex, Bytes, B256};
use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn, Instrument};
use url::Url;

use crate::call::Operation;
use crate::errors::{BuildError, ConfigError, OracleError, PriceServiceError};
use crate::network::{with_timeout, ExecutionNetwork};
use crate::options::CallOptions;
use crate::spans;
use crate::types::asset::parse_b256;

/// Identifier of a price series tracked by the oracle service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedId(B256);

impl FeedId {
    pub const fn new(id: B256) -> Self {
        Self(id)
    }

    pub const fn as_b256(&self) -> B256 {
        self.0
    }
}

impl FromStr for FeedId {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_b256("price feed id", s).map(Self)
    }
}

impl std::fmt::Display for FeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One or many feed ids, in caller order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceFeedIds(Vec<FeedId>);

impl PriceFeedIds {
    pub fn into_vec(self) -> Vec<FeedId> {
        self.0
    }
}

impl From<FeedId> for PriceFeedIds {
    fn from(id: FeedId) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<FeedId>> for PriceFeedIds {
    fn from(ids: Vec<FeedId>) -> Self {
        Self(ids)
    }
}

impl From<&[FeedId]> for PriceFeedIds {
    fn from(ids: &[FeedId]) -> Self {
        Self(ids.to_vec())
    }
}

impl<const N: usize> From<[FeedId; N]> for PriceFeedIds {
    fn from(ids: [FeedId; N]) -> Self {
        Self(ids.to_vec())
    }
}

/// Signed price updates plus the fee owed to submit them
///
/// Built fresh for each price-dependent operation and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceUpdatePackage {
    /// Feeds the update covers, in request order
    pub feed_ids: Vec<FeedId>,
    /// Signed payloads as returned by the service
    pub update_data: Vec<Bytes>,
    /// Fee in base-asset units charged by the oracle contract
    pub update_fee: u64,
}

/// Source of signed price updates
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Fetch signed update payloads for `feed_ids`, preserving order
    async fn fetch_signed_updates(
        &self,
        feed_ids: &[FeedId],
    ) -> Result<Vec<Bytes>, PriceServiceError>;
}

#[derive(Debug, Deserialize)]
struct LatestUpdatesResponse {
    binary: BinaryUpdate,
}

#[derive(Debug, Deserialize)]
struct BinaryUpdate {
    encoding: String,
    data: Vec<String>,
}

/// HTTP client for the Pyth Hermes v2 API
///
/// Requests `GET {base}/v2/updates/price/latest?ids[]=..&encoding=hex&parsed=false`
/// and hex-decodes the `binary.data` payloads.
#[derive(Debug, Clone)]
pub struct HermesClient {
    http_client: Client,
    endpoint: Url,
}

impl HermesClient {
    /// Create a client for the service at `base_url`
    ///
    /// `timeout` bounds each request, including reading the body.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, ConfigError> {
        let mut endpoint = base_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|()| ConfigError::invalid_url("oracle", base_url.as_str(), "not a base URL"))?
            .pop_if_empty()
            .extend(["v2", "updates", "price", "latest"]);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        let user_agent = format!("swayland-{version}", version = env!("CARGO_PKG_VERSION"));
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&user_agent).map_err(|e| ConfigError::HttpClient {
                details: format!("invalid user agent: {e}"),
            })?,
        );

        let http_client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                details: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    fn request_url(&self, feed_ids: &[FeedId]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            for id in feed_ids {
                query.append_pair("ids[]", &hex::encode(id.as_b256()));
            }
            query.append_pair("encoding", "hex");
            query.append_pair("parsed", "false");
        }
        url
    }
}

#[async_trait]
impl PriceService for HermesClient {
    async fn fetch_signed_updates(
        &self,
        feed_ids: &[FeedId],
    ) -> Result<Vec<Bytes>, PriceServiceError> {
        let url = self.request_url(feed_ids);
        let to_error = |e: reqwest::Error| {
            if e.is_timeout() {
                PriceServiceError::Timeout
            } else {
                PriceServiceError::Http {
                    url: self.endpoint.to_string(),
                    source: e,
                }
            }
        };

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(to_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            warn!(status = status.as_u16(), body = %body, "Oracle service returned an error status");
            return Err(PriceServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: LatestUpdatesResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                PriceServiceError::ParseResponse(e.to_string())
            } else {
                to_error(e)
            }
        })?;

        if body.binary.encoding != "hex" {
            return Err(PriceServiceError::ParseResponse(format!(
                "unexpected encoding {:?}",
                body.binary.encoding
            )));
        }

        body.binary
            .data
            .iter()
            .map(|payload| {
                hex::decode(payload)
                    .map(Bytes::from)
                    .map_err(|e| PriceServiceError::ParseResponse(format!("invalid hex payload: {e}")))
            })
            .collect()
    }
}

/// Fetches price updates and costs them against the on-chain oracle
#[derive(Clone)]
pub struct PriceOracle {
    service: Arc<dyn PriceService>,
    network: Arc<dyn ExecutionNetwork>,
    network_timeout: Duration,
}

impl PriceOracle {
    pub fn new(
        service: Arc<dyn PriceService>,
        network: Arc<dyn ExecutionNetwork>,
        network_timeout: Duration,
    ) -> Self {
        Self {
            service,
            network,
            network_timeout,
        }
    }

    /// Fetch signed updates for `feed_ids` and the fee to submit them
    ///
    /// The fee query is simulated with the wallet in `options`.
    ///
    /// # Errors
    ///
    /// - [`OracleError::EmptyFeedSet`] before any I/O when no id is given
    /// - [`OracleError::PriceFetchFailed`] when the service fails or returns
    ///   nothing
    /// - [`OracleError::FeeQueryFailed`] when the oracle contract rejects the
    ///   payloads or returns a non-integer fee
    pub async fn price_update_package(
        &self,
        feed_ids: impl Into<PriceFeedIds>,
        options: &CallOptions,
    ) -> Result<PriceUpdatePackage, OracleError> {
        let feed_ids = feed_ids.into().into_vec();
        if feed_ids.is_empty() {
            return Err(OracleError::EmptyFeedSet);
        }

        let span = spans::price_update_package(feed_ids.len());
        async move {
            let update_data = self
                .service
                .fetch_signed_updates(&feed_ids)
                .await
                .map_err(|e| OracleError::price_fetch_failed(feed_ids.len(), e))?;
            if update_data.is_empty() {
                return Err(OracleError::price_fetch_failed(
                    feed_ids.len(),
                    PriceServiceError::ParseResponse("no update payloads returned".to_string()),
                ));
            }
            debug!(payloads = update_data.len(), "Fetched signed price updates");

            let call = options.call_builder().build(&Operation::UpdateFee {
                update_data: &update_data,
            })?;
            let outcome = with_timeout(
                "simulate update_fee",
                self.network_timeout,
                None,
                self.network.simulate(&call, options.wallet()),
            )
            .await
            .map_err(OracleError::fee_query_failed)?;

            let update_fee = outcome.value.as_u64().ok_or_else(|| {
                OracleError::unexpected_fee(format!("update_fee returned {:?}", outcome.value))
            })?;
            info!(update_fee, "Resolved oracle update fee");

            Ok(PriceUpdatePackage {
                feed_ids,
                update_data,
                update_fee,
            })
        }
        .instrument(span)
        .await
    }
}
