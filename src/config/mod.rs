// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the swayland SDK
//!
//! [`SwayLandConfig`] is the configuration surface: network endpoint, the
//! contract id triple, gas settings, the oracle service endpoint, an optional
//! pre-bound wallet and per-round-trip timeouts.
//!
//! # Example: beta deployment
//!
//! ```rust
//! use swayland::SwayLandConfig;
//!
//! let config = SwayLandConfig::beta().unwrap();
//! assert_eq!(config.gas_price.as_u64(), 1);
//! ```
//!
//! # Example: custom configuration
//!
//! ```rust
//! use std::time::Duration;
//! use swayland::SwayLandConfigBuilder;
//!
//! let config = SwayLandConfigBuilder::new("http://127.0.0.1:4000/v1/graphql")
//!     .gas_price(2)
//!     .gas_limit_multiplier("1.5")
//!     .oracle_url("http://127.0.0.1:8080")
//!     .network_timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//! assert_eq!(config.gas_limit_multiplier.to_string(), "1.5");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ConfigError;
use crate::network::Wallet;
use crate::types::asset::ContractId;
use crate::types::gas::{GasLimitMultiplier, GasPrice};

pub mod constants;

use constants::{
    BETA_CONTRACT_ADDRESSES, BETA_NETWORK_URL, DEFAULT_GAS_PRICE, DEFAULT_NETWORK_TIMEOUT,
    DEFAULT_ORACLE_TIMEOUT, HERMES_URL,
};

/// Contract ids the SDK talks to, fixed at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Lending market
    pub lend_market: ContractId,
    /// Pyth price oracle
    pub oracle: ContractId,
    /// SRC-20 token factory
    pub token_factory: ContractId,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        BETA_CONTRACT_ADDRESSES
    }
}

/// Configuration for a [`crate::SwayLand`] client
///
/// Use [`SwayLandConfigBuilder`] to construct instances; URLs and the gas
/// limit multiplier are validated there.
#[derive(Debug, Clone)]
pub struct SwayLandConfig {
    /// Execution network endpoint
    pub network_url: Url,

    /// Contract id triple
    /// Default: published beta deployment
    pub contract_addresses: ContractAddresses,

    /// Gas price attached to every call
    /// Default: 1
    pub gas_price: GasPrice,

    /// Headroom applied to estimated gas
    /// Default: 1.2
    pub gas_limit_multiplier: GasLimitMultiplier,

    /// Oracle price service endpoint
    /// Default: public Hermes endpoint
    pub oracle_url: Url,

    /// Wallet used for writes; reads work without one
    pub wallet: Option<Wallet>,

    /// Budget for each network round trip
    /// Default: 30 seconds
    pub network_timeout: Duration,

    /// Budget for each oracle HTTP request
    /// Default: 10 seconds
    pub oracle_timeout: Duration,
}

impl SwayLandConfig {
    /// Configuration for the published beta deployment with all defaults
    pub fn beta() -> Result<Self, ConfigError> {
        SwayLandConfigBuilder::beta().build()
    }
}

/// Builder for [`SwayLandConfig`]
///
/// Setters store raw input; validation happens once in [`build`](Self::build)
/// so the first invalid field is reported.
///
/// # Example
///
/// ```rust
/// use swayland::{ConfigError, SwayLandConfigBuilder};
///
/// let err = SwayLandConfigBuilder::new("http://127.0.0.1:4000")
///     .gas_limit_multiplier("0.5")
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, ConfigError::InvalidGasLimitMultiplier { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct SwayLandConfigBuilder {
    network_url: String,
    contract_addresses: ContractAddresses,
    gas_price: GasPrice,
    gas_limit_multiplier: Option<String>,
    oracle_url: Option<String>,
    wallet: Option<Wallet>,
    network_timeout: Duration,
    oracle_timeout: Duration,
}

impl SwayLandConfigBuilder {
    /// Start a builder for the given network endpoint with default settings
    pub fn new(network_url: impl Into<String>) -> Self {
        Self {
            network_url: network_url.into(),
            contract_addresses: BETA_CONTRACT_ADDRESSES,
            gas_price: DEFAULT_GAS_PRICE,
            gas_limit_multiplier: None,
            oracle_url: None,
            wallet: None,
            network_timeout: DEFAULT_NETWORK_TIMEOUT,
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }

    /// Start a builder pointed at the beta network
    pub fn beta() -> Self {
        Self::new(BETA_NETWORK_URL)
    }

    /// Override the contract id triple
    pub fn contract_addresses(mut self, addresses: ContractAddresses) -> Self {
        self.contract_addresses = addresses;
        self
    }

    /// Set the gas price
    pub fn gas_price(mut self, price: u64) -> Self {
        self.gas_price = GasPrice::new(price);
        self
    }

    /// Set the gas limit multiplier as a decimal string, e.g. `"1.5"`
    pub fn gas_limit_multiplier(mut self, multiplier: impl Into<String>) -> Self {
        self.gas_limit_multiplier = Some(multiplier.into());
        self
    }

    /// Override the oracle service endpoint
    pub fn oracle_url(mut self, url: impl Into<String>) -> Self {
        self.oracle_url = Some(url.into());
        self
    }

    /// Pre-bind a wallet for write operations
    pub fn wallet(mut self, wallet: Wallet) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Set the budget for each network round trip
    pub fn network_timeout(mut self, timeout: Duration) -> Self {
        self.network_timeout = timeout;
        self
    }

    /// Set the budget for each oracle HTTP request
    pub fn oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SwayLandConfig, ConfigError> {
        let network_url = Url::parse(&self.network_url)
            .map_err(|e| ConfigError::invalid_url("network", &self.network_url, e))?;

        let oracle_url = match self.oracle_url {
            Some(raw) => {
                Url::parse(&raw).map_err(|e| ConfigError::invalid_url("oracle", &raw, e))?
            }
            None => Url::parse(HERMES_URL)
                .map_err(|e| ConfigError::invalid_url("oracle", HERMES_URL, e))?,
        };

        let gas_limit_multiplier = match self.gas_limit_multiplier {
            Some(raw) => raw.parse()?,
            None => GasLimitMultiplier::default(),
        };

        Ok(SwayLandConfig {
            network_url,
            contract_addresses: self.contract_addresses,
            gas_price: self.gas_price,
            gas_limit_multiplier,
            oracle_url,
            wallet: self.wallet,
            network_timeout: self.network_timeout,
            oracle_timeout: self.oracle_timeout,
        })
    }
}
