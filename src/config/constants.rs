//! Published deployments and default values
//!
//! This module centralizes well-known endpoints, contract ids and defaults so
//! they are discoverable in one place.

use std::time::Duration;

use alloy_primitives::b256;

use super::ContractAddresses;
use crate::types::gas::GasPrice;

/// Fuel beta network GraphQL endpoint
pub const BETA_NETWORK_URL: &str = "https://beta-5.fuel.network/graphql";

/// Block explorer for the beta network
pub const EXPLORER_URL: &str = "https://app.fuel.network";

/// Public Pyth Hermes price service
pub const HERMES_URL: &str = "https://hermes.pyth.network";

/// Contract ids of the published beta deployment
pub const BETA_CONTRACT_ADDRESSES: ContractAddresses = ContractAddresses {
    lend_market: b256!("0x9d4a4ab0bd3f2b5fc1a4ef3f1a4b6fa0a9b7c2ee8f33a3e2e4c1a8d06c9c2f11"),
    oracle: b256!("0x1c86fdd9e0e7bc0d2ae1bf6817ef4834ffa7247655701ee1b031b52a24c523da"),
    token_factory: b256!("0x6d8e8f2d7d1a9cf0f84d58f0ef3b6bfae6c8f6a3a2d0a7e1b1f2c2f5a0d3e7b4"),
};

/// Gas price attached to every call unless overridden
pub const DEFAULT_GAS_PRICE: GasPrice = GasPrice::new(1);

/// Headroom applied to estimated gas unless overridden
pub const DEFAULT_GAS_LIMIT_MULTIPLIER: &str = "1.2";

/// Budget for a single network round trip
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(30);

/// Budget for a single oracle HTTP request
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(10);
