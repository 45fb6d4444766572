// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client SDK for the SwayLend lending market on Fuel.
//!
//! - [`SwayLand`]: supply, withdraw and mint, plus read-only market queries
//! - [`Amount`]: exact fixed-precision token amounts
//! - [`oracle`]: Pyth price updates required by price-dependent operations
//! - [`ExecutionNetwork`]: the boundary to the node, implemented by the caller
//!
//! Writes are estimated before submission and sent with a gas limit of
//! `ceil(estimated * multiplier)`. Failures surface as typed errors from
//! [`errors`]; nothing is retried and no failure is replaced by a default.

pub mod call;
mod client;
pub mod config;
pub mod errors;
pub mod network;
pub mod options;
pub mod oracle;
mod spans;
pub mod submit;
pub mod types;

pub use call::{CallArg, CallBuilder, CoinQuantity, ContractFunction, Operation, PreparedCall};
pub use client::{SwayLand, UserSupplyBorrow};
pub use config::{ContractAddresses, SwayLandConfig, SwayLandConfigBuilder};
pub use errors::*;
pub use network::{CallValue, ExecutionNetwork, SimulationOutcome, Signer, Wallet};
pub use options::{Access, CallOptions, Options, SdkOptions};
pub use oracle::{FeedId, HermesClient, PriceFeedIds, PriceOracle, PriceService, PriceUpdatePackage};
pub use submit::{TransactionResult, TransactionSubmitter};
pub use types::amount::{Amount, Multiplier};
pub use types::asset::{Asset, AssetId, ContractId, Identity};
pub use types::decimals::TokenDecimals;
pub use types::gas::{GasAmount, GasLimitMultiplier, GasPrice};
