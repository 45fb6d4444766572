// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The [`SwayLand`] client
//!
//! Write operations run through the full pipeline:
//!
//! ```text
//! snapshot options -> resolve wallet -> [price update package] -> build -> estimate & send
//! ```
//!
//! Read operations resolve options for [`Access::Read`], build the query and
//! return the simulated value. A failed read is always returned as an error.
//!
//! The active wallet lives in an immutable options snapshot. Write methods
//! capture the snapshot when they are called, before the returned future is
//! first polled, so [`SwayLand::set_active_wallet`] only affects writes
//! initiated after it returns. Reads take the snapshot on first poll.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use alloy_primitives::U256;
use tracing::{debug, Instrument};

use crate::call::{CallBuilder, ContractFunction, Operation};
use crate::config::SwayLandConfig;
use crate::errors::{ConfigError, OptionsError, QueryError, SwayLandError};
use crate::network::{with_timeout, CallValue, ExecutionNetwork, Wallet};
use crate::options::{Access, CallOptions, SdkOptions};
use crate::oracle::{HermesClient, PriceFeedIds, PriceOracle, PriceService, PriceUpdatePackage};
use crate::spans;
use crate::submit::{TransactionResult, TransactionSubmitter};
use crate::types::amount::Amount;
use crate::types::asset::{Asset, Identity};

/// Supplied and borrowed base-asset units of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSupplyBorrow {
    pub supply: U256,
    pub borrow: U256,
}

/// Client for the SwayLend lending market
///
/// Cheap to share behind an [`Arc`]; every method takes `&self`.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use swayland::{SwayLand, SwayLandConfigBuilder};
///
/// let config = SwayLandConfigBuilder::beta().wallet(wallet).build()?;
/// let sdk = SwayLand::new(config, Arc::new(my_fuel_network))?;
///
/// let usdc = swayland::Asset::parse(USDC_ID, "USDC", 6)?;
/// let amount = usdc.parse_amount("12.34")?;
/// let result = sdk.supply_base(&usdc, &amount).await?;
/// println!("submitted {}", result.transaction_id);
/// ```
pub struct SwayLand {
    network: Arc<dyn ExecutionNetwork>,
    oracle: PriceOracle,
    submitter: TransactionSubmitter,
    options: RwLock<Arc<SdkOptions>>,
    network_timeout: Duration,
}

impl SwayLand {
    /// Create a client using the Hermes service at `config.oracle_url`
    pub fn new(
        config: SwayLandConfig,
        network: Arc<dyn ExecutionNetwork>,
    ) -> Result<Self, ConfigError> {
        let hermes = HermesClient::new(&config.oracle_url, config.oracle_timeout)?;
        Ok(Self::with_price_service(config, network, Arc::new(hermes)))
    }

    /// Create a client with a custom price service
    pub fn with_price_service(
        config: SwayLandConfig,
        network: Arc<dyn ExecutionNetwork>,
        price_service: Arc<dyn PriceService>,
    ) -> Self {
        let timeout = config.network_timeout;
        Self {
            oracle: PriceOracle::new(price_service, Arc::clone(&network), timeout),
            submitter: TransactionSubmitter::new(Arc::clone(&network), timeout),
            options: RwLock::new(Arc::new(SdkOptions::from_config(&config))),
            network,
            network_timeout: timeout,
        }
    }

    /// Replace the wallet used by operations started from now on
    ///
    /// Operations already in flight keep the wallet they started with.
    pub fn set_active_wallet(&self, wallet: Option<Wallet>) {
        let mut current = self.options.write().unwrap_or_else(PoisonError::into_inner);
        let next = current.with_wallet(wallet);
        debug!(wallet = ?next.wallet(), "Active wallet changed");
        *current = Arc::new(next);
    }

    /// Current options snapshot
    pub fn options(&self) -> Arc<SdkOptions> {
        let current = self.options.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// The execution network this client talks to
    pub fn network(&self) -> &Arc<dyn ExecutionNetwork> {
        &self.network
    }

    /// Fresh unfunded signer bound to the network
    pub fn ephemeral_wallet(&self) -> Wallet {
        self.network.generate_wallet()
    }

    fn resolve(&self, access: Access, function: ContractFunction) -> Result<CallOptions, OptionsError> {
        self.resolve_from(&self.options(), access, function)
    }

    fn resolve_from(
        &self,
        snapshot: &SdkOptions,
        access: Access,
        function: ContractFunction,
    ) -> Result<CallOptions, OptionsError> {
        snapshot.resolve(access, function.name(), None, self.network.as_ref())
    }

    async fn send(
        &self,
        operation: &Operation<'_>,
        options: &CallOptions,
    ) -> Result<TransactionResult, SwayLandError> {
        let call = options.call_builder().build(operation)?;
        Ok(self.submitter.estimate_and_send(call, options).await?)
    }

    /// Snapshot options now and run `operation` when the future is polled
    fn write<'a>(
        &'a self,
        operation: Operation<'a>,
    ) -> impl Future<Output = Result<TransactionResult, SwayLandError>> + Send + 'a {
        let function = operation.function();
        let snapshot = self.options();
        async move {
            let options = self.resolve_from(&snapshot, Access::Write, function)?;
            self.send(&operation, &options).await
        }
        .instrument(spans::write_operation(function))
    }

    /// Signed price updates for `feed_ids` and the fee to submit them
    ///
    /// Runs with the active wallet, or a throwaway one when none is set.
    pub async fn price_update_package(
        &self,
        feed_ids: impl Into<PriceFeedIds>,
    ) -> Result<PriceUpdatePackage, SwayLandError> {
        let options = self.resolve(Access::Read, ContractFunction::UpdateFee)?;
        Ok(self.oracle.price_update_package(feed_ids, &options).await?)
    }

    /// Supply base asset to the market, forwarding `amount`
    pub fn supply_base<'a>(
        &'a self,
        asset: &'a Asset,
        amount: &'a Amount,
    ) -> impl Future<Output = Result<TransactionResult, SwayLandError>> + Send + 'a {
        self.write(Operation::SupplyBase { asset, amount })
    }

    /// Withdraw `amount` of base asset from the market
    pub fn withdraw_base<'a>(
        &'a self,
        amount: &'a Amount,
    ) -> impl Future<Output = Result<TransactionResult, SwayLandError>> + Send + 'a {
        self.write(Operation::WithdrawBase { amount })
    }

    /// Supply collateral, forwarding `amount` of `asset`
    pub fn supply_collateral<'a>(
        &'a self,
        asset: &'a Asset,
        amount: &'a Amount,
    ) -> impl Future<Output = Result<TransactionResult, SwayLandError>> + Send + 'a {
        self.write(Operation::SupplyCollateral { asset, amount })
    }

    /// Withdraw collateral
    ///
    /// The market checks solvency against fresh prices, so `feed_ids` must
    /// cover every collateral the account holds. The update fee is forwarded
    /// in the network's base asset.
    pub fn withdraw_collateral<'a>(
        &'a self,
        asset: &'a Asset,
        amount: &'a Amount,
        feed_ids: impl Into<PriceFeedIds> + 'a,
    ) -> impl Future<Output = Result<TransactionResult, SwayLandError>> + Send + 'a {
        let function = ContractFunction::WithdrawCollateral;
        let feed_ids = feed_ids.into();
        let snapshot = self.options();
        async move {
            let options = self.resolve_from(&snapshot, Access::Write, function)?;
            CallBuilder::encode_amount(asset, amount)?;

            let price_update = self.oracle.price_update_package(feed_ids, &options).await?;
            let operation = Operation::WithdrawCollateral {
                asset,
                amount,
                price_update: &price_update,
                fee_asset: self.network.base_asset_id(),
            };
            self.send(&operation, &options).await
        }
        .instrument(spans::write_operation(function))
    }

    /// Mint test tokens from the token factory to the active wallet
    ///
    /// `amount` is a human-readable decimal string parsed with the asset's
    /// decimals; the sub-id is the SHA-256 of the symbol.
    pub fn mint_token<'a>(
        &'a self,
        asset: &'a Asset,
        amount: &'a str,
    ) -> impl Future<Output = Result<TransactionResult, SwayLandError>> + Send + 'a {
        let function = ContractFunction::Mint;
        let snapshot = self.options();
        async move {
            let options = self.resolve_from(&snapshot, Access::Write, function)?;
            let amount = asset.parse_amount(amount)?;
            let operation = Operation::Mint {
                recipient: Identity::Address(options.wallet().address()),
                asset,
                amount: &amount,
            };
            self.send(&operation, &options).await
        }
        .instrument(spans::write_operation(function))
    }

    /// Balance of `asset` held by the active wallet
    ///
    /// Requires a configured wallet.
    pub async fn fetch_wallet_balance(&self, asset: &Asset) -> Result<U256, SwayLandError> {
        let options = self.options();
        let wallet = options
            .wallet()
            .ok_or_else(|| OptionsError::missing_credential("fetch_wallet_balance"))?;
        let balance = with_timeout(
            "balance",
            self.network_timeout,
            None,
            self.network.balance(wallet.address(), asset.address()),
        )
        .await?;
        Ok(balance)
    }

    async fn query(&self, operation: Operation<'_>) -> Result<CallValue, QueryError> {
        let function = operation.function();
        async move {
            let options = self.resolve(Access::Read, function)?;
            let call = options.call_builder().build(&operation)?;
            let outcome = with_timeout(
                "simulate",
                self.network_timeout,
                None,
                self.network.simulate(&call, options.wallet()),
            )
            .await
            .map_err(|e| QueryError::simulation(function.name(), e))?;
            Ok(outcome.value)
        }
        .instrument(spans::read_query(function))
        .await
    }

    async fn query_u256(&self, operation: Operation<'_>) -> Result<U256, QueryError> {
        let function = operation.function();
        self.query(operation)
            .await?
            .as_u256()
            .ok_or_else(|| QueryError::unexpected_return(function.name(), "integer"))
    }

    /// Supplied and borrowed base of `account`
    pub async fn fetch_user_supply_borrow(
        &self,
        account: &str,
    ) -> Result<UserSupplyBorrow, QueryError> {
        let function = ContractFunction::GetUserSupplyBorrow;
        let value = self.query(Operation::UserSupplyBorrow { account }).await?;
        let unexpected = || QueryError::unexpected_return(function.name(), "(u256, u256)");

        let (supply, borrow) = value.as_pair().ok_or_else(unexpected)?;
        Ok(UserSupplyBorrow {
            supply: supply.as_u256().ok_or_else(unexpected)?,
            borrow: borrow.as_u256().ok_or_else(unexpected)?,
        })
    }

    /// Collateral configurations as returned by the market
    pub async fn fetch_collateral_configurations(&self) -> Result<CallValue, QueryError> {
        self.query(Operation::CollateralConfigurations).await
    }

    /// Total collateral of `asset` held by the market
    pub async fn fetch_totals_collateral(&self, asset: &Asset) -> Result<U256, QueryError> {
        self.query_u256(Operation::TotalsCollateral {
            asset: asset.address(),
        })
        .await
    }

    /// Market balance of `asset`
    pub async fn fetch_balance_of_asset(&self, asset: &Asset) -> Result<U256, QueryError> {
        self.query_u256(Operation::BalanceOf {
            asset: asset.address(),
        })
        .await
    }

    /// Protocol reserves (signed, returned as decoded)
    pub async fn fetch_reserves(&self) -> Result<CallValue, QueryError> {
        self.query(Operation::Reserves).await
    }

    /// Collateral of `asset` supplied by `account`
    pub async fn fetch_user_collateral(
        &self,
        account: &str,
        asset: &Asset,
    ) -> Result<U256, QueryError> {
        self.query_u256(Operation::UserCollateral {
            account,
            asset: asset.address(),
        })
        .await
    }

    /// Current utilization
    pub async fn fetch_utilization(&self) -> Result<U256, QueryError> {
        self.query_u256(Operation::Utilization).await
    }

    /// Base `account` can still borrow; the market reads oracle prices
    pub async fn fetch_available_to_borrow(&self, account: &str) -> Result<U256, QueryError> {
        self.query_u256(Operation::AvailableToBorrow { account })
            .await
    }

    /// Borrow rate at `utilization`
    pub async fn fetch_borrow_rate(&self, utilization: U256) -> Result<U256, QueryError> {
        self.query_u256(Operation::BorrowRate { utilization }).await
    }

    /// Supply rate at `utilization`
    pub async fn fetch_supply_rate(&self, utilization: U256) -> Result<U256, QueryError> {
        self.query_u256(Operation::SupplyRate { utilization }).await
    }
}
