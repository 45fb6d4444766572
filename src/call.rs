//! Contract call construction
//!
//! [`CallBuilder`] turns an [`Operation`] into a [`PreparedCall`]: target
//! contract, function, encoded arguments, forwarded coins, auxiliary
//! contracts and the gas price. Every failure here is a deterministic
//! [`BuildError`] raised before the network is contacted.

use alloy_primitives::{Bytes, U256};
use serde::Serialize;

use crate::config::ContractAddresses;
use crate::errors::BuildError;
use crate::oracle::PriceUpdatePackage;
use crate::types::amount::Amount;
use crate::types::asset::{parse_b256, Asset, AssetId, ContractId, Identity};
use crate::types::gas::{GasAmount, GasPrice};

/// Contract functions the SDK calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractFunction {
    // Lending market, state-mutating
    SupplyBase,
    WithdrawBase,
    SupplyCollateral,
    WithdrawCollateral,
    // Lending market, read-only
    GetUserSupplyBorrow,
    GetCollateralConfigurations,
    TotalsCollateral,
    BalanceOf,
    GetReserves,
    GetUserCollateral,
    GetUtilization,
    AvailableToBorrow,
    GetBorrowRate,
    GetSupplyRate,
    // Price oracle
    UpdateFee,
    // Token factory
    Mint,
}

impl ContractFunction {
    /// ABI function name
    pub const fn name(&self) -> &'static str {
        match self {
            ContractFunction::SupplyBase => "supply_base",
            ContractFunction::WithdrawBase => "withdraw_base",
            ContractFunction::SupplyCollateral => "supply_collateral",
            ContractFunction::WithdrawCollateral => "withdraw_collateral",
            ContractFunction::GetUserSupplyBorrow => "get_user_supply_borrow",
            ContractFunction::GetCollateralConfigurations => "get_collateral_configurations",
            ContractFunction::TotalsCollateral => "totals_collateral",
            ContractFunction::BalanceOf => "balance_of",
            ContractFunction::GetReserves => "get_reserves",
            ContractFunction::GetUserCollateral => "get_user_collateral",
            ContractFunction::GetUtilization => "get_utilization",
            ContractFunction::AvailableToBorrow => "available_to_borrow",
            ContractFunction::GetBorrowRate => "get_borrow_rate",
            ContractFunction::GetSupplyRate => "get_supply_rate",
            ContractFunction::UpdateFee => "update_fee",
            ContractFunction::Mint => "mint",
        }
    }

    /// Whether the function changes chain state when executed
    pub const fn mutates_state(&self) -> bool {
        matches!(
            self,
            ContractFunction::SupplyBase
                | ContractFunction::WithdrawBase
                | ContractFunction::SupplyCollateral
                | ContractFunction::WithdrawCollateral
                | ContractFunction::Mint
        )
    }
}

impl std::fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoded call argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    /// Account or contract identity
    Identity(Identity),
    /// Asset id
    AssetId(AssetId),
    /// `u64`
    U64(u64),
    /// `u256`
    U256(U256),
    /// `b256`
    B256(alloy_primitives::B256),
    /// Signed oracle payloads, one byte array each
    UpdateData(Vec<Bytes>),
    /// Price update attached to a price-dependent write
    PriceUpdate(PriceUpdatePackage),
}

/// Coin forwarded alongside a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CoinQuantity {
    /// Forwarded asset
    pub asset_id: AssetId,
    /// Integer units
    pub amount: u64,
}

/// Fully parameterized contract call
///
/// `gas_limit` stays `None` until the submitter has estimated the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCall {
    pub contract: ContractId,
    pub function: ContractFunction,
    pub args: Vec<CallArg>,
    pub forward: Option<CoinQuantity>,
    /// Contracts the call may invoke during execution
    pub external_contracts: Vec<ContractId>,
    pub gas_price: GasPrice,
    pub gas_limit: Option<GasAmount>,
}

impl PreparedCall {
    /// Same call with the gas limit set
    pub fn with_gas_limit(mut self, gas_limit: GasAmount) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

/// A logical operation before encoding
///
/// Account arguments are hex strings and are decoded by the builder.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    SupplyBase {
        asset: &'a Asset,
        amount: &'a Amount,
    },
    WithdrawBase {
        amount: &'a Amount,
    },
    SupplyCollateral {
        asset: &'a Asset,
        amount: &'a Amount,
    },
    /// `fee_asset` is the network's base asset, used to pay the update fee
    WithdrawCollateral {
        asset: &'a Asset,
        amount: &'a Amount,
        price_update: &'a PriceUpdatePackage,
        fee_asset: AssetId,
    },
    Mint {
        recipient: Identity,
        asset: &'a Asset,
        amount: &'a Amount,
    },
    UpdateFee {
        update_data: &'a [Bytes],
    },
    UserSupplyBorrow {
        account: &'a str,
    },
    CollateralConfigurations,
    TotalsCollateral {
        asset: AssetId,
    },
    BalanceOf {
        asset: AssetId,
    },
    Reserves,
    UserCollateral {
        account: &'a str,
        asset: AssetId,
    },
    Utilization,
    AvailableToBorrow {
        account: &'a str,
    },
    BorrowRate {
        utilization: U256,
    },
    SupplyRate {
        utilization: U256,
    },
}

impl Operation<'_> {
    /// Contract function the operation encodes to
    pub const fn function(&self) -> ContractFunction {
        match self {
            Operation::SupplyBase { .. } => ContractFunction::SupplyBase,
            Operation::WithdrawBase { .. } => ContractFunction::WithdrawBase,
            Operation::SupplyCollateral { .. } => ContractFunction::SupplyCollateral,
            Operation::WithdrawCollateral { .. } => ContractFunction::WithdrawCollateral,
            Operation::Mint { .. } => ContractFunction::Mint,
            Operation::UpdateFee { .. } => ContractFunction::UpdateFee,
            Operation::UserSupplyBorrow { .. } => ContractFunction::GetUserSupplyBorrow,
            Operation::CollateralConfigurations => ContractFunction::GetCollateralConfigurations,
            Operation::TotalsCollateral { .. } => ContractFunction::TotalsCollateral,
            Operation::BalanceOf { .. } => ContractFunction::BalanceOf,
            Operation::Reserves => ContractFunction::GetReserves,
            Operation::UserCollateral { .. } => ContractFunction::GetUserCollateral,
            Operation::Utilization => ContractFunction::GetUtilization,
            Operation::AvailableToBorrow { .. } => ContractFunction::AvailableToBorrow,
            Operation::BorrowRate { .. } => ContractFunction::GetBorrowRate,
            Operation::SupplyRate { .. } => ContractFunction::GetSupplyRate,
        }
    }
}

/// Encodes operations against a fixed set of contracts and gas price
#[derive(Debug, Clone, Copy)]
pub struct CallBuilder {
    contracts: ContractAddresses,
    gas_price: GasPrice,
}

impl CallBuilder {
    pub fn new(contracts: ContractAddresses, gas_price: GasPrice) -> Self {
        Self {
            contracts,
            gas_price,
        }
    }

    /// Integer units of `amount` as forwarded or passed for `asset`
    ///
    /// Lets callers reject an amount before doing any I/O for an operation.
    pub fn encode_amount(asset: &Asset, amount: &Amount) -> Result<u64, BuildError> {
        if amount.decimals() != asset.decimals() {
            return Err(BuildError::DecimalsMismatch {
                symbol: asset.symbol().to_string(),
                expected: asset.decimals(),
                actual: amount.decimals(),
            });
        }
        to_u64(amount.units())
    }

    /// Encode an operation
    ///
    /// # Errors
    ///
    /// - [`BuildError::InvalidAddress`] for a malformed account address
    /// - [`BuildError::DecimalsMismatch`] when an amount was parsed with
    ///   another precision than its asset
    /// - [`BuildError::AmountOutOfRange`] when an amount does not fit a u64
    pub fn build(&self, operation: &Operation<'_>) -> Result<PreparedCall, BuildError> {
        let market = self.contracts.lend_market;
        let function = operation.function();
        let mut call = PreparedCall {
            contract: market,
            function,
            args: Vec::new(),
            forward: None,
            external_contracts: Vec::new(),
            gas_price: self.gas_price,
            gas_limit: None,
        };

        match *operation {
            Operation::SupplyBase { asset, amount }
            | Operation::SupplyCollateral { asset, amount } => {
                call.forward = Some(CoinQuantity {
                    asset_id: asset.address(),
                    amount: Self::encode_amount(asset, amount)?,
                });
            }
            Operation::WithdrawBase { amount } => {
                call.args.push(CallArg::U64(to_u64(amount.units())?));
            }
            Operation::WithdrawCollateral {
                asset,
                amount,
                price_update,
                fee_asset,
            } => {
                call.args.push(CallArg::AssetId(asset.address()));
                call.args.push(CallArg::U64(Self::encode_amount(asset, amount)?));
                call.args.push(CallArg::PriceUpdate(price_update.clone()));
                call.forward = Some(CoinQuantity {
                    asset_id: fee_asset,
                    amount: price_update.update_fee,
                });
                call.external_contracts.push(self.contracts.oracle);
            }
            Operation::Mint {
                recipient,
                asset,
                amount,
            } => {
                call.contract = self.contracts.token_factory;
                call.args.push(CallArg::Identity(recipient));
                call.args.push(CallArg::B256(asset.sub_id()));
                call.args.push(CallArg::U64(Self::encode_amount(asset, amount)?));
            }
            Operation::UpdateFee { update_data } => {
                call.contract = self.contracts.oracle;
                call.args.push(CallArg::UpdateData(update_data.to_vec()));
            }
            Operation::UserSupplyBorrow { account } => {
                call.args.push(account_arg(account)?);
            }
            Operation::CollateralConfigurations
            | Operation::Reserves
            | Operation::Utilization => {}
            Operation::TotalsCollateral { asset } | Operation::BalanceOf { asset } => {
                call.args.push(CallArg::AssetId(asset));
            }
            Operation::UserCollateral { account, asset } => {
                call.args.push(account_arg(account)?);
                call.args.push(CallArg::AssetId(asset));
            }
            Operation::AvailableToBorrow { account } => {
                call.args.push(account_arg(account)?);
                call.external_contracts.push(self.contracts.oracle);
            }
            Operation::BorrowRate { utilization } | Operation::SupplyRate { utilization } => {
                call.args.push(CallArg::U256(utilization));
            }
        }

        Ok(call)
    }
}

fn account_arg(account: &str) -> Result<CallArg, BuildError> {
    let address = parse_b256("account address", account)?;
    Ok(CallArg::Identity(Identity::Address(address)))
}

fn to_u64(units: U256) -> Result<u64, BuildError> {
    u64::try_from(units).map_err(|_| BuildError::amount_out_of_range(units))
}
