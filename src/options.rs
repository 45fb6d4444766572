//! Call options and their resolution
//!
//! [`Options`] is one type with two states: [`SdkOptions`] (wallet optional,
//! what the client is configured with) and [`CallOptions`] (wallet present,
//! what every call runs with). [`SdkOptions::resolve`] is the only way to get
//! from the first to the second.

use crate::call::CallBuilder;
use crate::config::{ContractAddresses, SwayLandConfig};
use crate::errors::OptionsError;
use crate::network::{ExecutionNetwork, Wallet};
use crate::types::gas::{GasLimitMultiplier, GasPrice};

/// Whether an operation changes chain state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Query only; runs with a throwaway signer when no wallet is configured
    Read,
    /// State-mutating; requires the configured wallet
    Write,
}

/// Contract ids, gas settings and a wallet slot
///
/// Immutable once built. Fields are private: a [`CallOptions`] only comes out
/// of [`SdkOptions::resolve`].
///
/// ```compile_fail
/// use swayland::{CallOptions, SdkOptions, Wallet};
///
/// fn skip_resolution(options: &SdkOptions, wallet: Wallet) -> CallOptions {
///     options.with_wallet(Some(wallet))
/// }
/// ```
///
/// ```compile_fail
/// use swayland::{CallOptions, SdkOptions, Wallet};
///
/// fn forge(options: &SdkOptions, wallet: Wallet) -> CallOptions {
///     CallOptions {
///         contract_addresses: options.contract_addresses(),
///         gas_price: options.gas_price(),
///         gas_limit_multiplier: options.gas_limit_multiplier().clone(),
///         wallet,
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Options<W> {
    contract_addresses: ContractAddresses,
    gas_price: GasPrice,
    gas_limit_multiplier: GasLimitMultiplier,
    wallet: W,
}

/// Client-level options; the wallet may be absent
pub type SdkOptions = Options<Option<Wallet>>;

/// Per-call options; the wallet is always present
pub type CallOptions = Options<Wallet>;

impl<W> Options<W> {
    pub fn contract_addresses(&self) -> ContractAddresses {
        self.contract_addresses
    }

    pub fn gas_price(&self) -> GasPrice {
        self.gas_price
    }

    pub fn gas_limit_multiplier(&self) -> &GasLimitMultiplier {
        &self.gas_limit_multiplier
    }

    /// Builder for calls against these contracts at this gas price
    pub fn call_builder(&self) -> CallBuilder {
        CallBuilder::new(self.contract_addresses, self.gas_price)
    }

    fn rebind<V>(&self, wallet: V) -> Options<V> {
        Options {
            contract_addresses: self.contract_addresses,
            gas_price: self.gas_price,
            gas_limit_multiplier: self.gas_limit_multiplier.clone(),
            wallet,
        }
    }
}

impl CallOptions {
    /// Wallet the call is signed with
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }
}

impl SdkOptions {
    pub fn from_config(config: &SwayLandConfig) -> Self {
        Options {
            contract_addresses: config.contract_addresses,
            gas_price: config.gas_price,
            gas_limit_multiplier: config.gas_limit_multiplier.clone(),
            wallet: config.wallet.clone(),
        }
    }

    /// Configured wallet, if any
    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    /// Copy of these options with the wallet replaced
    pub fn with_wallet(&self, wallet: Option<Wallet>) -> SdkOptions {
        self.rebind(wallet)
    }

    /// Produce the options a call runs with
    ///
    /// Wallet precedence is `override_wallet`, then the configured wallet.
    /// Without either, a write fails with
    /// [`OptionsError::MissingCredential`] and a read gets a freshly
    /// generated signer from `network` (never reused across calls).
    pub fn resolve(
        &self,
        access: Access,
        operation: &'static str,
        override_wallet: Option<&Wallet>,
        network: &dyn ExecutionNetwork,
    ) -> Result<CallOptions, OptionsError> {
        let wallet = match (override_wallet.or(self.wallet.as_ref()), access) {
            (Some(wallet), _) => wallet.clone(),
            (None, Access::Write) => return Err(OptionsError::missing_credential(operation)),
            (None, Access::Read) => network.generate_wallet(),
        };
        Ok(self.rebind(wallet))
    }
}
