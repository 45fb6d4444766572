// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for gas-related values
//!
//! Gas *price* is fixed when a call is built; gas *limit* is derived later
//! from the estimated [`GasAmount`] and the [`GasLimitMultiplier`].

use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::amount::{Amount, Multiplier};
use super::decimals::TokenDecimals;
use crate::errors::ConfigError;

/// Amount of gas consumed (or allowed) for a call
///
/// # Example
/// ```
/// use swayland::GasAmount;
///
/// let gas = GasAmount::new(100_000);
/// assert_eq!(gas.as_u64(), 100_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasAmount(u64);

impl GasAmount {
    /// Create a new gas amount
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for GasAmount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for GasAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price paid per unit of gas, in base-asset units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasPrice(u64);

impl GasPrice {
    /// Create a new gas price
    pub const fn new(price: u64) -> Self {
        Self(price)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Maximum fee for a call with the given gas limit
    ///
    /// Uses saturating multiplication to prevent overflow.
    pub fn max_fee(&self, limit: GasAmount) -> u64 {
        self.0.saturating_mul(limit.0)
    }
}

impl From<u64> for GasPrice {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for GasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Headroom factor applied to estimated gas, always `>= 1`
///
/// Estimation is a lower bound; the multiplied limit is rounded up so the
/// submitted limit is never below `estimated * multiplier`.
///
/// # Example
/// ```
/// use swayland::{GasAmount, GasLimitMultiplier};
///
/// let multiplier: GasLimitMultiplier = "1.2".parse().unwrap();
/// assert_eq!(multiplier.gas_limit(GasAmount::new(100_000)), Some(GasAmount::new(120_000)));
/// assert!("0.8".parse::<GasLimitMultiplier>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GasLimitMultiplier(Multiplier);

impl GasLimitMultiplier {
    /// Wrap a multiplier, rejecting factors below 1
    pub fn new(multiplier: Multiplier) -> Result<Self, ConfigError> {
        if !multiplier.is_at_least_one() {
            return Err(ConfigError::invalid_gas_limit_multiplier(
                multiplier.to_string(),
                "must be at least 1",
            ));
        }
        Ok(Self(multiplier))
    }

    /// `ceil(estimated * multiplier)`, or `None` if it does not fit a u64
    pub fn gas_limit(&self, estimated: GasAmount) -> Option<GasAmount> {
        let estimated = Amount::from_units(U256::from(estimated.0), TokenDecimals::ZERO);
        let limit = estimated.multiply(&self.0).ok()?;
        u64::try_from(limit.units()).ok().map(GasAmount)
    }

    /// The underlying decimal factor
    pub fn as_multiplier(&self) -> &Multiplier {
        &self.0
    }
}

/// 1.2x headroom
impl Default for GasLimitMultiplier {
    fn default() -> Self {
        Self(Multiplier::from_parts(12, 1))
    }
}

impl FromStr for GasLimitMultiplier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let multiplier = Multiplier::parse(s)
            .map_err(|e| ConfigError::invalid_gas_limit_multiplier(s, e.to_string()))?;
        Self::new(multiplier)
    }
}

impl std::fmt::Display for GasLimitMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
