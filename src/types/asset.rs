//! Asset and identity types
//!
//! Fuel identifies assets, contracts and accounts by 32-byte ids. They are
//! represented as [`B256`] and decoded from `0x`-prefixed hex strings.

use std::hash::{Hash, Hasher};

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::amount::Amount;
use super::decimals::TokenDecimals;
use crate::errors::{AmountError, BuildError};

/// 32-byte asset id
pub type AssetId = B256;

/// 32-byte contract id
pub type ContractId = B256;

/// Decode a 32-byte id, naming the argument in the error
pub fn parse_b256(field: &'static str, input: &str) -> Result<B256, BuildError> {
    input
        .trim()
        .parse::<B256>()
        .map_err(|e| BuildError::invalid_address(field, input, e))
}

/// Token known to the market
///
/// Identity is the asset id; symbol and decimals are metadata used for
/// display and amount parsing.
///
/// # Examples
///
/// ```
/// use swayland::Asset;
///
/// let usdc = Asset::parse(
///     "0x0000000000000000000000000000000000000000000000000000000000000001",
///     "USDC",
///     6,
/// ).unwrap();
/// assert_eq!(usdc.parse_amount("1.5").unwrap().to_integer_string(), "1500000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    address: AssetId,
    symbol: String,
    decimals: TokenDecimals,
}

impl Asset {
    /// Create an asset from an already decoded id
    pub fn new(address: AssetId, symbol: impl Into<String>, decimals: TokenDecimals) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Create an asset from a hex id
    pub fn parse(
        address: &str,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Result<Self, BuildError> {
        Ok(Self::new(
            parse_b256("asset id", address)?,
            symbol,
            TokenDecimals::new(decimals),
        ))
    }

    /// On-chain asset id
    pub fn address(&self) -> AssetId {
        self.address
    }

    /// Ticker symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decimal precision
    pub fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Token factory sub-id: SHA-256 of the symbol
    pub fn sub_id(&self) -> B256 {
        B256::from_slice(&Sha256::digest(self.symbol.as_bytes()))
    }

    /// Parse a human amount with this asset's precision
    pub fn parse_amount(&self, human: &str) -> Result<Amount, AmountError> {
        Amount::parse(human, self.decimals)
    }
}

// Equality and hashing follow the asset id only.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

/// Recipient of minted tokens or subject of a position query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// Externally owned account
    Address(B256),
    /// Contract
    ContractId(ContractId),
}
