//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// Number of decimal places of a token
///
/// Fuel native assets commonly use 9 decimals (ETH) while bridged stablecoins
/// keep 6. The value decides how human amounts map to integer units.
///
/// # Examples
///
/// ```
/// use swayland::TokenDecimals;
///
/// assert_eq!(TokenDecimals::USDC.as_u8(), 6);
/// assert_eq!(TokenDecimals::new(9).to_string(), "9 decimals");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Integer units, no fractional part
    pub const ZERO: Self = Self(0);

    /// USDC / USDT decimals (6)
    pub const USDC: Self = Self(6);

    /// Fuel base asset (ETH) decimals (9)
    pub const FUEL_ETH: Self = Self(9);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
