// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-precision token amounts
//!
//! [`Amount`] pairs an integer number of on-chain units with the token's
//! [`TokenDecimals`]. Parsing and formatting are exact string/integer
//! operations; no floating point is involved anywhere.
//!
//! [`Multiplier`] scales an amount by a decimal factor and always rounds the
//! result up, which is the policy gas limits need.

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;

use super::decimals::TokenDecimals;
use crate::errors::AmountError;

/// Token amount in on-chain integer units
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use swayland::{Amount, TokenDecimals};
///
/// let amount = Amount::parse("12.34", TokenDecimals::USDC).unwrap();
/// assert_eq!(amount.units(), U256::from(12_340_000u64));
/// assert_eq!(amount.to_string(), "12.34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Amount {
    units: U256,
    decimals: TokenDecimals,
}

impl Amount {
    /// Create an amount from integer units
    pub const fn from_units(units: U256, decimals: TokenDecimals) -> Self {
        Self { units, decimals }
    }

    /// Parse a human-readable decimal string such as `"12.34"`
    ///
    /// Accepts digits with at most one `.`; surrounding whitespace is ignored.
    /// Signs, exponents, separators and more fractional digits than
    /// `decimals` (after trailing zeros are dropped) are rejected with
    /// [`AmountError::InvalidNumberFormat`].
    pub fn parse(input: &str, decimals: TokenDecimals) -> Result<Self, AmountError> {
        let (whole, fraction) = split_decimal_literal(input)?;
        let fraction = fraction.trim_end_matches('0');
        let precision = usize::from(decimals.as_u8());

        if fraction.len() > precision {
            return Err(AmountError::invalid_number_format(
                input,
                format!("more than {precision} fractional digits"),
            ));
        }

        let digits = format!("{whole}{fraction:0<precision$}");
        let digits = digits.trim_start_matches('0');
        let units = if digits.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(digits, 10).map_err(|_| {
                AmountError::overflow(format!("{input} with {decimals} does not fit 256 bits"))
            })?
        };

        Ok(Self { units, decimals })
    }

    /// Integer units as stored on-chain
    pub const fn units(&self) -> U256 {
        self.units
    }

    /// Decimal precision the amount was parsed with
    pub const fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Integer units rendered in base 10, e.g. `"12340000"`
    pub fn to_integer_string(&self) -> String {
        self.units.to_string()
    }

    /// Check for zero
    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Multiply by a decimal factor, rounding up to the next integer unit
    ///
    /// The result is never below the exact product, so a multiplied gas
    /// estimate can't undershoot.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use swayland::{Amount, Multiplier, TokenDecimals};
    ///
    /// let gas = Amount::from_units(U256::from(101u64), TokenDecimals::ZERO);
    /// let limit = gas.multiply(&"1.2".parse::<Multiplier>().unwrap()).unwrap();
    /// assert_eq!(limit.units(), U256::from(122u64)); // 121.2 rounds up
    /// ```
    pub fn multiply(&self, multiplier: &Multiplier) -> Result<Self, AmountError> {
        let units = BigDecimal::from_str(&self.units.to_string())
            .map_err(|e| AmountError::overflow(e.to_string()))?;
        let product = units * multiplier.as_decimal();

        let truncated = product.with_scale(0);
        let rounded = if truncated < product {
            truncated + BigDecimal::from(1u8)
        } else {
            truncated
        };

        let (digits, _) = rounded.with_scale(0).as_bigint_and_exponent();
        let units = U256::from_str_radix(&digits.to_string(), 10)
            .map_err(|_| AmountError::overflow(format!("{} x {multiplier}", self.units)))?;

        Ok(Self {
            units,
            decimals: self.decimals,
        })
    }
}

/// Canonical decimal form: no leading zeros in the integer part, no trailing
/// zeros in the fraction, no dangling `.`
impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.units.to_string();
        let precision = usize::from(self.decimals.as_u8());
        if precision == 0 {
            return f.write_str(&digits);
        }

        let padded = format!("{digits:0>width$}", width = precision + 1);
        let (whole, fraction) = padded.split_at(padded.len() - precision);
        let fraction = fraction.trim_end_matches('0');

        if fraction.is_empty() {
            f.write_str(whole)
        } else {
            write!(f, "{whole}.{fraction}")
        }
    }
}

/// Non-negative decimal factor such as `1.2`
///
/// # Examples
///
/// ```
/// use swayland::Multiplier;
///
/// let m: Multiplier = "1.25".parse().unwrap();
/// assert_eq!(m.to_string(), "1.25");
/// assert!("-1".parse::<Multiplier>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier(BigDecimal);

impl Multiplier {
    /// Build `mantissa * 10^-scale`, e.g. `from_parts(12, 1)` is `1.2`
    pub fn from_parts(mantissa: u64, scale: i64) -> Self {
        Self(BigDecimal::new(mantissa.into(), scale))
    }

    /// Parse a decimal literal with the same rules as [`Amount::parse`]
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let (whole, fraction) = split_decimal_literal(input)?;
        let whole = if whole.is_empty() { "0" } else { whole };
        let fraction = fraction.trim_end_matches('0');
        let literal = if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{fraction}")
        };

        BigDecimal::from_str(&literal)
            .map(Self)
            .map_err(|e| AmountError::invalid_number_format(input, e.to_string()))
    }

    /// The factor as a [`BigDecimal`]
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// True when the factor is at least 1
    pub fn is_at_least_one(&self) -> bool {
        self.0 >= BigDecimal::from(1u8)
    }
}

impl FromStr for Multiplier {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split `"12.34"` into `("12", "34")` after validating the literal
fn split_decimal_literal(input: &str) -> Result<(&str, &str), AmountError> {
    let trimmed = input.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(AmountError::invalid_number_format(input, "no digits"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(AmountError::invalid_number_format(
            input,
            "only digits and a single '.' are allowed",
        ));
    }

    Ok((whole, fraction))
}
