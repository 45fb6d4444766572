//! Property-based tests for amounts and gas limits
//!
//! These tests use proptest to check parsing, formatting and rounding
//! invariants over a wide range of inputs.

use alloy_primitives::U256;
use proptest::prelude::*;
use swayland::{Amount, GasAmount, GasLimitMultiplier, Multiplier, TokenDecimals};

// Decimal precision between 0 and 18
fn arb_decimals() -> impl Strategy<Value = TokenDecimals> {
    (0u8..=18).prop_map(TokenDecimals::new)
}

// Multiplier between 1.00 and 4.99 as (mantissa, scale = 2)
fn arb_multiplier_hundredths() -> impl Strategy<Value = u64> {
    100u64..500
}

/// Canonical form of `whole.fraction`: no leading zeros, no trailing
/// fractional zeros, no dangling dot
fn normalize(whole: u64, fraction: &str) -> String {
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

proptest! {
    /// Property: formatting a parsed amount yields the canonical input
    #[test]
    fn prop_parse_then_display_is_canonical(
        decimals in arb_decimals(),
        whole in 0u64..1_000_000_000_000,
        fraction_seed in "[0-9]{0,18}",
        leading_zeros in 0usize..3,
    ) {
        let precision = usize::from(decimals.as_u8());
        let fraction: String = fraction_seed.chars().take(precision).collect();
        let input = if fraction.is_empty() {
            format!("{}{whole}", "0".repeat(leading_zeros))
        } else {
            format!("{}{whole}.{fraction}", "0".repeat(leading_zeros))
        };

        let amount = Amount::parse(&input, decimals).unwrap();
        prop_assert_eq!(amount.to_string(), normalize(whole, &fraction));
    }

    /// Property: units are exactly whole * 10^decimals + padded fraction
    #[test]
    fn prop_units_match_integer_arithmetic(
        decimals in 0u8..=12,
        whole in 0u64..1_000_000,
        fraction_seed in "[0-9]{0,12}",
    ) {
        let precision = usize::from(decimals);
        let fraction: String = fraction_seed.chars().take(precision).collect();
        let padded = format!("{fraction:0<precision$}");
        let fraction_units: u128 = if padded.is_empty() { 0 } else { padded.parse().unwrap() };
        let expected = u128::from(whole) * 10u128.pow(u32::from(decimals)) + fraction_units;

        let amount = Amount::parse(&format!("{whole}.{fraction}"), TokenDecimals::new(decimals)).unwrap();
        prop_assert_eq!(amount.units(), U256::from(expected));
        prop_assert_eq!(amount.to_integer_string(), expected.to_string());
    }

    /// Property: a significant digit past the precision is always rejected
    #[test]
    fn prop_excess_precision_is_rejected(
        decimals in 0u8..=12,
        whole in 0u64..1_000_000,
        last in 1u8..=9,
    ) {
        let input = format!("{whole}.{}{last}", "0".repeat(usize::from(decimals)));
        prop_assert!(Amount::parse(&input, TokenDecimals::new(decimals)).is_err());
    }

    /// Property: gas limit is the ceiling of estimate * multiplier
    #[test]
    fn prop_gas_limit_is_ceiling(
        estimated in 0u64..1_000_000_000_000,
        hundredths in arb_multiplier_hundredths(),
    ) {
        let multiplier = GasLimitMultiplier::new(Multiplier::from_parts(hundredths, 2)).unwrap();
        let limit = multiplier.gas_limit(GasAmount::new(estimated)).unwrap().as_u64();

        let exact_times_100 = u128::from(estimated) * u128::from(hundredths);
        let limit_times_100 = u128::from(limit) * 100;

        // Never below the exact product, and less than one unit above it
        prop_assert!(limit_times_100 >= exact_times_100);
        prop_assert!(limit_times_100 < exact_times_100 + 100);
        prop_assert!(limit >= estimated);
    }

    /// Property: multiplying by one is the identity
    #[test]
    fn prop_multiply_by_one_is_identity(
        units in any::<u64>(),
        decimals in arb_decimals(),
    ) {
        let amount = Amount::from_units(U256::from(units), decimals);
        let product = amount.multiply(&Multiplier::from_parts(1, 0)).unwrap();
        prop_assert_eq!(product, amount);
    }

    /// Property: multipliers below one are rejected for gas limits
    #[test]
    fn prop_sub_unit_multiplier_rejected(hundredths in 0u64..100) {
        prop_assert!(GasLimitMultiplier::new(Multiplier::from_parts(hundredths, 2)).is_err());
    }
}
