// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across swayland.
//!
//! - Token amounts, decimal precision and multipliers
//! - Gas amounts, prices and the gas-limit multiplier
//! - Asset, contract and identity ids

pub mod amount;
pub mod asset;
pub mod decimals;
pub mod gas;

// Note: Public types are re-exported from lib.rs, not here
