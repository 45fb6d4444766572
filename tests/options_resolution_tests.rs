// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet resolution for reads and writes, and active-wallet snapshots

mod helpers;

use std::sync::Arc;

use alloy_primitives::{B256, U256};
use helpers::{
    event_log, eth, feed, sdk, usdc, wallet, Event, Gate, MockNetwork, MockPriceService,
};
use swayland::{
    Access, CallValue, ContractFunction, OptionsError, QueryError, SdkOptions, SwayLandError,
};

const ACCOUNT: &str = "0x00000000000000000000000000000000000000000000000000000000000000aa";

fn mocks() -> (Arc<MockNetwork>, Arc<MockPriceService>) {
    let log = event_log();
    (
        Arc::new(MockNetwork::new(log.clone())),
        Arc::new(MockPriceService::new(log)),
    )
}

fn assert_missing_credential(err: SwayLandError) {
    assert!(
        matches!(
            err,
            SwayLandError::Options(OptionsError::MissingCredential { .. })
        ),
        "unexpected error {err:?}"
    );
}

#[tokio::test]
async fn writes_without_wallet_never_reach_the_network() {
    let (network, prices) = mocks();
    let sdk = sdk(network.clone(), prices.clone(), None);
    let usdc = usdc();
    let amount = usdc.parse_amount("1").unwrap();
    let eth = eth();
    let eth_amount = eth.parse_amount("1").unwrap();

    assert_missing_credential(sdk.supply_base(&usdc, &amount).await.unwrap_err());
    assert_missing_credential(sdk.withdraw_base(&amount).await.unwrap_err());
    assert_missing_credential(sdk.supply_collateral(&eth, &eth_amount).await.unwrap_err());
    assert_missing_credential(
        sdk.withdraw_collateral(&eth, &eth_amount, feed(1))
            .await
            .unwrap_err(),
    );
    assert_missing_credential(sdk.mint_token(&usdc, "100").await.unwrap_err());
    assert_missing_credential(sdk.fetch_wallet_balance(&usdc).await.unwrap_err());

    assert_eq!(network.round_trips(), 0);
    assert_eq!(prices.requests(), 0);
    assert!(network.events().is_empty());
}

#[tokio::test]
async fn missing_credential_names_the_operation() {
    let (network, prices) = mocks();
    let sdk = sdk(network, prices, None);

    let err = sdk.withdraw_base(&usdc().parse_amount("1").unwrap()).await.unwrap_err();
    match err {
        SwayLandError::Options(OptionsError::MissingCredential { operation }) => {
            assert_eq!(operation, "withdraw_base");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn reads_without_wallet_use_fresh_ephemeral_signers() {
    let log = event_log();
    let network = Arc::new(
        MockNetwork::new(log.clone())
            .with_value(ContractFunction::GetUtilization, CallValue::U256(U256::from(42u64))),
    );
    let sdk = sdk(network.clone(), Arc::new(MockPriceService::new(log)), None);

    assert_eq!(sdk.fetch_utilization().await.unwrap(), U256::from(42u64));
    assert_eq!(sdk.fetch_utilization().await.unwrap(), U256::from(42u64));

    let signers: Vec<B256> = network
        .simulations()
        .into_iter()
        .map(|(_, wallet)| wallet)
        .collect();
    assert_eq!(signers.len(), 2);
    assert_ne!(signers[0], signers[1]);

    let generated: Vec<B256> = network
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::GenerateWallet(address) => Some(address),
            _ => None,
        })
        .collect();
    assert_eq!(generated, signers);
    assert!(network.submissions().is_empty());
}

#[tokio::test]
async fn reads_use_configured_wallet_when_present() {
    let (network, prices) = mocks();
    let sdk = sdk(network.clone(), prices, Some(wallet(0x77)));

    sdk.fetch_collateral_configurations().await.unwrap();

    let (_, signer) = network.simulations().remove(0);
    assert_eq!(signer, B256::repeat_byte(0x77));
    assert!(!network
        .events()
        .iter()
        .any(|e| matches!(e, Event::GenerateWallet(_))));
}

#[tokio::test]
async fn resolve_prefers_override_wallet() {
    let (network, _) = mocks();
    let options = SdkOptions::from_config(&helpers::config(Some(wallet(1))));

    let resolved = options
        .resolve(Access::Write, "supply_base", Some(&wallet(2)), network.as_ref())
        .unwrap();
    assert_eq!(resolved.wallet().address(), B256::repeat_byte(2));

    let resolved = options
        .resolve(Access::Write, "supply_base", None, network.as_ref())
        .unwrap();
    assert_eq!(resolved.wallet().address(), B256::repeat_byte(1));
}

#[tokio::test]
async fn resolve_keeps_contracts_and_gas_settings() {
    let (network, _) = mocks();
    let options = SdkOptions::from_config(&helpers::config(None));

    let resolved = options
        .resolve(Access::Read, "get_utilization", None, network.as_ref())
        .unwrap();
    assert_eq!(resolved.contract_addresses(), options.contract_addresses());
    assert_eq!(resolved.gas_price(), options.gas_price());
    assert_eq!(resolved.gas_limit_multiplier(), options.gas_limit_multiplier());

    let err = options
        .resolve(Access::Write, "mint", None, network.as_ref())
        .unwrap_err();
    assert_eq!(err, OptionsError::MissingCredential { operation: "mint" });
}

#[tokio::test]
async fn replacing_wallet_still_requires_resolution() {
    let (network, _) = mocks();
    let options = SdkOptions::from_config(&helpers::config(None));

    let rebound: SdkOptions = options.with_wallet(Some(wallet(9)));
    let resolved = rebound
        .resolve(Access::Write, "supply_base", None, network.as_ref())
        .unwrap();
    assert_eq!(resolved.wallet().address(), B256::repeat_byte(9));

    let cleared = rebound.with_wallet(None);
    let err = cleared
        .resolve(Access::Write, "supply_base", None, network.as_ref())
        .unwrap_err();
    assert_eq!(err, OptionsError::MissingCredential { operation: "supply_base" });
    assert_eq!(network.round_trips(), 0);
}

#[tokio::test]
async fn set_active_wallet_replaces_snapshot() {
    let (network, prices) = mocks();
    let sdk = sdk(network, prices, None);

    let before = sdk.options();
    sdk.set_active_wallet(Some(wallet(5)));
    let after = sdk.options();

    assert!(before.wallet().is_none());
    assert_eq!(
        after.wallet().map(|w| w.address()),
        Some(B256::repeat_byte(5))
    );

    sdk.set_active_wallet(None);
    assert!(sdk.options().wallet().is_none());
    assert!(after.wallet().is_some());
}

#[tokio::test]
async fn in_flight_write_keeps_wallet_it_started_with() {
    let log = event_log();
    let gate = Arc::new(Gate::default());
    let network = Arc::new(
        MockNetwork::new(log.clone()).with_gate(ContractFunction::SupplyBase, gate.clone()),
    );
    let sdk = Arc::new(sdk(
        network.clone(),
        Arc::new(MockPriceService::new(log)),
        Some(wallet(0x01)),
    ));

    let task = {
        let sdk = Arc::clone(&sdk);
        tokio::spawn(async move {
            let usdc = usdc();
            let amount = usdc.parse_amount("5").unwrap();
            sdk.supply_base(&usdc, &amount).await
        })
    };

    gate.entered.notified().await;
    sdk.set_active_wallet(Some(wallet(0x02)));
    gate.release.notify_one();

    let result = task.await.unwrap().unwrap();
    assert!(!result.transaction_id.is_empty());

    let submissions = network.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].1, B256::repeat_byte(0x01));
    assert_eq!(network.simulations()[0].1, B256::repeat_byte(0x01));

    // Operations started afterwards use the new wallet.
    let usdc = usdc();
    let amount = usdc.parse_amount("1").unwrap();
    gate.release.notify_one();
    sdk.supply_base(&usdc, &amount).await.unwrap();
    assert_eq!(network.submissions()[1].1, B256::repeat_byte(0x02));
}

#[tokio::test]
async fn malformed_account_fails_before_network() {
    let (network, prices) = mocks();
    let sdk = sdk(network.clone(), prices, None);

    let err = sdk.fetch_user_supply_borrow("0x1234").await.unwrap_err();
    assert!(matches!(err, QueryError::Build(_)));
    assert_eq!(network.round_trips(), 0);

    sdk.fetch_available_to_borrow(ACCOUNT).await.ok();
    assert_eq!(network.round_trips(), 1);
}

#[tokio::test]
async fn ephemeral_wallets_are_never_reused() {
    let (network, prices) = mocks();
    let sdk = sdk(network.clone(), prices, Some(wallet(0x01)));

    let first = sdk.ephemeral_wallet();
    let second = sdk.ephemeral_wallet();

    assert_ne!(first.address(), second.address());
    assert_ne!(first.address(), B256::repeat_byte(0x01));
    assert_eq!(network.round_trips(), 0);
}

#[tokio::test]
async fn write_created_before_wallet_change_keeps_its_wallet() {
    let (network, prices) = mocks();
    let sdk = sdk(network.clone(), prices, Some(wallet(0x01)));
    let usdc = usdc();
    let amount = usdc.parse_amount("3").unwrap();

    let pending = sdk.supply_base(&usdc, &amount);
    let mint = sdk.mint_token(&usdc, "1");
    sdk.set_active_wallet(None);

    pending.await.unwrap();
    mint.await.unwrap();

    let signers: Vec<B256> = network.submissions().into_iter().map(|(_, w)| w).collect();
    assert_eq!(signers, vec![B256::repeat_byte(0x01); 2]);

    let err = sdk.supply_base(&usdc, &amount).await.unwrap_err();
    assert!(matches!(
        err,
        SwayLandError::Options(OptionsError::MissingCredential { .. })
    ));
}
