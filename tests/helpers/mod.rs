// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for swayland integration tests
//!
//! Provides in-memory implementations of the network and price service
//! boundaries that record every request in a shared, ordered event log.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy_primitives::{Bytes, B256, U256};
use async_trait::async_trait;
use swayland::{
    Asset, AssetId, CallValue, ContractAddresses, ContractFunction, ExecutionNetwork, FeedId,
    GasAmount, NetworkError, PreparedCall, PriceService, PriceServiceError, Signer,
    SimulationOutcome, SwayLand, SwayLandConfig, SwayLandConfigBuilder, TokenDecimals, Wallet,
};
use tokio::sync::Notify;

/// Everything the mocks observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchPrices(Vec<FeedId>),
    Simulate { call: PreparedCall, wallet: B256 },
    Submit { call: PreparedCall, wallet: B256 },
    AwaitExecution { transaction_id: String },
    Balance { owner: B256, asset: AssetId },
    GenerateWallet(B256),
}

/// Event log shared between mocks
pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Signer with a fixed address
#[derive(Debug)]
pub struct MockSigner {
    address: B256,
}

impl MockSigner {
    pub fn new(address: B256) -> Self {
        Self { address }
    }
}

#[async_trait]
impl Signer for MockSigner {
    fn address(&self) -> B256 {
        self.address
    }

    async fn sign(&self, payload: &[u8]) -> Result<Bytes, NetworkError> {
        let mut signature = self.address.to_vec();
        signature.extend_from_slice(payload);
        Ok(Bytes::from(signature))
    }
}

/// Wallet backed by a [`MockSigner`] whose address is `byte` repeated
pub fn wallet(byte: u8) -> Wallet {
    Wallet::new(MockSigner::new(B256::repeat_byte(byte)))
}

/// Pauses simulation of one function until released
///
/// `entered` is notified when the gated simulation starts; the simulation
/// then waits for `release`.
#[derive(Debug, Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// In-memory [`ExecutionNetwork`]
///
/// Simulations report 100 000 gas unless configured otherwise. Return values
/// default to `CallValue::Unit`.
///
/// # Example
///
/// ```rust,ignore
/// let network = MockNetwork::new(log.clone())
///     .with_gas_used(ContractFunction::SupplyBase, GasAmount::new(100_000))
///     .fail_simulation(ContractFunction::WithdrawBase, "NotCollateralized");
/// ```
pub struct MockNetwork {
    log: EventLog,
    base_asset: AssetId,
    gas_used: HashMap<ContractFunction, GasAmount>,
    values: HashMap<ContractFunction, CallValue>,
    simulation_failures: HashMap<ContractFunction, String>,
    submission_failure: Option<String>,
    execution_failure: Option<String>,
    balance: U256,
    gate: Option<(ContractFunction, Arc<Gate>)>,
    round_trips: AtomicUsize,
    wallets_generated: AtomicU64,
    transactions: AtomicU64,
}

impl MockNetwork {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            base_asset: B256::repeat_byte(0xba),
            gas_used: HashMap::new(),
            values: HashMap::new(),
            simulation_failures: HashMap::new(),
            submission_failure: None,
            execution_failure: None,
            balance: U256::ZERO,
            gate: None,
            round_trips: AtomicUsize::new(0),
            wallets_generated: AtomicU64::new(0),
            transactions: AtomicU64::new(0),
        }
    }

    pub fn with_gas_used(mut self, function: ContractFunction, gas: GasAmount) -> Self {
        self.gas_used.insert(function, gas);
        self
    }

    pub fn with_value(mut self, function: ContractFunction, value: CallValue) -> Self {
        self.values.insert(function, value);
        self
    }

    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_gate(mut self, function: ContractFunction, gate: Arc<Gate>) -> Self {
        self.gate = Some((function, gate));
        self
    }

    pub fn fail_simulation(mut self, function: ContractFunction, reason: &str) -> Self {
        self.simulation_failures.insert(function, reason.to_string());
        self
    }

    pub fn fail_submission(mut self, reason: &str) -> Self {
        self.submission_failure = Some(reason.to_string());
        self
    }

    pub fn fail_execution(mut self, reason: &str) -> Self {
        self.execution_failure = Some(reason.to_string());
        self
    }

    pub fn base_asset(&self) -> AssetId {
        self.base_asset
    }

    /// Simulate, submit, await and balance requests seen so far
    pub fn round_trips(&self) -> usize {
        self.round_trips.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<(PreparedCall, B256)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Submit { call, wallet } => Some((call, wallet)),
                _ => None,
            })
            .collect()
    }

    pub fn simulations(&self) -> Vec<(PreparedCall, B256)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Simulate { call, wallet } => Some((call, wallet)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.log.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ExecutionNetwork for MockNetwork {
    fn base_asset_id(&self) -> AssetId {
        self.base_asset
    }

    async fn simulate(
        &self,
        call: &PreparedCall,
        wallet: &Wallet,
    ) -> Result<SimulationOutcome, NetworkError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        self.record(Event::Simulate {
            call: call.clone(),
            wallet: wallet.address(),
        });

        if let Some((function, gate)) = &self.gate {
            if *function == call.function {
                gate.entered.notify_one();
                gate.release.notified().await;
            }
        }

        if let Some(reason) = self.simulation_failures.get(&call.function) {
            return Err(NetworkError::reverted(reason.clone(), None));
        }

        Ok(SimulationOutcome {
            gas_used: self
                .gas_used
                .get(&call.function)
                .copied()
                .unwrap_or(GasAmount::new(100_000)),
            value: self
                .values
                .get(&call.function)
                .cloned()
                .unwrap_or(CallValue::Unit),
        })
    }

    async fn submit(&self, call: &PreparedCall, wallet: &Wallet) -> Result<String, NetworkError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        self.record(Event::Submit {
            call: call.clone(),
            wallet: wallet.address(),
        });

        if let Some(reason) = &self.submission_failure {
            return Err(NetworkError::insufficient_funds(reason.clone()));
        }

        wallet.signer().sign(call.function.name().as_bytes()).await?;
        let n = self.transactions.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("0x{n:064x}"))
    }

    async fn await_execution(
        &self,
        call: &PreparedCall,
        transaction_id: &str,
    ) -> Result<CallValue, NetworkError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        self.record(Event::AwaitExecution {
            transaction_id: transaction_id.to_string(),
        });

        if let Some(reason) = &self.execution_failure {
            return Err(NetworkError::reverted(
                reason.clone(),
                Some(transaction_id.to_string()),
            ));
        }

        Ok(self
            .values
            .get(&call.function)
            .cloned()
            .unwrap_or(CallValue::Unit))
    }

    async fn balance(&self, owner: B256, asset: AssetId) -> Result<U256, NetworkError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        self.record(Event::Balance { owner, asset });
        Ok(self.balance)
    }

    fn generate_wallet(&self) -> Wallet {
        let n = self.wallets_generated.fetch_add(1, Ordering::SeqCst) + 1;
        let mut address = [0xee; 32];
        address[24..].copy_from_slice(&n.to_be_bytes());
        let address = B256::from(address);
        self.record(Event::GenerateWallet(address));
        Wallet::new(MockSigner::new(address))
    }
}

/// In-memory [`PriceService`]
pub struct MockPriceService {
    log: EventLog,
    updates: Vec<Bytes>,
    failure: Option<u16>,
    requests: AtomicUsize,
}

impl MockPriceService {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            updates: vec![Bytes::from_static(b"signed-update")],
            failure: None,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn with_updates(mut self, updates: Vec<Bytes>) -> Self {
        self.updates = updates;
        self
    }

    /// Answer every request with this HTTP status
    pub fn failing_with(mut self, status: u16) -> Self {
        self.failure = Some(status);
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceService for MockPriceService {
    async fn fetch_signed_updates(
        &self,
        feed_ids: &[FeedId],
    ) -> Result<Vec<Bytes>, PriceServiceError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.log
            .lock()
            .unwrap()
            .push(Event::FetchPrices(feed_ids.to_vec()));

        match self.failure {
            Some(status) => Err(PriceServiceError::Status {
                status,
                body: "service unavailable".to_string(),
            }),
            None => Ok(self.updates.clone()),
        }
    }
}

pub fn contracts() -> ContractAddresses {
    ContractAddresses {
        lend_market: B256::repeat_byte(0x11),
        oracle: B256::repeat_byte(0x22),
        token_factory: B256::repeat_byte(0x33),
    }
}

pub fn usdc() -> Asset {
    Asset::new(B256::repeat_byte(0x06), "USDC", TokenDecimals::USDC)
}

pub fn eth() -> Asset {
    Asset::new(B256::repeat_byte(0x09), "ETH", TokenDecimals::FUEL_ETH)
}

pub fn feed(byte: u8) -> FeedId {
    FeedId::new(B256::repeat_byte(byte))
}

/// Local configuration with test contracts
pub fn config(wallet: Option<Wallet>) -> SwayLandConfig {
    let builder = SwayLandConfigBuilder::new("http://127.0.0.1:4000/v1/graphql")
        .contract_addresses(contracts());
    match wallet {
        Some(wallet) => builder.wallet(wallet),
        None => builder,
    }
    .build()
    .unwrap()
}

/// Client wired to the given mocks
pub fn sdk(
    network: Arc<MockNetwork>,
    prices: Arc<MockPriceService>,
    wallet: Option<Wallet>,
) -> SwayLand {
    init_tracing();
    SwayLand::with_price_service(config(wallet), network, prices)
}
