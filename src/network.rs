// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Execution network boundary
//!
//! The SDK never talks to a node directly. Everything it needs from the
//! network (dry-run simulation, submission, waiting for execution, balances
//! and throwaway read signers) goes through [`ExecutionNetwork`], so a Fuel
//! client, a local test node or an in-memory mock can be plugged in.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Bytes, B256, U256};
use async_trait::async_trait;

use crate::call::PreparedCall;
use crate::errors::NetworkError;
use crate::types::asset::AssetId;
use crate::types::gas::GasAmount;

/// Key holder able to authorize transactions
///
/// Key custody is owned by the implementation; the SDK only needs the
/// account address and a way to have a payload signed.
#[async_trait]
pub trait Signer: Send + Sync + fmt::Debug {
    /// Account address of the signer
    fn address(&self) -> B256;

    /// Sign an arbitrary payload
    async fn sign(&self, payload: &[u8]) -> Result<Bytes, NetworkError>;
}

/// Shared handle to a [`Signer`]
///
/// Cloning is cheap; clones refer to the same signer.
#[derive(Clone)]
pub struct Wallet(Arc<dyn Signer>);

impl Wallet {
    /// Wrap a signer
    pub fn new(signer: impl Signer + 'static) -> Self {
        Self(Arc::new(signer))
    }

    /// Account address of the underlying signer
    pub fn address(&self) -> B256 {
        self.0.address()
    }

    /// The underlying signer
    pub fn signer(&self) -> &dyn Signer {
        self.0.as_ref()
    }
}

impl From<Arc<dyn Signer>> for Wallet {
    fn from(signer: Arc<dyn Signer>) -> Self {
        Self(signer)
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wallet").field(&self.address()).finish()
    }
}

/// Decoded return value of a contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallValue {
    /// `()`
    Unit,
    /// `bool`
    Bool(bool),
    /// `u64`
    U64(u64),
    /// `u256`
    U256(U256),
    /// `b256` and 32-byte ids
    B256(B256),
    /// Tuple, in declaration order
    Tuple(Vec<CallValue>),
    /// `Vec<T>`
    Vec(Vec<CallValue>),
    /// Struct fields, in declaration order
    Struct(Vec<(String, CallValue)>),
}

impl CallValue {
    /// Integer value if it fits a u64
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            CallValue::U64(v) => Some(*v),
            CallValue::U256(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Integer value widened to 256 bits
    pub fn as_u256(&self) -> Option<U256> {
        match self {
            CallValue::U64(v) => Some(U256::from(*v)),
            CallValue::U256(v) => Some(*v),
            _ => None,
        }
    }

    /// Both elements of a two-element tuple
    pub fn as_pair(&self) -> Option<(&CallValue, &CallValue)> {
        match self {
            CallValue::Tuple(items) => match items.as_slice() {
                [first, second] => Some((first, second)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Result of a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    /// Gas consumed by the simulated execution
    pub gas_used: GasAmount,
    /// Decoded return value
    pub value: CallValue,
}

/// Capability interface to an execution network
///
/// Implementations must not mutate chain state in [`simulate`](Self::simulate).
/// [`submit`](Self::submit) returns once the network has accepted the
/// transaction and assigned it an id; [`await_execution`](Self::await_execution)
/// waits for the outcome.
#[async_trait]
pub trait ExecutionNetwork: Send + Sync {
    /// Asset id in which fees are paid
    fn base_asset_id(&self) -> AssetId;

    /// Dry-run a call signed by `wallet`
    async fn simulate(
        &self,
        call: &PreparedCall,
        wallet: &Wallet,
    ) -> Result<SimulationOutcome, NetworkError>;

    /// Sign and submit a call, returning the transaction id
    async fn submit(&self, call: &PreparedCall, wallet: &Wallet) -> Result<String, NetworkError>;

    /// Wait for a submitted transaction and decode the call's return value
    async fn await_execution(
        &self,
        call: &PreparedCall,
        transaction_id: &str,
    ) -> Result<CallValue, NetworkError>;

    /// Balance of `asset` held by `owner`, in integer units
    async fn balance(&self, owner: B256, asset: AssetId) -> Result<U256, NetworkError>;

    /// Fresh unfunded signer bound to this network, used for reads
    fn generate_wallet(&self) -> Wallet;
}

/// Run a network round trip under a time budget
///
/// Dropping the inner future on expiry abandons the round trip; if it was a
/// submission the network may still include the transaction.
pub(crate) async fn with_timeout<T, F>(
    operation: &'static str,
    timeout: Duration,
    transaction_id: Option<&str>,
    round_trip: F,
) -> Result<T, NetworkError>
where
    F: Future<Output = Result<T, NetworkError>>,
{
    match tokio::time::timeout(timeout, round_trip).await {
        Ok(result) => result,
        Err(_) => Err(NetworkError::timeout(
            operation,
            timeout,
            transaction_id.map(str::to_string),
        )),
    }
}
