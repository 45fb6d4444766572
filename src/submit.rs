// SPDX-FileCopyrightText: 2025 SwayLend Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Gas estimation and submission
//!
//! [`TransactionSubmitter::estimate_and_send`] runs a prepared call through
//! four steps:
//!
//! 1. Simulate the call without a gas limit to learn the gas it uses
//! 2. `gas_limit = ceil(gas_used * gas_limit_multiplier)`
//! 3. Submit the call with that limit
//! 4. Wait for execution and return the transaction id and decoded value
//!
//! Nothing is retried. Dropping the returned future before step 3 completes
//! abandons the operation without submitting anything; after that the
//! transaction may still be included, so cancellation only stops waiting.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, Instrument};

use crate::call::PreparedCall;
use crate::errors::TransactionError;
use crate::network::{with_timeout, CallValue, ExecutionNetwork};
use crate::options::CallOptions;
use crate::spans;
use crate::types::gas::GasAmount;

/// Outcome of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Transaction id assigned by the network
    pub transaction_id: String,
    /// Decoded return value of the call
    pub value: CallValue,
    /// Gas limit the transaction was submitted with
    pub gas_limit: GasAmount,
}

/// Estimates, submits and awaits prepared calls
#[derive(Clone)]
pub struct TransactionSubmitter {
    network: Arc<dyn ExecutionNetwork>,
    timeout: Duration,
}

impl TransactionSubmitter {
    /// `timeout` bounds each network round trip separately
    pub fn new(network: Arc<dyn ExecutionNetwork>, timeout: Duration) -> Self {
        Self { network, timeout }
    }

    /// Estimate gas for `call`, submit it with headroom and await execution
    ///
    /// # Errors
    ///
    /// - [`TransactionError::EstimationFailed`] when the simulation fails;
    ///   nothing was submitted
    /// - [`TransactionError::GasLimitOverflow`] when the multiplied limit
    ///   does not fit a u64; nothing was submitted
    /// - [`TransactionError::SubmissionFailed`] when submission or execution
    ///   fails, carrying the transaction id if one was assigned
    pub async fn estimate_and_send(
        &self,
        call: PreparedCall,
        options: &CallOptions,
    ) -> Result<TransactionResult, TransactionError> {
        let function = call.function.name();
        let span = spans::estimate_and_send(function, options.wallet());

        async move {
            let estimate = with_timeout(
                "simulate",
                self.timeout,
                None,
                self.network.simulate(&call, options.wallet()),
            )
            .await
            .map_err(|e| TransactionError::estimation_failed(function, e))?;

            let multiplier = options.gas_limit_multiplier();
            let gas_limit = multiplier.gas_limit(estimate.gas_used).ok_or_else(|| {
                TransactionError::GasLimitOverflow {
                    gas_used: estimate.gas_used,
                    multiplier: multiplier.clone(),
                }
            })?;
            debug!(gas_used = %estimate.gas_used, %gas_limit, %multiplier, "Estimated gas");

            let call = call.with_gas_limit(gas_limit);
            let transaction_id = with_timeout(
                "submit",
                self.timeout,
                None,
                self.network.submit(&call, options.wallet()),
            )
            .await
            .map_err(|e| TransactionError::submission_failed(function, None, e))?;
            info!(transaction_id = %transaction_id, %gas_limit, "Transaction submitted");

            let value = with_timeout(
                "await_execution",
                self.timeout,
                Some(transaction_id.as_str()),
                self.network.await_execution(&call, &transaction_id),
            )
            .await
            .map_err(|e| {
                TransactionError::submission_failed(function, Some(transaction_id.clone()), e)
            })?;

            Ok(TransactionResult {
                transaction_id,
                value,
                gas_limit,
            })
        }
        .instrument(span)
        .await
    }
}
