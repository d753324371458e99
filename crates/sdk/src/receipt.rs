//! Receipt polling.
//!
//! A node accepting a transaction says nothing about consensus. The receipt
//! poller repeats a [`TransactionReceiptQuery`] at a fixed interval until the
//! receipt status is terminal. Each poll is one engine call, so node-level
//! retries happen inside a poll and do not count against `max_polls`.

use std::time::Duration;

use backon::{ConstantBuilder, Retryable};
use hashgraph_types::{AccountId, Status, TransactionId, TransactionReceipt};
use parking_lot::Mutex;
use snafu::ensure;
use tokio::time::Instant;

use crate::{
    classify::{AttemptStatus, Classification, classify_receipt},
    client::Client,
    error::{ConfigSnafu, ExhaustedReason, Result, SdkError},
    query::TransactionReceiptQuery,
};

const DEFAULT_MAX_POLLS: u32 = 20;
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Receipt polling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPollConfig {
    /// Maximum number of polls, including the first.
    pub max_polls: u32,
    /// Fixed wait between polls.
    pub interval: Duration,
    /// Overall bound on polling, if any.
    pub deadline: Option<Duration>,
    /// Raise [`SdkError::ReceiptStatus`] for a terminal failure receipt
    /// instead of returning it.
    pub validate_status: bool,
}

impl Default for ReceiptPollConfig {
    fn default() -> Self {
        Self {
            max_polls: DEFAULT_MAX_POLLS,
            interval: DEFAULT_POLL_INTERVAL,
            deadline: None,
            validate_status: true,
        }
    }
}

#[bon::bon]
impl ReceiptPollConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] if `max_polls` is zero, or `interval` or
    /// `deadline` is zero.
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_MAX_POLLS)] max_polls: u32,
        #[builder(default = DEFAULT_POLL_INTERVAL)] interval: Duration,
        deadline: Option<Duration>,
        #[builder(default = true)] validate_status: bool,
    ) -> Result<Self> {
        let config = Self { max_polls, interval, deadline, validate_status };
        config.validate()?;
        Ok(config)
    }
}

impl ReceiptPollConfig {
    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] for a zero poll count, interval, or deadline.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_polls >= 1, ConfigSnafu { message: "max_polls must be >= 1" });
        ensure!(!self.interval.is_zero(), ConfigSnafu { message: "poll interval must be > 0" });
        ensure!(
            self.deadline.is_none_or(|d| !d.is_zero()),
            ConfigSnafu { message: "poll deadline cannot be zero" }
        );
        Ok(())
    }
}

/// Why a single poll did not produce a terminal receipt.
#[derive(Debug)]
enum PollError {
    Pending(Status),
    Failed(SdkError),
}

/// Polls for the receipt of `transaction_id` until it is terminal.
///
/// `nodes` restricts the query to the given nodes; `None` lets each poll go
/// to any node.
///
/// # Errors
///
/// - [`SdkError::ReceiptStatus`] for a terminal failure receipt when
///   `validate_status` is set
/// - [`SdkError::Exhausted`] when `max_polls` or the deadline run out while
///   the receipt is still pending
/// - any error from the underlying query execution
pub async fn wait_for_receipt(
    client: &Client,
    transaction_id: TransactionId,
    nodes: Option<Vec<AccountId>>,
    config: &ReceiptPollConfig,
) -> Result<TransactionReceipt> {
    config.validate()?;

    let mut query = TransactionReceiptQuery::new(transaction_id);
    if let Some(nodes) = nodes {
        query = query.with_node_account_ids(nodes);
    }

    let polls = Mutex::new(0u32);
    let last_status = Mutex::new(None::<Status>);
    let started = Instant::now();

    let poll = {
        let (query, polls, last_status) = (&query, &polls, &last_status);
        move || async move {
            *polls.lock() += 1;
            let receipt = client.execute(query).await.map_err(PollError::Failed)?;
            *last_status.lock() = Some(receipt.status);
            match classify_receipt(receipt.status) {
                Classification::Retryable => Err(PollError::Pending(receipt.status)),
                Classification::Ok | Classification::Fatal => Ok(receipt),
            }
        }
    };

    let backoff = ConstantBuilder::default()
        .with_delay(config.interval)
        .with_max_times(config.max_polls.saturating_sub(1) as usize);

    let polling = poll
        .retry(backoff)
        .sleep(tokio::time::sleep)
        .when(|e: &PollError| matches!(e, PollError::Pending(_)))
        .notify(|e: &PollError, interval: Duration| {
            if let PollError::Pending(status) = e {
                tracing::debug!(
                    %transaction_id,
                    %status,
                    interval_ms = interval.as_millis() as u64,
                    "Receipt pending"
                );
            }
        });

    let outcome = match config.deadline {
        Some(deadline) => match tokio::time::timeout(deadline, polling).await {
            Ok(outcome) => outcome,
            Err(_) => {
                return Err(exhausted(ExhaustedReason::Deadline, *polls.lock(), *last_status.lock()));
            },
        },
        None => polling.await,
    };

    let receipt = match outcome {
        Ok(receipt) => receipt,
        Err(PollError::Pending(status)) => {
            let error = exhausted(ExhaustedReason::MaxAttempts, *polls.lock(), Some(status));
            tracing::info!(
                %transaction_id,
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %error,
                "Receipt polling exhausted"
            );
            return Err(error);
        },
        Err(PollError::Failed(error)) => return Err(error),
    };

    if config.validate_status && classify_receipt(receipt.status) == Classification::Fatal {
        return Err(SdkError::ReceiptStatus { status: receipt.status, transaction_id });
    }
    Ok(receipt)
}

fn exhausted(reason: ExhaustedReason, attempts: u32, last_status: Option<Status>) -> SdkError {
    SdkError::Exhausted { reason, attempts, last_node: None, last_status: last_status.map(AttemptStatus::Ledger) }
}
