//! Execution engine: one logical execute call, many attempts.
//!
//! Each call runs the loop
//!
//! ```text
//! Selecting -> Sending -> Classifying -> Done(Ok)
//!                                     -> Done(Fatal)
//!                                     -> Backoff -> Selecting
//! ```
//!
//! until a terminal answer arrives, `max_attempts` is used up, or the
//! deadline passes. Retryable statuses never leave this module; callers see
//! the decoded response or exactly one [`SdkError`].

use std::{collections::HashSet, fmt, future, sync::Arc, time::Duration};

use bytes::Bytes;
use hashgraph_types::{AccountId, NodeEndpoint, Status, TransactionId};
use rand::Rng;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{
    classify::{AttemptStatus, Classification, classify, classify_transport},
    config::RetryPolicy,
    error::{DecodingSnafu, ExhaustedReason, Result, SdkError},
    metrics::SdkMetrics,
    registry::{NodeRegistry, instant_after},
    transport::{Method, Transport},
};

/// Decoded answer from one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    /// Status the node reported.
    pub status: Status,
    /// Decoded payload; may be absent when the status is not `Ok`.
    pub response: Option<T>,
}

impl<T> Reply<T> {
    /// A reply carrying a payload.
    pub fn new(status: Status, response: T) -> Self {
        Self { status, response: Some(response) }
    }

    /// A reply with only a status.
    pub fn status_only(status: Status) -> Self {
        Self { status, response: None }
    }
}

/// A request the engine can run: it knows its method, how to serialize
/// itself for a node, and how to read the node's answer.
pub trait Executable: Send + Sync {
    /// Decoded response type.
    type Response: Send;

    /// RPC method the request is sent to.
    fn method(&self) -> Method;

    /// Nodes the request is bound to; `None` means any node.
    fn node_account_ids(&self) -> Option<&[AccountId]> {
        None
    }

    /// Transaction id, for transactions.
    fn transaction_id(&self) -> Option<TransactionId> {
        None
    }

    /// Serializes the request for `node`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Encoding`] if the request cannot be sent to `node`.
    fn encode(&self, node: &NodeEndpoint) -> Result<Bytes>;

    /// Parses `node`'s answer.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Decoding`] on invalid bytes.
    fn decode(&self, node: &NodeEndpoint, bytes: Bytes) -> Result<Reply<Self::Response>>;

    /// Maps the reply status to an action.
    fn classify(&self, status: Status) -> Classification {
        classify(status)
    }
}

/// Diagnostic record of a single attempt.
#[derive(Debug, Clone)]
pub struct ExecutionAttempt {
    /// 1-based attempt number.
    pub number: u32,
    /// Node the attempt went to.
    pub node: AccountId,
    /// Encoded request size.
    pub bytes_sent: usize,
    /// Status the attempt ended with, if it ended.
    pub status: Option<AttemptStatus>,
    /// Time spent on the wire.
    pub elapsed: Duration,
}

/// Runs [`Executable`] requests against the network.
#[derive(Clone)]
pub struct ExecutionEngine {
    registry: Arc<NodeRegistry>,
    transport: Arc<dyn Transport>,
    metrics: Arc<dyn SdkMetrics>,
    cancel: CancellationToken,
    grpc_deadline: Option<Duration>,
}

impl fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("nodes", &self.registry.len())
            .field("transport", &self.transport)
            .field("grpc_deadline", &self.grpc_deadline)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

enum Step<T> {
    Done(T),
    Retry(AttemptStatus),
}

impl ExecutionEngine {
    /// Creates an engine.
    ///
    /// `grpc_deadline` bounds each individual attempt; an attempt that runs
    /// longer counts as `DEADLINE_EXCEEDED`.
    #[must_use]
    pub fn new(
        registry: Arc<NodeRegistry>,
        transport: Arc<dyn Transport>,
        metrics: Arc<dyn SdkMetrics>,
        cancel: CancellationToken,
        grpc_deadline: Option<Duration>,
    ) -> Self {
        Self { registry, transport, metrics, cancel, grpc_deadline }
    }

    /// The node registry this engine selects from.
    #[must_use]
    pub fn registry(&self) -> &Arc<NodeRegistry> {
        &self.registry
    }

    /// Executes `request`, retrying across nodes per `policy`.
    ///
    /// # Errors
    ///
    /// - [`SdkError::FatalStatus`] on the first fatal status
    /// - [`SdkError::Exhausted`] when attempts or `deadline` run out
    /// - [`SdkError::NoHealthyNodes`] if no candidate node exists
    /// - [`SdkError::Encoding`] / [`SdkError::Decoding`] for malformed messages
    /// - [`SdkError::Shutdown`] if the client closes mid-call
    pub async fn execute<E: Executable>(
        &self,
        request: &E,
        policy: &RetryPolicy,
        deadline: Option<Duration>,
    ) -> Result<E::Response> {
        let method = request.method();
        let started = Instant::now();
        let result = self.run(request, policy, deadline.map(|d| instant_after(started, d))).await;

        self.metrics.record_request(method.name(), started.elapsed(), result.is_ok());
        if let Err(error @ SdkError::Exhausted { .. }) = &result {
            tracing::info!(
                method = method.name(),
                transaction_id = ?request.transaction_id(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %error,
                "Request exhausted"
            );
        }
        result
    }

    async fn run<E: Executable>(
        &self,
        request: &E,
        policy: &RetryPolicy,
        deadline: Option<Instant>,
    ) -> Result<E::Response> {
        if self.cancel.is_cancelled() {
            return Err(SdkError::Shutdown);
        }

        let method = request.method();
        let transaction_id = request.transaction_id();
        let mut tried = HashSet::new();
        let mut last_node = None;
        let mut last_status = None;

        let exhausted = |reason, attempts, last_node, last_status| SdkError::Exhausted {
            reason,
            attempts,
            last_node,
            last_status,
        };

        for attempt in 1..=policy.max_attempts {
            // Selecting
            let node = self.registry.pick_node_among(request.node_account_ids(), &tried)?;
            tried.insert(node.account_id());

            // Every candidate is backed off: wait for the chosen one.
            let wait = self.registry.backoff_remaining(node.account_id());
            if !wait.is_zero() {
                if deadline.is_some_and(|at| instant_after(Instant::now(), wait) >= at) {
                    return Err(exhausted(ExhaustedReason::Deadline, attempt - 1, last_node, last_status));
                }
                tracing::debug!(node = %node, wait_ms = wait.as_millis() as u64, "All nodes backed off; waiting");
                self.sleep(wait).await?;
            }

            // Sending
            let body = request.encode(&node)?;
            let mut record = ExecutionAttempt {
                number: attempt,
                node: node.account_id(),
                bytes_sent: body.len(),
                status: None,
                elapsed: Duration::ZERO,
            };
            let sent_at = Instant::now();

            let sent = tokio::select! {
                biased;
                () = self.cancel.cancelled() => return Err(SdkError::Shutdown),
                () = sleep_until(deadline) => {
                    return Err(exhausted(ExhaustedReason::Deadline, attempt, Some(node.account_id()), last_status));
                },
                sent = self.send(&node, method, body) => sent,
            };
            record.elapsed = sent_at.elapsed();

            // Classifying
            let step = match sent {
                Ok(bytes) => {
                    let reply = request.decode(&node, bytes)?;
                    record.status = Some(AttemptStatus::Ledger(reply.status));
                    match request.classify(reply.status) {
                        Classification::Ok => {
                            tracing::debug!(attempt = ?record, method = method.name(), "Attempt succeeded");
                            self.registry.record_success(node.account_id());
                            let response = reply.response.ok_or_else(|| {
                                DecodingSnafu { message: format!("{method} reply from {node} has no payload") }
                                    .build()
                            })?;
                            Step::Done(response)
                        },
                        Classification::Fatal => {
                            tracing::debug!(attempt = ?record, method = method.name(), "Attempt failed");
                            return Err(SdkError::FatalStatus {
                                status: AttemptStatus::Ledger(reply.status),
                                node: node.account_id(),
                                transaction_id,
                            });
                        },
                        Classification::Retryable => Step::Retry(AttemptStatus::Ledger(reply.status)),
                    }
                },
                Err(status) => {
                    let attempt_status = AttemptStatus::Transport(status.code());
                    record.status = Some(attempt_status);
                    match classify_transport(status.code(), status.message()) {
                        Classification::Retryable => Step::Retry(attempt_status),
                        Classification::Ok | Classification::Fatal => {
                            tracing::debug!(
                                attempt = ?record,
                                method = method.name(),
                                message = status.message(),
                                "Attempt failed at transport"
                            );
                            return Err(SdkError::FatalStatus {
                                status: attempt_status,
                                node: node.account_id(),
                                transaction_id,
                            });
                        },
                    }
                },
            };

            let status = match step {
                Step::Done(response) => return Ok(response),
                Step::Retry(status) => status,
            };

            // Backoff
            last_node = Some(node.account_id());
            last_status = Some(status);
            if let Some(node_backoff) = self.registry.record_failure(node.account_id()) {
                self.metrics.record_node_backoff(node.account_id(), node_backoff);
                tracing::warn!(
                    node = %node,
                    status = %status,
                    backoff_ms = node_backoff.as_millis() as u64,
                    "Node returned retryable status; backing off node"
                );
            }

            if attempt == policy.max_attempts {
                break;
            }

            let delay = backoff_interval(policy, attempt, jitter_sample());
            if deadline.is_some_and(|at| instant_after(Instant::now(), delay) >= at) {
                return Err(exhausted(ExhaustedReason::Deadline, attempt, last_node, last_status));
            }

            self.metrics.record_retry(method.name(), attempt + 1, &status.label());
            tracing::debug!(
                attempt = ?record,
                method = method.name(),
                delay_ms = delay.as_millis() as u64,
                "Retrying"
            );
            self.sleep(delay).await?;
        }

        Err(exhausted(ExhaustedReason::MaxAttempts, policy.max_attempts, last_node, last_status))
    }

    /// One wire call, bounded by the per-attempt deadline.
    async fn send(&self, node: &NodeEndpoint, method: Method, body: Bytes) -> std::result::Result<Bytes, tonic::Status> {
        let call = self.transport.call(node, method, body);
        match self.grpc_deadline {
            Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                Err(tonic::Status::deadline_exceeded(format!("{method} to {node} exceeded {limit:?}")))
            }),
            None => call.await,
        }
    }

    /// Sleeps unless the client closes first.
    async fn sleep(&self, duration: Duration) -> Result<()> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(SdkError::Shutdown),
            () = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => future::pending().await,
    }
}

fn jitter_sample() -> f64 {
    rand::rng().random::<f64>()
}

/// Backoff before the attempt after `attempt` (1-based).
///
/// `min(max_backoff, min_backoff * 2^(attempt-1))` plus `jitter * sample` of
/// that interval, capped at `max_backoff`. `sample` must be in `[0, 1)`.
#[must_use]
pub fn backoff_interval(policy: &RetryPolicy, attempt: u32, sample: f64) -> Duration {
    let exponent = attempt.saturating_sub(1).min(31);
    let interval = policy.min_backoff.saturating_mul(1u32 << exponent).min(policy.max_backoff);
    let factor = (policy.jitter * sample).clamp(0.0, 1.0);
    let jitter = Duration::try_from_secs_f64(interval.as_secs_f64() * factor).unwrap_or_default();
    interval.saturating_add(jitter).min(policy.max_backoff)
}
