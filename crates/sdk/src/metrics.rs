//! Client telemetry hooks.
//!
//! The engine and transport report what they do through [`SdkMetrics`]. The
//! client holds one shared instance; by default it is [`NoopSdkMetrics`].
//! [`MetricsSdkMetrics`] publishes to the `metrics` facade, so whichever
//! recorder the application installs receives the series below.
//!
//! | Series | Kind | Labels |
//! |--------|------|--------|
//! | `hashgraph_sdk_requests_total` | counter | `method`, `outcome` |
//! | `hashgraph_sdk_request_duration_seconds` | histogram | `method` |
//! | `hashgraph_sdk_retries_total` | counter | `method`, `attempt`, `status` |
//! | `hashgraph_sdk_node_backoffs_total` | counter | `node` |
//! | `hashgraph_sdk_node_backoff_seconds` | histogram | `node` |
//! | `hashgraph_sdk_connections_total` | counter | `endpoint`, `event` |
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hashgraph_sdk::{AccountId, ClientConfig, MetricsSdkMetrics};
//!
//! # fn example() -> hashgraph_sdk::Result<()> {
//! let config = ClientConfig::builder()
//!     .with_node("127.0.0.1:50211", AccountId::from_num(3))
//!     .with_metrics(Arc::new(MetricsSdkMetrics))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::{fmt, sync::Arc, time::Duration};

use hashgraph_types::AccountId;

const REQUESTS: &str = "hashgraph_sdk_requests_total";
const REQUEST_SECONDS: &str = "hashgraph_sdk_request_duration_seconds";
const RETRIES: &str = "hashgraph_sdk_retries_total";
const NODE_BACKOFFS: &str = "hashgraph_sdk_node_backoffs_total";
const NODE_BACKOFF_SECONDS: &str = "hashgraph_sdk_node_backoff_seconds";
const CONNECTIONS: &str = "hashgraph_sdk_connections_total";

/// Something that happened to a node's gRPC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// A channel to the node was opened.
    Connected,
    /// The node's cached channel was discarded.
    Disconnected,
    /// Opening a channel failed.
    Failed,
}

impl ConnectionEvent {
    /// Label value used in the `event` label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ConnectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for client telemetry.
///
/// Every hook defaults to doing nothing. One instance is shared by all
/// in-flight calls, hence `Send + Sync`.
pub trait SdkMetrics: Send + Sync + fmt::Debug {
    /// One execute call finished, after all of its attempts.
    ///
    /// `method` is the short RPC name such as `cryptoTransfer`.
    fn record_request(&self, method: &str, duration: Duration, success: bool) {
        let _ = (method, duration, success);
    }

    /// The engine is about to make attempt number `attempt` (2 for the first
    /// retry) because the previous one ended with `status`.
    fn record_retry(&self, method: &str, attempt: u32, status: &str) {
        let _ = (method, attempt, status);
    }

    /// `node` was backed off for `backoff` after a retryable answer.
    fn record_node_backoff(&self, node: AccountId, backoff: Duration) {
        let _ = (node, backoff);
    }

    /// The transport's channel to `endpoint` changed.
    fn record_connection(&self, endpoint: &str, event: ConnectionEvent) {
        let _ = (endpoint, event);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy)]
pub struct NoopSdkMetrics;

impl SdkMetrics for NoopSdkMetrics {}

/// Publishes to the `metrics` facade under `hashgraph_sdk_*` names.
#[derive(Debug, Clone, Copy)]
pub struct MetricsSdkMetrics;

impl SdkMetrics for MetricsSdkMetrics {
    fn record_request(&self, method: &str, duration: Duration, success: bool) {
        let outcome = if success { "ok" } else { "failed" };
        metrics::counter!(REQUESTS, "method" => method.to_owned(), "outcome" => outcome).increment(1);
        metrics::histogram!(REQUEST_SECONDS, "method" => method.to_owned()).record(duration.as_secs_f64());
    }

    fn record_retry(&self, method: &str, attempt: u32, status: &str) {
        let labels = [
            ("method", method.to_owned()),
            ("attempt", attempt.to_string()),
            ("status", status.to_owned()),
        ];
        metrics::counter!(RETRIES, &labels).increment(1);
    }

    fn record_node_backoff(&self, node: AccountId, backoff: Duration) {
        let node = node.to_string();
        metrics::counter!(NODE_BACKOFFS, "node" => node.clone()).increment(1);
        metrics::histogram!(NODE_BACKOFF_SECONDS, "node" => node).record(backoff.as_secs_f64());
    }

    fn record_connection(&self, endpoint: &str, event: ConnectionEvent) {
        metrics::counter!(CONNECTIONS, "endpoint" => endpoint.to_owned(), "event" => event.as_str()).increment(1);
    }
}

pub(crate) fn default_metrics() -> Arc<dyn SdkMetrics> {
    Arc::new(NoopSdkMetrics)
}
