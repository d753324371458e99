//! What a [`Client`](crate::Client) needs to know before its first call.
//!
//! A configuration names the consensus nodes, optionally the operator that
//! pays for and signs transactions, and the pacing knobs: request retries,
//! per-node backoff, deadlines. Everything except the network has a default.
//! [`ClientConfigBuilder::from_json`] reads the same settings from a file.

use std::{collections::BTreeMap, fmt, sync::Arc, time::Duration};

use hashgraph_types::{AccountId, NodeEndpoint};
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::{
    error::{ConfigSnafu, InvalidUrlSnafu, Result, SdkError},
    metrics::{SdkMetrics, default_metrics},
    signer::{LocalSigner, Signer},
};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_GRPC_DEADLINE: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_MIN_BACKOFF: Duration = Duration::from_millis(250);
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(8);
const DEFAULT_JITTER: f64 = 0.1;

const DEFAULT_NODE_MIN_BACKOFF: Duration = Duration::from_secs(8);
const DEFAULT_NODE_MAX_BACKOFF: Duration = Duration::from_secs(3600);

/// The account paying for transactions and the key that signs for it.
#[derive(Clone)]
pub struct Operator {
    /// Paying account.
    pub account_id: AccountId,
    /// Signer for the account's key.
    pub signer: Arc<dyn Signer>,
}

impl Operator {
    /// Pairs an account with its signer.
    #[must_use]
    pub fn new(account_id: AccountId, signer: Arc<dyn Signer>) -> Self {
        Self { account_id, signer }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("account_id", &self.account_id)
            .field("public_key", &self.signer.public_key())
            .finish()
    }
}

/// A validated client configuration. Obtain one from [`ClientConfig::builder`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) network: Vec<NodeEndpoint>,
    pub(crate) operator: Option<Operator>,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) node_backoff: NodeBackoff,
    /// Budget for a whole execute call, every attempt and wait included.
    pub(crate) request_timeout: Option<Duration>,
    /// Budget for one gRPC exchange with one node.
    pub(crate) grpc_deadline: Option<Duration>,
    pub(crate) connect_timeout: Duration,
    /// How many nodes a frozen transaction is signed for.
    pub(crate) max_nodes_per_transaction: Option<usize>,
    /// Fixes the node pick order; random when unset.
    pub(crate) registry_seed: Option<u64>,
    pub(crate) metrics: Arc<dyn SdkMetrics>,
}

impl ClientConfig {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Nodes in the order they were added.
    #[must_use]
    pub fn network(&self) -> &[NodeEndpoint] {
        &self.network
    }

    /// The paying account, when one is configured.
    #[must_use]
    pub fn operator(&self) -> Option<&Operator> {
        self.operator.as_ref()
    }

    /// Pacing for repeated attempts of one call.
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// How long a failing node sits out.
    #[must_use]
    pub fn node_backoff(&self) -> NodeBackoff {
        self.node_backoff
    }

    /// `None` lets an execute call run until its attempts are used up.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// `None` leaves single exchanges unbounded.
    #[must_use]
    pub fn grpc_deadline(&self) -> Option<Duration> {
        self.grpc_deadline
    }

    /// Limit on opening a channel.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// `None` freezes transactions for every node.
    #[must_use]
    pub fn max_nodes_per_transaction(&self) -> Option<usize> {
        self.max_nodes_per_transaction
    }

    /// Node pick seed, if pinned.
    #[must_use]
    pub fn registry_seed(&self) -> Option<u64> {
        self.registry_seed
    }

    /// Telemetry receiver.
    #[must_use]
    pub fn metrics(&self) -> &Arc<dyn SdkMetrics> {
        &self.metrics
    }
}

/// Collects settings for a [`ClientConfig`]; nothing is checked until
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    network: Vec<(String, AccountId)>,
    operator: Option<Operator>,
    retry_policy: Option<RetryPolicy>,
    node_backoff: Option<NodeBackoff>,
    // Outer `None`: not set, use the default. Inner `None`: disabled.
    request_timeout: Option<Option<Duration>>,
    grpc_deadline: Option<Option<Duration>>,
    connect_timeout: Option<Duration>,
    max_nodes_per_transaction: Option<usize>,
    registry_seed: Option<u64>,
    metrics: Option<Arc<dyn SdkMetrics>>,
}

impl ClientConfigBuilder {
    /// Appends a node. `address` is `host:port` or an `http(s)://` URL.
    #[must_use]
    pub fn with_node(mut self, address: impl Into<String>, account_id: AccountId) -> Self {
        self.network.push((address.into(), account_id));
        self
    }

    /// Discards the nodes added so far and uses `nodes` instead.
    #[must_use]
    pub fn with_network<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = (S, AccountId)>,
        S: Into<String>,
    {
        self.network = nodes.into_iter().map(|(address, id)| (address.into(), id)).collect();
        self
    }

    /// Transactions built by the client are paid for by `account_id` and
    /// signed by `signer`.
    #[must_use]
    pub fn with_operator(mut self, account_id: AccountId, signer: Arc<dyn Signer>) -> Self {
        self.operator = Some(Operator::new(account_id, signer));
        self
    }

    /// Replaces the default [`RetryPolicy`].
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Replaces the default [`NodeBackoff`].
    #[must_use]
    pub fn with_node_backoff(mut self, backoff: NodeBackoff) -> Self {
        self.node_backoff = Some(backoff);
        self
    }

    /// Pass `None` to let execute calls run without an overall deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Pass `None` to send exchanges without a gRPC deadline.
    #[must_use]
    pub fn with_grpc_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.grpc_deadline = Some(deadline);
        self
    }

    /// How long opening a channel to a node may take.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Freezes transactions for at most `max` nodes.
    #[must_use]
    pub fn with_max_nodes_per_transaction(mut self, max: usize) -> Self {
        self.max_nodes_per_transaction = Some(max);
        self
    }

    /// Makes node picks repeat across runs.
    #[must_use]
    pub fn with_registry_seed(mut self, seed: u64) -> Self {
        self.registry_seed = Some(seed);
        self
    }

    /// Routes telemetry to `metrics` instead of discarding it.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn SdkMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Checks every setting and fills in defaults.
    ///
    /// # Errors
    ///
    /// [`SdkError::Config`] for an empty network, a node account listed twice,
    /// a bad retry policy or node backoff, or a zero timeout or node cap.
    /// [`SdkError::InvalidUrl`] for a malformed node address.
    pub fn build(self) -> Result<ClientConfig> {
        let network = parse_network(self.network)?;

        let retry_policy = self.retry_policy.unwrap_or_default();
        retry_policy.validate()?;

        let node_backoff = self.node_backoff.unwrap_or_default();
        node_backoff.validate()?;

        let request_timeout = self.request_timeout.unwrap_or(Some(DEFAULT_REQUEST_TIMEOUT));
        let grpc_deadline = self.grpc_deadline.unwrap_or(Some(DEFAULT_GRPC_DEADLINE));
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        for (name, value) in [
            ("request_timeout", request_timeout),
            ("grpc_deadline", grpc_deadline),
            ("connect_timeout", Some(connect_timeout)),
        ] {
            ensure!(
                value.is_none_or(|d| !d.is_zero()),
                ConfigSnafu { message: format!("{name} must be non-zero") }
            );
        }

        ensure!(
            self.max_nodes_per_transaction != Some(0),
            ConfigSnafu { message: "max_nodes_per_transaction must be non-zero" }
        );

        Ok(ClientConfig {
            network,
            operator: self.operator,
            retry_policy,
            node_backoff,
            request_timeout,
            grpc_deadline,
            connect_timeout,
            max_nodes_per_transaction: self.max_nodes_per_transaction,
            registry_seed: self.registry_seed,
            metrics: self.metrics.unwrap_or_else(default_metrics),
        })
    }

    /// Parses a [`ClientConfigFile`] document into a builder.
    ///
    /// ```json
    /// {
    ///   "network": { "127.0.0.1:50211": "0.0.3" },
    ///   "operator": { "account_id": "0.0.1001", "private_key": "<hex>" },
    ///   "max_attempts": 5
    /// }
    /// ```
    ///
    /// Keys missing from the document keep their defaults. Metrics and
    /// non-local signers are set on the returned builder.
    ///
    /// # Errors
    ///
    /// [`SdkError::Config`] when the JSON does not parse, [`SdkError::Signing`]
    /// when the operator key is not a valid Ed25519 secret.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ClientConfigFile = serde_json::from_str(json)
            .map_err(|e| SdkError::Config { message: format!("invalid client config JSON: {e}") })?;
        file.into_builder()
    }
}

/// On-disk client configuration. Durations are in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfigFile {
    /// Node address mapped to the node's account.
    pub network: BTreeMap<String, AccountId>,

    /// Paying account and its key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorFile>,

    /// See [`RetryPolicy::max_attempts`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    /// See [`RetryPolicy::min_backoff`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_backoff_ms: Option<u64>,

    /// See [`RetryPolicy::max_backoff`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_backoff_ms: Option<u64>,

    /// See [`RetryPolicy::jitter`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,

    /// See [`NodeBackoff::base`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_min_backoff_ms: Option<u64>,

    /// See [`NodeBackoff::max`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_max_backoff_ms: Option<u64>,

    /// Whole-call deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,

    /// Single-exchange deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_deadline_ms: Option<u64>,

    /// Channel open limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// Node cap for frozen transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nodes_per_transaction: Option<usize>,

    /// Pins the node pick order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_seed: Option<u64>,
}

/// Operator entry of a [`ClientConfigFile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorFile {
    /// Paying account.
    pub account_id: AccountId,
    /// Ed25519 secret key, hex.
    pub private_key: String,
}

impl ClientConfigFile {
    /// Turns the file into a builder; validation still happens at `build`.
    ///
    /// # Errors
    ///
    /// [`SdkError::Signing`] when the operator key does not decode.
    pub fn into_builder(self) -> Result<ClientConfigBuilder> {
        let mut builder = ClientConfig::builder().with_network(self.network);

        if let Some(operator) = self.operator {
            let signer = LocalSigner::from_hex(&operator.private_key)?;
            builder = builder.with_operator(operator.account_id, Arc::new(signer));
        }

        let millis = |ms: Option<u64>, fallback: Duration| ms.map_or(fallback, Duration::from_millis);

        let retry = RetryPolicy::default();
        builder = builder.with_retry_policy(RetryPolicy {
            max_attempts: self.max_attempts.unwrap_or(retry.max_attempts),
            min_backoff: millis(self.min_backoff_ms, retry.min_backoff),
            max_backoff: millis(self.max_backoff_ms, retry.max_backoff),
            jitter: self.jitter.unwrap_or(retry.jitter),
        });

        let node = NodeBackoff::default();
        builder = builder.with_node_backoff(NodeBackoff {
            base: millis(self.node_min_backoff_ms, node.base),
            max: millis(self.node_max_backoff_ms, node.max),
        });

        if let Some(ms) = self.request_timeout_ms {
            builder = builder.with_request_timeout(Some(Duration::from_millis(ms)));
        }
        if let Some(ms) = self.grpc_deadline_ms {
            builder = builder.with_grpc_deadline(Some(Duration::from_millis(ms)));
        }
        if let Some(ms) = self.connect_timeout_ms {
            builder = builder.with_connect_timeout(Duration::from_millis(ms));
        }
        if let Some(max) = self.max_nodes_per_transaction {
            builder = builder.with_max_nodes_per_transaction(max);
        }
        if let Some(seed) = self.registry_seed {
            builder = builder.with_registry_seed(seed);
        }

        Ok(builder)
    }
}

/// How an execute call paces its attempts.
///
/// Attempt `n + 1` waits `min(max_backoff, min_backoff * 2^(n-1))`, stretched
/// by a random share of up to `jitter` and clamped to `max_backoff` again.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Attempts per execute call, the first one included.
    pub max_attempts: u32,

    /// Wait before the second attempt.
    pub min_backoff: Duration,

    /// Ceiling for any single wait.
    pub max_backoff: Duration,

    /// Random stretch in `[0, 1)` applied to each wait.
    pub jitter: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_backoff: DEFAULT_MIN_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
            jitter: DEFAULT_JITTER,
        }
    }
}

#[bon::bon]
impl RetryPolicy {
    /// Builds a checked policy; unset fields take the defaults.
    ///
    /// # Errors
    ///
    /// Fails the same way as [`RetryPolicy::validate`].
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_MAX_ATTEMPTS)] max_attempts: u32,
        #[builder(default = DEFAULT_MIN_BACKOFF)] min_backoff: Duration,
        #[builder(default = DEFAULT_MAX_BACKOFF)] max_backoff: Duration,
        #[builder(default = DEFAULT_JITTER)] jitter: f64,
    ) -> Result<Self> {
        let policy = Self { max_attempts, min_backoff, max_backoff, jitter };
        policy.validate()?;
        Ok(policy)
    }
}

impl RetryPolicy {
    /// A single attempt and no waiting.
    #[must_use]
    pub fn no_retry() -> Self {
        Self { max_attempts: 1, ..Self::default() }
    }

    /// Checks that the policy can drive the engine.
    ///
    /// # Errors
    ///
    /// [`SdkError::Config`] when there are no attempts, the first wait is
    /// zero, the ceiling sits below the first wait, or `jitter` leaves `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_attempts > 0, ConfigSnafu { message: "max_attempts must be at least 1" });
        ensure!(!self.min_backoff.is_zero(), ConfigSnafu { message: "min_backoff must be non-zero" });
        ensure!(
            self.min_backoff <= self.max_backoff,
            ConfigSnafu { message: "max_backoff is below min_backoff" }
        );
        ensure!(
            self.jitter >= 0.0 && self.jitter < 1.0,
            ConfigSnafu { message: "jitter must lie in [0, 1)" }
        );
        Ok(())
    }
}

/// How long a node is left out of selection after failing.
///
/// After `n` failures in a row the node sits out `min(max, base * 2^n)`.
/// One success clears the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBackoff {
    /// Scale of the first sit-out.
    pub base: Duration,
    /// Longest sit-out.
    pub max: Duration,
}

impl Default for NodeBackoff {
    fn default() -> Self {
        Self { base: DEFAULT_NODE_MIN_BACKOFF, max: DEFAULT_NODE_MAX_BACKOFF }
    }
}

#[bon::bon]
impl NodeBackoff {
    /// Builds a checked backoff; unset fields take the defaults.
    ///
    /// # Errors
    ///
    /// Fails the same way as [`NodeBackoff::validate`].
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_NODE_MIN_BACKOFF)] base: Duration,
        #[builder(default = DEFAULT_NODE_MAX_BACKOFF)] max: Duration,
    ) -> Result<Self> {
        let backoff = Self { base, max };
        backoff.validate()?;
        Ok(backoff)
    }
}

impl NodeBackoff {
    /// Checks that the sit-out range is usable.
    ///
    /// # Errors
    ///
    /// [`SdkError::Config`] when `base` is zero or `max` is below it.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.base.is_zero(), ConfigSnafu { message: "node backoff base must be non-zero" });
        ensure!(self.base <= self.max, ConfigSnafu { message: "node backoff max is below base" });
        Ok(())
    }
}

/// Validates `(address, account id)` pairs into a non-empty network without
/// duplicate account ids.
pub(crate) fn parse_network(nodes: Vec<(String, AccountId)>) -> Result<Vec<NodeEndpoint>> {
    ensure!(!nodes.is_empty(), ConfigSnafu { message: "at least one node is required" });

    let mut network = Vec::with_capacity(nodes.len());
    for (address, account_id) in nodes {
        validate_address(&address)?;
        let endpoint = NodeEndpoint::new(address, account_id)?;
        ensure!(
            !network.contains(&endpoint),
            ConfigSnafu { message: format!("node {account_id} is configured twice") }
        );
        network.push(endpoint);
    }
    Ok(network)
}

/// Validates a node address: `host:port` or an `http(s)://host:port` URL.
fn validate_address(address: &str) -> Result<()> {
    let rest = address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"))
        .unwrap_or(address);

    if rest.is_empty() {
        return InvalidUrlSnafu { url: address, message: "address must have a host" }.fail();
    }

    if rest.contains(char::is_whitespace) {
        return InvalidUrlSnafu { url: address, message: "address cannot contain whitespace" }
            .fail();
    }

    if rest.contains("://") {
        return InvalidUrlSnafu { url: address, message: "scheme must be http or https" }.fail();
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn node(num: u64) -> AccountId {
        AccountId::from_num(num)
    }

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::builder().with_node("127.0.0.1:50211", node(3)).build().unwrap();

        assert_eq!(config.network().len(), 1);
        assert_eq!(config.network()[0].account_id(), node(3));
        assert_eq!(config.request_timeout(), Some(DEFAULT_REQUEST_TIMEOUT));
        assert_eq!(config.grpc_deadline(), Some(DEFAULT_GRPC_DEADLINE));
        assert_eq!(config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(config.retry_policy(), &RetryPolicy::default());
        assert_eq!(config.node_backoff(), NodeBackoff::default());
        assert!(config.operator().is_none());
    }

    #[test]
    fn test_empty_network_rejected() {
        let result = ClientConfig::builder().build();
        assert!(matches!(result, Err(SdkError::Config { .. })));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let result = ClientConfig::builder()
            .with_node("10.0.0.1:50211", node(3))
            .with_node("10.0.0.2:50211", node(3))
            .build();
        assert!(matches!(result, Err(SdkError::Config { .. })));
    }

    #[test]
    fn test_invalid_address_rejected() {
        let result = ClientConfig::builder().with_node("ftp://host:1", node(3)).build();
        assert!(matches!(result, Err(SdkError::InvalidUrl { .. })));

        let result = ClientConfig::builder().with_node("http://", node(3)).build();
        assert!(matches!(result, Err(SdkError::InvalidUrl { .. })));
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let result = ClientConfig::builder()
            .with_node("127.0.0.1:50211", node(3))
            .with_connect_timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(SdkError::Config { .. })));

        let result = ClientConfig::builder()
            .with_node("127.0.0.1:50211", node(3))
            .with_request_timeout(Some(Duration::ZERO))
            .build();
        assert!(matches!(result, Err(SdkError::Config { .. })));

        let result = ClientConfig::builder()
            .with_node("127.0.0.1:50211", node(3))
            .with_grpc_deadline(Some(Duration::ZERO))
            .build();
        match result {
            Err(SdkError::Config { message }) => assert!(message.contains("grpc_deadline")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_timeouts_can_be_disabled() {
        let config = ClientConfig::builder()
            .with_node("127.0.0.1:50211", node(3))
            .with_request_timeout(None)
            .with_grpc_deadline(None)
            .build()
            .unwrap();
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.grpc_deadline(), None);
    }

    #[test]
    fn test_retry_policy_validation() {
        assert!(RetryPolicy::builder().max_attempts(0).build().is_err());
        assert!(RetryPolicy::builder().min_backoff(Duration::ZERO).build().is_err());
        assert!(
            RetryPolicy::builder()
                .min_backoff(Duration::from_secs(2))
                .max_backoff(Duration::from_secs(1))
                .build()
                .is_err()
        );
        assert!(RetryPolicy::builder().jitter(1.0).build().is_err());
        assert!(RetryPolicy::builder().jitter(-0.1).build().is_err());
        assert!(RetryPolicy::builder().jitter(0.0).build().is_ok());
    }

    #[test]
    fn test_retry_policy_builder_defaults() {
        let policy = RetryPolicy::builder().max_attempts(3).build().unwrap();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.min_backoff, Duration::from_millis(250));
        assert_eq!(policy.max_backoff, Duration::from_secs(8));

        assert_eq!(RetryPolicy::builder().build().unwrap(), RetryPolicy::default());
    }

    #[test]
    fn test_no_retry_policy() {
        let policy = RetryPolicy::no_retry();
        assert_eq!(policy.max_attempts, 1);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_node_backoff_builder() {
        let backoff = NodeBackoff::builder().base(Duration::from_millis(10)).build().unwrap();
        assert_eq!(backoff.base, Duration::from_millis(10));
        assert_eq!(backoff.max, DEFAULT_NODE_MAX_BACKOFF);

        let invalid = NodeBackoff::builder()
            .base(Duration::from_secs(10))
            .max(Duration::from_secs(1))
            .build();
        assert!(invalid.is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "network": {
                "127.0.0.1:50211": "0.0.3",
                "127.0.0.1:50212": "0.0.4"
            },
            "operator": {
                "account_id": "0.0.1001",
                "private_key": "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"
            },
            "max_attempts": 4,
            "min_backoff_ms": 50,
            "max_backoff_ms": 400,
            "request_timeout_ms": 5000,
            "registry_seed": 7
        }"#;

        let config = ClientConfigBuilder::from_json(json).unwrap().build().unwrap();
        assert_eq!(config.network().len(), 2);
        assert_eq!(config.network()[0].address(), "127.0.0.1:50211");
        assert_eq!(config.network()[1].account_id(), node(4));
        assert_eq!(config.operator().unwrap().account_id, AccountId::from_num(1001));
        assert_eq!(config.retry_policy().max_attempts, 4);
        assert_eq!(config.retry_policy().min_backoff, Duration::from_millis(50));
        assert_eq!(config.retry_policy().max_backoff, Duration::from_millis(400));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.registry_seed(), Some(7));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(ClientConfigBuilder::from_json("{"), Err(SdkError::Config { .. })));
        assert!(matches!(
            ClientConfigBuilder::from_json(r#"{"network": {"a:1": "not-an-id"}}"#),
            Err(SdkError::Config { .. })
        ));
        assert!(matches!(
            ClientConfigBuilder::from_json(r#"{"network": {}, "bogus": 1}"#),
            Err(SdkError::Config { .. })
        ));
        assert!(matches!(
            ClientConfigBuilder::from_json(
                r#"{"network": {"a:1": "0.0.3"}, "operator": {"account_id": "0.0.2", "private_key": "xyz"}}"#
            ),
            Err(SdkError::Signing { .. })
        ));
    }

    #[test]
    fn test_config_file_serializes() {
        let mut file = ClientConfigFile::default();
        file.network.insert("127.0.0.1:50211".to_string(), node(3));
        file.max_attempts = Some(2);
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(json, r#"{"network":{"127.0.0.1:50211":"0.0.3"},"max_attempts":2}"#);
    }
}
