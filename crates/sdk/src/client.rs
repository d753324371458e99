//! The client: configuration, node registry, transport, and lifecycle.

use std::{fmt, sync::Arc};

use hashgraph_types::{AccountId, TransactionId, TransactionReceipt};
use tokio_util::sync::CancellationToken;

use crate::{
    config::{ClientConfig, Operator, RetryPolicy, parse_network},
    engine::{Executable, ExecutionEngine},
    error::{Result, SdkError},
    receipt::{ReceiptPollConfig, wait_for_receipt},
    registry::NodeRegistry,
    transport::{GrpcTransport, Transport},
};

/// Handle to a hashgraph network.
///
/// A `Client` owns the node registry, the transport, and the operator used
/// to pay for and sign transactions. Clones share all of it, including the
/// closed state.
///
/// # Shutdown Behavior
///
/// After [`close()`](Self::close):
/// 1. In-flight calls return [`SdkError::Shutdown`], including those sleeping in backoff
/// 2. New calls fail immediately with [`SdkError::Shutdown`]
/// 3. Cached connections are dropped
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use hashgraph_sdk::{AccountId, Client, ClientConfig, LocalSigner, Transaction};
/// # async fn example() -> hashgraph_sdk::Result<()> {
/// let config = ClientConfig::builder()
///     .with_node("127.0.0.1:50211", AccountId::from_num(3))
///     .with_node("127.0.0.1:50212", AccountId::from_num(4))
///     .with_operator(AccountId::from_num(1001), Arc::new(LocalSigner::generate()))
///     .build()?;
/// let client = Client::new(config);
///
/// let response = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(1002), 10)
///     .execute(&client)
///     .await?;
/// let receipt = response.get_receipt(&client).await?;
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    registry: Arc<NodeRegistry>,
    transport: Arc<dyn Transport>,
    engine: ExecutionEngine,
    cancellation: CancellationToken,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("operator", &self.inner.config.operator())
            .field("nodes", &self.inner.registry.len())
            .field("transport", &self.inner.transport)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Client {
    /// Opens a client over gRPC.
    ///
    /// Connections are established lazily, one per node, on first use.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let transport = Arc::new(GrpcTransport::new(
            config.connect_timeout(),
            config.grpc_deadline(),
            Arc::clone(config.metrics()),
        ));
        Self::with_transport(config, transport)
    }

    /// Opens a client over the given transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let cancellation = CancellationToken::new();
        let registry = Arc::new(NodeRegistry::new(
            config.network().to_vec(),
            config.node_backoff(),
            config.registry_seed(),
        ));
        let engine = ExecutionEngine::new(
            Arc::clone(&registry),
            Arc::clone(&transport),
            Arc::clone(config.metrics()),
            cancellation.clone(),
            config.grpc_deadline(),
        );

        tracing::debug!(nodes = registry.len(), operator = ?config.operator().map(|o| o.account_id), "Client opened");
        Self { inner: Arc::new(ClientInner { config, registry, transport, engine, cancellation }) }
    }

    /// The configuration the client was opened with.
    ///
    /// The network here is the initial one; see [`registry()`](Self::registry)
    /// for the current node list after [`set_network`](Self::set_network).
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The node registry, with per-node health.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &NodeRegistry {
        &self.inner.registry
    }

    /// Account paying for transactions, if an operator is configured.
    #[must_use]
    pub fn operator_account_id(&self) -> Option<AccountId> {
        self.inner.config.operator().map(|operator| operator.account_id)
    }

    pub(crate) fn operator(&self) -> Option<&Operator> {
        self.inner.config.operator()
    }

    /// Runs `request` with the configured retry policy and request timeout.
    ///
    /// # Errors
    ///
    /// See [`ExecutionEngine::execute`].
    pub async fn execute<E: Executable>(&self, request: &E) -> Result<E::Response> {
        self.execute_with(request, self.inner.config.retry_policy()).await
    }

    /// Runs `request` with `policy` instead of the configured retry policy.
    ///
    /// # Errors
    ///
    /// See [`ExecutionEngine::execute`].
    pub async fn execute_with<E: Executable>(&self, request: &E, policy: &RetryPolicy) -> Result<E::Response> {
        self.check_closed()?;
        self.inner.engine.execute(request, policy, self.inner.config.request_timeout()).await
    }

    /// Polls any node for the receipt of `transaction_id` until it is terminal.
    ///
    /// # Errors
    ///
    /// See [`wait_for_receipt`].
    pub async fn wait_for_receipt(
        &self,
        transaction_id: TransactionId,
        config: &ReceiptPollConfig,
    ) -> Result<TransactionReceipt> {
        wait_for_receipt(self, transaction_id, None, config).await
    }

    /// Replaces the network.
    ///
    /// Nodes whose account id and address are unchanged keep their health.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] or [`SdkError::InvalidUrl`] if the new
    /// network is empty, malformed, or lists an account twice. The current
    /// network is left untouched in that case.
    pub fn set_network<I, S>(&self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, AccountId)>,
        S: Into<String>,
    {
        self.check_closed()?;
        let network = parse_network(nodes.into_iter().map(|(address, id)| (address.into(), id)).collect())?;
        self.inner.registry.set_network(network);
        Ok(())
    }

    /// Closes the client.
    ///
    /// Cancels in-flight calls and drops cached connections. Idempotent.
    pub fn close(&self) {
        if self.inner.cancellation.is_cancelled() {
            return;
        }
        self.inner.cancellation.cancel();
        self.inner.transport.reset();
        tracing::debug!("Client closed");
    }

    /// Returns `true` once [`close()`](Self::close) has been called.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.cancellation.is_cancelled()
    }

    #[inline]
    fn check_closed(&self) -> Result<()> {
        if self.is_closed() {
            return Err(SdkError::Shutdown);
        }
        Ok(())
    }
}
