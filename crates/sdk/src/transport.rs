//! Transport: opaque request/response byte channel to each network node.
//!
//! The engine only ever sees wire bytes. [`GrpcTransport`] carries them over
//! tonic channels with a pass-through codec, so protobuf encoding stays in
//! [`codec`](crate::codec) and the transport never needs the message types.
//!
//! # Channel cache
//!
//! One tonic [`Channel`] per node URL, established lazily on first use and
//! shared by every later call (a channel multiplexes HTTP/2 streams).
//! Connection failures surface as `UNAVAILABLE` so the classifier treats them
//! like any other unreachable node.

use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use bytes::{Buf, BufMut, Bytes};
use hashgraph_proto::method;
use hashgraph_types::NodeEndpoint;
use parking_lot::RwLock;
use tonic::{
    Request, Status,
    codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder},
    codegen::http::uri::PathAndQuery,
    transport::{Channel, Endpoint},
};

use crate::metrics::{ConnectionEvent, SdkMetrics};

/// HTTP/2 keep-alive interval for idle connections.
const HTTP2_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(30);

/// HTTP/2 keep-alive timeout.
const HTTP2_KEEPALIVE_TIMEOUT: Duration = Duration::from_secs(10);

/// TCP keepalive interval.
const TCP_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(60);

/// RPC methods served by network nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `CryptoService/cryptoTransfer`.
    CryptoTransfer,
    /// `CryptoService/cryptoGetBalance`.
    CryptoGetBalance,
    /// `CryptoService/getTransactionReceipts`.
    GetTransactionReceipts,
    /// `CryptoService/getTxRecordByTxID`.
    GetTxRecordByTxId,
    /// `ConsensusService/submitMessage`.
    SubmitMessage,
}

impl Method {
    /// Fully-qualified gRPC path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CryptoTransfer => method::CRYPTO_TRANSFER,
            Self::CryptoGetBalance => method::CRYPTO_GET_BALANCE,
            Self::GetTransactionReceipts => method::GET_TRANSACTION_RECEIPTS,
            Self::GetTxRecordByTxId => method::GET_TX_RECORD_BY_TX_ID,
            Self::SubmitMessage => method::SUBMIT_MESSAGE,
        }
    }

    /// Short method name, used for metrics and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CryptoTransfer => "cryptoTransfer",
            Self::CryptoGetBalance => "cryptoGetBalance",
            Self::GetTransactionReceipts => "getTransactionReceipts",
            Self::GetTxRecordByTxId => "getTxRecordByTxID",
            Self::SubmitMessage => "submitMessage",
        }
    }

    /// Whether this method submits a transaction (as opposed to a query).
    #[must_use]
    pub const fn is_transaction(self) -> bool {
        matches!(self, Self::CryptoTransfer | Self::SubmitMessage)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sends one request to one node and returns the raw response bytes.
///
/// Errors are gRPC statuses; the engine classifies them.
#[tonic::async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Performs a single unary call.
    async fn call(&self, node: &NodeEndpoint, method: Method, body: Bytes) -> Result<Bytes, Status>;

    /// Drops cached connections. Called when the client closes.
    fn reset(&self) {}
}

/// gRPC transport over cached tonic channels.
#[derive(Clone)]
pub struct GrpcTransport {
    channels: Arc<RwLock<HashMap<String, Channel>>>,
    connect_timeout: Duration,
    request_timeout: Option<Duration>,
    metrics: Arc<dyn SdkMetrics>,
}

impl fmt::Debug for GrpcTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcTransport")
            .field("channels", &self.channels.read().len())
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GrpcTransport {
    /// Creates a transport. No connection is made until the first call.
    #[must_use]
    pub fn new(
        connect_timeout: Duration,
        request_timeout: Option<Duration>,
        metrics: Arc<dyn SdkMetrics>,
    ) -> Self {
        Self { channels: Arc::new(RwLock::new(HashMap::new())), connect_timeout, request_timeout, metrics }
    }

    /// Number of cached channels.
    #[must_use]
    pub fn cached_channels(&self) -> usize {
        self.channels.read().len()
    }

    /// Returns a connected channel for `node`, establishing it if needed.
    async fn channel(&self, node: &NodeEndpoint) -> Result<Channel, Status> {
        let url = node.url();

        // Fast path: channel already exists
        if let Some(channel) = self.channels.read().get(&url) {
            return Ok(channel.clone());
        }

        let endpoint = Endpoint::from_shared(url.clone()).map_err(|e| {
            Status::invalid_argument(format!("invalid node address {}: {e}", node.address()))
        })?;

        let channel = match self.configure_endpoint(endpoint).connect().await {
            Ok(channel) => channel,
            Err(e) => {
                self.metrics.record_connection(&url, ConnectionEvent::Failed);
                return Err(Status::unavailable(format!("failed to connect to {node}: {e}")));
            },
        };

        let mut guard = self.channels.write();
        // Double-check pattern: another task might have connected while we waited
        if let Some(existing) = guard.get(&url) {
            return Ok(existing.clone());
        }
        guard.insert(url.clone(), channel.clone());
        drop(guard);

        self.metrics.record_connection(&url, ConnectionEvent::Connected);
        tracing::debug!(node = %node, "Connected to node");
        Ok(channel)
    }

    /// Applies connection settings to an endpoint.
    fn configure_endpoint(&self, endpoint: Endpoint) -> Endpoint {
        let endpoint = endpoint
            .connect_timeout(self.connect_timeout)
            .tcp_nodelay(true)
            .tcp_keepalive(Some(TCP_KEEPALIVE_INTERVAL))
            .http2_keep_alive_interval(HTTP2_KEEPALIVE_INTERVAL)
            .keep_alive_timeout(HTTP2_KEEPALIVE_TIMEOUT)
            .keep_alive_while_idle(true);

        match self.request_timeout {
            Some(timeout) => endpoint.timeout(timeout),
            None => endpoint,
        }
    }
}

#[tonic::async_trait]
impl Transport for GrpcTransport {
    async fn call(&self, node: &NodeEndpoint, method: Method, body: Bytes) -> Result<Bytes, Status> {
        let channel = self.channel(node).await?;
        let mut grpc = tonic::client::Grpc::new(channel);
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("node {node} not ready: {e}")))?;

        let response = grpc
            .unary(Request::new(body), PathAndQuery::from_static(method.path()), RawCodec)
            .await?;
        Ok(response.into_inner())
    }

    fn reset(&self) {
        let dropped: Vec<String> = self.channels.write().drain().map(|(url, _)| url).collect();
        for url in dropped {
            self.metrics.record_connection(&url, ConnectionEvent::Disconnected);
        }
    }
}

/// Pass-through codec: request and response bodies are already-encoded protobuf.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RawCodec;

impl Codec for RawCodec {
    type Encode = Bytes;
    type Decode = Bytes;
    type Encoder = RawCodec;
    type Decoder = RawCodec;

    fn encoder(&mut self) -> Self::Encoder {
        RawCodec
    }

    fn decoder(&mut self) -> Self::Decoder {
        RawCodec
    }
}

impl Encoder for RawCodec {
    type Item = Bytes;
    type Error = Status;

    fn encode(&mut self, item: Self::Item, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        dst.put_slice(&item);
        Ok(())
    }
}

impl Decoder for RawCodec {
    type Item = Bytes;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Self::Item>, Self::Error> {
        Ok(Some(src.copy_to_bytes(src.remaining())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use hashgraph_types::AccountId;

    use super::*;
    use crate::metrics::NoopSdkMetrics;

    #[test]
    fn test_method_paths() {
        assert_eq!(Method::CryptoTransfer.path(), "/proto.CryptoService/cryptoTransfer");
        assert_eq!(Method::SubmitMessage.path(), "/proto.ConsensusService/submitMessage");
        assert_eq!(Method::GetTransactionReceipts.name(), "getTransactionReceipts");
        assert_eq!(Method::GetTxRecordByTxId.path(), "/proto.CryptoService/getTxRecordByTxID");
        assert!(!Method::GetTxRecordByTxId.is_transaction());
        assert!(Method::CryptoTransfer.is_transaction());
        assert!(!Method::CryptoGetBalance.is_transaction());
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Bind then drop a listener to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport =
            GrpcTransport::new(Duration::from_millis(500), None, Arc::new(NoopSdkMetrics));
        let node = NodeEndpoint::new(addr.to_string(), AccountId::from_num(3)).unwrap();

        let err = transport.call(&node, Method::CryptoGetBalance, Bytes::new()).await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unavailable);
        assert_eq!(transport.cached_channels(), 0);
    }

    #[test]
    fn test_reset_on_empty_cache() {
        let transport = GrpcTransport::new(Duration::from_secs(1), None, Arc::new(NoopSdkMetrics));
        transport.reset();
        assert_eq!(transport.cached_channels(), 0);
    }
}
