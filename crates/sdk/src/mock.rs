//! Mock network and scripted transport for SDK testing.
//!
//! Two tools, for two levels of test:
//!
//! - [`MockNetwork`]: in-process tonic servers speaking the real
//!   `CryptoService` / `ConsensusService` wire protocol, sharing one toy
//!   ledger. Nodes validate node account, signatures, and duplicates the way
//!   a real network does, keep a record per accepted transaction, and
//!   support failure injection.
//! - [`ScriptedTransport`]: a [`Transport`] that answers from a script
//!   without any sockets, for deterministic engine tests under paused time.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hashgraph_sdk::{AccountId, Client, LocalSigner, Transaction, mock::MockNetwork};
//!
//! # async fn example() -> hashgraph_sdk::Result<()> {
//! let network = MockNetwork::start(3).await?;
//! let config = network
//!     .client_config()
//!     .with_operator(AccountId::from_num(1001), Arc::new(LocalSigner::generate()))
//!     .build()?;
//! let client = Client::new(config);
//!
//! let response = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(1002), 10)
//!     .execute(&client)
//!     .await?;
//! let receipt = response.get_receipt(&client).await?;
//! # Ok(())
//! # }
//! ```

use std::{
    collections::{HashMap, VecDeque},
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicU64, AtomicUsize, Ordering},
    },
    time::Duration,
};

use bytes::Bytes;
use dashmap::DashMap;
use hashgraph_proto::proto::{
    self,
    consensus_service_server::{ConsensusService, ConsensusServiceServer},
    crypto_service_server::{CryptoService, CryptoServiceServer},
};
use hashgraph_types::{
    AccountBalance, AccountId, NodeEndpoint, Status, Timestamp, TopicId, TransactionId, TransactionReceipt,
    TransactionRecord, Transfer,
};
use parking_lot::Mutex;
use prost::Message;
use sha2::{Digest, Sha384};
use tokio::{sync::oneshot, time::Instant};
use tonic::{Request, Response, transport::Server};

use crate::{
    codec,
    config::{ClientConfig, ClientConfigBuilder},
    error::{Result, SdkError},
    signer::PublicKey,
    transaction::MAX_MEMO_BYTES,
    transport::{Method, Transport},
};

/// Account number of the first mock node.
const FIRST_NODE_NUM: u64 = 3;

// =============================================================================
// Shared ledger
// =============================================================================

/// Consensus outcome of one accepted transaction.
#[derive(Debug)]
struct ReceiptEntry {
    record: TransactionRecord,
    pending_polls: usize,
}

impl ReceiptEntry {
    /// The receipt, or `UNKNOWN` while polls are still pending.
    fn poll(&mut self) -> TransactionReceipt {
        if self.pending_polls > 0 {
            self.pending_polls -= 1;
            return TransactionReceipt::with_status(Status::Unknown);
        }
        self.record.receipt.clone()
    }
}

/// State shared by every node of a [`MockNetwork`].
#[derive(Debug, Default)]
struct MockLedger {
    receipts: DashMap<TransactionId, ReceiptEntry>,
    balances: DashMap<AccountId, u64>,
    keys: DashMap<AccountId, PublicKey>,
    topics: DashMap<TopicId, (u64, Vec<u8>)>,
    pending_polls: AtomicUsize,
}

impl MockLedger {
    fn apply(&self, body: &proto::TransactionBody) -> TransactionReceipt {
        match &body.data {
            Some(proto::transaction_body::Data::CryptoTransfer(transfer)) => {
                let amounts = transfer.transfers.as_ref().map(|t| t.account_amounts.as_slice()).unwrap_or_default();
                self.apply_transfer(amounts)
            },
            Some(proto::transaction_body::Data::ConsensusSubmitMessage(submit)) => self.apply_submit(submit),
            None => TransactionReceipt::with_status(Status::InvalidTransactionBody),
        }
    }

    fn apply_transfer(&self, amounts: &[proto::AccountAmount]) -> TransactionReceipt {
        let mut changes = Vec::with_capacity(amounts.len());
        for amount in amounts {
            let Some(account) = amount.account_id.as_ref().and_then(|a| AccountId::try_from(a).ok()) else {
                return TransactionReceipt::with_status(Status::InvalidAccountId);
            };
            changes.push((account, amount.amount));
        }

        for (account, delta) in &changes {
            if *delta < 0 {
                let balance = self.balances.get(account).map_or(0, |b| *b);
                if balance < delta.unsigned_abs() {
                    return TransactionReceipt::with_status(Status::InsufficientAccountBalance);
                }
            }
        }

        for (account, delta) in changes {
            let mut balance = self.balances.entry(account).or_insert(0);
            *balance = if delta < 0 {
                balance.saturating_sub(delta.unsigned_abs())
            } else {
                balance.saturating_add(delta.unsigned_abs())
            };
        }

        TransactionReceipt::with_status(Status::Success)
    }

    fn apply_submit(&self, submit: &proto::ConsensusSubmitMessageTransactionBody) -> TransactionReceipt {
        let Some(topic_id) = submit.topic_id.as_ref().and_then(|t| TopicId::try_from(t).ok()) else {
            return TransactionReceipt::with_status(Status::InvalidTopicId);
        };
        let Some(mut topic) = self.topics.get_mut(&topic_id) else {
            return TransactionReceipt::with_status(Status::InvalidTopicId);
        };

        let (sequence, running_hash) = &mut *topic;
        *sequence += 1;
        let mut hasher = Sha384::new();
        hasher.update(&*running_hash);
        hasher.update(&submit.message);
        *running_hash = hasher.finalize().to_vec();

        TransactionReceipt {
            status: Status::Success,
            topic_sequence_number: *sequence,
            topic_running_hash: Some(running_hash.clone()),
            ..TransactionReceipt::default()
        }
    }

    fn receipt(&self, transaction_id: &TransactionId) -> Option<TransactionReceipt> {
        Some(self.receipts.get_mut(transaction_id)?.poll())
    }

    /// Pending polls also hold back the record; its receipt reads `UNKNOWN`.
    fn record(&self, transaction_id: &TransactionId) -> Option<TransactionRecord> {
        let mut entry = self.receipts.get_mut(transaction_id)?;
        let receipt = entry.poll();
        Some(TransactionRecord { receipt, ..entry.record.clone() })
    }
}

// =============================================================================
// Per-node state
// =============================================================================

#[derive(Debug)]
struct NodeState {
    account_id: AccountId,
    ledger: Arc<MockLedger>,
    unavailable_count: AtomicUsize,
    delay_ms: AtomicU64,
    precheck_script: Mutex<VecDeque<Status>>,
    requests: DashMap<&'static str, usize>,
}

impl NodeState {
    fn new(account_id: AccountId, ledger: Arc<MockLedger>) -> Self {
        Self {
            account_id,
            ledger,
            unavailable_count: AtomicUsize::new(0),
            delay_ms: AtomicU64::new(0),
            precheck_script: Mutex::new(VecDeque::new()),
            requests: DashMap::new(),
        }
    }

    /// Atomically decrements the unavailable counter if positive.
    fn should_inject_unavailable(&self) -> bool {
        self.unavailable_count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Counts the request, applies the configured delay, and checks for injected errors.
    async fn check_injection(&self, method: Method) -> std::result::Result<(), tonic::Status> {
        *self.requests.entry(method.name()).or_insert(0) += 1;

        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.should_inject_unavailable() {
            return Err(tonic::Status::unavailable("Injected error"));
        }
        Ok(())
    }

    fn scripted_precheck(&self) -> Option<Status> {
        self.precheck_script.lock().pop_front()
    }

    async fn submit(
        &self,
        method: Method,
        request: Request<proto::Transaction>,
    ) -> std::result::Result<Response<proto::TransactionResponse>, tonic::Status> {
        self.check_injection(method).await?;

        let status = match self.scripted_precheck() {
            Some(status) => status,
            None => self.precheck(&request.into_inner()),
        };
        Ok(Response::new(proto::TransactionResponse { node_transaction_precheck_code: status.code(), cost: 0 }))
    }

    /// Validates a submitted transaction and, if accepted, records its receipt.
    fn precheck(&self, transaction: &proto::Transaction) -> Status {
        let bytes = transaction.encode_to_vec();
        let Ok(decoded) = codec::decode_transaction(&bytes) else {
            return Status::InvalidTransaction;
        };
        let body = &decoded.body;

        let node = body.node_account_id.as_ref().and_then(|n| AccountId::try_from(n).ok());
        if node != Some(self.account_id) {
            return Status::InvalidNodeAccount;
        }

        let Some(transaction_id) = body.transaction_id.as_ref().and_then(|t| TransactionId::try_from(t).ok()) else {
            return Status::InvalidTransactionId;
        };

        if body.memo.len() > MAX_MEMO_BYTES {
            return Status::MemoTooLong;
        }

        if !self.signatures_valid(transaction_id.account_id, &decoded.body_bytes, &decoded.sig_map) {
            return Status::InvalidSignature;
        }

        if let Some(proto::transaction_body::Data::CryptoTransfer(transfer)) = &body.data {
            let sum: i64 = transfer
                .transfers
                .as_ref()
                .map(|t| t.account_amounts.iter().map(|a| a.amount).sum())
                .unwrap_or_default();
            if sum != 0 {
                return Status::InvalidAccountAmounts;
            }
        }

        if let Some(proto::transaction_body::Data::ConsensusSubmitMessage(submit)) = &body.data
            && submit.message.is_empty()
        {
            return Status::InvalidTopicMessage;
        }

        if self.ledger.receipts.contains_key(&transaction_id) {
            return Status::DuplicateTransaction;
        }

        let receipt = self.ledger.apply(body);
        let transfers = match &body.data {
            Some(proto::transaction_body::Data::CryptoTransfer(transfer)) if receipt.status == Status::Success => {
                transfer
                    .transfers
                    .iter()
                    .flat_map(|list| &list.account_amounts)
                    .filter_map(|amount| Transfer::try_from(amount).ok())
                    .collect()
            },
            _ => Vec::new(),
        };
        // The mock charges no fees.
        let record = TransactionRecord {
            receipt,
            transaction_hash: codec::transaction_hash(&transaction.signed_transaction_bytes),
            consensus_timestamp: Some(Timestamp::now()),
            transaction_id: Some(transaction_id),
            memo: body.memo.clone(),
            transaction_fee: 0,
            transfers,
            duplicates: Vec::new(),
            children: Vec::new(),
        };
        let pending_polls = self.ledger.pending_polls.load(Ordering::SeqCst);
        self.ledger.receipts.insert(transaction_id, ReceiptEntry { record, pending_polls });
        tracing::debug!(node = %self.account_id, %transaction_id, "Mock node accepted transaction");
        Status::Ok
    }

    /// Every signature must verify; a registered payer key must be among them.
    fn signatures_valid(&self, payer: AccountId, body_bytes: &[u8], sig_map: &proto::SignatureMap) -> bool {
        if sig_map.sig_pair.is_empty() {
            return false;
        }

        let mut signers = Vec::with_capacity(sig_map.sig_pair.len());
        for pair in &sig_map.sig_pair {
            let Some(proto::signature_pair::Signature::Ed25519(signature)) = &pair.signature else {
                return false;
            };
            let Ok(key) = PublicKey::from_bytes(&pair.pub_key_prefix) else {
                return false;
            };
            if !key.verify(body_bytes, signature) {
                return false;
            }
            signers.push(key);
        }

        self.ledger.keys.get(&payer).is_none_or(|key| signers.contains(&key))
    }

    async fn query(
        &self,
        method: Method,
        request: Request<proto::Query>,
    ) -> std::result::Result<Response<proto::Response>, tonic::Status> {
        self.check_injection(method).await?;

        let query = request
            .into_inner()
            .query
            .ok_or_else(|| tonic::Status::invalid_argument("empty query"))?;
        let scripted = self.scripted_precheck();

        let response = match query {
            proto::query::Query::TransactionGetReceipt(query) => {
                let receipt = query
                    .transaction_id
                    .as_ref()
                    .and_then(|t| TransactionId::try_from(t).ok())
                    .and_then(|id| self.ledger.receipt(&id));
                let status = scripted.unwrap_or(if receipt.is_some() { Status::Ok } else { Status::ReceiptNotFound });
                proto::response::Response::TransactionGetReceipt(proto::TransactionGetReceiptResponse {
                    header: Some(codec::response_header(status)),
                    receipt: receipt.as_ref().map(Into::into),
                })
            },
            proto::query::Query::TransactionGetRecord(query) => {
                let record = query
                    .transaction_id
                    .as_ref()
                    .and_then(|t| TransactionId::try_from(t).ok())
                    .and_then(|id| self.ledger.record(&id));
                let status = scripted.unwrap_or(if record.is_some() { Status::Ok } else { Status::RecordNotFound });
                proto::response::Response::TransactionGetRecord(proto::TransactionGetRecordResponse {
                    header: Some(codec::response_header(status)),
                    transaction_record: record.as_ref().map(Into::into),
                    ..Default::default()
                })
            },
            proto::query::Query::CryptogetAccountBalance(query) => {
                let account = query.account_id.as_ref().and_then(|a| AccountId::try_from(a).ok());
                let balance = account.and_then(|a| self.ledger.balances.get(&a).map(|b| *b));
                let status =
                    scripted.unwrap_or(if balance.is_some() { Status::Ok } else { Status::InvalidAccountId });
                proto::response::Response::CryptogetAccountBalance(proto::CryptoGetAccountBalanceResponse {
                    header: Some(codec::response_header(status)),
                    account_id: query.account_id,
                    balance: balance.unwrap_or_default(),
                })
            },
        };

        Ok(Response::new(proto::Response { response: Some(response) }))
    }
}

struct MockCryptoService {
    state: Arc<NodeState>,
}

#[tonic::async_trait]
impl CryptoService for MockCryptoService {
    async fn crypto_transfer(
        &self,
        request: Request<proto::Transaction>,
    ) -> std::result::Result<Response<proto::TransactionResponse>, tonic::Status> {
        self.state.submit(Method::CryptoTransfer, request).await
    }

    async fn crypto_get_balance(
        &self,
        request: Request<proto::Query>,
    ) -> std::result::Result<Response<proto::Response>, tonic::Status> {
        self.state.query(Method::CryptoGetBalance, request).await
    }

    async fn get_transaction_receipts(
        &self,
        request: Request<proto::Query>,
    ) -> std::result::Result<Response<proto::Response>, tonic::Status> {
        self.state.query(Method::GetTransactionReceipts, request).await
    }

    async fn get_tx_record_by_tx_id(
        &self,
        request: Request<proto::Query>,
    ) -> std::result::Result<Response<proto::Response>, tonic::Status> {
        self.state.query(Method::GetTxRecordByTxId, request).await
    }
}

struct MockConsensusService {
    state: Arc<NodeState>,
}

#[tonic::async_trait]
impl ConsensusService for MockConsensusService {
    async fn submit_message(
        &self,
        request: Request<proto::Transaction>,
    ) -> std::result::Result<Response<proto::TransactionResponse>, tonic::Status> {
        self.state.submit(Method::SubmitMessage, request).await
    }
}

// =============================================================================
// Mock node and network
// =============================================================================

/// One mock node: a tonic server on an ephemeral local port.
#[derive(Debug)]
pub struct MockNode {
    state: Arc<NodeState>,
    address: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockNode {
    async fn start(account_id: AccountId, ledger: Arc<MockLedger>) -> Result<Self> {
        let addr: SocketAddr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| SdkError::Connection { message: format!("Failed to bind: {e}") })?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| SdkError::Connection { message: format!("Failed to get local addr: {e}") })?;

        let state = Arc::new(NodeState::new(account_id, ledger));
        let crypto = MockCryptoService { state: Arc::clone(&state) };
        let consensus = MockConsensusService { state: Arc::clone(&state) };

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let incoming = tokio_stream::wrappers::TcpListenerStream::new(listener);
        tokio::spawn(async move {
            let result = Server::builder()
                .add_service(CryptoServiceServer::new(crypto))
                .add_service(ConsensusServiceServer::new(consensus))
                .serve_with_incoming_shutdown(incoming, async {
                    let _ = shutdown_rx.await;
                })
                .await;

            if let Err(e) = result {
                tracing::error!("Mock node error: {}", e);
            }
        });

        Ok(Self { state, address: local_addr.to_string(), shutdown_tx: Some(shutdown_tx) })
    }

    /// The node's account id.
    #[must_use]
    pub fn account_id(&self) -> AccountId {
        self.state.account_id
    }

    /// The node's `host:port` address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The node as a network endpoint.
    ///
    /// # Errors
    ///
    /// Never fails for a started node; the address is always well-formed.
    pub fn endpoint(&self) -> Result<NodeEndpoint> {
        Ok(NodeEndpoint::new(self.address.clone(), self.account_id())?)
    }

    /// Injects UNAVAILABLE errors for the next `count` requests to this node.
    pub fn inject_unavailable(&self, count: usize) {
        self.state.unavailable_count.store(count, Ordering::SeqCst);
    }

    /// Injects a delay for all subsequent requests; 0 disables it.
    pub fn inject_delay(&self, millis: u64) {
        self.state.delay_ms.store(millis, Ordering::SeqCst);
    }

    /// Answers the next requests with these precheck statuses, in order,
    /// without processing them.
    pub fn script_precheck(&self, statuses: impl IntoIterator<Item = Status>) {
        self.state.precheck_script.lock().extend(statuses);
    }

    /// Requests received for `method`, including injected failures.
    #[must_use]
    pub fn request_count(&self, method: Method) -> usize {
        self.state.requests.get(method.name()).map_or(0, |n| *n)
    }

    /// Requests received across all methods.
    #[must_use]
    pub fn total_requests(&self) -> usize {
        self.state.requests.iter().map(|entry| *entry.value()).sum()
    }

    /// Shuts down the server gracefully.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A set of mock nodes sharing one toy ledger.
///
/// Nodes get account ids `0.0.3`, `0.0.4`, ... in start order.
#[derive(Debug)]
pub struct MockNetwork {
    nodes: Vec<MockNode>,
    ledger: Arc<MockLedger>,
}

impl MockNetwork {
    /// Starts `count` nodes on ephemeral ports.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Connection` if binding a port fails.
    pub async fn start(count: usize) -> Result<Self> {
        let ledger = Arc::new(MockLedger::default());
        let mut nodes = Vec::with_capacity(count);
        for num in (FIRST_NODE_NUM..).take(count) {
            nodes.push(MockNode::start(AccountId::from_num(num), Arc::clone(&ledger)).await?);
        }
        Ok(Self { nodes, ledger })
    }

    /// All nodes, in start order.
    #[must_use]
    pub fn nodes(&self) -> &[MockNode] {
        &self.nodes
    }

    /// Looks up a node by account id.
    #[must_use]
    pub fn node(&self, account_id: AccountId) -> Option<&MockNode> {
        self.nodes.iter().find(|node| node.account_id() == account_id)
    }

    /// A config builder pointing at every node.
    #[must_use]
    pub fn client_config(&self) -> ClientConfigBuilder {
        ClientConfig::builder()
            .with_network(self.nodes.iter().map(|node| (node.address.clone(), node.account_id())))
    }

    /// Sets an account balance.
    pub fn set_balance(&self, account_id: AccountId, tinybars: u64) {
        self.ledger.balances.insert(account_id, tinybars);
    }

    /// Returns an account balance, if the account exists.
    #[must_use]
    pub fn balance(&self, account_id: AccountId) -> Option<AccountBalance> {
        self.ledger.balances.get(&account_id).map(|b| AccountBalance { account_id, tinybars: *b })
    }

    /// Requires transactions paid by `account_id` to carry a signature from `key`.
    pub fn register_key(&self, account_id: AccountId, key: PublicKey) {
        self.ledger.keys.insert(account_id, key);
    }

    /// Creates an empty topic.
    pub fn create_topic(&self, topic_id: TopicId) {
        self.ledger.topics.insert(topic_id, (0, vec![0; codec::TRANSACTION_HASH_LENGTH]));
    }

    /// Makes receipts of transactions accepted from now on read as `UNKNOWN`
    /// for the first `polls` queries.
    pub fn set_pending_polls(&self, polls: usize) {
        self.ledger.pending_polls.store(polls, Ordering::SeqCst);
    }

    /// Final receipt of an accepted transaction, bypassing pending polls.
    #[must_use]
    pub fn receipt(&self, transaction_id: &TransactionId) -> Option<TransactionReceipt> {
        self.ledger.receipts.get(transaction_id).map(|entry| entry.record.receipt.clone())
    }

    /// Record of an accepted transaction, bypassing pending polls.
    #[must_use]
    pub fn record(&self, transaction_id: &TransactionId) -> Option<TransactionRecord> {
        self.ledger.receipts.get(transaction_id).map(|entry| entry.record.clone())
    }

    /// Requests received across every node.
    #[must_use]
    pub fn total_requests(&self) -> usize {
        self.nodes.iter().map(MockNode::total_requests).sum()
    }
}

// =============================================================================
// Scripted transport
// =============================================================================

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// A precheck status, shaped for the called method.
    Precheck(Status),
    /// An `OK` receipt query answer carrying this receipt.
    Receipt(TransactionReceipt),
    /// An `OK` record query answer carrying this record.
    Record(TransactionRecord),
    /// An `OK` balance query answer.
    Balance(AccountBalance),
    /// A gRPC failure.
    Error(tonic::Status),
    /// Raw response bytes.
    Raw(Bytes),
    /// The inner reply after a delay.
    Delayed(Duration, Box<ScriptedReply>),
}

impl ScriptedReply {
    fn render(&self, method: Method) -> std::result::Result<Bytes, tonic::Status> {
        let response = match self {
            Self::Precheck(status) if method.is_transaction() => {
                let response =
                    proto::TransactionResponse { node_transaction_precheck_code: status.code(), cost: 0 };
                return Ok(Bytes::from(response.encode_to_vec()));
            },
            Self::Precheck(status) => match method {
                Method::CryptoGetBalance => {
                    proto::response::Response::CryptogetAccountBalance(proto::CryptoGetAccountBalanceResponse {
                        header: Some(codec::response_header(*status)),
                        ..Default::default()
                    })
                },
                Method::GetTxRecordByTxId => {
                    proto::response::Response::TransactionGetRecord(proto::TransactionGetRecordResponse {
                        header: Some(codec::response_header(*status)),
                        ..Default::default()
                    })
                },
                _ => proto::response::Response::TransactionGetReceipt(proto::TransactionGetReceiptResponse {
                    header: Some(codec::response_header(*status)),
                    receipt: None,
                }),
            },
            Self::Receipt(receipt) => {
                proto::response::Response::TransactionGetReceipt(proto::TransactionGetReceiptResponse {
                    header: Some(codec::response_header(Status::Ok)),
                    receipt: Some(receipt.into()),
                })
            },
            Self::Record(record) => {
                proto::response::Response::TransactionGetRecord(proto::TransactionGetRecordResponse {
                    header: Some(codec::response_header(Status::Ok)),
                    transaction_record: Some(record.into()),
                    ..Default::default()
                })
            },
            Self::Balance(balance) => {
                proto::response::Response::CryptogetAccountBalance(proto::CryptoGetAccountBalanceResponse {
                    header: Some(codec::response_header(Status::Ok)),
                    account_id: Some(balance.account_id.into()),
                    balance: balance.tinybars,
                })
            },
            Self::Error(status) => return Err(status.clone()),
            Self::Raw(bytes) => return Ok(bytes.clone()),
            Self::Delayed(_, inner) => return inner.render(method),
        };
        Ok(Bytes::from(proto::Response { response: Some(response) }.encode_to_vec()))
    }
}

/// A call seen by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Node called.
    pub node: AccountId,
    /// Method called.
    pub method: Method,
    /// Request bytes.
    pub body: Bytes,
    /// When the call was made.
    pub at: Instant,
}

/// [`Transport`] answering from a script, in call order.
///
/// Once the script runs out, every call gets the fallback reply, or a
/// `FAILED_PRECONDITION` error when there is none.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<ScriptedReply>>,
    fallback: Option<ScriptedReply>,
    calls: Mutex<Vec<RecordedCall>>,
    per_node: Mutex<HashMap<AccountId, VecDeque<ScriptedReply>>>,
}

impl ScriptedTransport {
    /// Answers calls with `replies`, in order.
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self { script: Mutex::new(replies.into_iter().collect()), ..Self::default() }
    }

    /// Answers every call with `reply`.
    #[must_use]
    pub fn repeating(reply: ScriptedReply) -> Self {
        Self { fallback: Some(reply), ..Self::default() }
    }

    /// Answers calls to `node` from a dedicated script before the shared one.
    pub fn script_node(&self, node: AccountId, replies: impl IntoIterator<Item = ScriptedReply>) {
        self.per_node.lock().entry(node).or_default().extend(replies);
    }

    /// Calls made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    fn next_reply(&self, node: AccountId) -> Option<ScriptedReply> {
        if let Some(reply) = self.per_node.lock().get_mut(&node).and_then(VecDeque::pop_front) {
            return Some(reply);
        }
        self.script.lock().pop_front().or_else(|| self.fallback.clone())
    }
}

#[tonic::async_trait]
impl Transport for ScriptedTransport {
    async fn call(
        &self,
        node: &NodeEndpoint,
        method: Method,
        body: Bytes,
    ) -> std::result::Result<Bytes, tonic::Status> {
        self.calls.lock().push(RecordedCall { node: node.account_id(), method, body, at: Instant::now() });

        let Some(reply) = self.next_reply(node.account_id()) else {
            return Err(tonic::Status::failed_precondition("script exhausted"));
        };
        if let ScriptedReply::Delayed(delay, _) = &reply {
            tokio::time::sleep(*delay).await;
        }
        reply.render(method)
    }
}
