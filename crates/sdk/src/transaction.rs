//! Transactions: build, freeze, sign, execute.
//!
//! A [`Transaction`] is a mutable builder. Freezing it against a client
//! assigns the transaction id and node list and serializes one body per
//! node; the result is a [`FrozenTransaction`], which exposes no setters.
//! Only signatures can be added after freezing.

use std::{fmt, time::Duration};

use bytes::Bytes;
use hashgraph_proto::proto;
use hashgraph_types::{
    AccountId, NodeEndpoint, Timestamp, TopicId, TransactionId, TransactionReceipt, TransactionRecord, Transfer,
};
use prost::Message;
use rand::Rng;
use snafu::ensure;

use crate::{
    client::Client,
    codec,
    engine::{Executable, Reply},
    error::{ConfigSnafu, EncodingSnafu, Result, SdkError},
    query::TransactionRecordQuery,
    receipt::{ReceiptPollConfig, wait_for_receipt},
    signer::{PublicKey, Signer},
    transport::Method,
};

/// Default maximum fee, in tinybars (2 hbar).
pub const DEFAULT_MAX_TRANSACTION_FEE: u64 = 200_000_000;

/// Default validity window.
pub const DEFAULT_VALID_DURATION: Duration = Duration::from_secs(120);

/// Maximum memo length in bytes.
pub const MAX_MEMO_BYTES: usize = 100;

/// Maximum topic message size in bytes; larger messages would need chunking.
pub const MAX_MESSAGE_BYTES: usize = 1024;

/// Valid-start timestamps are backdated by a random amount in this range
/// (nanoseconds) to tolerate clock skew between client and nodes.
const VALID_START_BACKDATE_NANOS: std::ops::Range<u64> = 8_000_000_000..13_000_000_000;

/// Generates a fresh transaction id for `account_id`.
#[must_use]
pub fn generate_transaction_id(account_id: AccountId) -> TransactionId {
    let backdate = Duration::from_nanos(rand::rng().random_range(VALID_START_BACKDATE_NANOS));
    TransactionId::new(account_id, Timestamp::now().saturating_sub(backdate))
}

/// What a transaction does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionData {
    /// Move hbar between accounts; amounts must sum to zero.
    CryptoTransfer {
        /// Transfer legs.
        transfers: Vec<Transfer>,
    },
    /// Submit a message to a consensus topic.
    ConsensusSubmitMessage {
        /// Target topic.
        topic_id: TopicId,
        /// Message payload.
        message: Vec<u8>,
    },
}

impl TransactionData {
    fn method(&self) -> Method {
        match self {
            Self::CryptoTransfer { .. } => Method::CryptoTransfer,
            Self::ConsensusSubmitMessage { .. } => Method::SubmitMessage,
        }
    }

    fn to_proto(&self) -> proto::transaction_body::Data {
        match self {
            Self::CryptoTransfer { transfers } => {
                proto::transaction_body::Data::CryptoTransfer(proto::CryptoTransferTransactionBody {
                    transfers: Some(proto::TransferList {
                        account_amounts: transfers.iter().copied().map(Into::into).collect(),
                    }),
                })
            },
            Self::ConsensusSubmitMessage { topic_id, message } => {
                proto::transaction_body::Data::ConsensusSubmitMessage(
                    proto::ConsensusSubmitMessageTransactionBody {
                        topic_id: Some((*topic_id).into()),
                        message: message.clone(),
                    },
                )
            },
        }
    }
}

/// Transaction builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    data: TransactionData,
    transaction_id: Option<TransactionId>,
    node_account_ids: Option<Vec<AccountId>>,
    max_transaction_fee: u64,
    valid_duration: Duration,
    memo: String,
}

impl Transaction {
    /// Creates a transaction with default fee, validity, and no memo.
    #[must_use]
    pub fn new(data: TransactionData) -> Self {
        Self {
            data,
            transaction_id: None,
            node_account_ids: None,
            max_transaction_fee: DEFAULT_MAX_TRANSACTION_FEE,
            valid_duration: DEFAULT_VALID_DURATION,
            memo: String::new(),
        }
    }

    /// A transfer of `amount` tinybars from `from` to `to`.
    #[must_use]
    pub fn transfer(from: AccountId, to: AccountId, amount: i64) -> Self {
        Self::crypto_transfer(vec![
            Transfer { account_id: from, amount: amount.saturating_neg() },
            Transfer { account_id: to, amount },
        ])
    }

    /// A transfer with explicit legs.
    #[must_use]
    pub fn crypto_transfer(transfers: Vec<Transfer>) -> Self {
        Self::new(TransactionData::CryptoTransfer { transfers })
    }

    /// A topic message submission.
    #[must_use]
    pub fn submit_message(topic_id: TopicId, message: impl Into<Vec<u8>>) -> Self {
        Self::new(TransactionData::ConsensusSubmitMessage { topic_id, message: message.into() })
    }

    /// Uses an explicit transaction id instead of generating one.
    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: TransactionId) -> Self {
        self.transaction_id = Some(transaction_id);
        self
    }

    /// Restricts the transaction to the given nodes.
    #[must_use]
    pub fn with_node_account_ids(mut self, nodes: Vec<AccountId>) -> Self {
        self.node_account_ids = Some(nodes);
        self
    }

    /// Sets the maximum fee, in tinybars.
    #[must_use]
    pub fn with_max_transaction_fee(mut self, fee: u64) -> Self {
        self.max_transaction_fee = fee;
        self
    }

    /// Sets the validity window.
    #[must_use]
    pub fn with_valid_duration(mut self, duration: Duration) -> Self {
        self.valid_duration = duration;
        self
    }

    /// Sets the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// What the transaction does.
    #[must_use]
    pub fn data(&self) -> &TransactionData {
        &self.data
    }

    /// Fixes the transaction id and node list and serializes the bodies.
    ///
    /// Without an explicit id, one is generated for the client's operator.
    /// Without explicit nodes, up to `max_nodes_per_transaction` nodes are
    /// picked from the registry, healthy ones first.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Config`] if an id must be generated but no operator is
    ///   set, or an explicit node is unknown to the client
    /// - [`SdkError::Encoding`] for an oversized memo or message
    /// - [`SdkError::NoHealthyNodes`] if the network is empty
    pub fn freeze_with(self, client: &Client) -> Result<FrozenTransaction> {
        ensure!(
            self.memo.len() <= MAX_MEMO_BYTES,
            EncodingSnafu { message: format!("memo is {} bytes; limit is {MAX_MEMO_BYTES}", self.memo.len()) }
        );
        if let TransactionData::ConsensusSubmitMessage { message, .. } = &self.data {
            ensure!(
                message.len() <= MAX_MESSAGE_BYTES,
                EncodingSnafu {
                    message: format!("topic message is {} bytes; limit is {MAX_MESSAGE_BYTES}", message.len())
                }
            );
        }

        let transaction_id = match self.transaction_id {
            Some(id) => id,
            None => {
                let operator = client.operator_account_id().ok_or_else(|| {
                    ConfigSnafu { message: "an operator is required to generate a transaction id" }.build()
                })?;
                generate_transaction_id(operator)
            },
        };

        let nodes: Vec<AccountId> = match self.node_account_ids {
            Some(nodes) => {
                ensure!(!nodes.is_empty(), ConfigSnafu { message: "node_account_ids cannot be empty" });
                for node in &nodes {
                    ensure!(
                        client.registry().node(*node).is_some(),
                        ConfigSnafu { message: format!("node {node} is not in the client's network") }
                    );
                }
                nodes
            },
            None => client
                .registry()
                .pick_nodes(client.config().max_nodes_per_transaction())?
                .iter()
                .map(NodeEndpoint::account_id)
                .collect(),
        };

        let data = self.data.to_proto();
        let bodies = nodes
            .iter()
            .map(|node| {
                let body = proto::TransactionBody {
                    transaction_id: Some(transaction_id.into()),
                    node_account_id: Some((*node).into()),
                    transaction_fee: self.max_transaction_fee,
                    transaction_valid_duration: Some(self.valid_duration.into()),
                    generate_record: false,
                    memo: self.memo.clone(),
                    data: Some(data.clone()),
                };
                NodeBody { node: *node, body_bytes: body.encode_to_vec(), sig_map: proto::SignatureMap::default() }
            })
            .collect();

        tracing::debug!(%transaction_id, nodes = nodes.len(), "Transaction frozen");
        Ok(FrozenTransaction { method: self.data.method(), transaction_id, nodes, bodies, signers: Vec::new() })
    }

    /// Freezes, signs with the operator, and submits.
    ///
    /// # Errors
    ///
    /// See [`Transaction::freeze_with`] and [`FrozenTransaction::execute`].
    pub async fn execute(self, client: &Client) -> Result<TransactionResponse> {
        let mut frozen = self.freeze_with(client)?;
        frozen.execute(client).await
    }
}

#[derive(Debug, Clone)]
struct NodeBody {
    node: AccountId,
    body_bytes: Vec<u8>,
    sig_map: proto::SignatureMap,
}

impl NodeBody {
    fn signed_transaction_bytes(&self) -> Vec<u8> {
        codec::encode_signed_transaction(&self.body_bytes, &self.sig_map)
    }
}

/// A transaction whose id and node list are fixed.
#[derive(Clone)]
pub struct FrozenTransaction {
    method: Method,
    transaction_id: TransactionId,
    nodes: Vec<AccountId>,
    bodies: Vec<NodeBody>,
    signers: Vec<PublicKey>,
}

impl fmt::Debug for FrozenTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenTransaction")
            .field("method", &self.method)
            .field("transaction_id", &self.transaction_id)
            .field("nodes", &self.nodes)
            .field("signers", &self.signers)
            .finish()
    }
}

impl FrozenTransaction {
    /// The fixed transaction id.
    #[must_use]
    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// The fixed node list.
    #[must_use]
    pub fn node_account_ids(&self) -> &[AccountId] {
        &self.nodes
    }

    /// Whether `key` has signed.
    #[must_use]
    pub fn is_signed_by(&self, key: &PublicKey) -> bool {
        self.signers.contains(key)
    }

    /// Signs every per-node body. Signing twice with the same key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Signing`] if the signer fails or returns a
    /// signature that is not 64 bytes. No signature is added in that case.
    pub async fn sign(&mut self, signer: &dyn Signer) -> Result<()> {
        let key = signer.public_key();
        if self.is_signed_by(&key) {
            return Ok(());
        }

        let mut signatures = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            let signature = signer.sign(&body.body_bytes).await?;
            ensure!(
                signature.len() == 64,
                crate::error::SigningSnafu {
                    message: format!("Ed25519 signature must be 64 bytes, got {}", signature.len())
                }
            );
            signatures.push(signature);
        }

        for (body, signature) in self.bodies.iter_mut().zip(signatures) {
            body.sig_map.sig_pair.push(proto::SignaturePair {
                pub_key_prefix: key.as_bytes().to_vec(),
                signature: Some(proto::signature_pair::Signature::Ed25519(signature)),
            });
        }
        self.signers.push(key);
        Ok(())
    }

    /// SHA-384 hash of the signed transaction as sent to `node`.
    #[must_use]
    pub fn transaction_hash(&self, node: AccountId) -> Option<Vec<u8>> {
        self.body(node).map(|body| codec::transaction_hash(&body.signed_transaction_bytes()))
    }

    fn body(&self, node: AccountId) -> Option<&NodeBody> {
        self.bodies.iter().find(|body| body.node == node)
    }

    /// Submits the transaction, signing with the operator first if needed.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Signing`] if the transaction carries no signature and the
    ///   client has no operator
    /// - any error from [`Client::execute`]
    pub async fn execute(&mut self, client: &Client) -> Result<TransactionResponse> {
        if let Some(operator) = client.operator() {
            self.sign(operator.signer.as_ref()).await?;
        }
        if self.signers.is_empty() {
            return Err(SdkError::Signing { message: "transaction has no signatures".to_string() });
        }
        client.execute(&*self).await
    }
}

impl Executable for FrozenTransaction {
    type Response = TransactionResponse;

    fn method(&self) -> Method {
        self.method
    }

    fn node_account_ids(&self) -> Option<&[AccountId]> {
        Some(&self.nodes)
    }

    fn transaction_id(&self) -> Option<TransactionId> {
        Some(self.transaction_id)
    }

    fn encode(&self, node: &NodeEndpoint) -> Result<Bytes> {
        let body = self.body(node.account_id()).ok_or_else(|| {
            EncodingSnafu { message: format!("node {} is not in the transaction's node list", node.account_id()) }
                .build()
        })?;
        Ok(codec::encode_transaction(body.signed_transaction_bytes()))
    }

    fn decode(&self, node: &NodeEndpoint, bytes: Bytes) -> Result<Reply<TransactionResponse>> {
        let status = codec::decode_transaction_response(&bytes)?;
        let transaction_hash = self.transaction_hash(node.account_id()).unwrap_or_default();
        Ok(Reply::new(
            status,
            TransactionResponse { node_id: node.account_id(), transaction_id: self.transaction_id, transaction_hash },
        ))
    }
}

/// Answer to a successfully submitted transaction.
///
/// Acceptance by a node is not consensus; use [`TransactionResponse::get_receipt`]
/// for the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResponse {
    /// Node that accepted the transaction.
    pub node_id: AccountId,
    /// Id of the submitted transaction.
    pub transaction_id: TransactionId,
    /// SHA-384 of the signed transaction bytes.
    pub transaction_hash: Vec<u8>,
}

impl TransactionResponse {
    /// Polls the accepting node until the receipt is terminal.
    ///
    /// # Errors
    ///
    /// See [`wait_for_receipt`].
    pub async fn get_receipt(&self, client: &Client) -> Result<TransactionReceipt> {
        self.get_receipt_with(client, &ReceiptPollConfig::default()).await
    }

    /// Like [`get_receipt`](Self::get_receipt) with explicit polling settings.
    ///
    /// # Errors
    ///
    /// See [`wait_for_receipt`].
    pub async fn get_receipt_with(&self, client: &Client, config: &ReceiptPollConfig) -> Result<TransactionReceipt> {
        wait_for_receipt(client, self.transaction_id, Some(vec![self.node_id]), config).await
    }

    /// Waits for a successful receipt, then fetches the record from the
    /// accepting node.
    ///
    /// # Errors
    ///
    /// See [`wait_for_receipt`]; a failed receipt is reported as
    /// [`SdkError::ReceiptStatus`] before any record is fetched.
    pub async fn get_record(&self, client: &Client) -> Result<TransactionRecord> {
        self.get_record_with(client, &ReceiptPollConfig::default()).await
    }

    /// Like [`get_record`](Self::get_record) with explicit polling settings.
    ///
    /// # Errors
    ///
    /// See [`get_record`](Self::get_record).
    pub async fn get_record_with(&self, client: &Client, config: &ReceiptPollConfig) -> Result<TransactionRecord> {
        let config = ReceiptPollConfig { validate_status: true, ..*config };
        self.get_receipt_with(client, &config).await?;
        TransactionRecordQuery::new(self.transaction_id).with_node_account_ids(vec![self.node_id]).execute(client).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use hashgraph_test_utils::strategies::{arb_account_id, arb_transaction_id};
    use proptest::prelude::*;

    use super::*;
    use crate::{
        config::ClientConfig,
        mock::{ScriptedReply, ScriptedTransport},
        signer::LocalSigner,
    };

    const SECRET_HEX: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    fn operator() -> Arc<LocalSigner> {
        Arc::new(LocalSigner::from_hex(SECRET_HEX).unwrap())
    }

    fn client(nodes: &[u64], max_nodes: Option<usize>) -> Client {
        let mut builder = ClientConfig::builder()
            .with_network(nodes.iter().map(|n| (format!("127.0.0.1:{}", 50200 + n), AccountId::from_num(*n))))
            .with_operator(AccountId::from_num(1001), operator())
            .with_registry_seed(1);
        if let Some(max) = max_nodes {
            builder = builder.with_max_nodes_per_transaction(max);
        }
        let transport = Arc::new(ScriptedTransport::repeating(ScriptedReply::Precheck(hashgraph_types::Status::Ok)));
        Client::with_transport(builder.build().unwrap(), transport)
    }

    fn endpoint(n: u64) -> NodeEndpoint {
        NodeEndpoint::new(format!("127.0.0.1:{}", 50200 + n), AccountId::from_num(n)).unwrap()
    }

    #[test]
    fn test_generated_id_is_backdated() {
        let now = Timestamp::now();
        let id = generate_transaction_id(AccountId::from_num(1001));
        let lag = now.seconds - id.valid_start.seconds;
        assert!((7..=13).contains(&lag), "lag {lag}");
        assert_eq!(id.account_id, AccountId::from_num(1001));
        assert!(!id.scheduled);
    }

    #[test]
    fn test_freeze_fixes_id_and_nodes() {
        let client = client(&[3, 4, 5, 6], Some(2));
        let frozen = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(1002), 10)
            .freeze_with(&client)
            .unwrap();

        assert_eq!(frozen.transaction_id().account_id, AccountId::from_num(1001));
        assert_eq!(frozen.node_account_ids().len(), 2);
        assert_eq!(Executable::node_account_ids(&frozen), Some(frozen.node_account_ids()));
    }

    #[test]
    fn test_freeze_uses_all_nodes_by_default() {
        let client = client(&[3, 4, 5], None);
        let frozen = Transaction::submit_message(TopicId::from_num(7), "hi").freeze_with(&client).unwrap();
        let mut nodes = frozen.node_account_ids().to_vec();
        nodes.sort_by_key(|n| n.num);
        assert_eq!(nodes, vec![AccountId::from_num(3), AccountId::from_num(4), AccountId::from_num(5)]);
        assert_eq!(frozen.method, Method::SubmitMessage);
    }

    #[test]
    fn test_freeze_requires_operator_for_id() {
        let config = ClientConfig::builder().with_node("127.0.0.1:50211", AccountId::from_num(3)).build().unwrap();
        let client = Client::with_transport(config, Arc::new(ScriptedTransport::new([])));

        let result = Transaction::transfer(AccountId::from_num(1), AccountId::from_num(2), 1).freeze_with(&client);
        assert!(matches!(result, Err(SdkError::Config { .. })));

        let id = generate_transaction_id(AccountId::from_num(1));
        let frozen = Transaction::transfer(AccountId::from_num(1), AccountId::from_num(2), 1)
            .with_transaction_id(id)
            .freeze_with(&client)
            .unwrap();
        assert_eq!(frozen.transaction_id(), id);
    }

    #[test]
    fn test_freeze_rejects_unknown_node() {
        let client = client(&[3], None);
        let result = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(2), 1)
            .with_node_account_ids(vec![AccountId::from_num(9)])
            .freeze_with(&client);
        assert!(matches!(result, Err(SdkError::Config { .. })));
    }

    #[test]
    fn test_memo_limit() {
        let client = client(&[3], None);
        let ok = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(2), 1)
            .with_memo("m".repeat(MAX_MEMO_BYTES))
            .freeze_with(&client);
        assert!(ok.is_ok());

        let too_long = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(2), 1)
            .with_memo("m".repeat(MAX_MEMO_BYTES + 1))
            .freeze_with(&client);
        assert!(matches!(too_long, Err(SdkError::Encoding { .. })));
    }

    #[test]
    fn test_oversized_message_rejected() {
        let client = client(&[3], None);
        let result = Transaction::submit_message(TopicId::from_num(7), vec![1u8; MAX_MESSAGE_BYTES + 1]).freeze_with(&client);
        assert!(matches!(result, Err(SdkError::Encoding { .. })));
    }

    #[test]
    fn test_encode_for_foreign_node_fails() {
        let client = client(&[3, 4], None);
        let frozen = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(2), 1)
            .with_node_account_ids(vec![AccountId::from_num(3)])
            .freeze_with(&client)
            .unwrap();
        assert!(matches!(frozen.encode(&endpoint(4)), Err(SdkError::Encoding { .. })));
    }

    #[tokio::test]
    async fn test_sign_is_idempotent_per_key() {
        let client = client(&[3, 4], None);
        let mut frozen = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(2), 1)
            .freeze_with(&client)
            .unwrap();
        let signer = operator();

        frozen.sign(signer.as_ref()).await.unwrap();
        frozen.sign(signer.as_ref()).await.unwrap();
        assert!(frozen.is_signed_by(&signer.public_key()));

        let other = LocalSigner::generate();
        frozen.sign(&other).await.unwrap();

        for node in [3, 4] {
            let decoded = codec::decode_transaction(&frozen.encode(&endpoint(node)).unwrap()).unwrap();
            assert_eq!(decoded.sig_map.sig_pair.len(), 2);
            for pair in &decoded.sig_map.sig_pair {
                let key = PublicKey::from_bytes(&pair.pub_key_prefix).unwrap();
                let Some(proto::signature_pair::Signature::Ed25519(sig)) = &pair.signature else {
                    panic!("expected Ed25519 signature");
                };
                assert!(key.verify(&decoded.body_bytes, sig));
            }
        }
    }

    #[tokio::test]
    async fn test_execute_signs_with_operator() {
        let client = client(&[3], None);
        let mut frozen = Transaction::transfer(AccountId::from_num(1001), AccountId::from_num(2), 1)
            .freeze_with(&client)
            .unwrap();

        let response = frozen.execute(&client).await.unwrap();
        assert!(frozen.is_signed_by(&operator().public_key()));
        assert_eq!(response.node_id, AccountId::from_num(3));
        assert_eq!(response.transaction_id, frozen.transaction_id());
        assert_eq!(response.transaction_hash, frozen.transaction_hash(AccountId::from_num(3)).unwrap());
        assert_eq!(response.transaction_hash.len(), codec::TRANSACTION_HASH_LENGTH);
    }

    #[tokio::test]
    async fn test_execute_without_signatures_fails() {
        let config = ClientConfig::builder().with_node("127.0.0.1:50211", AccountId::from_num(3)).build().unwrap();
        let client = Client::with_transport(config, Arc::new(ScriptedTransport::new([])));
        let mut frozen = Transaction::transfer(AccountId::from_num(1), AccountId::from_num(2), 1)
            .with_transaction_id(generate_transaction_id(AccountId::from_num(1)))
            .freeze_with(&client)
            .unwrap();

        assert!(matches!(frozen.execute(&client).await, Err(SdkError::Signing { .. })));
    }

    fn scripted_client(transport: Arc<ScriptedTransport>) -> Client {
        let config = ClientConfig::builder()
            .with_network([3u64, 4].map(|n| (format!("127.0.0.1:{}", 50200 + n), AccountId::from_num(n))))
            .with_operator(AccountId::from_num(1001), operator())
            .build()
            .unwrap();
        Client::with_transport(config, transport)
    }

    fn accepted_by(node: u64) -> TransactionResponse {
        TransactionResponse {
            node_id: AccountId::from_num(node),
            transaction_id: generate_transaction_id(AccountId::from_num(1001)),
            transaction_hash: vec![0; codec::TRANSACTION_HASH_LENGTH],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_record_waits_for_receipt_on_accepting_node() {
        let record = TransactionRecord {
            receipt: TransactionReceipt::with_status(hashgraph_types::Status::Success),
            memo: "paid".to_string(),
            transaction_fee: 12,
            ..TransactionRecord::default()
        };
        let transport = Arc::new(ScriptedTransport::new([
            ScriptedReply::Receipt(TransactionReceipt::with_status(hashgraph_types::Status::Unknown)),
            ScriptedReply::Receipt(TransactionReceipt::with_status(hashgraph_types::Status::Success)),
            ScriptedReply::Precheck(hashgraph_types::Status::RecordNotFound),
            ScriptedReply::Record(record.clone()),
        ]));
        let client = scripted_client(transport.clone());

        let fetched = accepted_by(4).get_record(&client).await.unwrap();
        assert_eq!(fetched, record);

        let calls = transport.calls();
        let methods: Vec<Method> = calls.iter().map(|c| c.method).collect();
        assert_eq!(
            methods,
            [
                Method::GetTransactionReceipts,
                Method::GetTransactionReceipts,
                Method::GetTxRecordByTxId,
                Method::GetTxRecordByTxId
            ]
        );
        assert!(calls.iter().all(|c| c.node == AccountId::from_num(4)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_record_stops_at_failed_receipt() {
        let failed = hashgraph_types::Status::InsufficientAccountBalance;
        let transport = Arc::new(ScriptedTransport::new([ScriptedReply::Receipt(TransactionReceipt::with_status(failed))]));
        let client = scripted_client(transport.clone());

        let lenient = ReceiptPollConfig { validate_status: false, ..ReceiptPollConfig::default() };
        let result = accepted_by(3).get_record_with(&client, &lenient).await;
        assert!(matches!(result, Err(SdkError::ReceiptStatus { status, .. }) if status == failed));
        assert_eq!(transport.calls().len(), 1);
    }

    proptest! {
        #[test]
        fn prop_encode_decode_recovers_fields(
            payer in arb_account_id(),
            receiver in arb_account_id(),
            transaction_id in arb_transaction_id(),
            amount in 1i64..1_000_000,
            fee in any::<u64>(),
            memo in "[a-z ]{0,100}",
        ) {
            let client = client(&[3, 4], None);
            let frozen = Transaction::transfer(payer, receiver, amount)
                .with_transaction_id(transaction_id)
                .with_max_transaction_fee(fee)
                .with_memo(memo.clone())
                .freeze_with(&client)
                .unwrap();

            for node in [3, 4] {
                let decoded = codec::decode_transaction(&frozen.encode(&endpoint(node)).unwrap()).unwrap();
                let body = decoded.body;
                prop_assert_eq!(
                    TransactionId::try_from(body.transaction_id.as_ref().unwrap()).unwrap(),
                    transaction_id
                );
                prop_assert_eq!(
                    AccountId::try_from(body.node_account_id.as_ref().unwrap()).unwrap(),
                    AccountId::from_num(node)
                );
                prop_assert_eq!(body.transaction_fee, fee);
                prop_assert_eq!(body.transaction_valid_duration.unwrap().seconds, 120);
                prop_assert_eq!(&body.memo, &memo);
                let Some(proto::transaction_body::Data::CryptoTransfer(transfer)) = body.data else {
                    panic!("expected crypto transfer");
                };
                let amounts = transfer.transfers.unwrap().account_amounts;
                prop_assert_eq!(amounts.len(), 2);
                prop_assert_eq!(AccountId::try_from(amounts[0].account_id.as_ref().unwrap()).unwrap(), payer);
                prop_assert_eq!(amounts[0].amount, -amount);
                prop_assert_eq!(amounts[1].amount, amount);
            }
        }
    }
}
