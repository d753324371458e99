//! End-to-end tests for the SDK against in-process mock nodes.
//!
//! Every test starts its own [`MockNetwork`]: real tonic servers on
//! ephemeral ports, sharing one toy ledger. Requests travel over gRPC the
//! same way they would against a real network.
//!
//! ## Test Categories
//!
//! - **Submit, receipt and record**: transfers and topic messages through consensus
//! - **Failover**: injected `UNAVAILABLE` answers push the engine to other nodes
//! - **Rejections**: bad signatures, duplicates, failed receipts
//! - **Lifecycle**: close and network replacement

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::{sync::Arc, time::Duration};

use hashgraph_sdk::{
    AccountBalanceQuery, AccountId, AttemptStatus, Client, ClientConfig, ExhaustedReason, LocalSigner,
    Method, NodeBackoff, ReceiptPollConfig, RetryPolicy, SdkError, Signer, Status, TopicId, Transaction,
    TransactionReceiptQuery, TransactionRecordQuery, Transfer, mock::MockNetwork,
};

const OPERATOR: AccountId = AccountId::from_num(1001);
const RECEIVER: AccountId = AccountId::from_num(1002);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fast_retries() -> RetryPolicy {
    RetryPolicy::builder()
        .max_attempts(6)
        .min_backoff(Duration::from_millis(10))
        .max_backoff(Duration::from_millis(100))
        .build()
        .unwrap()
}

fn fast_node_backoff() -> NodeBackoff {
    NodeBackoff::builder()
        .base(Duration::from_millis(5))
        .max(Duration::from_millis(50))
        .build()
        .unwrap()
}

/// Client config for `network` with fast retries and the given operator key.
fn config(network: &MockNetwork, signer: Arc<dyn Signer>) -> ClientConfig {
    network
        .client_config()
        .with_operator(OPERATOR, signer)
        .with_retry_policy(fast_retries())
        .with_node_backoff(fast_node_backoff())
        .build()
        .unwrap()
}

fn fast_polls() -> ReceiptPollConfig {
    ReceiptPollConfig::builder().interval(Duration::from_millis(20)).build().unwrap()
}

/// Starts `nodes` mock nodes with a funded operator whose key is registered.
async fn setup(nodes: usize) -> (MockNetwork, Client, Arc<LocalSigner>) {
    init_tracing();
    let network = MockNetwork::start(nodes).await.unwrap();
    let signer = Arc::new(LocalSigner::generate());
    network.register_key(OPERATOR, signer.public_key());
    network.set_balance(OPERATOR, 1_000);

    let client = Client::new(config(&network, signer.clone()));
    (network, client, signer)
}

// ============================================================================
// Submit and receipt
// ============================================================================

#[tokio::test]
async fn test_transfer_reaches_consensus() {
    let (network, client, _) = setup(3).await;

    let response = Transaction::transfer(OPERATOR, RECEIVER, 250).execute(&client).await.unwrap();
    let receipt = response.get_receipt_with(&client, &fast_polls()).await.unwrap();

    assert_eq!(receipt.status, Status::Success);
    assert_eq!(network.receipt(&response.transaction_id).unwrap().status, Status::Success);
    assert_eq!(response.transaction_hash.len(), 48);

    let payer = AccountBalanceQuery::new(OPERATOR).execute(&client).await.unwrap();
    let receiver = AccountBalanceQuery::new(RECEIVER).execute(&client).await.unwrap();
    assert_eq!(payer.tinybars, 750);
    assert_eq!(receiver.tinybars, 250);
}

#[tokio::test]
async fn test_topic_messages_are_sequenced() {
    let (network, client, _) = setup(2).await;
    let topic = TopicId::from_num(42);
    network.create_topic(topic);

    let mut hashes = Vec::new();
    for (expected, message) in [(1, "first"), (2, "second")] {
        let response = Transaction::submit_message(topic, message).execute(&client).await.unwrap();
        let receipt = response.get_receipt_with(&client, &fast_polls()).await.unwrap();
        assert_eq!(receipt.topic_sequence_number, expected);
        hashes.push(receipt.topic_running_hash.unwrap());
    }
    assert_eq!(hashes[0].len(), 48);
    assert_ne!(hashes[0], hashes[1]);
}

#[tokio::test]
async fn test_receipt_polls_until_consensus() {
    let (network, client, _) = setup(1).await;
    network.set_pending_polls(2);

    let response = Transaction::transfer(OPERATOR, RECEIVER, 1).execute(&client).await.unwrap();
    let receipt = response.get_receipt_with(&client, &fast_polls()).await.unwrap();

    assert_eq!(receipt.status, Status::Success);
    let node = network.node(response.node_id).unwrap();
    assert_eq!(node.request_count(Method::GetTransactionReceipts), 3);
}

#[tokio::test]
async fn test_receipt_before_submission_is_exhausted() {
    let (_network, client, _) = setup(1).await;
    let transaction_id = hashgraph_sdk::generate_transaction_id(OPERATOR);
    let config = ReceiptPollConfig::builder()
        .max_polls(3)
        .interval(Duration::from_millis(10))
        .build()
        .unwrap();

    let result = client.wait_for_receipt(transaction_id, &config).await;
    assert!(matches!(
        result,
        Err(SdkError::Exhausted {
            reason: ExhaustedReason::MaxAttempts,
            attempts: 3,
            last_status: Some(AttemptStatus::Ledger(Status::ReceiptNotFound)),
            ..
        })
    ));

    let receipt = TransactionReceiptQuery::new(transaction_id).execute(&client).await.unwrap();
    assert_eq!(receipt.status, Status::ReceiptNotFound);
}

#[tokio::test]
async fn test_transfer_record_lists_balance_changes() {
    let (network, client, _) = setup(2).await;

    let response = Transaction::transfer(OPERATOR, RECEIVER, 40)
        .with_memo("lunch")
        .execute(&client)
        .await
        .unwrap();
    let record = response.get_record_with(&client, &fast_polls()).await.unwrap();

    assert_eq!(record.receipt.status, Status::Success);
    assert_eq!(record.transaction_id, Some(response.transaction_id));
    assert_eq!(record.transaction_hash, response.transaction_hash);
    assert_eq!(record.memo, "lunch");
    assert!(record.consensus_timestamp.is_some());
    assert_eq!(
        record.transfers,
        vec![Transfer { account_id: OPERATOR, amount: -40 }, Transfer { account_id: RECEIVER, amount: 40 }]
    );
    assert_eq!(record.net_transfer(RECEIVER), 40);
    assert_eq!(network.record(&response.transaction_id).unwrap(), record);

    let node = network.node(response.node_id).unwrap();
    assert_eq!(node.request_count(Method::GetTxRecordByTxId), 1);
}

#[tokio::test]
async fn test_record_of_unknown_transaction_exhausts() {
    let (network, client, _) = setup(1).await;
    let transaction_id = hashgraph_sdk::generate_transaction_id(OPERATOR);

    let result = TransactionRecordQuery::new(transaction_id).execute(&client).await;
    assert!(matches!(
        result,
        Err(SdkError::Exhausted {
            reason: ExhaustedReason::MaxAttempts,
            attempts: 6,
            last_status: Some(AttemptStatus::Ledger(Status::RecordNotFound)),
            ..
        })
    ));
    assert_eq!(network.nodes()[0].request_count(Method::GetTxRecordByTxId), 6);
}

#[tokio::test]
async fn test_insufficient_balance_fails_at_consensus() {
    let (_network, client, _) = setup(2).await;

    let response = Transaction::transfer(OPERATOR, RECEIVER, 5_000).execute(&client).await.unwrap();
    let result = response.get_receipt_with(&client, &fast_polls()).await;
    assert!(matches!(
        result,
        Err(SdkError::ReceiptStatus { status: Status::InsufficientAccountBalance, .. })
    ));

    let lenient = ReceiptPollConfig { validate_status: false, ..fast_polls() };
    let receipt = response.get_receipt_with(&client, &lenient).await.unwrap();
    assert_eq!(receipt.status, Status::InsufficientAccountBalance);
}

// ============================================================================
// Failover
// ============================================================================

#[tokio::test]
async fn test_unavailable_nodes_fail_over() {
    let (network, client, _) = setup(3).await;
    let healthy = network.nodes()[2].account_id();
    for node in &network.nodes()[..2] {
        node.inject_unavailable(100);
    }

    let response = Transaction::transfer(OPERATOR, RECEIVER, 10).execute(&client).await.unwrap();
    assert_eq!(response.node_id, healthy);

    for node in &network.nodes()[..2] {
        let attempts = node.request_count(Method::CryptoTransfer);
        assert!(attempts <= 1);
        let failures = client.registry().health(node.account_id()).unwrap().consecutive_failures;
        assert_eq!(failures as usize, attempts);
    }
    assert_eq!(client.registry().health(healthy).unwrap().consecutive_failures, 0);
}

#[tokio::test]
async fn test_transient_unavailable_on_single_node_recovers() {
    let (network, client, _) = setup(1).await;
    network.nodes()[0].inject_unavailable(2);

    let balance = AccountBalanceQuery::new(OPERATOR).execute(&client).await.unwrap();
    assert_eq!(balance.tinybars, 1_000);
    assert_eq!(network.nodes()[0].request_count(Method::CryptoGetBalance), 3);
    let health = client.registry().health(network.nodes()[0].account_id()).unwrap();
    assert_eq!(health.consecutive_failures, 0);
}

#[tokio::test]
async fn test_busy_precheck_is_retried() {
    let (network, client, _) = setup(1).await;
    network.nodes()[0].script_precheck([Status::Busy, Status::PlatformNotActive]);

    let response = Transaction::transfer(OPERATOR, RECEIVER, 10).execute(&client).await.unwrap();
    assert_eq!(network.nodes()[0].request_count(Method::CryptoTransfer), 3);

    let receipt = response.get_receipt_with(&client, &fast_polls()).await.unwrap();
    assert_eq!(receipt.status, Status::Success);
}

#[tokio::test]
async fn test_persistent_unavailable_exhausts() {
    let (network, client, _) = setup(2).await;
    for node in network.nodes() {
        node.inject_unavailable(100);
    }

    let result = Transaction::transfer(OPERATOR, RECEIVER, 10).execute(&client).await;
    match result {
        Err(SdkError::Exhausted { reason: ExhaustedReason::MaxAttempts, attempts, last_node, last_status }) => {
            assert_eq!(attempts, 6);
            assert!(last_node.is_some());
            assert_eq!(last_status, Some(AttemptStatus::Transport(tonic::Code::Unavailable)));
        },
        other => panic!("expected exhaustion, got {other:?}"),
    }
    assert_eq!(network.total_requests(), 6);
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_wrong_key_is_fatal() {
    let (network, _client, _) = setup(2).await;
    let client = Client::new(config(&network, Arc::new(LocalSigner::generate())));

    let result = Transaction::transfer(OPERATOR, RECEIVER, 10).execute(&client).await;
    assert!(matches!(
        result,
        Err(SdkError::FatalStatus { status: AttemptStatus::Ledger(Status::InvalidSignature), .. })
    ));
    assert_eq!(network.total_requests(), 1);
}

#[tokio::test]
async fn test_resubmission_is_duplicate() {
    let (_network, client, _) = setup(1).await;
    let mut frozen = Transaction::transfer(OPERATOR, RECEIVER, 10).freeze_with(&client).unwrap();

    frozen.execute(&client).await.unwrap();
    let result = frozen.execute(&client).await;
    assert!(matches!(
        result,
        Err(SdkError::FatalStatus { status: AttemptStatus::Ledger(Status::DuplicateTransaction), .. })
    ));
}

#[tokio::test]
async fn test_unknown_topic_fails_at_consensus() {
    let (_network, client, _) = setup(1).await;

    let response = Transaction::submit_message(TopicId::from_num(404), "lost").execute(&client).await.unwrap();
    let result = response.get_receipt_with(&client, &fast_polls()).await;
    assert!(matches!(result, Err(SdkError::ReceiptStatus { status: Status::InvalidTopicId, .. })));
}

#[tokio::test]
async fn test_unknown_account_balance_is_fatal() {
    let (_network, client, _) = setup(1).await;
    let result = AccountBalanceQuery::new(AccountId::from_num(9999)).execute(&client).await;
    assert!(matches!(
        result,
        Err(SdkError::FatalStatus { status: AttemptStatus::Ledger(Status::InvalidAccountId), .. })
    ));
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_close_rejects_further_calls() {
    let (network, client, _) = setup(2).await;
    AccountBalanceQuery::new(OPERATOR).execute(&client).await.unwrap();
    let before = network.total_requests();

    client.close();
    assert!(client.is_closed());

    let result = Transaction::transfer(OPERATOR, RECEIVER, 10).execute(&client).await;
    assert!(matches!(result, Err(SdkError::Shutdown)));
    let result = AccountBalanceQuery::new(OPERATOR).execute(&client).await;
    assert!(matches!(result, Err(SdkError::Shutdown)));
    assert_eq!(network.total_requests(), before);
}

#[tokio::test]
async fn test_set_network_moves_traffic() {
    let (network, client, _) = setup(2).await;
    let [first, second] = [&network.nodes()[0], &network.nodes()[1]];

    client.set_network([(first.address().to_string(), first.account_id())]).unwrap();
    for _ in 0..3 {
        AccountBalanceQuery::new(OPERATOR).execute(&client).await.unwrap();
    }
    assert_eq!(first.request_count(Method::CryptoGetBalance), 3);
    assert_eq!(second.request_count(Method::CryptoGetBalance), 0);
}
