//! Rust client for hashgraph ledger networks.
//!
//! The SDK submits transactions and queries to a set of consensus nodes over
//! gRPC. Each call is driven by an execution engine that picks a healthy node,
//! sends the request, classifies the answer, and on transient failures backs
//! the node off and retries elsewhere.
//!
//! # Features
//!
//! - **Node health**: capped exponential backoff per node; selection prefers healthy nodes
//! - **Status classification**: closed status enum; unknown codes fail closed
//! - **Frozen transactions**: id and node list fixed at freeze time, typestate-enforced
//! - **Receipts and records**: fixed-interval polling until consensus is reached
//! - **Pluggable signing**: one async path for local keys and external signers
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hashgraph_sdk::{AccountId, Client, ClientConfig, LocalSigner, TopicId, Transaction};
//!
//! # async fn example() -> hashgraph_sdk::Result<()> {
//! let operator = Arc::new(LocalSigner::from_hex(
//!     "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
//! )?);
//! let config = ClientConfig::builder()
//!     .with_node("127.0.0.1:50211", AccountId::from_num(3))
//!     .with_operator(AccountId::from_num(1001), operator)
//!     .build()?;
//! let client = Client::new(config);
//!
//! let response = Transaction::submit_message(TopicId::from_num(42), "hello")
//!     .execute(&client)
//!     .await?;
//! let receipt = response.get_receipt(&client).await?;
//! println!("sequence number {}", receipt.topic_sequence_number);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │        Client / Transaction / Queries (Public API)          │
//! │  freeze_with │ sign │ execute │ get_receipt │ close         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     Execution Engine                        │
//! │  Select node │ Send │ Classify │ Back off and retry         │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │        Node Registry         │       Status Classifier      │
//! │  Health │ Backoff │ Pick     │  Ok │ Retryable │ Fatal      │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │                  Transport (gRPC, raw bytes)                │
//! │  One lazily connected channel per node                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod client;
pub mod codec;
mod config;
mod engine;
mod error;
mod metrics;
pub mod mock;
mod query;
mod receipt;
mod registry;
mod signer;
mod transaction;
mod transport;

// Public API exports
pub use classify::{AttemptStatus, Classification, classify, classify_receipt, classify_transport};
pub use client::Client;
pub use config::{
    ClientConfig, ClientConfigBuilder, ClientConfigFile, NodeBackoff, Operator, OperatorFile, RetryPolicy,
};
pub use engine::{Executable, ExecutionAttempt, ExecutionEngine, Reply, backoff_interval};
pub use error::{ExhaustedReason, Result, SdkError};
pub use hashgraph_types::{
    AccountBalance, AccountId, IdError, NodeEndpoint, Status, Timestamp, TopicId, TransactionId, TransactionReceipt,
    TransactionRecord, Transfer,
};
pub use metrics::{ConnectionEvent, MetricsSdkMetrics, NoopSdkMetrics, SdkMetrics};
pub use query::{AccountBalanceQuery, TransactionReceiptQuery, TransactionRecordQuery};
pub use receipt::{ReceiptPollConfig, wait_for_receipt};
pub use registry::{NodeHealth, NodeRegistry};
pub use signer::{LocalSigner, PUBLIC_KEY_LENGTH, PublicKey, Signer};
pub use transaction::{
    DEFAULT_MAX_TRANSACTION_FEE, DEFAULT_VALID_DURATION, FrozenTransaction, MAX_MEMO_BYTES, MAX_MESSAGE_BYTES,
    Transaction, TransactionData, TransactionResponse, generate_transaction_id,
};
pub use transport::{GrpcTransport, Method, Transport};
