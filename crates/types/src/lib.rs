//! Domain types for the hashgraph client SDK.
//!
//! This crate provides the types shared by the wire layer and the SDK:
//! - Entity identifiers (`AccountId`, `TopicId`) and `TransactionId`
//! - `NodeEndpoint`, the address + account id of a network node
//! - The closed `Status` response-code enum
//! - Decoded receipts, records, and balances
//! - Error types using snafu

pub mod error;
pub mod receipt;
pub mod record;
pub mod status;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{IdError, Result};
pub use receipt::{AccountBalance, TransactionReceipt};
pub use record::{TransactionRecord, Transfer};
pub use status::Status;
pub use types::*;
