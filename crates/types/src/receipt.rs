//! Decoded response entities: transaction receipts and account balances.

use serde::{Deserialize, Serialize};

use crate::{
    status::Status,
    types::{AccountId, TopicId},
};

/// Outcome of a transaction once the network has reached consensus on it.
///
/// A receipt with a non-terminal status (`UNKNOWN`, `RECEIPT_NOT_FOUND`)
/// means consensus has not been reached yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Consensus status of the transaction.
    pub status: Status,
    /// Account created by the transaction, if any.
    pub account_id: Option<AccountId>,
    /// Topic created by the transaction, if any.
    pub topic_id: Option<TopicId>,
    /// Sequence number of a submitted topic message.
    pub topic_sequence_number: u64,
    /// Running hash of the topic after a submitted message.
    pub topic_running_hash: Option<Vec<u8>>,
    /// Serial numbers of minted tokens.
    pub serials: Vec<i64>,
}

impl TransactionReceipt {
    /// Creates a receipt carrying only a status.
    #[must_use]
    pub fn with_status(status: Status) -> Self {
        Self { status, ..Self::default() }
    }
}

/// Balance of an account, in tinybars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account whose balance this is.
    pub account_id: AccountId,
    /// Balance in tinybars.
    pub tinybars: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_receipt_is_pending() {
        let receipt = TransactionReceipt::default();
        assert_eq!(receipt.status, Status::Unknown);
        assert!(receipt.account_id.is_none());
    }

    #[test]
    fn test_with_status() {
        let receipt = TransactionReceipt::with_status(Status::Success);
        assert_eq!(receipt.status, Status::Success);
        assert_eq!(receipt.topic_sequence_number, 0);
    }
}
