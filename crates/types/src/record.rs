//! Transaction records: the full consensus outcome of a transaction.

use serde::{Deserialize, Serialize};

use crate::{
    receipt::TransactionReceipt,
    types::{AccountId, Timestamp, TransactionId},
};

/// One leg of a crypto transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Account credited (positive) or debited (negative).
    pub account_id: AccountId,
    /// Amount in tinybars.
    pub amount: i64,
}

/// What happened to a transaction at consensus.
///
/// A record extends the [`TransactionReceipt`] with the consensus timestamp,
/// the fee charged, and every balance change the transaction caused.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Receipt of the transaction.
    pub receipt: TransactionReceipt,
    /// SHA-384 of the signed transaction bytes.
    pub transaction_hash: Vec<u8>,
    /// When consensus was reached.
    pub consensus_timestamp: Option<Timestamp>,
    /// Id of the recorded transaction.
    pub transaction_id: Option<TransactionId>,
    /// Memo the transaction carried.
    pub memo: String,
    /// Fee charged, in tinybars.
    pub transaction_fee: u64,
    /// Balance changes, including fees.
    pub transfers: Vec<Transfer>,
    /// Records of duplicate submissions, when requested.
    pub duplicates: Vec<TransactionRecord>,
    /// Records of child transactions, when requested.
    pub children: Vec<TransactionRecord>,
}

impl TransactionRecord {
    /// Net tinybar change for `account_id` across all transfers.
    #[must_use]
    pub fn net_transfer(&self, account_id: AccountId) -> i64 {
        self.transfers
            .iter()
            .filter(|t| t.account_id == account_id)
            .fold(0i64, |sum, t| sum.saturating_add(t.amount))
    }
}
