//! Conversions between `hashgraph-types` domain types and protobuf messages.
//!
//! Domain -> proto conversions are infallible. Proto -> domain conversions
//! reject negative entity numbers, account aliases, and missing required fields.

use std::time::Duration;

use hashgraph_types::{
    AccountId, Status, Timestamp, TopicId, TransactionId, TransactionReceipt, TransactionRecord, Transfer,
};
use snafu::{Snafu, ensure};

use crate::proto;

/// Errors converting a protobuf message into a domain type.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum ConvertError {
    /// A required message field was absent.
    #[snafu(display("Missing required field `{field}`"))]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// An entity number was negative.
    #[snafu(display("Negative value {value} in `{field}`"))]
    NegativeNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The negative value.
        value: i64,
    },

    /// Account was identified by alias rather than number.
    #[snafu(display("Account aliases are not supported"))]
    UnsupportedAlias,

    /// Timestamp nanos out of range.
    #[snafu(display("Invalid timestamp nanos {nanos}"))]
    InvalidTimestamp {
        /// The rejected nanosecond component.
        nanos: i32,
    },
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, ConvertError> {
    ensure!(value >= 0, NegativeNumberSnafu { field, value });
    Ok(value as u64)
}

// Entity numbers beyond i64::MAX are not representable on the wire; they wrap.
fn to_wire(value: u64) -> i64 {
    value as i64
}

// ============================================================================
// Identifiers
// ============================================================================

impl From<AccountId> for proto::AccountId {
    fn from(id: AccountId) -> Self {
        Self {
            shard_num: to_wire(id.shard),
            realm_num: to_wire(id.realm),
            account: Some(proto::account_id::Account::AccountNum(to_wire(id.num))),
        }
    }
}

impl TryFrom<&proto::AccountId> for AccountId {
    type Error = ConvertError;

    fn try_from(value: &proto::AccountId) -> Result<Self, Self::Error> {
        let num = match &value.account {
            Some(proto::account_id::Account::AccountNum(num)) => *num,
            Some(proto::account_id::Account::Alias(_)) => return UnsupportedAliasSnafu.fail(),
            None => 0,
        };
        Ok(Self::new(
            non_negative("shard_num", value.shard_num)?,
            non_negative("realm_num", value.realm_num)?,
            non_negative("account_num", num)?,
        ))
    }
}

impl From<TopicId> for proto::TopicId {
    fn from(id: TopicId) -> Self {
        Self {
            shard_num: to_wire(id.shard),
            realm_num: to_wire(id.realm),
            topic_num: to_wire(id.num),
        }
    }
}

impl TryFrom<&proto::TopicId> for TopicId {
    type Error = ConvertError;

    fn try_from(value: &proto::TopicId) -> Result<Self, Self::Error> {
        Ok(Self::new(
            non_negative("shard_num", value.shard_num)?,
            non_negative("realm_num", value.realm_num)?,
            non_negative("topic_num", value.topic_num)?,
        ))
    }
}

impl From<Timestamp> for proto::Timestamp {
    fn from(ts: Timestamp) -> Self {
        Self { seconds: ts.seconds, nanos: ts.nanos }
    }
}

impl TryFrom<proto::Timestamp> for Timestamp {
    type Error = ConvertError;

    fn try_from(value: proto::Timestamp) -> Result<Self, Self::Error> {
        Timestamp::new(value.seconds, value.nanos)
            .map_err(|_| ConvertError::InvalidTimestamp { nanos: value.nanos })
    }
}

impl From<Duration> for proto::Duration {
    fn from(duration: Duration) -> Self {
        Self { seconds: duration.as_secs() as i64 }
    }
}

impl From<TransactionId> for proto::TransactionId {
    fn from(id: TransactionId) -> Self {
        Self {
            transaction_valid_start: Some(id.valid_start.into()),
            account_id: Some(id.account_id.into()),
            scheduled: id.scheduled,
            nonce: id.nonce.unwrap_or(0),
        }
    }
}

impl TryFrom<&proto::TransactionId> for TransactionId {
    type Error = ConvertError;

    fn try_from(value: &proto::TransactionId) -> Result<Self, Self::Error> {
        let account = value
            .account_id
            .as_ref()
            .ok_or(ConvertError::MissingField { field: "transaction_id.account_id" })?;
        let start = value
            .transaction_valid_start
            .ok_or(ConvertError::MissingField { field: "transaction_id.transaction_valid_start" })?;

        Ok(Self {
            account_id: AccountId::try_from(account)?,
            valid_start: Timestamp::try_from(start)?,
            scheduled: value.scheduled,
            nonce: (value.nonce != 0).then_some(value.nonce),
        })
    }
}

// ============================================================================
// Status and receipts
// ============================================================================

impl From<Status> for proto::ResponseCodeEnum {
    fn from(status: Status) -> Self {
        // Unrecognized codes have no enum variant; callers needing them use `Status::code`.
        proto::ResponseCodeEnum::try_from(status.code()).unwrap_or(proto::ResponseCodeEnum::Unknown)
    }
}

impl TryFrom<&proto::TransactionReceipt> for TransactionReceipt {
    type Error = ConvertError;

    fn try_from(value: &proto::TransactionReceipt) -> Result<Self, Self::Error> {
        Ok(Self {
            status: Status::from_code(value.status),
            account_id: value.account_id.as_ref().map(AccountId::try_from).transpose()?,
            topic_id: value.topic_id.as_ref().map(TopicId::try_from).transpose()?,
            topic_sequence_number: value.topic_sequence_number,
            topic_running_hash: (!value.topic_running_hash.is_empty())
                .then(|| value.topic_running_hash.clone()),
            serials: value.serial_numbers.clone(),
        })
    }
}

impl From<&TransactionReceipt> for proto::TransactionReceipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            status: receipt.status.code(),
            account_id: receipt.account_id.map(Into::into),
            topic_id: receipt.topic_id.map(Into::into),
            topic_sequence_number: receipt.topic_sequence_number,
            topic_running_hash: receipt.topic_running_hash.clone().unwrap_or_default(),
            serial_numbers: receipt.serials.clone(),
        }
    }
}

// ============================================================================
// Transfers and records
// ============================================================================

impl From<Transfer> for proto::AccountAmount {
    fn from(transfer: Transfer) -> Self {
        Self { account_id: Some(transfer.account_id.into()), amount: transfer.amount, is_approval: false }
    }
}

impl TryFrom<&proto::AccountAmount> for Transfer {
    type Error = ConvertError;

    fn try_from(value: &proto::AccountAmount) -> Result<Self, Self::Error> {
        let account = value.account_id.as_ref().ok_or(ConvertError::MissingField { field: "account_amount.account_id" })?;
        Ok(Self { account_id: AccountId::try_from(account)?, amount: value.amount })
    }
}

/// Duplicate and child records travel beside the record, not inside it;
/// the converted record leaves both lists empty.
impl TryFrom<&proto::TransactionRecord> for TransactionRecord {
    type Error = ConvertError;

    fn try_from(value: &proto::TransactionRecord) -> Result<Self, Self::Error> {
        let receipt = value.receipt.as_ref().ok_or(ConvertError::MissingField { field: "record.receipt" })?;
        let transfers = match &value.transfer_list {
            Some(list) => list.account_amounts.iter().map(Transfer::try_from).collect::<Result<_, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            receipt: TransactionReceipt::try_from(receipt)?,
            transaction_hash: value.transaction_hash.clone(),
            consensus_timestamp: value.consensus_timestamp.map(Timestamp::try_from).transpose()?,
            transaction_id: value.transaction_id.as_ref().map(TransactionId::try_from).transpose()?,
            memo: value.memo.clone(),
            transaction_fee: value.transaction_fee,
            transfers,
            duplicates: Vec::new(),
            children: Vec::new(),
        })
    }
}

impl From<&TransactionRecord> for proto::TransactionRecord {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            receipt: Some((&record.receipt).into()),
            transaction_hash: record.transaction_hash.clone(),
            consensus_timestamp: record.consensus_timestamp.map(Into::into),
            transaction_id: record.transaction_id.map(Into::into),
            memo: record.memo.clone(),
            transaction_fee: record.transaction_fee,
            transfer_list: (!record.transfers.is_empty()).then(|| proto::TransferList {
                account_amounts: record.transfers.iter().copied().map(Into::into).collect(),
            }),
        }
    }
}
