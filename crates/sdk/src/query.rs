//! Free queries: transaction receipts, transaction records, and account balances.
//!
//! Queries are not frozen. Unless bound to specific nodes, each attempt may
//! go to any node in the registry.

use bytes::Bytes;
use hashgraph_proto::proto;
use hashgraph_types::{
    AccountBalance, AccountId, NodeEndpoint, Status, TransactionId, TransactionReceipt, TransactionRecord,
};

use crate::{
    classify::{Classification, classify},
    client::Client,
    codec,
    engine::{Executable, Reply},
    error::{DecodingSnafu, Result},
    transport::Method,
};

/// Asks a node for the receipt of a transaction.
///
/// A node that has not seen the transaction yet answers `RECEIPT_NOT_FOUND`;
/// that answer is returned as a receipt with that status rather than retried
/// here, so the receipt poller can tell "not yet" from "failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceiptQuery {
    transaction_id: TransactionId,
    node_account_ids: Option<Vec<AccountId>>,
}

impl TransactionReceiptQuery {
    /// Creates a query for `transaction_id`.
    #[must_use]
    pub fn new(transaction_id: TransactionId) -> Self {
        Self { transaction_id, node_account_ids: None }
    }

    /// Restricts the query to the given nodes.
    #[must_use]
    pub fn with_node_account_ids(mut self, nodes: Vec<AccountId>) -> Self {
        self.node_account_ids = Some(nodes);
        self
    }

    /// Transaction being queried.
    #[must_use]
    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// Runs the query once, with engine-level retries.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub async fn execute(&self, client: &Client) -> Result<TransactionReceipt> {
        client.execute(self).await
    }
}

impl Executable for TransactionReceiptQuery {
    type Response = TransactionReceipt;

    fn method(&self) -> Method {
        Method::GetTransactionReceipts
    }

    fn node_account_ids(&self) -> Option<&[AccountId]> {
        self.node_account_ids.as_deref()
    }

    fn transaction_id(&self) -> Option<TransactionId> {
        Some(self.transaction_id)
    }

    fn encode(&self, _node: &NodeEndpoint) -> Result<Bytes> {
        Ok(codec::encode_query(proto::query::Query::TransactionGetReceipt(
            proto::TransactionGetReceiptQuery {
                header: Some(codec::query_header()),
                transaction_id: Some(self.transaction_id.into()),
            },
        )))
    }

    fn decode(&self, node: &NodeEndpoint, bytes: Bytes) -> Result<Reply<TransactionReceipt>> {
        let proto::response::Response::TransactionGetReceipt(response) = codec::decode_response(&bytes)? else {
            return DecodingSnafu { message: format!("{node} answered a receipt query with another response") }
                .fail();
        };

        let status = codec::header_status(response.header.as_ref());
        let receipt = match &response.receipt {
            Some(receipt) => TransactionReceipt::try_from(receipt)
                .map_err(|e| DecodingSnafu { message: format!("receipt: {e}") }.build())?,
            None => TransactionReceipt::with_status(status),
        };
        Ok(Reply::new(status, receipt))
    }

    fn classify(&self, status: Status) -> Classification {
        match status {
            Status::ReceiptNotFound => Classification::Ok,
            other => classify(other),
        }
    }
}

/// Asks a node for the record of a transaction.
///
/// Unlike receipts, records are only served once consensus is reached, so
/// `RECEIPT_NOT_FOUND`, `RECORD_NOT_FOUND`, and a record whose receipt is still
/// pending are retried by the engine. A record whose receipt failed is
/// returned as is; check `record.receipt.status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecordQuery {
    transaction_id: TransactionId,
    node_account_ids: Option<Vec<AccountId>>,
    include_duplicates: bool,
    include_children: bool,
}

impl TransactionRecordQuery {
    /// Creates a query for `transaction_id`.
    #[must_use]
    pub fn new(transaction_id: TransactionId) -> Self {
        Self { transaction_id, node_account_ids: None, include_duplicates: false, include_children: false }
    }

    /// Restricts the query to the given nodes.
    #[must_use]
    pub fn with_node_account_ids(mut self, nodes: Vec<AccountId>) -> Self {
        self.node_account_ids = Some(nodes);
        self
    }

    /// Also fetch records of duplicate submissions.
    #[must_use]
    pub fn with_include_duplicates(mut self, include: bool) -> Self {
        self.include_duplicates = include;
        self
    }

    /// Also fetch records of child transactions.
    #[must_use]
    pub fn with_include_children(mut self, include: bool) -> Self {
        self.include_children = include;
        self
    }

    /// Transaction being queried.
    #[must_use]
    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// Runs the query.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub async fn execute(&self, client: &Client) -> Result<TransactionRecord> {
        client.execute(self).await
    }
}

fn record_from_proto(record: &proto::TransactionRecord) -> Result<TransactionRecord> {
    TransactionRecord::try_from(record).map_err(|e| DecodingSnafu { message: format!("record: {e}") }.build())
}

impl Executable for TransactionRecordQuery {
    type Response = TransactionRecord;

    fn method(&self) -> Method {
        Method::GetTxRecordByTxId
    }

    fn node_account_ids(&self) -> Option<&[AccountId]> {
        self.node_account_ids.as_deref()
    }

    fn transaction_id(&self) -> Option<TransactionId> {
        Some(self.transaction_id)
    }

    fn encode(&self, _node: &NodeEndpoint) -> Result<Bytes> {
        Ok(codec::encode_query(proto::query::Query::TransactionGetRecord(proto::TransactionGetRecordQuery {
            header: Some(codec::query_header()),
            transaction_id: Some(self.transaction_id.into()),
            include_duplicates: self.include_duplicates,
            include_child_records: self.include_children,
        })))
    }

    fn decode(&self, node: &NodeEndpoint, bytes: Bytes) -> Result<Reply<TransactionRecord>> {
        let proto::response::Response::TransactionGetRecord(response) = codec::decode_response(&bytes)? else {
            return DecodingSnafu { message: format!("{node} answered a record query with another response") }
                .fail();
        };

        let status = codec::header_status(response.header.as_ref());
        let Some(record) = response.transaction_record.as_ref().filter(|_| classify(status) == Classification::Ok) else {
            return Ok(Reply::status_only(status));
        };

        let mut record = record_from_proto(record)?;
        if matches!(
            record.receipt.status,
            Status::Unknown | Status::Busy | Status::ReceiptNotFound | Status::RecordNotFound
        ) {
            return Ok(Reply::status_only(record.receipt.status));
        }

        record.duplicates =
            response.duplicate_transaction_records.iter().map(record_from_proto).collect::<Result<_>>()?;
        record.children = response.child_transaction_records.iter().map(record_from_proto).collect::<Result<_>>()?;
        Ok(Reply::new(status, record))
    }

    fn classify(&self, status: Status) -> Classification {
        match status {
            Status::ReceiptNotFound | Status::RecordNotFound => Classification::Retryable,
            other => classify(other),
        }
    }
}

/// Asks a node for an account's balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalanceQuery {
    account_id: AccountId,
    node_account_ids: Option<Vec<AccountId>>,
}

impl AccountBalanceQuery {
    /// Creates a query for `account_id`.
    #[must_use]
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id, node_account_ids: None }
    }

    /// Restricts the query to the given nodes.
    #[must_use]
    pub fn with_node_account_ids(mut self, nodes: Vec<AccountId>) -> Self {
        self.node_account_ids = Some(nodes);
        self
    }

    /// Runs the query.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub async fn execute(&self, client: &Client) -> Result<AccountBalance> {
        client.execute(self).await
    }
}

impl Executable for AccountBalanceQuery {
    type Response = AccountBalance;

    fn method(&self) -> Method {
        Method::CryptoGetBalance
    }

    fn node_account_ids(&self) -> Option<&[AccountId]> {
        self.node_account_ids.as_deref()
    }

    fn encode(&self, _node: &NodeEndpoint) -> Result<Bytes> {
        Ok(codec::encode_query(proto::query::Query::CryptogetAccountBalance(
            proto::CryptoGetAccountBalanceQuery {
                header: Some(codec::query_header()),
                account_id: Some(self.account_id.into()),
            },
        )))
    }

    fn decode(&self, node: &NodeEndpoint, bytes: Bytes) -> Result<Reply<AccountBalance>> {
        let proto::response::Response::CryptogetAccountBalance(response) = codec::decode_response(&bytes)? else {
            return DecodingSnafu { message: format!("{node} answered a balance query with another response") }
                .fail();
        };

        let status = codec::header_status(response.header.as_ref());
        if classify(status) != Classification::Ok {
            return Ok(Reply::status_only(status));
        }

        let account_id = match &response.account_id {
            Some(account) => AccountId::try_from(account)
                .map_err(|e| DecodingSnafu { message: format!("account_id: {e}") }.build())?,
            None => self.account_id,
        };
        Ok(Reply::new(status, AccountBalance { account_id, tinybars: response.balance }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use hashgraph_types::Timestamp;

    use super::*;

    fn node() -> NodeEndpoint {
        NodeEndpoint::new("127.0.0.1:50211", AccountId::from_num(3)).unwrap()
    }

    fn tx_id() -> TransactionId {
        TransactionId::new(AccountId::from_num(1001), Timestamp::new(1_700_000_000, 42).unwrap())
    }

    fn encode_response(response: proto::response::Response) -> Bytes {
        use prost::Message;
        Bytes::from(proto::Response { response: Some(response) }.encode_to_vec())
    }

    #[test]
    fn test_receipt_query_encodes_transaction_id() {
        let query = TransactionReceiptQuery::new(tx_id());
        let bytes = query.encode(&node()).unwrap();
        match codec::decode_query(&bytes).unwrap() {
            proto::query::Query::TransactionGetReceipt(q) => {
                assert_eq!(TransactionId::try_from(q.transaction_id.as_ref().unwrap()).unwrap(), tx_id());
                assert_eq!(q.header.unwrap().response_type, proto::ResponseType::AnswerOnly as i32);
            },
            other => panic!("unexpected query {other:?}"),
        }
    }

    #[test]
    fn test_receipt_not_found_is_pending_receipt() {
        let query = TransactionReceiptQuery::new(tx_id());
        let bytes = encode_response(proto::response::Response::TransactionGetReceipt(
            proto::TransactionGetReceiptResponse {
                header: Some(codec::response_header(Status::ReceiptNotFound)),
                receipt: None,
            },
        ));
        let reply = query.decode(&node(), bytes).unwrap();
        assert_eq!(reply.status, Status::ReceiptNotFound);
        assert_eq!(reply.response.unwrap().status, Status::ReceiptNotFound);
        assert_eq!(query.classify(Status::ReceiptNotFound), Classification::Ok);
        assert_eq!(query.classify(Status::Busy), Classification::Retryable);
        assert_eq!(query.classify(Status::InvalidTransactionId), Classification::Fatal);
    }

    #[test]
    fn test_receipt_decodes_fields() {
        let query = TransactionReceiptQuery::new(tx_id());
        let receipt = TransactionReceipt { topic_sequence_number: 9, ..TransactionReceipt::with_status(Status::Success) };
        let bytes = encode_response(proto::response::Response::TransactionGetReceipt(
            proto::TransactionGetReceiptResponse {
                header: Some(codec::response_header(Status::Ok)),
                receipt: Some((&receipt).into()),
            },
        ));
        let reply = query.decode(&node(), bytes).unwrap();
        assert_eq!(reply.status, Status::Ok);
        assert_eq!(reply.response.unwrap(), receipt);
    }

    #[test]
    fn test_wrong_response_kind_is_decoding_error() {
        let query = TransactionReceiptQuery::new(tx_id());
        let bytes = encode_response(proto::response::Response::CryptogetAccountBalance(
            proto::CryptoGetAccountBalanceResponse::default(),
        ));
        assert!(matches!(query.decode(&node(), bytes), Err(crate::SdkError::Decoding { .. })));
    }

    fn record_response(status: Status, record: Option<&TransactionRecord>) -> Bytes {
        encode_response(proto::response::Response::TransactionGetRecord(proto::TransactionGetRecordResponse {
            header: Some(codec::response_header(status)),
            transaction_record: record.map(Into::into),
            ..Default::default()
        }))
    }

    #[test]
    fn test_record_query_encodes_flags() {
        let query = TransactionRecordQuery::new(tx_id()).with_include_duplicates(true);
        match codec::decode_query(&query.encode(&node()).unwrap()).unwrap() {
            proto::query::Query::TransactionGetRecord(q) => {
                assert_eq!(TransactionId::try_from(q.transaction_id.as_ref().unwrap()).unwrap(), tx_id());
                assert!(q.include_duplicates);
                assert!(!q.include_child_records);
            },
            other => panic!("unexpected query {other:?}"),
        }
    }

    #[test]
    fn test_record_not_found_is_retried() {
        let query = TransactionRecordQuery::new(tx_id());
        for status in [Status::RecordNotFound, Status::ReceiptNotFound, Status::Busy, Status::Unknown] {
            let reply = query.decode(&node(), record_response(status, None)).unwrap();
            assert_eq!(reply.status, status);
            assert!(reply.response.is_none());
            assert_eq!(query.classify(status), Classification::Retryable, "{status}");
        }
        assert_eq!(query.classify(Status::InvalidTransactionId), Classification::Fatal);
    }

    #[test]
    fn test_record_with_pending_receipt_is_retried() {
        let query = TransactionRecordQuery::new(tx_id());
        let pending = TransactionRecord::default();
        let reply = query.decode(&node(), record_response(Status::Ok, Some(&pending))).unwrap();
        assert_eq!(reply.status, Status::Unknown);
        assert_eq!(query.classify(reply.status), Classification::Retryable);
    }

    #[test]
    fn test_record_decodes_with_duplicates() {
        let query = TransactionRecordQuery::new(tx_id()).with_include_duplicates(true);
        let record = TransactionRecord {
            receipt: TransactionReceipt::with_status(Status::InsufficientAccountBalance),
            transaction_id: Some(tx_id()),
            memo: "rent".to_string(),
            ..TransactionRecord::default()
        };
        let duplicate = TransactionRecord {
            receipt: TransactionReceipt::with_status(Status::DuplicateTransaction),
            ..TransactionRecord::default()
        };
        let bytes = encode_response(proto::response::Response::TransactionGetRecord(
            proto::TransactionGetRecordResponse {
                header: Some(codec::response_header(Status::Ok)),
                transaction_record: Some((&record).into()),
                duplicate_transaction_records: vec![(&duplicate).into()],
                child_transaction_records: Vec::new(),
            },
        ));

        let reply = query.decode(&node(), bytes).unwrap();
        assert_eq!(query.classify(reply.status), Classification::Ok);
        let decoded = reply.response.unwrap();
        assert_eq!(decoded.receipt.status, Status::InsufficientAccountBalance);
        assert_eq!(decoded.memo, "rent");
        assert_eq!(decoded.duplicates, vec![duplicate]);
        assert!(decoded.children.is_empty());
    }

    #[test]
    fn test_balance_decoding() {
        let query = AccountBalanceQuery::new(AccountId::from_num(1001));
        let bytes = encode_response(proto::response::Response::CryptogetAccountBalance(
            proto::CryptoGetAccountBalanceResponse {
                header: Some(codec::response_header(Status::Ok)),
                account_id: Some(AccountId::from_num(1001).into()),
                balance: 12_345,
            },
        ));
        let reply = query.decode(&node(), bytes).unwrap();
        assert_eq!(reply.response, Some(AccountBalance { account_id: AccountId::from_num(1001), tinybars: 12_345 }));

        let bytes = encode_response(proto::response::Response::CryptogetAccountBalance(
            proto::CryptoGetAccountBalanceResponse {
                header: Some(codec::response_header(Status::InvalidAccountId)),
                ..Default::default()
            },
        ));
        let reply = query.decode(&node(), bytes).unwrap();
        assert_eq!(reply.status, Status::InvalidAccountId);
        assert!(reply.response.is_none());
    }

    #[test]
    fn test_balance_with_success_header_keeps_payload() {
        let query = AccountBalanceQuery::new(AccountId::from_num(1001));
        let bytes = encode_response(proto::response::Response::CryptogetAccountBalance(
            proto::CryptoGetAccountBalanceResponse {
                header: Some(codec::response_header(Status::Success)),
                account_id: None,
                balance: 77,
            },
        ));
        let reply = query.decode(&node(), bytes).unwrap();
        assert_eq!(reply.status, Status::Success);
        assert_eq!(query.classify(reply.status), Classification::Ok);
        assert_eq!(reply.response, Some(AccountBalance { account_id: AccountId::from_num(1001), tinybars: 77 }));
    }
}
