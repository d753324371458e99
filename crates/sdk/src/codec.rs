//! Wire codec: protobuf envelopes for transactions, queries, and their responses.
//!
//! Every function here is pure. Encoding never fails on a well-formed
//! request; decoding returns [`SdkError::Decoding`] on truncated or invalid
//! input and leaves no partial state behind.

use bytes::Bytes;
use hashgraph_proto::proto;
use hashgraph_types::Status;
use prost::Message;
use sha2::{Digest, Sha384};

use crate::error::{DecodingSnafu, Result};

/// Length of a transaction hash (SHA-384) in bytes.
pub const TRANSACTION_HASH_LENGTH: usize = 48;

/// A transaction envelope unpacked back into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTransaction {
    /// Parsed transaction body.
    pub body: proto::TransactionBody,
    /// Body bytes exactly as signed.
    pub body_bytes: Vec<u8>,
    /// Signatures over `body_bytes`.
    pub sig_map: proto::SignatureMap,
}

/// Serializes the signed-transaction payload for one node.
#[must_use]
pub fn encode_signed_transaction(body_bytes: &[u8], sig_map: &proto::SignatureMap) -> Vec<u8> {
    proto::SignedTransaction { body_bytes: body_bytes.to_vec(), sig_map: Some(sig_map.clone()) }
        .encode_to_vec()
}

/// Wraps signed-transaction bytes in the outer `Transaction` envelope.
#[must_use]
pub fn encode_transaction(signed_transaction_bytes: Vec<u8>) -> Bytes {
    Bytes::from(proto::Transaction { signed_transaction_bytes }.encode_to_vec())
}

/// SHA-384 of the signed-transaction bytes, as reported by the network.
#[must_use]
pub fn transaction_hash(signed_transaction_bytes: &[u8]) -> Vec<u8> {
    Sha384::digest(signed_transaction_bytes).to_vec()
}

/// Unpacks a `Transaction` envelope.
///
/// # Errors
///
/// Returns [`SdkError::Decoding`](crate::SdkError::Decoding) if any layer fails to parse.
pub fn decode_transaction(bytes: &[u8]) -> Result<DecodedTransaction> {
    let envelope = proto::Transaction::decode(bytes)
        .map_err(|e| DecodingSnafu { message: format!("Transaction: {e}") }.build())?;
    let signed = proto::SignedTransaction::decode(envelope.signed_transaction_bytes.as_slice())
        .map_err(|e| DecodingSnafu { message: format!("SignedTransaction: {e}") }.build())?;
    let body = proto::TransactionBody::decode(signed.body_bytes.as_slice())
        .map_err(|e| DecodingSnafu { message: format!("TransactionBody: {e}") }.build())?;

    Ok(DecodedTransaction { body, body_bytes: signed.body_bytes, sig_map: signed.sig_map.unwrap_or_default() })
}

/// Parses the precheck answer to a transaction submission.
///
/// # Errors
///
/// Returns [`SdkError::Decoding`](crate::SdkError::Decoding) on invalid input.
pub fn decode_transaction_response(bytes: &[u8]) -> Result<Status> {
    let response = proto::TransactionResponse::decode(bytes)
        .map_err(|e| DecodingSnafu { message: format!("TransactionResponse: {e}") }.build())?;
    Ok(Status::from_code(response.node_transaction_precheck_code))
}

/// Header for free, answer-only queries.
#[must_use]
pub fn query_header() -> proto::QueryHeader {
    proto::QueryHeader { payment: None, response_type: proto::ResponseType::AnswerOnly as i32 }
}

/// Serializes a query.
#[must_use]
pub fn encode_query(query: proto::query::Query) -> Bytes {
    Bytes::from(proto::Query { query: Some(query) }.encode_to_vec())
}

/// Parses a query envelope (used by servers and tests).
///
/// # Errors
///
/// Returns [`SdkError::Decoding`](crate::SdkError::Decoding) if the bytes are
/// invalid or the envelope is empty.
pub fn decode_query(bytes: &[u8]) -> Result<proto::query::Query> {
    let query = proto::Query::decode(bytes)
        .map_err(|e| DecodingSnafu { message: format!("Query: {e}") }.build())?;
    query.query.ok_or_else(|| DecodingSnafu { message: "Query has no body" }.build())
}

/// Parses a query response envelope.
///
/// # Errors
///
/// Returns [`SdkError::Decoding`](crate::SdkError::Decoding) if the bytes are
/// invalid or the envelope is empty.
pub fn decode_response(bytes: &[u8]) -> Result<proto::response::Response> {
    let response = proto::Response::decode(bytes)
        .map_err(|e| DecodingSnafu { message: format!("Response: {e}") }.build())?;
    response.response.ok_or_else(|| DecodingSnafu { message: "Response has no body" }.build())
}

/// Precheck status from a response header; a missing header reads as `UNKNOWN`.
#[must_use]
pub fn header_status(header: Option<&proto::ResponseHeader>) -> Status {
    header.map_or(Status::Unknown, |h| Status::from_code(h.node_transaction_precheck_code))
}

/// Builds a response header carrying `status`.
#[must_use]
pub fn response_header(status: Status) -> proto::ResponseHeader {
    proto::ResponseHeader {
        node_transaction_precheck_code: status.code(),
        response_type: proto::ResponseType::AnswerOnly as i32,
        cost: 0,
    }
}
