//! Protobuf types and conversions for the hashgraph client SDK.
//!
//! This crate provides:
//! - Generated protobuf messages and gRPC service traits ([`proto`]) for the
//!   `proto.CryptoService` / `proto.ConsensusService` subset the SDK speaks
//! - Conversions between domain types and proto types ([`convert`])

#![deny(unsafe_code)]
// gRPC services return tonic::Status (176 bytes) - standard practice for gRPC error handling
#![allow(clippy::result_large_err)]

/// Generated protobuf types and service traits.
pub mod proto {
    #![allow(clippy::all)]
    #![allow(missing_docs)]

    // Pre-generated bindings, used unless regeneration is requested
    #[cfg(use_pregenerated_proto)]
    include!("generated/proto.rs");

    #[cfg(not(use_pregenerated_proto))]
    tonic::include_proto!("proto");
}

/// Conversions between domain and protobuf types.
pub mod convert;

pub use convert::ConvertError;

/// Fully-qualified gRPC method paths served by network nodes.
pub mod method {
    /// Submit a crypto transfer transaction.
    pub const CRYPTO_TRANSFER: &str = "/proto.CryptoService/cryptoTransfer";
    /// Query an account balance.
    pub const CRYPTO_GET_BALANCE: &str = "/proto.CryptoService/cryptoGetBalance";
    /// Query a transaction receipt.
    pub const GET_TRANSACTION_RECEIPTS: &str = "/proto.CryptoService/getTransactionReceipts";
    /// Query a transaction record.
    pub const GET_TX_RECORD_BY_TX_ID: &str = "/proto.CryptoService/getTxRecordByTxID";
    /// Submit a consensus topic message.
    pub const SUBMIT_MESSAGE: &str = "/proto.ConsensusService/submitMessage";
}
