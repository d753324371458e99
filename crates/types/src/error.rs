//! Error types for parsing and validating domain identifiers.

use snafu::Snafu;

/// Result type for identifier parsing.
pub type Result<T, E = IdError> = std::result::Result<T, E>;

/// Errors produced when parsing or validating identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum IdError {
    /// Entity id is not of the form `shard.realm.num`.
    #[snafu(display("Invalid entity id '{input}': expected `shard.realm.num`"))]
    InvalidEntityId {
        /// The rejected input.
        input: String,
    },

    /// Transaction id text is malformed.
    #[snafu(display("Invalid transaction id '{input}': {reason}"))]
    InvalidTransactionId {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Timestamp components are out of range.
    #[snafu(display("Invalid timestamp: {reason}"))]
    InvalidTimestamp {
        /// What was wrong with it.
        reason: String,
    },

    /// Node endpoint address is empty or malformed.
    #[snafu(display("Invalid node address '{address}': {reason}"))]
    InvalidAddress {
        /// The rejected address.
        address: String,
        /// What was wrong with it.
        reason: String,
    },
}
