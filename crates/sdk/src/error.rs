//! SDK error types.
//!
//! One error type per failed call:
//! - **Request errors**: malformed requests or responses, bad configuration
//! - **Status errors**: fatal precheck or receipt statuses returned by the network
//! - **Exhaustion**: attempts or deadline used up without a terminal answer
//!
//! Retryable statuses never escape the execution engine; they drive its loop.

use std::fmt;

use hashgraph_types::{AccountId, IdError, Status, TransactionId};
use snafu::{Location, Snafu};
use tonic::Code;

use crate::classify::AttemptStatus;

/// Result type alias for SDK operations.
pub type Result<T, E = SdkError> = std::result::Result<T, E>;

/// Why the engine gave up without a terminal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustedReason {
    /// Every allowed attempt returned a retryable status.
    MaxAttempts,
    /// The request deadline passed mid-retry.
    Deadline,
}

impl fmt::Display for ExhaustedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxAttempts => write!(f, "max attempts reached"),
            Self::Deadline => write!(f, "deadline exceeded"),
        }
    }
}

fn describe<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "none".to_string(), ToString::to_string)
}

/// SDK error types with context-rich error messages.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SdkError {
    /// Request could not be serialized.
    #[snafu(display("Encoding error at {location}: {message}"))]
    Encoding {
        /// Error description.
        message: String,
        /// Source location.
        #[snafu(implicit)]
        location: Location,
    },

    /// Response bytes were truncated or invalid.
    #[snafu(display("Decoding error at {location}: {message}"))]
    Decoding {
        /// Error description.
        message: String,
        /// Source location.
        #[snafu(implicit)]
        location: Location,
    },

    /// A node returned a status that cannot succeed on retry.
    #[snafu(display(
        "Request {} failed on node {node} with status {status}",
        describe(transaction_id.as_ref())
    ))]
    FatalStatus {
        /// Classified status of the failing attempt.
        status: AttemptStatus,
        /// Node that returned it.
        node: AccountId,
        /// Transaction id, for transactions.
        transaction_id: Option<TransactionId>,
    },

    /// Node selection found no candidate.
    #[snafu(display("No healthy nodes available"))]
    NoHealthyNodes,

    /// Attempts or deadline used up without a terminal answer.
    #[snafu(display(
        "Gave up after {attempts} attempts ({reason}); last node {}, last status {}",
        describe(last_node.as_ref()),
        describe(last_status.as_ref())
    ))]
    Exhausted {
        /// Why the engine stopped.
        reason: ExhaustedReason,
        /// Attempts made.
        attempts: u32,
        /// Last node tried.
        last_node: Option<AccountId>,
        /// Last status seen.
        last_status: Option<AttemptStatus>,
    },

    /// A receipt reached consensus with a failure status.
    #[snafu(display("Transaction {transaction_id} reached consensus with status {status}"))]
    ReceiptStatus {
        /// Consensus status from the receipt.
        status: Status,
        /// Transaction the receipt belongs to.
        transaction_id: TransactionId,
    },

    /// Configuration validation error.
    #[snafu(display("Configuration error: {message}"))]
    Config {
        /// Error description.
        message: String,
    },

    /// URL parsing error.
    #[snafu(display("Invalid URL '{url}': {message}"))]
    InvalidUrl {
        /// The invalid URL.
        url: String,
        /// Parse error description.
        message: String,
    },

    /// A local socket could not be bound or inspected.
    #[snafu(display("Connection error: {message}"))]
    Connection {
        /// Error description.
        message: String,
    },

    /// Signer failed to produce a signature.
    #[snafu(display("Signing error: {message}"))]
    Signing {
        /// Error description.
        message: String,
    },

    /// Identifier parsing failed.
    #[snafu(context(false), display("{source}"))]
    Id {
        /// Underlying parse error.
        source: IdError,
    },

    /// Client has been closed.
    #[snafu(display("Client shutting down"))]
    Shutdown,
}

impl SdkError {
    /// Returns true if repeating the whole call could succeed.
    ///
    /// Exhaustion and an empty healthy set are transient; statuses the
    /// classifier marked fatal, malformed input, and a closed client are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Exhausted { .. } => true,
            Self::NoHealthyNodes => true,
            Self::Encoding { .. } => false,
            Self::Decoding { .. } => false,
            Self::FatalStatus { .. } => false,
            Self::ReceiptStatus { .. } => false,
            Self::Config { .. } => false,
            Self::InvalidUrl { .. } => false,
            Self::Connection { .. } => false,
            Self::Signing { .. } => false,
            Self::Id { .. } => false,
            Self::Shutdown => false,
        }
    }

    /// Returns the gRPC status code if the failing attempt ended at the transport layer.
    #[must_use]
    pub fn code(&self) -> Option<Code> {
        match self {
            Self::FatalStatus { status: AttemptStatus::Transport(code), .. } => Some(*code),
            Self::Exhausted { last_status: Some(AttemptStatus::Transport(code)), .. } => {
                Some(*code)
            },
            _ => None,
        }
    }

    /// Returns the ledger status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::FatalStatus { status: AttemptStatus::Ledger(status), .. } => Some(*status),
            Self::Exhausted { last_status: Some(AttemptStatus::Ledger(status)), .. } => {
                Some(*status)
            },
            Self::ReceiptStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_is_retryable() {
        let err = SdkError::Exhausted {
            reason: ExhaustedReason::MaxAttempts,
            attempts: 3,
            last_node: Some(AccountId::from_num(3)),
            last_status: Some(AttemptStatus::Ledger(Status::Busy)),
        };
        assert!(err.is_retryable());
        assert_eq!(err.status(), Some(Status::Busy));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_exhausted_display() {
        let err = SdkError::Exhausted {
            reason: ExhaustedReason::Deadline,
            attempts: 2,
            last_node: Some(AccountId::from_num(4)),
            last_status: Some(AttemptStatus::Transport(Code::Unavailable)),
        };
        assert_eq!(
            err.to_string(),
            "Gave up after 2 attempts (deadline exceeded); last node 0.0.4, last status gRPC Unavailable"
        );
        assert_eq!(err.code(), Some(Code::Unavailable));
    }

    #[test]
    fn test_fatal_status_not_retryable() {
        let err = SdkError::FatalStatus {
            status: AttemptStatus::Ledger(Status::InvalidSignature),
            node: AccountId::from_num(3),
            transaction_id: None,
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status(), Some(Status::InvalidSignature));
        assert_eq!(err.to_string(), "Request none failed on node 0.0.3 with status INVALID_SIGNATURE");
    }

    #[test]
    fn test_fatal_transport_code() {
        let err = SdkError::FatalStatus {
            status: AttemptStatus::Transport(Code::PermissionDenied),
            node: AccountId::from_num(3),
            transaction_id: None,
        };
        assert_eq!(err.code(), Some(Code::PermissionDenied));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_no_healthy_nodes_retryable() {
        assert!(SdkError::NoHealthyNodes.is_retryable());
    }

    #[test]
    fn test_shutdown_not_retryable() {
        assert!(!SdkError::Shutdown.is_retryable());
    }

    #[test]
    fn test_config_error_not_retryable() {
        let err = SdkError::Config { message: "invalid config".to_owned() };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_id_error() {
        let parsed: std::result::Result<AccountId, _> = "0.x".parse();
        let err: SdkError = parsed.unwrap_err().into();
        assert!(matches!(err, SdkError::Id { .. }));
        assert!(!err.is_retryable());
    }
}
