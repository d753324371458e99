//! Status classification: maps node and transport statuses to an action.
//!
//! Every status the engine sees ends up in one of three classes. Unknown or
//! unrecognized codes are [`Classification::Fatal`] so the engine never loops
//! on a status it does not understand.

use std::fmt;

use hashgraph_types::Status;
use tonic::Code;

/// Action to take for a status returned by an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Terminal success.
    Ok,
    /// Transient failure; try again, preferably on another node.
    Retryable,
    /// Terminal failure; surface it to the caller.
    Fatal,
}

/// Status observed for a single attempt, either from the node or from the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptStatus {
    /// The node answered with a precheck or receipt status.
    Ledger(Status),
    /// The call failed at the gRPC layer.
    Transport(Code),
}

impl AttemptStatus {
    /// Short label used for metrics and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Ledger(status) => status.to_string(),
            Self::Transport(code) => format!("GRPC_{code:?}").to_uppercase(),
        }
    }
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ledger(status) => write!(f, "{status}"),
            Self::Transport(code) => write!(f, "gRPC {code:?}"),
        }
    }
}

/// Classifies a precheck status returned when submitting a request.
///
/// `TRANSACTION_EXPIRED` is fatal: a frozen transaction cannot be given a new id.
#[must_use]
pub fn classify(status: Status) -> Classification {
    match status {
        Status::Ok | Status::Success => Classification::Ok,
        Status::Busy
        | Status::PlatformNotActive
        | Status::PlatformTransactionNotCreated
        | Status::Unknown => Classification::Retryable,
        Status::Unrecognized(_) => Classification::Fatal,
        _ => Classification::Fatal,
    }
}

/// Classifies the consensus status carried by a receipt.
///
/// [`Classification::Retryable`] here means "not yet terminal; poll again".
#[must_use]
pub fn classify_receipt(status: Status) -> Classification {
    match status {
        Status::Success => Classification::Ok,
        Status::Unknown | Status::ReceiptNotFound | Status::Busy => Classification::Retryable,
        _ => Classification::Fatal,
    }
}

/// Classifies a gRPC failure.
///
/// `INTERNAL` is only retryable when the HTTP/2 stream was reset underneath us.
/// Connection failures surface as `UNAVAILABLE`.
#[must_use]
pub fn classify_transport(code: Code, message: &str) -> Classification {
    match code {
        Code::Unavailable | Code::DeadlineExceeded | Code::ResourceExhausted => {
            Classification::Retryable
        },
        Code::Internal if is_stream_reset(message) => Classification::Retryable,
        _ => Classification::Fatal,
    }
}

/// Matches the word `rst`, one non-alphanumeric separator, then the word
/// `stream`, ignoring ASCII case: `RST_STREAM`, `rst-stream`, `RST STREAM`.
fn is_stream_reset(message: &str) -> bool {
    const PATTERN_LEN: usize = b"rst_stream".len();
    let bytes = message.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    bytes.windows(PATTERN_LEN).enumerate().any(|(start, window)| {
        window[..3].eq_ignore_ascii_case(b"rst")
            && !window[3].is_ascii_alphanumeric()
            && window[4..].eq_ignore_ascii_case(b"stream")
            && (start == 0 || !is_word(bytes[start - 1]))
            && bytes.get(start + PATTERN_LEN).is_none_or(|b| !is_word(*b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precheck_ok_statuses() {
        assert_eq!(classify(Status::Ok), Classification::Ok);
        assert_eq!(classify(Status::Success), Classification::Ok);
    }

    #[test]
    fn test_precheck_retryable_statuses() {
        for status in [
            Status::Busy,
            Status::PlatformNotActive,
            Status::PlatformTransactionNotCreated,
            Status::Unknown,
        ] {
            assert_eq!(classify(status), Classification::Retryable, "{status}");
        }
    }

    #[test]
    fn test_precheck_fatal_statuses() {
        for status in [
            Status::InvalidSignature,
            Status::InsufficientPayerBalance,
            Status::DuplicateTransaction,
            Status::TransactionExpired,
            Status::InvalidNodeAccount,
            Status::ReceiptNotFound,
        ] {
            assert_eq!(classify(status), Classification::Fatal, "{status}");
        }
    }

    #[test]
    fn test_unrecognized_codes_fail_closed() {
        assert_eq!(classify(Status::Unrecognized(9999)), Classification::Fatal);
        assert_eq!(classify(Status::from_code(-1)), Classification::Fatal);
        assert_eq!(classify_receipt(Status::Unrecognized(109)), Classification::Fatal);
    }

    #[test]
    fn test_every_code_classifies() {
        // Total over the whole code space; only the listed codes are non-fatal.
        for code in -5..300 {
            let status = Status::from_code(code);
            let expected = match code {
                0 | 22 => Classification::Ok,
                12 | 21 | 67 | 69 => Classification::Retryable,
                _ => Classification::Fatal,
            };
            assert_eq!(classify(status), expected, "code {code}");
        }
    }

    #[test]
    fn test_receipt_classification() {
        assert_eq!(classify_receipt(Status::Success), Classification::Ok);
        assert_eq!(classify_receipt(Status::Unknown), Classification::Retryable);
        assert_eq!(classify_receipt(Status::ReceiptNotFound), Classification::Retryable);
        assert_eq!(classify_receipt(Status::Busy), Classification::Retryable);
        assert_eq!(classify_receipt(Status::Ok), Classification::Fatal);
        assert_eq!(classify_receipt(Status::InsufficientPayerBalance), Classification::Fatal);
    }

    #[test]
    fn test_transport_retryable_codes() {
        assert_eq!(classify_transport(Code::Unavailable, ""), Classification::Retryable);
        assert_eq!(classify_transport(Code::DeadlineExceeded, ""), Classification::Retryable);
        assert_eq!(classify_transport(Code::ResourceExhausted, ""), Classification::Retryable);
    }

    #[test]
    fn test_transport_internal_only_on_stream_reset() {
        assert_eq!(
            classify_transport(Code::Internal, "Received RST_STREAM with code 0"),
            Classification::Retryable
        );
        assert_eq!(classify_transport(Code::Internal, "boom"), Classification::Fatal);
    }

    #[test]
    fn test_stream_reset_messages() {
        let cases = [
            ("Received RST_STREAM with code 2", Classification::Retryable),
            ("rst-stream error", Classification::Retryable),
            ("RST STREAM", Classification::Retryable),
            ("stream reset: rst stream", Classification::Retryable),
            ("rst.stream", Classification::Retryable),
            ("burst stream", Classification::Fatal),
            ("rst streams closed", Classification::Fatal),
            ("rst  stream", Classification::Fatal),
            ("rststream", Classification::Fatal),
            ("rst", Classification::Fatal),
            ("", Classification::Fatal),
        ];
        for (message, expected) in cases {
            assert_eq!(classify_transport(Code::Internal, message), expected, "{message:?}");
        }
        // Only INTERNAL gets the message check.
        assert_eq!(classify_transport(Code::Unknown, "RST_STREAM"), Classification::Fatal);
    }

    #[test]
    fn test_transport_auth_failures_are_fatal() {
        assert_eq!(classify_transport(Code::Unauthenticated, ""), Classification::Fatal);
        assert_eq!(classify_transport(Code::PermissionDenied, ""), Classification::Fatal);
        assert_eq!(classify_transport(Code::InvalidArgument, ""), Classification::Fatal);
        assert_eq!(classify_transport(Code::Unimplemented, ""), Classification::Fatal);
    }

    #[test]
    fn test_attempt_status_display() {
        assert_eq!(AttemptStatus::Ledger(Status::Busy).to_string(), "BUSY");
        assert_eq!(AttemptStatus::Transport(Code::Unavailable).to_string(), "gRPC Unavailable");
        assert_eq!(AttemptStatus::Transport(Code::Unavailable).label(), "GRPC_UNAVAILABLE");
    }
}
