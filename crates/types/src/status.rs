//! Response status codes returned by network nodes.
//!
//! The set of known codes is closed; codes this library does not know about
//! are preserved as [`Status::Unrecognized`] so callers can still inspect them.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_status {
    ($($variant:ident = $code:literal => $name:literal,)+) => {
        /// A node or consensus response code.
        ///
        /// Text form is the protocol's SCREAMING_SNAKE name, e.g. `INVALID_SIGNATURE`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "i32", into = "i32")]
        #[allow(missing_docs)]
        pub enum Status {
            $($variant,)+
            /// A code outside the known set.
            Unrecognized(i32),
        }

        impl Status {
            /// Maps a wire code to a status. Never fails.
            #[must_use]
            pub const fn from_code(code: i32) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Unrecognized(other),
                }
            }

            /// Returns the wire code.
            #[must_use]
            pub const fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unrecognized(code) => code,
                }
            }

            /// Returns the protocol name, or `None` for unrecognized codes.
            #[must_use]
            pub const fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($name),)+
                    Self::Unrecognized(_) => None,
                }
            }
        }
    };
}

define_status! {
    Ok = 0 => "OK",
    InvalidTransaction = 1 => "INVALID_TRANSACTION",
    PayerAccountNotFound = 2 => "PAYER_ACCOUNT_NOT_FOUND",
    InvalidNodeAccount = 3 => "INVALID_NODE_ACCOUNT",
    TransactionExpired = 4 => "TRANSACTION_EXPIRED",
    InvalidTransactionStart = 5 => "INVALID_TRANSACTION_START",
    InvalidTransactionDuration = 6 => "INVALID_TRANSACTION_DURATION",
    InvalidSignature = 7 => "INVALID_SIGNATURE",
    MemoTooLong = 8 => "MEMO_TOO_LONG",
    InsufficientTxFee = 9 => "INSUFFICIENT_TX_FEE",
    InsufficientPayerBalance = 10 => "INSUFFICIENT_PAYER_BALANCE",
    DuplicateTransaction = 11 => "DUPLICATE_TRANSACTION",
    Busy = 12 => "BUSY",
    NotSupported = 13 => "NOT_SUPPORTED",
    InvalidFileId = 14 => "INVALID_FILE_ID",
    InvalidAccountId = 15 => "INVALID_ACCOUNT_ID",
    InvalidContractId = 16 => "INVALID_CONTRACT_ID",
    InvalidTransactionId = 17 => "INVALID_TRANSACTION_ID",
    ReceiptNotFound = 18 => "RECEIPT_NOT_FOUND",
    RecordNotFound = 19 => "RECORD_NOT_FOUND",
    InvalidSolidityId = 20 => "INVALID_SOLIDITY_ID",
    Unknown = 21 => "UNKNOWN",
    Success = 22 => "SUCCESS",
    FailInvalid = 23 => "FAIL_INVALID",
    FailFee = 24 => "FAIL_FEE",
    FailBalance = 25 => "FAIL_BALANCE",
    KeyRequired = 26 => "KEY_REQUIRED",
    BadEncoding = 27 => "BAD_ENCODING",
    InsufficientAccountBalance = 28 => "INSUFFICIENT_ACCOUNT_BALANCE",
    InvalidSolidityAddress = 29 => "INVALID_SOLIDITY_ADDRESS",
    InsufficientGas = 30 => "INSUFFICIENT_GAS",
    ContractSizeLimitExceeded = 31 => "CONTRACT_SIZE_LIMIT_EXCEEDED",
    LocalCallModificationException = 32 => "LOCAL_CALL_MODIFICATION_EXCEPTION",
    ContractRevertExecuted = 33 => "CONTRACT_REVERT_EXECUTED",
    ContractExecutionException = 34 => "CONTRACT_EXECUTION_EXCEPTION",
    InvalidReceivingNodeAccount = 35 => "INVALID_RECEIVING_NODE_ACCOUNT",
    MissingQueryHeader = 36 => "MISSING_QUERY_HEADER",
    AccountUpdateFailed = 37 => "ACCOUNT_UPDATE_FAILED",
    InvalidKeyEncoding = 38 => "INVALID_KEY_ENCODING",
    NullSolidityAddress = 39 => "NULL_SOLIDITY_ADDRESS",
    ContractUpdateFailed = 40 => "CONTRACT_UPDATE_FAILED",
    InvalidQueryHeader = 41 => "INVALID_QUERY_HEADER",
    InvalidFeeSubmitted = 42 => "INVALID_FEE_SUBMITTED",
    InvalidPayerSignature = 43 => "INVALID_PAYER_SIGNATURE",
    KeyNotProvided = 44 => "KEY_NOT_PROVIDED",
    InvalidExpirationTime = 45 => "INVALID_EXPIRATION_TIME",
    NoWaclKey = 46 => "NO_WACL_KEY",
    FileContentEmpty = 47 => "FILE_CONTENT_EMPTY",
    InvalidAccountAmounts = 48 => "INVALID_ACCOUNT_AMOUNTS",
    EmptyTransactionBody = 49 => "EMPTY_TRANSACTION_BODY",
    InvalidTransactionBody = 50 => "INVALID_TRANSACTION_BODY",
    InvalidSignatureTypeMismatchingKey = 51 => "INVALID_SIGNATURE_TYPE_MISMATCHING_KEY",
    InvalidSignatureCountMismatchingKey = 52 => "INVALID_SIGNATURE_COUNT_MISMATCHING_KEY",
    EmptyClaimBody = 53 => "EMPTY_CLAIM_BODY",
    EmptyClaimHash = 54 => "EMPTY_CLAIM_HASH",
    EmptyClaimKeys = 55 => "EMPTY_CLAIM_KEYS",
    InvalidClaimHashSize = 56 => "INVALID_CLAIM_HASH_SIZE",
    EmptyQueryBody = 57 => "EMPTY_QUERY_BODY",
    EmptyClaimQuery = 58 => "EMPTY_CLAIM_QUERY",
    ClaimNotFound = 59 => "CLAIM_NOT_FOUND",
    AccountIdDoesNotExist = 60 => "ACCOUNT_ID_DOES_NOT_EXIST",
    ClaimAlreadyExists = 61 => "CLAIM_ALREADY_EXISTS",
    InvalidFileWacl = 62 => "INVALID_FILE_WACL",
    SerializationFailed = 63 => "SERIALIZATION_FAILED",
    TransactionOversize = 64 => "TRANSACTION_OVERSIZE",
    TransactionTooManyLayers = 65 => "TRANSACTION_TOO_MANY_LAYERS",
    ContractDeleted = 66 => "CONTRACT_DELETED",
    PlatformNotActive = 67 => "PLATFORM_NOT_ACTIVE",
    KeyPrefixMismatch = 68 => "KEY_PREFIX_MISMATCH",
    PlatformTransactionNotCreated = 69 => "PLATFORM_TRANSACTION_NOT_CREATED",
    InvalidRenewalPeriod = 70 => "INVALID_RENEWAL_PERIOD",
    InvalidPayerAccountId = 71 => "INVALID_PAYER_ACCOUNT_ID",
    AccountDeleted = 72 => "ACCOUNT_DELETED",
    FileDeleted = 73 => "FILE_DELETED",
    AccountRepeatedInAccountAmounts = 74 => "ACCOUNT_REPEATED_IN_ACCOUNT_AMOUNTS",
    SettingNegativeAccountBalance = 75 => "SETTING_NEGATIVE_ACCOUNT_BALANCE",
    ObtainerRequired = 76 => "OBTAINER_REQUIRED",
    ObtainerSameContractId = 77 => "OBTAINER_SAME_CONTRACT_ID",
    ObtainerDoesNotExist = 78 => "OBTAINER_DOES_NOT_EXIST",
    ModifyingImmutableContract = 79 => "MODIFYING_IMMUTABLE_CONTRACT",
    FileSystemException = 80 => "FILE_SYSTEM_EXCEPTION",
    AutorenewDurationNotInRange = 81 => "AUTORENEW_DURATION_NOT_IN_RANGE",
    ErrorDecodingBytestring = 82 => "ERROR_DECODING_BYTESTRING",
    ContractFileEmpty = 83 => "CONTRACT_FILE_EMPTY",
    ContractBytecodeEmpty = 84 => "CONTRACT_BYTECODE_EMPTY",
    InvalidInitialBalance = 85 => "INVALID_INITIAL_BALANCE",
    InvalidReceiveRecordThreshold = 86 => "INVALID_RECEIVE_RECORD_THRESHOLD",
    InvalidSendRecordThreshold = 87 => "INVALID_SEND_RECORD_THRESHOLD",
    AccountIsNotGenesisAccount = 88 => "ACCOUNT_IS_NOT_GENESIS_ACCOUNT",
    PayerAccountUnauthorized = 89 => "PAYER_ACCOUNT_UNAUTHORIZED",
    InvalidFreezeTransactionBody = 90 => "INVALID_FREEZE_TRANSACTION_BODY",
    FreezeTransactionBodyNotFound = 91 => "FREEZE_TRANSACTION_BODY_NOT_FOUND",
    TransferListSizeLimitExceeded = 92 => "TRANSFER_LIST_SIZE_LIMIT_EXCEEDED",
    ResultSizeLimitExceeded = 93 => "RESULT_SIZE_LIMIT_EXCEEDED",
    NotSpecialAccount = 94 => "NOT_SPECIAL_ACCOUNT",
    ContractNegativeGas = 95 => "CONTRACT_NEGATIVE_GAS",
    ContractNegativeValue = 96 => "CONTRACT_NEGATIVE_VALUE",
    InvalidFeeFile = 97 => "INVALID_FEE_FILE",
    InvalidExchangeRateFile = 98 => "INVALID_EXCHANGE_RATE_FILE",
    InsufficientLocalCallGas = 99 => "INSUFFICIENT_LOCAL_CALL_GAS",
    EntityNotAllowedToDelete = 100 => "ENTITY_NOT_ALLOWED_TO_DELETE",
    AuthorizationFailed = 101 => "AUTHORIZATION_FAILED",
    FileUploadedProtoInvalid = 102 => "FILE_UPLOADED_PROTO_INVALID",
    FileUploadedProtoNotSavedToDisk = 103 => "FILE_UPLOADED_PROTO_NOT_SAVED_TO_DISK",
    FeeScheduleFilePartUploaded = 104 => "FEE_SCHEDULE_FILE_PART_UPLOADED",
    ExchangeRateChangeLimitExceeded = 105 => "EXCHANGE_RATE_CHANGE_LIMIT_EXCEEDED",
    MaxContractStorageExceeded = 106 => "MAX_CONTRACT_STORAGE_EXCEEDED",
    TransferAccountSameAsDeleteAccount = 107 => "TRANSFER_ACCOUNT_SAME_AS_DELETE_ACCOUNT",
    TotalLedgerBalanceInvalid = 108 => "TOTAL_LEDGER_BALANCE_INVALID",
    ExpirationReductionNotAllowed = 110 => "EXPIRATION_REDUCTION_NOT_ALLOWED",
    MaxGasLimitExceeded = 111 => "MAX_GAS_LIMIT_EXCEEDED",
    InvalidTopicId = 150 => "INVALID_TOPIC_ID",
    InvalidTopicExpirationTime = 154 => "INVALID_TOPIC_EXPIRATION_TIME",
    InvalidAdminKey = 155 => "INVALID_ADMIN_KEY",
    InvalidSubmitKey = 156 => "INVALID_SUBMIT_KEY",
    Unauthorized = 157 => "UNAUTHORIZED",
    InvalidTopicMessage = 158 => "INVALID_TOPIC_MESSAGE",
    InvalidAutorenewAccount = 159 => "INVALID_AUTORENEW_ACCOUNT",
    AutoRenewAccountNotAllowed = 160 => "AUTORENEW_ACCOUNT_NOT_ALLOWED",
    AutoRenewAccountSignatureMissing = 161 => "AUTORENEW_ACCOUNT_SIGNATURE_MISSING",
    TopicExpired = 162 => "TOPIC_EXPIRED",
}

impl Status {
    /// Returns `true` unless the code is outside the known set.
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNRECOGNIZED({})", self.code()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(Status::from_code(0), Status::Ok);
        assert_eq!(Status::from_code(12), Status::Busy);
        assert_eq!(Status::from_code(22), Status::Success);
        assert_eq!(Status::from_code(67), Status::PlatformNotActive);
        assert_eq!(Status::from_code(158), Status::InvalidTopicMessage);
        assert_eq!(Status::InvalidSignature.code(), 7);
    }

    #[test]
    fn test_unrecognized_code_is_preserved() {
        let status = Status::from_code(109);
        assert_eq!(status, Status::Unrecognized(109));
        assert_eq!(status.code(), 109);
        assert!(!status.is_recognized());
        assert_eq!(status.to_string(), "UNRECOGNIZED(109)");
    }

    #[test]
    fn test_display_uses_protocol_name() {
        assert_eq!(Status::InsufficientPayerBalance.to_string(), "INSUFFICIENT_PAYER_BALANCE");
        assert_eq!(Status::PlatformTransactionNotCreated.to_string(), "PLATFORM_TRANSACTION_NOT_CREATED");
    }

    #[test]
    fn test_every_known_code_maps_back() {
        for code in 0..200 {
            let status = Status::from_code(code);
            assert_eq!(status.code(), code);
            assert_eq!(status.is_recognized(), status.name().is_some());
        }
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&Status::Busy).unwrap();
        assert_eq!(json, "12");
        let back: Status = serde_json::from_str("4").unwrap();
        assert_eq!(back, Status::TransactionExpired);
    }
}
