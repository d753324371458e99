//! Identifier types for network entities, transactions, and nodes.
//!
//! Entity identifiers use the `shard.realm.num` triple; transaction ids
//! pair the paying account with the transaction's valid-start timestamp.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{IdError, InvalidAddressSnafu, InvalidEntityIdSnafu, InvalidTimestampSnafu, Result};

// ============================================================================
// Entity Identifiers
// ============================================================================

/// Parses a `shard.realm.num` triple.
fn parse_entity_triple(input: &str) -> Result<(u64, u64, u64)> {
    let mut parts = input.split('.');
    let (Some(shard), Some(realm), Some(num), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return InvalidEntityIdSnafu { input }.fail();
    };

    let parse = |part: &str| part.parse::<u64>().map_err(|_| IdError::InvalidEntityId {
        input: input.to_string(),
    });

    Ok((parse(shard)?, parse(realm)?, parse(num)?))
}

/// Generates a `shard.realm.num` entity identifier type.
///
/// Each generated type provides:
/// - Standard derives: Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord
/// - Serde as the dotted string form (e.g. `"0.0.3"`)
/// - `Display` / `FromStr` for the dotted form
/// - `new()` and `from_num()` constructors
macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            Serialize, Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            /// Shard number.
            pub shard: u64,
            /// Realm number.
            pub realm: u64,
            /// Entity number.
            pub num: u64,
        }

        impl $name {
            /// Creates an identifier from its three components.
            #[inline]
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self { shard, realm, num }
            }

            /// Creates an identifier in shard 0, realm 0.
            #[inline]
            pub const fn from_num(num: u64) -> Self {
                Self::new(0, 0, num)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self> {
                let (shard, realm, num) = parse_entity_triple(s)?;
                Ok(Self::new(shard, realm, num))
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

define_entity_id!(
    /// Identifier of an account, including the accounts that operate nodes.
    ///
    /// # Display
    ///
    /// `0.0.3`
    AccountId
);

define_entity_id!(
    /// Identifier of a consensus topic.
    ///
    /// # Display
    ///
    /// `0.0.1234`
    TopicId
);

// ============================================================================
// Timestamp
// ============================================================================

/// Number of nanoseconds in one second.
const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// Seconds + nanoseconds since the Unix epoch, as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the epoch.
    pub seconds: i64,
    /// Nanoseconds within the second, `0..1_000_000_000`.
    pub nanos: i32,
}

impl Timestamp {
    /// Creates a timestamp, validating the nanosecond component.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidTimestamp`] if `nanos` is outside `0..1e9`.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self> {
        ensure!(
            (0..NANOS_PER_SECOND).contains(&nanos),
            InvalidTimestampSnafu { reason: format!("nanos {nanos} out of range") }
        );
        Ok(Self { seconds, nanos })
    }

    /// Returns the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    /// Returns this timestamp shifted back by `offset`, saturating at the epoch.
    #[must_use]
    pub fn saturating_sub(self, offset: Duration) -> Self {
        let total = self.as_nanos().saturating_sub(offset.as_nanos() as i128).max(0);
        Self::from_nanos(total)
    }

    fn as_nanos(self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)
    }

    fn from_nanos(total: i128) -> Self {
        let per = i128::from(NANOS_PER_SECOND);
        Self { seconds: (total / per) as i64, nanos: (total % per) as i32 }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        // Pre-epoch clocks collapse to the epoch.
        let since = time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Self { seconds: since.as_secs() as i64, nanos: since.subsec_nanos() as i32 }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}

// ============================================================================
// Transaction Identifier
// ============================================================================

/// Identifies a transaction: the payer account plus the valid-start time.
///
/// # Text form
///
/// `0.0.1001@1700000000.000000001`, optionally followed by `?scheduled`
/// and `/nonce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionId {
    /// Account paying for the transaction.
    pub account_id: AccountId,
    /// Start of the window in which the transaction is valid.
    pub valid_start: Timestamp,
    /// Whether this id refers to a scheduled transaction.
    pub scheduled: bool,
    /// Nonce distinguishing child transactions.
    pub nonce: Option<i32>,
}

impl TransactionId {
    /// Creates a transaction id for `account_id` starting at `valid_start`.
    #[must_use]
    pub const fn new(account_id: AccountId, valid_start: Timestamp) -> Self {
        Self { account_id, valid_start, scheduled: false, nonce: None }
    }

    /// Marks the id as referring to a scheduled transaction.
    #[must_use]
    pub const fn with_scheduled(mut self, scheduled: bool) -> Self {
        self.scheduled = scheduled;
        self
    }

    /// Sets the child-transaction nonce.
    #[must_use]
    pub const fn with_nonce(mut self, nonce: i32) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.account_id, self.valid_start)?;
        if self.scheduled {
            f.write_str("?scheduled")?;
        }
        if let Some(nonce) = self.nonce {
            write!(f, "/{nonce}")?;
        }
        Ok(())
    }
}

impl FromStr for TransactionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| IdError::InvalidTransactionId {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (account, rest) = s.split_once('@').ok_or_else(|| invalid("missing '@'"))?;
        let account_id: AccountId = account.parse().map_err(|_| invalid("bad account id"))?;

        let (rest, nonce) = match rest.split_once('/') {
            Some((head, nonce)) => {
                (head, Some(nonce.parse::<i32>().map_err(|_| invalid("bad nonce"))?))
            },
            None => (rest, None),
        };

        let (time, scheduled) = match rest.strip_suffix("?scheduled") {
            Some(time) => (time, true),
            None => (rest, false),
        };

        let (seconds, nanos) = time.split_once('.').ok_or_else(|| invalid("missing '.'"))?;
        let seconds = seconds.parse::<i64>().map_err(|_| invalid("bad seconds"))?;
        let nanos = nanos.parse::<i32>().map_err(|_| invalid("bad nanos"))?;
        let valid_start = Timestamp::new(seconds, nanos).map_err(|_| invalid("nanos out of range"))?;

        Ok(Self { account_id, valid_start, scheduled, nonce })
    }
}

impl TryFrom<String> for TransactionId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.to_string()
    }
}

// ============================================================================
// Node Endpoint
// ============================================================================

/// A network node: its gRPC address and the account id that identifies it.
///
/// Identity is the account id alone; two endpoints with the same account id
/// compare equal even if their addresses differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEndpoint {
    address: String,
    account_id: AccountId,
}

impl NodeEndpoint {
    /// Creates an endpoint, validating that the address is non-empty.
    ///
    /// The address may be `host:port` or a full `http(s)://host:port` URL.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidAddress`] for empty or whitespace-containing addresses.
    pub fn new(address: impl Into<String>, account_id: AccountId) -> Result<Self> {
        let address = address.into();
        ensure!(
            !address.trim().is_empty(),
            InvalidAddressSnafu { address: address.clone(), reason: "address is empty" }
        );
        ensure!(
            !address.contains(char::is_whitespace),
            InvalidAddressSnafu { address: address.clone(), reason: "address contains whitespace" }
        );
        Ok(Self { address, account_id })
    }

    /// Returns the node's address as configured.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the node's account id.
    #[must_use]
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the address as an `http(s)://` URL suitable for a gRPC channel.
    ///
    /// Bare `host:port` addresses get the `http://` scheme.
    #[must_use]
    pub fn url(&self) -> String {
        if self.address.starts_with("http://") || self.address.starts_with("https://") {
            self.address.clone()
        } else {
            format!("http://{}", self.address)
        }
    }
}

impl PartialEq for NodeEndpoint {
    fn eq(&self, other: &Self) -> bool {
        self.account_id == other.account_id
    }
}

impl Eq for NodeEndpoint {}

impl Hash for NodeEndpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_id.hash(state);
    }
}

impl fmt::Display for NodeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.account_id, self.address)
    }
}
