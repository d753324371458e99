//! Proptest strategies for hashgraph domain types.
//!
//! Reusable generators for property-based testing across crates. Strategies
//! produce well-formed values and lean toward the small shard/realm numbers
//! real networks use.
//!
//! # Usage
//!
//! ```no_run
//! use hashgraph_test_utils::strategies;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn my_property(id in strategies::arb_transaction_id()) {
//!         // test invariant with a randomly generated transaction id
//!     }
//! }
//! ```

use hashgraph_types::{AccountId, Status, Timestamp, TopicId, TransactionId};
use proptest::prelude::*;

/// Highest wire code in the known status set, rounded up.
const KNOWN_STATUS_CODES: i32 = 400;

fn arb_entity_parts() -> impl Strategy<Value = (u64, u64, u64)> {
    (
        prop_oneof![3 => Just(0u64), 1 => 0u64..16],
        prop_oneof![3 => Just(0u64), 1 => 0u64..16],
        prop_oneof![2 => 0u64..10_000, 1 => any::<u64>()],
    )
}

/// Generates an account id, usually in shard 0 realm 0.
pub fn arb_account_id() -> impl Strategy<Value = AccountId> {
    arb_entity_parts().prop_map(|(shard, realm, num)| AccountId::new(shard, realm, num))
}

/// Generates a topic id, usually in shard 0 realm 0.
pub fn arb_topic_id() -> impl Strategy<Value = TopicId> {
    arb_entity_parts().prop_map(|(shard, realm, num)| TopicId::new(shard, realm, num))
}

/// Generates a timestamp between the epoch and year ~2100.
pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (0i64..4_102_444_800, 0i32..1_000_000_000).prop_map(|(seconds, nanos)| {
        Timestamp::new(seconds, nanos).unwrap_or_default()
    })
}

/// Generates a transaction id, occasionally scheduled or with a nonce.
pub fn arb_transaction_id() -> impl Strategy<Value = TransactionId> {
    (arb_account_id(), arb_timestamp(), any::<bool>(), prop_oneof![3 => Just(None), 1 => (1i32..100).prop_map(Some)])
        .prop_map(|(account_id, valid_start, scheduled, nonce)| {
            let id = TransactionId::new(account_id, valid_start).with_scheduled(scheduled);
            match nonce {
                Some(nonce) => id.with_nonce(nonce),
                None => id,
            }
        })
}

/// Generates a status, mostly from the known set with some unrecognized codes.
pub fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        4 => (0..KNOWN_STATUS_CODES).prop_map(Status::from_code),
        1 => any::<i32>().prop_map(Status::from_code),
    ]
}
