//! Fuzz target for identifier parsing.
//!
//! Any string that parses must print back to a string that parses to the
//! same value.

#![no_main]

use hashgraph_types::{AccountId, TransactionId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(id) = text.parse::<AccountId>() {
        assert_eq!(id.to_string().parse::<AccountId>().ok(), Some(id));
    }
    if let Ok(id) = text.parse::<TransactionId>() {
        assert_eq!(id.to_string().parse::<TransactionId>().ok(), Some(id));
    }
});
