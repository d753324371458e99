//! Fuzz target for decoding node responses and submitted transactions.
//!
//! Arbitrary bytes fed to the SDK codec and the proto-to-domain conversions
//! must produce an error, never a panic. Node responses are untrusted input.

#![no_main]

use hashgraph_proto::proto;
use hashgraph_sdk::codec;
use hashgraph_types::{TransactionId, TransactionReceipt};
use libfuzzer_sys::fuzz_target;
use prost::Message;

fuzz_target!(|data: &[u8]| {
    // First byte picks the decoder so one target covers every entry point.
    let Some((selector, payload)) = data.split_first() else {
        return;
    };

    match selector % 5 {
        0 => {
            let _ = codec::decode_transaction_response(payload);
        },
        1 => {
            if let Ok(proto::response::Response::TransactionGetReceipt(response)) = codec::decode_response(payload) {
                let _ = codec::header_status(response.header.as_ref());
                if let Some(receipt) = &response.receipt {
                    let _ = TransactionReceipt::try_from(receipt);
                }
            }
        },
        2 => {
            if let Ok(decoded) = codec::decode_transaction(payload)
                && let Some(id) = &decoded.body.transaction_id
            {
                let _ = TransactionId::try_from(id);
            }
        },
        3 => {
            let _ = codec::decode_query(payload);
        },
        _ => {
            let _ = proto::TransactionBody::decode(payload);
        },
    }
});
