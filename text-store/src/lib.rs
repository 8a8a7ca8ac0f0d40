// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A single persistent string that anyone may overwrite.
//!
//! Every write is logged together with the raw calldata that caused it, and any call that
//! is not a well-formed `setText(string)` is logged as a fallback hit. Because a
//! `#[public]` method only ever sees its decoded arguments, `setText` is dispatched from the
//! `#[fallback]` handler, which receives the calldata verbatim. Its Solidity signature is
//! published through [`ITextStore`].

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

use alloc::{string::String, vec::Vec};
use alloy_primitives::Bytes;
use alloy_sol_types::{sol, SolCall, SolValue};
use stylus_sdk::{console, prelude::*, storage::StorageString, ArbResult};

sol! {
    /// Full calling surface of the store, including the entry points served by the fallback.
    interface ITextStore {
        function text() external view returns (string memory);
        function setText(string calldata new_value) external returns (bool);
    }

    event LogTextSet(address indexed sender, string text, bytes data);
    event LogFallback(address indexed sender, bytes data);
}

#[storage]
#[entrypoint]
pub struct TextStore {
    text: StorageString,
}

#[public]
impl TextStore {
    /// The last text written, empty until the first `setText`.
    pub fn text(&self) -> String {
        self.text.get_string()
    }

    #[fallback]
    pub fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        let sender = self.vm().msg_sender();

        if let Some(new_value) = decode_set_text(calldata) {
            self.text.set_str(&new_value);
            self.vm().log(LogTextSet {
                sender,
                text: new_value,
                data: Bytes::copy_from_slice(calldata),
            });
            return Ok(true.abi_encode());
        }

        console!("fallback hit with {} bytes of calldata", calldata.len());
        self.vm().log(LogFallback {
            sender,
            data: Bytes::copy_from_slice(calldata),
        });
        Ok(Vec::new())
    }
}

/// Decodes `setText(string)` calldata, tolerating trailing zero words added by word-aligning
/// forwarders.
fn decode_set_text(calldata: &[u8]) -> Option<String> {
    ITextStore::setTextCall::abi_decode(calldata)
        .ok()
        .map(|call| call.new_value)
}
