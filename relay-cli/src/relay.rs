// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Bindings and wire conventions of the relay and text store contracts.

use std::fmt;

use alloy::{
    primitives::{keccak256, Address, B256},
    sol,
    sol_types::SolCall,
};

sol! {
    #[sol(rpc)]
    interface ICallRelay {
        function requestCall(address target, bytes calldata payload) external returns (bytes32, uint8);
        function confirmByIdentifier(bytes32 request_id) external returns (uint8);
        function pendingRecord(bytes32 request_id) external view returns (uint256, address, bytes memory);

        event RequestObserved(address indexed submitter, bytes32 indexed request_id, uint8 outcome);

        error ForwardFailed(bytes32 request_id, address target, bytes return_data);
    }

    #[sol(rpc)]
    interface ITextStore {
        function text() external view returns (string memory);
        function setText(string calldata new_value) external returns (bool);
    }
}

/// Identifier the relay assigns to `(target, payload)`.
pub fn request_id(target: Address, payload: &[u8]) -> B256 {
    keccak256([target.as_slice(), payload].concat())
}

/// Calldata of `setText(string)`.
pub fn set_text_calldata(text: &str) -> Vec<u8> {
    ITextStore::setTextCall {
        new_value: text.to_owned(),
    }
    .abi_encode()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    NotYetForwarded,
    NotFound,
    Forwarded,
}

impl Outcome {
    /// Interprets the code carried by the event of a `requestCall`.
    pub fn of_request(code: u8) -> Option<Self> {
        match code {
            0 => Some(Outcome::NotYetForwarded),
            1 => Some(Outcome::Forwarded),
            _ => None,
        }
    }

    /// Interprets a `confirmByIdentifier`, which only emits an event when the id is known.
    pub fn of_confirmation(code: Option<u8>) -> Option<Self> {
        match code {
            None => Some(Outcome::NotFound),
            Some(1) => Some(Outcome::Forwarded),
            Some(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Outcome::NotYetForwarded => "NOT_YET_FORWARDED",
            Outcome::NotFound => "NOT_FOUND",
            Outcome::Forwarded => "FORWARDED",
        };
        f.write_str(name)
    }
}
