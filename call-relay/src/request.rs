// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Identity of a relay request and the outcome codes reported for it.

use alloy_primitives::{Address, B256};
use stylus_sdk::crypto::keccak;

/// Content address of a request: `keccak256(abi.encodePacked(target, payload))`.
///
/// Identical `(target, payload)` pairs always share a record; the payload is hashed as given,
/// before any word alignment.
pub fn request_id(target: Address, payload: &[u8]) -> B256 {
    keccak([target.as_slice(), payload].concat())
}

/// What a submission did, as reported in return values and `RequestObserved` events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// First sighting of a request. The payload was stored, nothing was sent.
    NotYetForwarded,
    /// `confirmByIdentifier` was given an id that has no record.
    NotFound,
    /// The stored payload was sent to the stored target. Says nothing about whether the
    /// target accepted it.
    Forwarded,
}

impl Outcome {
    /// Wire value of the outcome. `NotYetForwarded` and `NotFound` share `0`; the entry
    /// point that returned it tells them apart.
    pub const fn code(self) -> u8 {
        match self {
            Outcome::NotYetForwarded | Outcome::NotFound => 0,
            Outcome::Forwarded => 1,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.code()
    }
}
