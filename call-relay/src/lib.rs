// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A relay that defers a call the first time it is requested and forwards it every time the
//! same request comes back.
//!
//! Requests are content addressed: `(target, payload)` hashes to a request id, and the relay
//! keeps one [`PendingCall`] per id. The first `requestCall` for an id only stores it. Every
//! later `requestCall` with the same pair, and every `confirmByIdentifier` with the id, bumps
//! the record's count and sends the stored payload to the stored target. Records are never
//! removed and never stop forwarding.
//!
//! A forwarded call that reverts does not revert the relay: the count still moves and the
//! outcome is still `FORWARDED`. Build with `propagate-forward-failure` to revert with
//! [`ForwardFailed`] instead.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod forward;
pub mod request;

use alloc::vec::Vec;
use alloy_sol_types::sol;
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, FixedBytes, U256},
    call::call,
    console,
    prelude::*,
    storage::{StorageAddress, StorageBytes, StorageMap, StorageU256},
};

use crate::request::Outcome;

sol! {
    event RequestObserved(address indexed submitter, bytes32 indexed request_id, uint8 outcome);

    #[derive(Debug)]
    error ForwardFailed(bytes32 request_id, address target, bytes return_data);
}

#[derive(SolidityError, Debug)]
pub enum RelayError {
    ForwardFailed(ForwardFailed),
}

/// A request seen at least once. `target` and `payload` are written when `count` goes from
/// zero to one and never again.
#[storage]
pub struct PendingCall {
    count: StorageU256,
    target: StorageAddress,
    payload: StorageBytes,
}

#[storage]
#[entrypoint]
pub struct CallRelay {
    pending: StorageMap<FixedBytes<32>, PendingCall>,
}

#[public]
impl CallRelay {
    /// Registers `(target, payload)` on first sight, forwards it on every later sight.
    pub fn request_call(
        &mut self,
        target: Address,
        payload: Bytes,
    ) -> Result<(FixedBytes<32>, u8), RelayError> {
        let request_id = request::request_id(target, &payload[..]);

        let outcome = if self.is_pending(request_id) {
            self.forward(request_id)?;
            Outcome::Forwarded
        } else {
            let mut record = self.pending.setter(request_id);
            record.count.set(U256::from(1));
            record.target.set(target);
            record.payload.set_bytes(&payload[..]);
            Outcome::NotYetForwarded
        };

        self.observe(request_id, outcome);
        Ok((request_id, outcome.code()))
    }

    /// Forwards a registered request by id alone. Unknown ids are a quiet `NOT_FOUND`.
    pub fn confirm_by_identifier(&mut self, request_id: FixedBytes<32>) -> Result<u8, RelayError> {
        if !self.is_pending(request_id) {
            return Ok(Outcome::NotFound.code());
        }

        self.forward(request_id)?;
        self.observe(request_id, Outcome::Forwarded);
        Ok(Outcome::Forwarded.code())
    }

    /// The stored `(count, target, payload)`, or zero values for an unknown id.
    pub fn pending_record(&self, request_id: FixedBytes<32>) -> (U256, Address, Bytes) {
        let record = self.pending.getter(request_id);
        (
            record.count.get(),
            record.target.get(),
            record.payload.get_bytes().into(),
        )
    }
}

impl CallRelay {
    fn is_pending(&self, request_id: FixedBytes<32>) -> bool {
        !self.pending.getter(request_id).count.get().is_zero()
    }

    /// Bumps the record's count, then sends its payload.
    fn forward(&mut self, request_id: FixedBytes<32>) -> Result<(), RelayError> {
        let (target, payload) = {
            let mut record = self.pending.setter(request_id);
            let count = record.count.get();
            record.count.set(count + U256::from(1));
            (record.target.get(), record.payload.get_bytes())
        };

        match self.effect_call(target, &payload) {
            Ok(_) => Ok(()),
            Err(return_data) if cfg!(feature = "propagate-forward-failure") => {
                Err(RelayError::ForwardFailed(ForwardFailed {
                    request_id,
                    target,
                    return_data: return_data.into(),
                }))
            }
            Err(return_data) => {
                console!(
                    "forward of {request_id} to {target} reverted with {} bytes",
                    return_data.len()
                );
                Ok(())
            }
        }
    }

    /// Performs the low-level call. Lives outside the `#[public]` block, so no selector
    /// reaches it.
    fn effect_call(&mut self, target: Address, payload: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
        let data = forward::word_aligned(payload);
        let config = Call::new_mutating(self);
        call(self.vm(), config, target, &data).map_err(Vec::from)
    }

    fn observe(&self, request_id: FixedBytes<32>, outcome: Outcome) {
        self.vm().log(RequestObserved {
            submitter: self.vm().msg_sender(),
            request_id,
            outcome: outcome.code(),
        });
    }
}
