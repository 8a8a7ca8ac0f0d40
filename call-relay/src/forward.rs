// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Encoding applied to a stored payload on its way to the target.

use alloc::vec::Vec;

/// Size of an ABI word.
pub const WORD: usize = 32;

/// Right-pads `payload` with zeros to the next multiple of [`WORD`] bytes.
///
/// Stored payloads are kept exactly as submitted; only the forwarded copy is aligned.
pub fn word_aligned(payload: &[u8]) -> Vec<u8> {
    let len = payload.len().div_ceil(WORD) * WORD;
    let mut data = Vec::with_capacity(len);
    data.extend_from_slice(payload);
    data.resize(len, 0);
    data
}
