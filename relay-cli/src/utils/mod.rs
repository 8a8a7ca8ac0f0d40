// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use style::{BOLD, ERROR, OUTCOME};

mod style;

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

pub fn encode0x(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn print_outcome(outcome: impl Display) {
    println!("{BOLD}outcome{BOLD:#}: {OUTCOME}{outcome}{OUTCOME:#}");
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}
