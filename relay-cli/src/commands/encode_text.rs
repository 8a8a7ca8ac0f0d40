// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{error::RelayCliResult, relay::set_text_calldata, utils::encode0x};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Text to encode
    text: String,
}

pub fn exec(args: Args) -> RelayCliResult {
    println!("{}", encode0x(set_text_calldata(&args.text)));
    Ok(())
}
