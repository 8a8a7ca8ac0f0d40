// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use crate::{common_args::PayloadArgs, error::RelayCliResult, relay::request_id};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract the request would be forwarded to
    #[arg(long)]
    target: Address,

    #[command(flatten)]
    payload: PayloadArgs,
}

pub fn exec(args: Args) -> RelayCliResult {
    let payload = args.payload.calldata()?;
    println!("{}", request_id(args.target, &payload));
    Ok(())
}
