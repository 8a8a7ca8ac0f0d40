// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use log::info;

use crate::{
    client,
    common_args::{AuthArgs, PayloadArgs, ProviderArgs, WaitArgs},
    error::RelayCliResult,
    utils::print_outcome,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployed relay address
    #[arg(long)]
    relay: Address,
    /// Contract the relay forwards to
    #[arg(long)]
    target: Address,

    #[command(flatten)]
    payload: PayloadArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    #[command(flatten)]
    wait: WaitArgs,
}

pub async fn exec(args: Args) -> RelayCliResult {
    let payload = args.payload.calldata()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    info!("requesting call to {} through {}", args.target, args.relay);
    let (request_id, outcome) = client::request_call(
        &provider,
        args.relay,
        args.target,
        payload,
        &args.wait.config(),
    )
    .await?;
    println!("request id: {request_id}");
    print_outcome(outcome);
    Ok(())
}
