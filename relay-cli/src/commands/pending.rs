// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, B256};

use crate::{client, common_args::ProviderArgs, error::RelayCliResult, utils::encode0x};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployed relay address
    #[arg(long)]
    relay: Address,
    /// Request id to look up
    #[arg(long)]
    id: B256,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> RelayCliResult {
    let provider = args.provider.build_provider().await?;
    let (count, target, payload) = client::pending_record(&provider, args.relay, args.id).await?;
    if count.is_zero() {
        println!("no record for {}", args.id);
        return Ok(());
    }
    println!("count: {count}");
    println!("target: {target}");
    println!("payload: {}", encode0x(payload));
    Ok(())
}
