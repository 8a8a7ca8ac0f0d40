// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;

use crate::{client, common_args::ProviderArgs, error::RelayCliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployed text store address
    #[arg(long)]
    store: Address,

    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> RelayCliResult {
    let provider = args.provider.build_provider().await?;
    println!("{}", client::text(&provider, args.store).await?);
    Ok(())
}
