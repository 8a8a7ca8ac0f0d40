// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, B256};

use crate::{
    client,
    common_args::{AuthArgs, ProviderArgs, WaitArgs},
    error::RelayCliResult,
    utils::print_outcome,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployed relay address
    #[arg(long)]
    relay: Address,
    /// Request id, as printed by `request` or `id`
    #[arg(long)]
    id: B256,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    #[command(flatten)]
    wait: WaitArgs,
}

pub async fn exec(args: Args) -> RelayCliResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let outcome =
        client::confirm_by_identifier(&provider, args.relay, args.id, &args.wait.config()).await?;
    print_outcome(outcome);
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    #[test]
    fn test_wait_defaults() {
        let cli = Cli::try_parse_from([
            "confirm",
            "--relay",
            "0x0000000000000000000000000000000000000005",
            "--id",
            "0x1111111111111111111111111111111111111111111111111111111111111111",
            "--poll-interval-ms",
            "100",
        ])
        .unwrap();
        assert_eq!(cli.args.id, B256::repeat_byte(0x11));
        assert_eq!(cli.args.wait.poll_interval_ms, 100);
        assert_eq!(cli.args.wait.timeout_secs, 30);
    }

    #[test]
    fn test_rejects_short_id() {
        assert!(Cli::try_parse_from(["confirm", "--relay", "0x05", "--id", "0x11"]).is_err());
    }
}
