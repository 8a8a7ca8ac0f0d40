// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::RelayCliResult;

mod confirm;
mod encode_text;
mod id;
mod pending;
mod request;
mod text;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Submit confirmByIdentifier for a known request id
    #[clap(visible_alias = "c")]
    Confirm(confirm::Args),
    /// Print setText(string) calldata
    EncodeText(encode_text::Args),
    /// Compute the request id of a target and payload
    Id(id::Args),
    /// Read the pending record of a request id
    #[clap(visible_alias = "p")]
    Pending(pending::Args),
    /// Submit requestCall for a target and payload
    #[clap(visible_alias = "r")]
    Request(request::Args),
    /// Read the text held by a text store
    Text(text::Args),
}

pub async fn exec(cmd: Command) -> RelayCliResult {
    match cmd {
        Command::Confirm(args) => confirm::exec(args).await,
        Command::EncodeText(args) => encode_text::exec(args),
        Command::Id(args) => id::exec(args),
        Command::Pending(args) => pending::exec(args).await,
        Command::Request(args) => request::exec(args).await,
        Command::Text(args) => text::exec(args).await,
    }
}
