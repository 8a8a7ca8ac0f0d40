// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for the call relay.

use std::process::ExitCode;

use clap::Parser;

mod client;
mod commands;
mod common_args;
mod constants;
mod error;
mod receipt;
mod relay;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "relay")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Submit and inspect requests to a Stylus call relay", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Build async runtime and block on command execution
    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(commands::exec(args.command)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
