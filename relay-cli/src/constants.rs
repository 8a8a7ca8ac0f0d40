// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a Stylus-enabled Arbitrum node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8547";

/// Delay between two receipt lookups, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: &str = "500";

/// Upper bound on the wait for a receipt, in seconds.
pub const DEFAULT_TIMEOUT_SECS: &str = "30";
