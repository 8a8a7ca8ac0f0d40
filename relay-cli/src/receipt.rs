// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Bounded polling for transaction finality.

use std::{future::Future, time::Duration};

use alloy::transports::{RpcError, TransportErrorKind};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitConfig {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error("no receipt after {0:?}")]
    Timeout(Duration),
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
}

/// Calls `fetch` every `poll_interval` until it yields a value.
///
/// `Ok(None)` means "not there yet" and is retried. An error from `fetch` ends the wait, as does
/// running past `timeout`.
pub async fn wait_for<T, F, Fut>(mut fetch: F, config: &WaitConfig) -> Result<T, WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, RpcError<TransportErrorKind>>>,
{
    let poll = async {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            if let Some(value) = fetch().await? {
                return Ok::<T, WaitError>(value);
            }
            debug!("attempt {attempt}: not available yet");
            tokio::time::sleep(config.poll_interval).await;
        }
    };
    tokio::time::timeout(config.timeout, poll)
        .await
        .map_err(|_| WaitError::Timeout(config.timeout))?
}
