// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use crate::{client::ClientError, receipt::WaitError};

pub type RelayCliResult = Result<(), RelayCliError>;

/// Exit status for a transaction that never got a receipt within the wait bound.
const EXIT_TIMEOUT: u8 = 2;

#[derive(Debug)]
pub struct RelayCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl RelayCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for RelayCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for RelayCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for RelayCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ClientError> for RelayCliError {
    fn from(err: ClientError) -> Self {
        let exit_code = match err {
            ClientError::Wait(WaitError::Timeout(_)) => ExitCode::from(EXIT_TIMEOUT),
            _ => ExitCode::FAILURE,
        };
        Self {
            error: err.into(),
            exit_code,
        }
    }
}
