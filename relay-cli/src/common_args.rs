// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};
use eyre::{eyre, Context};

use crate::{
    constants::{DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS},
    receipt::WaitConfig,
    relay::set_text_calldata,
    utils::decode0x,
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long, env = "RELAY_PRIVATE_KEY_PATH")]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "RELAY_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        let key = match (&self.private_key, &self.private_key_path) {
            (Some(key), _) => key.clone(),
            (None, Some(file)) => {
                fs::read_to_string(file).wrap_err("could not open private key file")?
            }
            (None, None) => return Err(eyre!("no private key given")),
        };
        if key.trim().is_empty() {
            return Err(eyre!("empty private key"));
        }
        let priv_key_bytes = decode0x(key)?;
        if priv_key_bytes.len() != 32 {
            return Err(eyre!("private key must be 32 bytes"));
        }
        let priv_key_bytes = FixedBytes::<32>::from_slice(&priv_key_bytes);
        let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
    /// Raw calldata to relay, hex encoded
    #[arg(long)]
    payload: Option<String>,
    /// Relay a `setText(string)` call carrying this text
    #[arg(long)]
    text: Option<String>,
}

impl PayloadArgs {
    pub fn calldata(&self) -> eyre::Result<Vec<u8>> {
        match (&self.payload, &self.text) {
            (Some(payload), _) => decode0x(payload).wrap_err("invalid payload"),
            (None, Some(text)) => Ok(set_text_calldata(text)),
            (None, None) => Err(eyre!("either --payload or --text is required")),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Arbitrum RPC endpoint
    #[arg(short, long, env = "RELAY_RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct WaitArgs {
    /// Milliseconds between two receipt lookups
    #[arg(long, default_value = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,
    /// Seconds to wait for a receipt before giving up
    #[arg(long, default_value = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl WaitArgs {
    pub fn config(&self) -> WaitConfig {
        WaitConfig {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Well known devnet key
    const DEV_KEY: &str = "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

    #[test]
    fn test_payload_from_hex_or_text() {
        let raw = PayloadArgs {
            payload: Some("0x00112233".into()),
            text: None,
        };
        assert_eq!(raw.calldata().unwrap(), vec![0x00, 0x11, 0x22, 0x33]);

        let text = PayloadArgs {
            payload: None,
            text: Some("hello3".into()),
        };
        assert_eq!(text.calldata().unwrap(), set_text_calldata("hello3"));

        let bad = PayloadArgs {
            payload: Some("0xnothex".into()),
            text: None,
        };
        assert!(bad.calldata().is_err());
    }

    #[test]
    fn test_wallet_from_key() {
        let auth = AuthArgs {
            private_key_path: None,
            private_key: Some(DEV_KEY.into()),
        };
        assert!(auth.build_wallet(412346).is_ok());

        let missing = AuthArgs {
            private_key_path: None,
            private_key: None,
        };
        assert!(missing.build_wallet(412346).is_err());

        let short = AuthArgs {
            private_key_path: None,
            private_key: Some("0x1234".into()),
        };
        assert!(short.build_wallet(412346).is_err());
    }

    #[test]
    fn test_wait_config() {
        let wait = WaitArgs {
            poll_interval_ms: 250,
            timeout_secs: 3,
        };
        let config = wait.config();
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
