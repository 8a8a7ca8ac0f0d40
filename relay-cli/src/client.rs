// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Relay and text store operations over an RPC provider.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, B256, U256},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol_types::SolCall,
    transports::{RpcError, TransportErrorKind},
};
use log::{debug, info};

use crate::{
    receipt::{self, WaitConfig, WaitError},
    relay::{ICallRelay, ITextStore, Outcome},
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("{0}")]
    Wait(#[from] WaitError),
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error("forwarding {request_id} to {target} failed with {return_data}")]
    ForwardFailed {
        request_id: B256,
        target: Address,
        return_data: Bytes,
    },
    #[error("transaction {0} did not emit RequestObserved")]
    MissingEvent(TxHash),
    #[error("unknown outcome code {0}")]
    UnknownOutcome(u8),
}

/// Sends `input` to `to` and waits for a successful receipt.
pub async fn submit(
    provider: &impl Provider,
    to: Address,
    input: Vec<u8>,
    wait: &WaitConfig,
) -> Result<TransactionReceipt, ClientError> {
    let tx = TransactionRequest::default().with_to(to).with_input(input);
    let pending = provider
        .send_transaction(tx)
        .await
        .map_err(decode_relay_error)?;
    let tx_hash = *pending.tx_hash();
    info!("submitted transaction {tx_hash}");

    let receipt = receipt::wait_for(
        move || async move { provider.get_transaction_receipt(tx_hash).await },
        wait,
    )
    .await?;
    debug!(
        "transaction {tx_hash} included in block {:?}",
        receipt.block_number
    );
    if !receipt.status() {
        return Err(ClientError::Reverted(tx_hash));
    }
    Ok(receipt)
}

pub async fn request_call(
    provider: &impl Provider,
    relay: Address,
    target: Address,
    payload: Vec<u8>,
    wait: &WaitConfig,
) -> Result<(B256, Outcome), ClientError> {
    let input = ICallRelay::requestCallCall {
        target,
        payload: payload.into(),
    }
    .abi_encode();
    let receipt = submit(provider, relay, input, wait).await?;
    let observed = observed_event(&receipt, relay)
        .ok_or(ClientError::MissingEvent(receipt.transaction_hash))?;
    let outcome =
        Outcome::of_request(observed.outcome).ok_or(ClientError::UnknownOutcome(observed.outcome))?;
    Ok((observed.request_id, outcome))
}

pub async fn confirm_by_identifier(
    provider: &impl Provider,
    relay: Address,
    request_id: B256,
    wait: &WaitConfig,
) -> Result<Outcome, ClientError> {
    let input = ICallRelay::confirmByIdentifierCall { request_id }.abi_encode();
    let receipt = submit(provider, relay, input, wait).await?;
    let code = observed_event(&receipt, relay).map(|observed| observed.outcome);
    Outcome::of_confirmation(code).ok_or(ClientError::UnknownOutcome(code.unwrap_or_default()))
}

pub async fn pending_record(
    provider: &impl Provider,
    relay: Address,
    request_id: B256,
) -> Result<(U256, Address, Bytes), ClientError> {
    let record = ICallRelay::new(relay, provider)
        .pendingRecord(request_id)
        .call()
        .await?;
    Ok((record._0, record._1, record._2))
}

pub async fn text(provider: &impl Provider, store: Address) -> Result<String, ClientError> {
    Ok(ITextStore::new(store, provider).text().call().await?)
}

fn observed_event(
    receipt: &TransactionReceipt,
    relay: Address,
) -> Option<ICallRelay::RequestObserved> {
    receipt
        .inner
        .logs()
        .iter()
        .filter(|log| log.address() == relay)
        .find_map(|log| log.log_decode::<ICallRelay::RequestObserved>().ok())
        .map(|log| log.inner.data)
}

fn decode_relay_error(err: RpcError<TransportErrorKind>) -> ClientError {
    let decoded = err
        .as_error_resp()
        .and_then(|resp| resp.as_decoded_interface_error::<ICallRelay::ICallRelayErrors>());
    match decoded {
        Some(ICallRelay::ICallRelayErrors::ForwardFailed(failed)) => ClientError::ForwardFailed {
            request_id: failed.request_id,
            target: failed.target,
            return_data: failed.return_data,
        },
        None => err.into(),
    }
}

#[cfg(test)]
mod test {
    use alloy::{rpc::json_rpc::ErrorPayload, sol_types::SolError};
    use serde_json::json;

    use super::*;
    use crate::utils::encode0x;

    #[test]
    fn test_decodes_forward_failure() {
        let revert = ICallRelay::ForwardFailed {
            request_id: B256::repeat_byte(0x11),
            target: Address::repeat_byte(0x05),
            return_data: Bytes::from_static(b"nope"),
        }
        .abi_encode();
        let payload: ErrorPayload = serde_json::from_value(json!({
            "code": 3,
            "message": "execution reverted",
            "data": encode0x(revert),
        }))
        .unwrap();

        match decode_relay_error(RpcError::ErrorResp(payload)) {
            ClientError::ForwardFailed {
                request_id,
                target,
                return_data,
            } => {
                assert_eq!(request_id, B256::repeat_byte(0x11));
                assert_eq!(target, Address::repeat_byte(0x05));
                assert_eq!(return_data, Bytes::from_static(b"nope"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_other_errors_pass_through() {
        let payload: ErrorPayload = serde_json::from_value(json!({
            "code": 3,
            "message": "execution reverted",
            "data": "0x08c379a0",
        }))
        .unwrap();
        assert!(matches!(
            decode_relay_error(RpcError::ErrorResp(payload)),
            ClientError::Rpc(_)
        ));
        assert!(matches!(
            decode_relay_error(TransportErrorKind::custom_str("connection refused")),
            ClientError::Rpc(_)
        ));
    }
}
