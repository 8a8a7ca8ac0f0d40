// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#[cfg(feature = "integration-tests")]
mod integration_test {
    use alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::{utils::parse_ether, Address, Bytes, U256},
        providers::{Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
        signers::local::PrivateKeySigner,
        sol,
        sol_types::{SolCall, SolValue},
    };
    use eyre::Result;
    use stylus_tools::devnet::{addresses::OWNER, Node};

    sol! {
        #[sol(rpc)]
        interface ICallRelay {
            function requestCall(address target, bytes calldata payload) external returns (bytes32, uint8);
            function confirmByIdentifier(bytes32 request_id) external returns (uint8);
            function pendingRecord(bytes32 request_id) external view returns (uint256, address, bytes memory);
        }

        #[sol(rpc)]
        interface ITextStore {
            function text() external view returns (string memory);
            function setText(string calldata new_value) external returns (bool);
        }

        event RequestObserved(address indexed submitter, bytes32 indexed request_id, uint8 outcome);
        event LogTextSet(address indexed sender, string text, bytes data);
    }

    const NOT_YET_FORWARDED: u8 = 0;
    const NOT_FOUND: u8 = 0;
    const FORWARDED: u8 = 1;

    fn set_text(text: &str) -> Vec<u8> {
        ITextStore::setTextCall {
            new_value: text.into(),
        }
        .abi_encode()
    }

    fn deploy_pair(rpc: &str) -> Result<(Address, Address)> {
        println!("Deploying text store to Nitro ({rpc})...");
        let (store, _, _) = stylus_tools::Deployer::builder()
            .rpc(rpc)
            .dir("../text-store".to_owned())
            .build()
            .deploy()?;
        println!("Deployed text store to {store}");

        println!("Deploying relay to Nitro ({rpc})...");
        let (relay, _, _) = stylus_tools::Deployer::builder().rpc(rpc).build().deploy()?;
        println!("Deployed relay to {relay}");
        Ok((store, relay))
    }

    #[tokio::test]
    async fn call_relay() -> Result<()> {
        let abi = stylus_tools::Exporter::builder().build().export_abi()?;
        assert!(abi.contains("function requestCall("));
        assert!(abi.contains("function confirmByIdentifier("));
        assert!(abi.contains("function pendingRecord("));
        assert!(!abi.contains("effectCall"));

        let devnode = Node::new().await?;
        let rpc = devnode.rpc();
        let (store_address, relay_address) = deploy_pair(rpc)?;
        let provider = devnode.create_provider().await?;
        let relay = ICallRelay::ICallRelayInstance::new(relay_address, &provider);
        let store = ITextStore::ITextStoreInstance::new(store_address, &provider);
        assert_eq!(store.text().call().await?, "");

        // Scenario A: first request is deferred, the identical second one is forwarded
        let payload = set_text("Hello World");
        let preview = relay
            .requestCall(store_address, payload.clone().into())
            .call()
            .await?;
        assert_eq!(preview._1, NOT_YET_FORWARDED);

        let receipt = relay
            .requestCall(store_address, payload.clone().into())
            .send()
            .await?
            .get_receipt()
            .await?;
        assert_eq!(receipt.inner.logs().len(), 1);
        let observed = receipt.decoded_log::<RequestObserved>().unwrap();
        assert_eq!(observed.data.submitter, OWNER);
        assert_eq!(observed.data.request_id, preview._0);
        assert_eq!(observed.data.outcome, NOT_YET_FORWARDED);
        let request_id = observed.data.request_id;
        assert_eq!(store.text().call().await?, "");

        let record = relay.pendingRecord(request_id).call().await?;
        assert_eq!(record._0, U256::from(1));
        assert_eq!(record._1, store_address);
        assert_eq!(record._2, Bytes::from(payload.clone()));

        let receipt = relay
            .requestCall(store_address, payload.clone().into())
            .send()
            .await?
            .get_receipt()
            .await?;
        assert_eq!(receipt.inner.logs().len(), 2);
        let text_set = receipt.decoded_log::<LogTextSet>().unwrap();
        assert_eq!(text_set.data.sender, relay_address);
        assert_eq!(text_set.data.text, "Hello World");
        let mut expected_data = payload.clone();
        expected_data.resize(128, 0);
        assert_eq!(text_set.data.data, Bytes::from(expected_data));
        let observed = receipt.decoded_log::<RequestObserved>().unwrap();
        assert_eq!(observed.data.outcome, FORWARDED);
        assert_eq!(store.text().call().await?, "Hello World");
        assert_eq!(
            relay.pendingRecord(request_id).call().await?._0,
            U256::from(2)
        );

        // Scenario B: a different account confirms by identifier
        let payload = set_text("hello3");
        let receipt = relay
            .requestCall(store_address, payload.into())
            .send()
            .await?
            .get_receipt()
            .await?;
        let request_id = receipt
            .decoded_log::<RequestObserved>()
            .unwrap()
            .data
            .request_id;
        assert_eq!(store.text().call().await?, "Hello World");

        let requester = PrivateKeySigner::random();
        let requester_address = requester.address();
        let funding = TransactionRequest::default()
            .with_to(requester_address)
            .with_value(parse_ether("0.1")?);
        provider.send_transaction(funding).await?.watch().await?;
        let requester_provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(requester))
            .connect(rpc)
            .await?;
        let relay_as_requester =
            ICallRelay::ICallRelayInstance::new(relay_address, &requester_provider);

        let outcome = relay_as_requester
            .confirmByIdentifier(request_id)
            .call()
            .await?;
        assert_eq!(outcome, FORWARDED);
        let receipt = relay_as_requester
            .confirmByIdentifier(request_id)
            .send()
            .await?
            .get_receipt()
            .await?;
        let observed = receipt.decoded_log::<RequestObserved>().unwrap();
        assert_eq!(observed.data.submitter, requester_address);
        assert_eq!(observed.data.outcome, FORWARDED);
        assert_eq!(store.text().call().await?, "hello3");
        assert_eq!(
            relay.pendingRecord(request_id).call().await?._0,
            U256::from(2)
        );

        // Scenario C: unknown identifier
        let unknown = alloy::primitives::keccak256("Not a key");
        let outcome = relay.confirmByIdentifier(unknown).call().await?;
        assert_eq!(outcome, NOT_FOUND);
        let receipt = relay
            .confirmByIdentifier(unknown)
            .send()
            .await?
            .get_receipt()
            .await?;
        assert!(receipt.status());
        assert!(receipt.inner.logs().is_empty());
        assert_eq!(store.text().call().await?, "hello3");
        let record = relay.pendingRecord(unknown).call().await?;
        assert_eq!(record._0, U256::ZERO);
        assert_eq!(record._1, Address::ZERO);
        assert!(record._2.is_empty());

        // The forwarding primitive has no selector
        let selector = &alloy::primitives::keccak256("effectCall(address,bytes)")[..4];
        let args = (store_address, Bytes::from(set_text("nope"))).abi_encode_params();
        let calldata = [selector, args.as_slice()].concat();
        let tx = TransactionRequest::default()
            .with_to(relay_address)
            .with_input(calldata);
        assert!(provider.call(tx).await.is_err());
        assert_eq!(store.text().call().await?, "hello3");

        Ok(())
    }
}
