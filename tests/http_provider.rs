//! HTTP wallet provider against a local JSON-RPC endpoint.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use wallet_gateway::config::{GatewayConfig, PlaceholderConfig};
use wallet_gateway::provider::{HttpProvider, ProviderError, WalletProvider};
use wallet_gateway::{GatewayError, WalletGateway};

mod common;
use common::{rpc_error, rpc_result, start_programmable_backend};

fn provider_for(addr: std::net::SocketAddr) -> HttpProvider {
    HttpProvider::new(&format!("http://{}", addr), 5, false).unwrap()
}

#[tokio::test]
async fn test_request_carries_json_rpc_envelope() {
    let addr = start_programmable_backend(|body| async move {
        let request: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(request["jsonrpc"], "2.0");
        assert!(request["id"].is_string());
        assert_eq!(request["method"], "eth_accounts");
        assert_eq!(request["params"], json!([]));
        (200, rpc_result(&body, json!(["0xabc"])))
    })
    .await;

    let result = provider_for(addr).request("eth_accounts", json!([])).await.unwrap();
    assert_eq!(result, json!(["0xabc"]));
}

#[tokio::test]
async fn test_rpc_error_keeps_code() {
    let addr = start_programmable_backend(|body| async move {
        (200, rpc_error(&body, 4902, "Unrecognized chain ID \"0x6000\""))
    })
    .await;

    let err = provider_for(addr)
        .request("wallet_switchEthereumChain", json!([{ "chainId": "0x6000" }]))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(4902));
    assert!(err.is_unrecognized_chain());
}

#[tokio::test]
async fn test_http_status_and_malformed_bodies() {
    let addr = start_programmable_backend(|_| async { (503, "busy".to_string()) }).await;
    let err = provider_for(addr).request("eth_accounts", json!([])).await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));

    let addr = start_programmable_backend(|_| async { (200, "{\"jsonrpc\":\"2.0\",\"id\":1}".to_string()) }).await;
    let err = provider_for(addr).request("eth_accounts", json!([])).await.unwrap_err();
    assert!(matches!(err, ProviderError::Malformed(_)));

    let addr = start_programmable_backend(|_| async { (200, "not json".to_string()) }).await;
    let err = provider_for(addr).request("eth_accounts", json!([])).await.unwrap_err();
    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_gateway_over_http_adds_unknown_chain() {
    let calls = Arc::new(AtomicU32::new(0));
    let seen = calls.clone();
    let addr = start_programmable_backend(move |body| {
        let seen = seen.clone();
        async move {
            seen.fetch_add(1, Ordering::SeqCst);
            let request: Value = serde_json::from_str(&body).unwrap();
            match request["method"].as_str() {
                Some("wallet_switchEthereumChain") => (200, rpc_error(&body, 4902, "Unrecognized chain")),
                Some("wallet_addEthereumChain") => {
                    assert_eq!(request["params"][0]["chainName"], "Cronos Mainnet Beta");
                    (200, rpc_result(&body, Value::Null))
                }
                _ => (200, rpc_error(&body, 4200, "Unsupported method")),
            }
        }
    })
    .await;

    let mut config = GatewayConfig::default();
    config.provider.rpc_url = Some(format!("http://{}", addr));
    config.provider.use_system_proxy = false;
    config.placeholder = PlaceholderConfig::immediate();

    let gateway = WalletGateway::from_config(&config).unwrap();
    gateway.switch_network("cronos").await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_gateway_over_http_rejected_connect() {
    let addr = start_programmable_backend(|body| async move {
        (200, rpc_error(&body, 4001, "User rejected the request."))
    })
    .await;

    let mut config = GatewayConfig::default();
    config.provider.rpc_url = Some(format!("http://{}", addr));
    config.provider.use_system_proxy = false;

    let gateway = WalletGateway::from_config(&config).unwrap();
    let err = gateway.connect().await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::ConnectionRejected("User rejected the request.".to_string())
    );
    assert!(gateway.active_account().await.is_none());
}
