//! JSON-RPC over HTTP wallet provider.
//!
//! # Responsibilities
//! - Forward provider requests to a wallet endpoint as JSON-RPC 2.0
//! - Bound every request with the configured timeout
//! - Map JSON-RPC error objects to provider error codes

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::schema::ProviderConfig;
use crate::observability::metrics;
use crate::provider::{ProviderError, WalletProvider};

/// Wallet provider reached over HTTP.
#[derive(Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: url::Url,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    /// `Some(Null)` for `"result": null`, `None` when absent.
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl HttpProvider {
    /// Create a provider for the given endpoint.
    pub fn new(endpoint: &str, timeout_secs: u64, use_system_proxy: bool) -> Result<Self, ProviderError> {
        let endpoint: url::Url = endpoint.parse().map_err(|e| {
            ProviderError::Transport(format!("Invalid provider URL '{}': {}", endpoint, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if !use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        tracing::info!(endpoint = %endpoint, timeout_secs, "HTTP wallet provider initialized");

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    /// Build a provider from configuration.
    ///
    /// Returns `Ok(None)` when no endpoint is configured, meaning no wallet
    /// is available to the gateway.
    pub fn from_config(config: &ProviderConfig) -> Result<Option<Self>, ProviderError> {
        match &config.rpc_url {
            Some(url) => Self::new(url, config.timeout_secs, config.use_system_proxy).map(Some),
            None => Ok(None),
        }
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    async fn send(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": Uuid::new_v4().to_string(),
            "method": method,
            "params": params,
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Transport(format!(
                "provider endpoint returned status {}",
                status
            )));
        }

        let rpc: RpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        match (rpc.result, rpc.error) {
            (_, Some(error)) => Err(ProviderError::Rpc {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ProviderError::Malformed(
                "response carries neither result nor error".to_string(),
            )),
        }
    }
}

#[async_trait]
impl WalletProvider for HttpProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let result = match timeout(Duration::from_secs(self.timeout_secs), self.send(method, params)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.timeout_secs)),
        };

        match &result {
            Ok(_) => tracing::debug!(method, "Provider request succeeded"),
            Err(e) => tracing::warn!(method, error = %e, code = ?e.code(), "Provider request failed"),
        }
        metrics::record_provider_request(method, result.is_ok());

        result
    }
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
