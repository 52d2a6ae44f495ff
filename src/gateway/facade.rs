//! The wallet gateway.
//!
//! # Responsibilities
//! - Mediate every interaction with the injected wallet provider
//! - Resolve network keys to descriptors and drive chain switching
//! - Delegate balance, bridge and airdrop to the contract backend

use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::config::GatewayConfig;
use crate::contracts::{
    AirdropRequest, BridgeRequest, ContractBackend, PlaceholderBackend, TransactionHandle,
};
use crate::contracts::placeholder::ZERO_BALANCE;
use crate::error::{message_or, GatewayError, Result};
use crate::gateway::address::WalletAddress;
use crate::networks::NetworkRegistry;
use crate::observability::metrics;
use crate::provider::{methods, parse_accounts, HttpProvider, ProviderError, WalletProvider};

const CONNECT_FAILED: &str = "Failed to connect wallet";
const BRIDGE_FAILED: &str = "Failed to execute bridge transaction";
const AIRDROP_FAILED: &str = "Failed to claim airdrop";

/// Facade over an injected wallet provider and a contract backend.
#[derive(Clone)]
pub struct WalletGateway {
    /// `None` when no wallet is available.
    provider: Option<Arc<dyn WalletProvider>>,
    backend: Arc<dyn ContractBackend>,
    networks: NetworkRegistry,
}

impl WalletGateway {
    /// Create a gateway over the built-in network table.
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        backend: Arc<dyn ContractBackend>,
    ) -> Self {
        Self {
            provider,
            backend,
            networks: NetworkRegistry::builtin(),
        }
    }

    /// Replace the network table.
    pub fn with_networks(mut self, networks: NetworkRegistry) -> Self {
        self.networks = networks;
        self
    }

    /// Build a gateway from configuration: HTTP provider (if an endpoint is
    /// configured) and the placeholder backend.
    pub fn from_config(config: &GatewayConfig) -> std::result::Result<Self, ProviderError> {
        let provider = HttpProvider::from_config(&config.provider)?
            .map(|p| Arc::new(p) as Arc<dyn WalletProvider>);
        if provider.is_none() {
            tracing::info!("No wallet endpoint configured, gateway runs without a provider");
        }
        let backend = Arc::new(PlaceholderBackend::new(config.placeholder.clone()));
        Ok(Self::new(provider, backend))
    }

    /// The network table in use.
    pub fn networks(&self) -> &NetworkRegistry {
        &self.networks
    }

    /// Whether a wallet provider is available.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&Arc<dyn WalletProvider>> {
        self.provider.as_ref().ok_or(GatewayError::NoProvider)
    }

    /// Ask the wallet for account access and return the first account.
    pub async fn connect(&self) -> Result<WalletAddress> {
        let start = Instant::now();
        let result = self.request_accounts().await;
        metrics::record_operation("connect", result.is_ok(), start);

        match &result {
            Ok(address) => tracing::info!(address = %address, "Wallet connected"),
            Err(e) => tracing::warn!(error = %e, "Wallet connection failed"),
        }
        result
    }

    async fn request_accounts(&self) -> Result<WalletAddress> {
        let provider = self.provider()?;
        let value = provider
            .request(methods::REQUEST_ACCOUNTS, json!([]))
            .await
            .map_err(|e| GatewayError::ConnectionRejected(message_or(e.to_string(), CONNECT_FAILED)))?;

        let accounts = parse_accounts(value)
            .map_err(|e| GatewayError::ConnectionRejected(e.to_string()))?;

        accounts
            .into_iter()
            .next()
            .filter(|account| !account.is_empty())
            .map(WalletAddress::new)
            .ok_or_else(|| GatewayError::ConnectionRejected(CONNECT_FAILED.to_string()))
    }

    /// Wallets cannot be disconnected programmatically; this only marks intent.
    pub async fn disconnect(&self) {
        tracing::info!("Wallet disconnect requested, clearing caller session only");
    }

    /// First authorized account, or `None`.
    ///
    /// Never fails: provider errors are logged and reported as no account.
    pub async fn active_account(&self) -> Option<WalletAddress> {
        let provider = self.provider.as_ref()?;

        let accounts = match provider.request(methods::ACCOUNTS, json!([])).await {
            Ok(value) => parse_accounts(value),
            Err(e) => Err(e),
        };

        match accounts {
            Ok(accounts) => accounts
                .into_iter()
                .next()
                .filter(|account| !account.is_empty())
                .map(WalletAddress::new),
            Err(e) => {
                tracing::error!(error = %e, "Error getting account");
                None
            }
        }
    }

    /// Make `network_key` the wallet's active chain.
    ///
    /// If the wallet does not know the chain (code 4902), registers it with
    /// the full descriptor instead.
    pub async fn switch_network(&self, network_key: &str) -> Result<()> {
        let start = Instant::now();
        let result = self.try_switch_network(network_key).await;
        metrics::record_operation("switch_network", result.is_ok(), start);
        result
    }

    async fn try_switch_network(&self, network_key: &str) -> Result<()> {
        let provider = self.provider()?;
        let network = self
            .networks
            .get(network_key)
            .ok_or_else(|| GatewayError::UnsupportedNetwork(network_key.to_string()))?;

        let switch_error = match provider
            .request(methods::SWITCH_CHAIN, network.switch_params())
            .await
        {
            Ok(_) => {
                tracing::info!(network = network_key, chain_id = %network.chain_id, "Switched network");
                return Ok(());
            }
            Err(e) => e,
        };

        if !switch_error.is_unrecognized_chain() {
            tracing::warn!(
                network = network_key,
                error = %switch_error,
                code = ?switch_error.code(),
                "Network switch rejected"
            );
            return Err(GatewayError::SwitchNetwork);
        }

        tracing::info!(
            network = network_key,
            chain_id = %network.chain_id,
            "Chain unknown to wallet, requesting registration"
        );

        match provider.request(methods::ADD_CHAIN, network.add_params()).await {
            Ok(_) => {
                tracing::info!(network = network_key, "Network added to wallet");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(network = network_key, error = %e, "Adding network failed");
                Err(GatewayError::AddNetworkFailed)
            }
        }
    }

    /// Token balance of `address` on `network_key`.
    ///
    /// Never fails: backend errors are logged and reported as `"0.0"`.
    pub async fn token_balance(&self, address: &WalletAddress, network_key: &str) -> String {
        match self.backend.token_balance(address, network_key).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!(error = %e, network = network_key, "Error getting token balance");
                ZERO_BALANCE.to_string()
            }
        }
    }

    /// Switch to the source network and submit a bridge transfer.
    pub async fn execute_bridge(
        &self,
        amount: &str,
        from_network: &str,
        to_network: &str,
        from_address: &WalletAddress,
    ) -> Result<TransactionHandle> {
        let start = Instant::now();
        let request = BridgeRequest {
            amount: amount.to_string(),
            from_network: from_network.to_string(),
            to_network: to_network.to_string(),
            from_address: from_address.clone(),
        };
        let result = self.try_bridge(&request).await;
        metrics::record_operation("execute_bridge", result.is_ok(), start);

        match &result {
            Ok(handle) => tracing::info!(tx = %handle, from = from_network, to = to_network, "Bridge submitted"),
            Err(e) => tracing::warn!(error = %e, from = from_network, to = to_network, "Bridge failed"),
        }
        result
    }

    async fn try_bridge(&self, request: &BridgeRequest) -> Result<TransactionHandle> {
        self.provider()
            .map_err(|e| GatewayError::BridgeExecution(e.to_string()))?;

        self.switch_network(&request.from_network)
            .await
            .map_err(|e| GatewayError::BridgeExecution(e.to_string()))?;

        self.backend
            .bridge(request)
            .await
            .map_err(|e| GatewayError::BridgeExecution(message_or(e.to_string(), BRIDGE_FAILED)))
    }

    /// Claim an airdrop for `address`.
    pub async fn claim_airdrop(
        &self,
        address: &WalletAddress,
        amount: &str,
    ) -> Result<TransactionHandle> {
        let start = Instant::now();
        let result = self.try_claim_airdrop(address, amount).await;
        metrics::record_operation("claim_airdrop", result.is_ok(), start);

        match &result {
            Ok(handle) => tracing::info!(tx = %handle, address = %address, "Airdrop claimed"),
            Err(e) => tracing::warn!(error = %e, address = %address, "Airdrop claim failed"),
        }
        result
    }

    async fn try_claim_airdrop(&self, address: &WalletAddress, amount: &str) -> Result<TransactionHandle> {
        self.provider()
            .map_err(|e| GatewayError::AirdropClaim(e.to_string()))?;

        let request = AirdropRequest {
            address: address.clone(),
            amount: amount.to_string(),
        };
        self.backend
            .claim_airdrop(&request)
            .await
            .map_err(|e| GatewayError::AirdropClaim(message_or(e.to_string(), AIRDROP_FAILED)))
    }
}

impl std::fmt::Debug for WalletGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletGateway")
            .field("has_provider", &self.has_provider())
            .field("networks", &self.networks.keys().collect::<Vec<_>>())
            .finish()
    }
}
