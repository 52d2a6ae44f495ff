//! Stand-in contract backend.
//!
//! Returns fixed balances and random transaction handles after a fixed
//! wait. No contract is called and no transaction is built.

use alloy::primitives::B256;
use async_trait::async_trait;
use tokio::time::sleep;

use crate::config::schema::PlaceholderConfig;
use crate::contracts::backend::{
    AirdropRequest, BackendError, BridgeRequest, ContractBackend, TransactionHandle,
};
use crate::contracts::token::T2P_TOKEN_ADDRESS;
use crate::gateway::WalletAddress;

/// Balance reported for networks without a fixed value.
pub const ZERO_BALANCE: &str = "0.0";

/// Fabricated token balances per network key.
const MOCK_BALANCES: [(&str, &str); 3] = [
    ("mintme", "1500.0"),
    ("cronos", "750.0"),
    ("bsc", "2200.0"),
];

/// Backend returning fabricated results.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderBackend {
    config: PlaceholderConfig,
}

impl PlaceholderBackend {
    pub fn new(config: PlaceholderConfig) -> Self {
        Self { config }
    }

    /// Fixed balance for a network key, ignoring the holder.
    pub fn mock_balance(network_key: &str) -> &'static str {
        MOCK_BALANCES
            .iter()
            .find(|(key, _)| *key == network_key)
            .map(|(_, balance)| *balance)
            .unwrap_or(ZERO_BALANCE)
    }

    /// Random 32-byte hex handle shaped like a transaction hash.
    pub fn random_handle() -> TransactionHandle {
        let mut bytes = [0u8; 32];
        fastrand::fill(&mut bytes);
        TransactionHandle::new(B256::from(bytes).to_string())
    }
}

#[async_trait]
impl ContractBackend for PlaceholderBackend {
    async fn token_balance(
        &self,
        address: &WalletAddress,
        network_key: &str,
    ) -> Result<String, BackendError> {
        tracing::debug!(
            address = %address,
            network = network_key,
            token = %T2P_TOKEN_ADDRESS,
            "Returning placeholder token balance"
        );
        Ok(Self::mock_balance(network_key).to_string())
    }

    async fn bridge(&self, request: &BridgeRequest) -> Result<TransactionHandle, BackendError> {
        tracing::warn!(
            from = %request.from_network,
            to = %request.to_network,
            amount = %request.amount,
            "Bridge contract not implemented, fabricating transaction handle"
        );
        sleep(self.config.bridge_delay()).await;
        Ok(Self::random_handle())
    }

    async fn claim_airdrop(&self, request: &AirdropRequest) -> Result<TransactionHandle, BackendError> {
        tracing::warn!(
            address = %request.address,
            amount = %request.amount,
            "Airdrop contract not implemented, fabricating transaction handle"
        );
        sleep(self.config.airdrop_delay()).await;
        Ok(Self::random_handle())
    }
}
