//! Contract backend interface and request types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::WalletAddress;

/// Identifier of a submitted transaction.
///
/// Opaque to the gateway; placeholder handles carry no on-chain meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionHandle(String);

impl TransactionHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bridge transfer between two registered networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// Decimal amount, uninterpreted.
    pub amount: String,
    pub from_network: String,
    pub to_network: String,
    pub from_address: WalletAddress,
}

/// An airdrop claim for one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropRequest {
    pub address: WalletAddress,
    /// Decimal amount, uninterpreted.
    pub amount: String,
}

/// Failure reported by a contract backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend submitted or attempted a call that failed.
    #[error("{0}")]
    Execution(String),
}

/// Contract-side operations behind the gateway.
#[async_trait]
pub trait ContractBackend: Send + Sync {
    /// Token balance of `address` on `network_key`, as a decimal string.
    async fn token_balance(
        &self,
        address: &WalletAddress,
        network_key: &str,
    ) -> Result<String, BackendError>;

    /// Execute a bridge transfer. The wallet is already on the source network.
    async fn bridge(&self, request: &BridgeRequest) -> Result<TransactionHandle, BackendError>;

    /// Claim an airdrop.
    async fn claim_airdrop(&self, request: &AirdropRequest) -> Result<TransactionHandle, BackendError>;
}
