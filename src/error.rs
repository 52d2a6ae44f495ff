//! Gateway error taxonomy.
//!
//! Only actionable commands surface these. Recoverable queries
//! (`active_account`, `token_balance`) log and fall back instead.

use thiserror::Error;

/// Message used whenever no wallet provider has been injected.
pub const NO_WALLET_MESSAGE: &str =
    "No crypto wallet found. Please install MetaMask or another Web3 wallet.";

/// Errors returned by [`crate::gateway::WalletGateway`] commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No wallet provider capability is present.
    #[error("{}", NO_WALLET_MESSAGE)]
    NoProvider,

    /// The user or the provider declined the connection request.
    #[error("{0}")]
    ConnectionRejected(String),

    /// The network key is not in the registry.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// The provider did not know the chain and refused to register it.
    #[error("Failed to add network to wallet")]
    AddNetworkFailed,

    /// The provider refused to switch chains.
    #[error("Failed to switch network")]
    SwitchNetwork,

    /// The bridge command failed before or while producing a handle.
    #[error("{0}")]
    BridgeExecution(String),

    /// The airdrop claim failed.
    #[error("{0}")]
    AirdropClaim(String),
}

/// Result type for gateway commands.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Picks the underlying message when there is one, else the fixed fallback.
pub(crate) fn message_or(message: impl Into<String>, fallback: &str) -> String {
    let message = message.into();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
