//! Wallet provider capability.
//!
//! # Data Flow
//! ```text
//! WalletGateway
//!     → WalletProvider::request(method, params)   (EIP-1193 shape)
//!     → http.rs (JSON-RPC over HTTP) or any injected implementation
//!     → Value result / ProviderError { code, message }
//! ```
//!
//! # Design Decisions
//! - The provider is always passed in, never read from ambient state
//! - Only the request/response shape and numeric error codes are relied on
//! - Implementations own their own session (accounts, active chain)

pub mod http;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpProvider;

/// Provider method names used by the gateway.
pub mod methods {
    pub const REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
    pub const ACCOUNTS: &str = "eth_accounts";
    pub const SWITCH_CHAIN: &str = "wallet_switchEthereumChain";
    pub const ADD_CHAIN: &str = "wallet_addEthereumChain";
}

/// EIP-1193: the user rejected the request.
pub const USER_REJECTED_REQUEST: i64 = 4001;

/// The requested chain has not been added to the wallet.
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

/// Errors reported by a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with an error object.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// The provider could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider did not answer in time.
    #[error("provider request timed out after {0} seconds")]
    Timeout(u64),

    /// The provider answered with something that is not a valid response.
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// Construct an error as a provider would report it.
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Numeric provider error code, when the provider sent one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True when the chain must be added before switching to it.
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code() == Some(UNRECOGNIZED_CHAIN)
    }
}

/// Request-style access to an injected wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Send one request and wait for the provider's answer.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

/// Decode an account list answer (`eth_accounts`, `eth_requestAccounts`).
pub fn parse_accounts(value: Value) -> Result<Vec<String>, ProviderError> {
    serde_json::from_value(value)
        .map_err(|e| ProviderError::Malformed(format!("expected account list: {}", e)))
}
