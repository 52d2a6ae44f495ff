//! Wallet Gateway Library
//!
//! Client-side facade over an injected wallet provider plus a stand-in
//! bridge/airdrop contract backend.

pub mod config;
pub mod contracts;
pub mod error;
pub mod gateway;
pub mod networks;
pub mod observability;
pub mod provider;

pub use config::GatewayConfig;
pub use contracts::{ContractBackend, PlaceholderBackend, TransactionHandle};
pub use error::{GatewayError, Result};
pub use gateway::{WalletAddress, WalletGateway};
pub use networks::{NetworkDescriptor, NetworkRegistry};
pub use provider::{ProviderError, WalletProvider};
