//! Wallet gateway facade.
//!
//! # Data Flow
//! ```text
//! caller
//!     → WalletGateway (facade.rs)
//!         → NetworkRegistry lookup (switch_network)
//!         → WalletProvider requests (connect, accounts, switch/add chain)
//!         → ContractBackend (balance, bridge, airdrop)
//!     → Result<_, GatewayError> for commands, safe defaults for queries
//! ```
//!
//! # Design Decisions
//! - Recoverable queries (`active_account`, `token_balance`) log and
//!   return a default; actionable commands return errors
//! - The only retry-like behavior is add-chain after code 4902
//! - Stateless: wallet session state lives in the provider

pub mod address;
pub mod facade;

pub use address::WalletAddress;
pub use facade::WalletGateway;
