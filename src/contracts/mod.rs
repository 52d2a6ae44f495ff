//! Contract backend: token balance, bridge and airdrop.
//!
//! # Data Flow
//! ```text
//! WalletGateway
//!     → ContractBackend (backend.rs)
//!         → PlaceholderBackend (placeholder.rs): fixed balances,
//!           artificial delay, random transaction handle
//!     → token.rs (ERC-20 declaration a real backend would call)
//! ```
//!
//! # Design Decisions
//! - Nothing here submits a transaction; results are fabricated
//! - Replacing the backend never changes the gateway's public contract

pub mod backend;
pub mod placeholder;
pub mod token;

pub use backend::{AirdropRequest, BackendError, BridgeRequest, ContractBackend, TransactionHandle};
pub use placeholder::PlaceholderBackend;
