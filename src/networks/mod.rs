//! Supported network table.
//!
//! # Data Flow
//! ```text
//! registry.rs (built-in table, fixed at startup)
//!     → gateway lookup by network key
//!     → descriptor.rs chainId for wallet_switchEthereumChain
//!     → full descriptor for wallet_addEthereumChain (on 4902)
//! ```
//!
//! # Design Decisions
//! - Descriptors serialize exactly as the add-chain parameter object
//! - The registry is never mutated after construction

pub mod descriptor;
pub mod registry;

pub use descriptor::{NativeCurrency, NetworkDescriptor};
pub use registry::NetworkRegistry;
