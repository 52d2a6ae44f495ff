//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the wallet gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Wallet provider transport.
    pub provider: ProviderConfig,

    /// Stand-in contract backend settings.
    pub placeholder: PlaceholderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Wallet provider endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// JSON-RPC endpoint of the wallet. `None` means no wallet is available.
    pub rpc_url: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Honor HTTP(S)_PROXY environment variables.
    pub use_system_proxy: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            timeout_secs: 30,
            use_system_proxy: true,
        }
    }
}

/// Settings for the fabricated bridge/airdrop results.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Artificial wait before a bridge handle is returned, in milliseconds.
    pub bridge_delay_ms: u64,

    /// Artificial wait before an airdrop handle is returned, in milliseconds.
    pub airdrop_delay_ms: u64,
}

impl PlaceholderConfig {
    /// Placeholder settings with no artificial waits.
    pub fn immediate() -> Self {
        Self {
            bridge_delay_ms: 0,
            airdrop_delay_ms: 0,
        }
    }

    pub fn bridge_delay(&self) -> Duration {
        Duration::from_millis(self.bridge_delay_ms)
    }

    pub fn airdrop_delay(&self) -> Duration {
        Duration::from_millis(self.airdrop_delay_ms)
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            bridge_delay_ms: 2000,
            airdrop_delay_ms: 3000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
