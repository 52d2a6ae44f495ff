//! Network descriptor types.

use serde::{Deserialize, Serialize};

/// Native currency metadata of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Display name (e.g., "Cronos").
    pub name: String,
    /// Ticker symbol (e.g., "CRO").
    pub symbol: String,
    /// Decimal places of the smallest unit.
    pub decimals: u8,
}

/// Static description of an EVM network.
///
/// Serializes in the camelCase shape expected by `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    /// Chain ID as a 0x-prefixed hex string.
    pub chain_id: String,
    /// Human-readable chain name.
    pub chain_name: String,
    /// Native currency metadata.
    pub native_currency: NativeCurrency,
    /// RPC endpoints in preference order.
    pub rpc_urls: Vec<String>,
    /// Block explorers in preference order.
    pub block_explorer_urls: Vec<String>,
}

impl NetworkDescriptor {
    /// Decode the hex chain ID.
    ///
    /// Returns `None` if the stored value is not valid 0x-prefixed hex.
    pub fn chain_id_u64(&self) -> Option<u64> {
        let digits = self
            .chain_id
            .strip_prefix("0x")
            .or_else(|| self.chain_id.strip_prefix("0X"))?;
        u64::from_str_radix(digits, 16).ok()
    }

    /// Parameters for `wallet_switchEthereumChain`.
    pub fn switch_params(&self) -> serde_json::Value {
        serde_json::json!([{ "chainId": self.chain_id }])
    }

    /// Parameters for `wallet_addEthereumChain`.
    pub fn add_params(&self) -> serde_json::Value {
        serde_json::json!([self])
    }
}
