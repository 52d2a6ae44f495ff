//! Network registry keyed by short network names.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::networks::descriptor::{NativeCurrency, NetworkDescriptor};

/// Immutable mapping from network key to descriptor.
///
/// Cheap to clone; clones share the same table.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: Arc<BTreeMap<String, NetworkDescriptor>>,
}

impl NetworkRegistry {
    /// Build a registry from explicit entries.
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, NetworkDescriptor)>,
        K: Into<String>,
    {
        let networks = entries
            .into_iter()
            .map(|(key, descriptor)| (key.into(), descriptor))
            .collect();
        Self {
            networks: Arc::new(networks),
        }
    }

    /// The three networks the gateway ships with: `mintme`, `cronos`, `bsc`.
    pub fn builtin() -> Self {
        Self::new([
            (
                "mintme",
                evm_network(
                    "0x6000", // 24576
                    "MintMe.com Coin",
                    ("MintMe.com Coin", "MINTME"),
                    "https://node1.mintme.com",
                    "https://www.mintme.com/explorer",
                ),
            ),
            (
                "cronos",
                evm_network(
                    "0x19", // 25
                    "Cronos Mainnet Beta",
                    ("Cronos", "CRO"),
                    "https://evm.cronos.org",
                    "https://cronoscan.com",
                ),
            ),
            (
                "bsc",
                evm_network(
                    "0x38", // 56
                    "BNB Smart Chain",
                    ("BNB", "BNB"),
                    "https://bsc-dataseed.binance.org",
                    "https://bscscan.com",
                ),
            ),
        ])
    }

    /// Look up a descriptor by key.
    pub fn get(&self, key: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(key)
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NetworkDescriptor)> {
        self.networks.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn evm_network(
    chain_id: &str,
    chain_name: &str,
    (currency_name, symbol): (&str, &str),
    rpc_url: &str,
    explorer_url: &str,
) -> NetworkDescriptor {
    NetworkDescriptor {
        chain_id: chain_id.to_string(),
        chain_name: chain_name.to_string(),
        native_currency: NativeCurrency {
            name: currency_name.to_string(),
            symbol: symbol.to_string(),
            decimals: 18,
        },
        rpc_urls: vec![rpc_url.to_string()],
        block_explorer_urls: vec![explorer_url.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["bsc", "cronos", "mintme"]);

        let mintme = registry.get("mintme").unwrap();
        assert_eq!(mintme.chain_id, "0x6000");
        assert_eq!(mintme.chain_id_u64(), Some(24576));
        assert_eq!(mintme.native_currency.symbol, "MINTME");
        assert_eq!(mintme.block_explorer_urls, vec!["https://www.mintme.com/explorer"]);

        let bsc = registry.get("bsc").unwrap();
        assert_eq!(bsc.chain_id_u64(), Some(56));
        assert_eq!(bsc.chain_name, "BNB Smart Chain");
        assert_eq!(bsc.rpc_urls, vec!["https://bsc-dataseed.binance.org"]);

        assert_eq!(registry.get("cronos").unwrap().chain_id_u64(), Some(25));
    }

    #[test]
    fn test_unknown_key() {
        let registry = NetworkRegistry::default();
        assert!(registry.get("polygon").is_none());
        assert!(registry.get("").is_none());
        assert!(registry.get("BSC").is_none());
    }

    #[test]
    fn test_custom_registry() {
        let registry = NetworkRegistry::new([(
            "local",
            evm_network("0x7a69", "Anvil", ("Ether", "ETH"), "http://127.0.0.1:8545", "http://127.0.0.1"),
        )]);
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert_eq!(registry.get("local").unwrap().chain_id_u64(), Some(31337));
    }
}
