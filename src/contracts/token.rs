//! T2PRAWANTA token contract declaration.
//!
//! Declared for a real backend; the placeholder never calls it.

use alloy::primitives::{address, Address, Bytes};
use alloy::sol;
use alloy::sol_types::SolCall;

/// Deployed token contract address.
pub const T2P_TOKEN_ADDRESS: Address = address!("0x318059eb1254ad209bcc0950451197333cef650c");

sol! {
    /// Minimal ERC-20 surface used by the bridge and airdrop flows.
    #[derive(Debug)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// Calldata for `balanceOf(owner)` against the token contract.
pub fn balance_of_call(owner: Address) -> Bytes {
    IERC20::balanceOfCall { owner }.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_address() {
        assert_eq!(
            T2P_TOKEN_ADDRESS.to_string().to_lowercase(),
            "0x318059eb1254ad209bcc0950451197333cef650c"
        );
    }

    #[test]
    fn test_erc20_selectors() {
        assert_eq!(IERC20::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(IERC20::transferCall::SELECTOR, [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(IERC20::allowanceCall::SELECTOR, [0xdd, 0x62, 0xed, 0x3e]);
        assert_eq!(IERC20::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
    }

    #[test]
    fn test_balance_of_calldata() {
        let data = balance_of_call(Address::ZERO);
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert!(data[4..].iter().all(|b| *b == 0));
    }
}
