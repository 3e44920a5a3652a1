//! Run configuration
//!
//! `ValidatorConfig` carries every setting of a validation run except the RPC
//! transport. The defaults reproduce the mainnet deployment checks: the Multicall
//! contract at `0xeefBa1e6…E441`, the `mainnet` network key, and the single token
//! whose `symbol()` is known to be non-conforming.

use std::{collections::BTreeSet, path::PathBuf};

use alloy::primitives::{address, Address};

/// Multicall contract deployed on Ethereum mainnet
pub const DEFAULT_MULTICALL_ADDRESS: Address = address!("eefBa1e63905eF1D7ACbA5a8513c70307C1cE441");

/// Tokens whose `symbol()` return value does not follow either string encoding
pub const DEFAULT_SYMBOL_EXEMPTIONS: [Address; 1] = [address!("9f49ed43C90A540d1cF12f6170aCE8d0B88a14E6")];

pub const DEFAULT_NETWORK: &str = "mainnet";
pub const DEFAULT_ERC20_ABI_PATH: &str = "abi/TestToken.json";
pub const DEFAULT_MULTICALL_ABI_PATH: &str = "abi/Multicall.json";
pub const DEFAULT_METADATA_PATH: &str = "deployed.json";

/// Settings for a validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Network key to read from the metadata document
    pub network: String,
    /// Address of the deployed batching contract
    pub multicall_address: Address,
    /// ABI descriptor exposing `decimals()` and `symbol()`
    pub erc20_abi_path: PathBuf,
    /// ABI descriptor exposing `aggregate((address,bytes)[])`
    pub multicall_abi_path: PathBuf,
    /// Token metadata document
    pub metadata_path: PathBuf,
    /// Token addresses excluded from the symbol check
    ///
    /// Matched on the parsed address, so the declared letter case does not matter.
    pub symbol_exemptions: BTreeSet<Address>,
    /// Report undecodable `symbol()` payloads as their own finding instead of a wrong symbol
    pub strict_symbol_encoding: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            multicall_address: DEFAULT_MULTICALL_ADDRESS,
            erc20_abi_path: PathBuf::from(DEFAULT_ERC20_ABI_PATH),
            multicall_abi_path: PathBuf::from(DEFAULT_MULTICALL_ABI_PATH),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            symbol_exemptions: DEFAULT_SYMBOL_EXEMPTIONS.into_iter().collect(),
            strict_symbol_encoding: false,
        }
    }
}

impl ValidatorConfig {
    /// Check if a token is excluded from the symbol check
    pub fn is_symbol_exempt(&self, token: &Address) -> bool {
        self.symbol_exemptions.contains(token)
    }
}
