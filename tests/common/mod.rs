// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use alloy::primitives::{hex, Address, Bytes};
use token_metadata_validator::{
    errors::RpcError,
    types::BatchCall,
    utils::abi_utils::Erc20Interface,
    BatchCaller,
};

pub const DECIMALS_SELECTOR: [u8; 4] = hex!("313ce567");
pub const SYMBOL_SELECTOR: [u8; 4] = hex!("95d89b41");

pub const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
pub const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const MKR: &str = "0x9f8F72aA9304c8B593d555F12eF6589cC3A579A2";
pub const EXEMPT: &str = "0x9f49ed43C90A540d1cF12f6170aCE8d0B88a14E6";

/// Path of an ABI descriptor shipped with the crate
pub fn abi_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("abi").join(name)
}

pub async fn erc20() -> Erc20Interface {
    Erc20Interface::load(&abi_path("TestToken.json")).await.unwrap()
}

pub fn addr(address: &str) -> Address {
    address.parse().unwrap()
}

/// uint256 return word
pub fn uint_word(value: u64) -> Bytes {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    Bytes::copy_from_slice(&word)
}

/// `bytes32` symbol return value
pub fn fixed_symbol(symbol: &str) -> Bytes {
    let mut word = [0u8; 32];
    word[..symbol.len()].copy_from_slice(symbol.as_bytes());
    Bytes::copy_from_slice(&word)
}

/// Dynamic `string` symbol return value: offset, length, data word
pub fn dynamic_symbol(symbol: &str) -> Bytes {
    let mut payload = vec![0u8; 96];
    payload[31] = 0x20;
    payload[63] = symbol.len() as u8;
    payload[64..64 + symbol.len()].copy_from_slice(symbol.as_bytes());
    Bytes::from(payload)
}

/// In-memory stand-in for a deployed Multicall contract
///
/// Answers each call from a table keyed by target and selector; unknown calls
/// return empty data, like a call to an account without code.
#[derive(Default)]
pub struct MockMulticall {
    responses: HashMap<(Address, [u8; 4]), Bytes>,
    batches: Mutex<Vec<Vec<BatchCall>>>,
    drop_last: bool,
    unreachable: bool,
}

impl MockMulticall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimals(mut self, token: &str, decimals: u64) -> Self {
        self.responses.insert((addr(token), DECIMALS_SELECTOR), uint_word(decimals));
        self
    }

    pub fn with_symbol(mut self, token: &str, payload: Bytes) -> Self {
        self.responses.insert((addr(token), SYMBOL_SELECTOR), payload);
        self
    }

    /// Answer with one result fewer than requested
    pub fn dropping_last_result(mut self) -> Self {
        self.drop_last = true;
        self
    }

    /// Fail every batch as if the endpoint were down
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Batches received so far
    pub fn batches(&self) -> Vec<Vec<BatchCall>> {
        self.batches.lock().unwrap().clone()
    }
}

impl BatchCaller for MockMulticall {
    async fn aggregate(&self, calls: &[BatchCall]) -> Result<Vec<Bytes>, RpcError> {
        self.batches.lock().unwrap().push(calls.to_vec());
        if self.unreachable {
            return Err(RpcError::Transport("connection refused".to_string()));
        }
        let mut results: Vec<Bytes> = calls
            .iter()
            .map(|call| {
                let mut selector = [0u8; 4];
                selector.copy_from_slice(&call.call_data[..4]);
                self.responses.get(&(call.target, selector)).cloned().unwrap_or_default()
            })
            .collect();
        if self.drop_last {
            results.pop();
        }
        Ok(results)
    }
}

impl BatchCaller for &MockMulticall {
    async fn aggregate(&self, calls: &[BatchCall]) -> Result<Vec<Bytes>, RpcError> {
        (**self).aggregate(calls).await
    }
}
