//! ABI descriptor loading and contract interface bindings
//!
//! ABI descriptors are build artifacts of the shape `{ "abi": [...] }`. Functions
//! are resolved by name at load time, so a descriptor that lacks one of the
//! functions the validator calls is rejected before any RPC traffic happens.
//!
//! Encoding and decoding go through `alloy`'s dynamic ABI support, driven by the
//! loaded descriptor rather than compile-time bindings.

use std::path::Path;

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::{Function, JsonAbi},
    primitives::{Bytes, U256},
};
use serde_json::Value;

use crate::{
    errors::{LoadError, RpcError},
    types::BatchCall,
    utils::metadata_utils::read_json_document,
};

/// Load an ABI descriptor from disk
pub async fn load_abi(path: &Path) -> Result<JsonAbi, LoadError> {
    let document = read_json_document(path).await?;
    abi_from_document(&document, &path.display().to_string())
}

/// Extract the `abi` array from a parsed descriptor document
pub fn abi_from_document(document: &Value, source: &str) -> Result<JsonAbi, LoadError> {
    let abi = document
        .get("abi")
        .ok_or_else(|| LoadError::MissingField { path: source.to_string(), field: "abi".to_string() })?;
    serde_json::from_value(abi.clone())
        .map_err(|e| LoadError::MalformedJson { path: source.to_string(), reason: e.to_string() })
}

/// Find the overload of `name` taking `input_count` arguments
fn find_function(
    abi: &JsonAbi,
    name: &str,
    input_count: usize,
    source: &str,
) -> Result<Function, LoadError> {
    abi.function(name)
        .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == input_count))
        .cloned()
        .ok_or_else(|| LoadError::MissingFunction { path: source.to_string(), function: name.to_string() })
}

/// ERC20 read functions used by the validator
#[derive(Debug, Clone)]
pub struct Erc20Interface {
    decimals: Function,
    symbol: Function,
}

impl Erc20Interface {
    /// Load the interface from an ABI descriptor on disk
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let abi = load_abi(path).await?;
        Self::from_abi(&abi, &path.display().to_string())
    }

    /// Bind `decimals()` and `symbol()` from a parsed ABI
    pub fn from_abi(abi: &JsonAbi, source: &str) -> Result<Self, LoadError> {
        Ok(Self {
            decimals: find_function(abi, "decimals", 0, source)?,
            symbol: find_function(abi, "symbol", 0, source)?,
        })
    }

    /// Call data for `decimals()`
    pub fn decimals_call_data(&self) -> Bytes {
        // No arguments: the selector is the whole call
        Bytes::copy_from_slice(self.decimals.selector().as_slice())
    }

    /// Call data for `symbol()`
    pub fn symbol_call_data(&self) -> Bytes {
        Bytes::copy_from_slice(self.symbol.selector().as_slice())
    }
}

/// Batching contract binding for `aggregate((address,bytes)[])`
#[derive(Debug, Clone)]
pub struct MulticallInterface {
    aggregate: Function,
}

impl MulticallInterface {
    /// Load the interface from an ABI descriptor on disk
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let abi = load_abi(path).await?;
        Self::from_abi(&abi, &path.display().to_string())
    }

    /// Bind `aggregate` from a parsed ABI
    pub fn from_abi(abi: &JsonAbi, source: &str) -> Result<Self, LoadError> {
        Ok(Self { aggregate: find_function(abi, "aggregate", 1, source)? })
    }

    /// Encode an `aggregate` call for an ordered list of calls
    pub fn encode_aggregate(&self, calls: &[BatchCall]) -> Result<Bytes, RpcError> {
        let calls = calls
            .iter()
            .map(|call| {
                DynSolValue::Tuple(vec![
                    DynSolValue::Address(call.target),
                    DynSolValue::Bytes(call.call_data.to_vec()),
                ])
            })
            .collect();
        self.aggregate
            .abi_encode_input(&[DynSolValue::Array(calls)])
            .map(Bytes::from)
            .map_err(|e| RpcError::Encode(e.to_string()))
    }

    /// Decode an `aggregate` return value into `(blockNumber, returnData)`
    pub fn decode_aggregate(&self, data: &[u8]) -> Result<(U256, Vec<Bytes>), RpcError> {
        let values = self
            .aggregate
            .abi_decode_output(data)
            .map_err(|e| RpcError::Decode(e.to_string()))?;
        match values.as_slice() {
            [DynSolValue::Uint(block_number, _), DynSolValue::Array(items)] => {
                let return_data = items
                    .iter()
                    .map(|item| match item {
                        DynSolValue::Bytes(bytes) => Ok(Bytes::copy_from_slice(bytes)),
                        other => Err(RpcError::Decode(format!("unexpected return data item: {:?}", other))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((*block_number, return_data))
            }
            _ => Err(RpcError::Decode("expected (uint256, bytes[])".to_string())),
        }
    }

    /// Encode an `aggregate` return value
    ///
    /// Mostly useful for serving canned responses in tests and dry runs.
    pub fn encode_aggregate_output(&self, block_number: U256, return_data: &[Bytes]) -> Result<Bytes, RpcError> {
        let items = return_data.iter().map(|data| DynSolValue::Bytes(data.to_vec())).collect();
        self.aggregate
            .abi_encode_output(&[DynSolValue::Uint(block_number, 256), DynSolValue::Array(items)])
            .map(Bytes::from)
            .map_err(|e| RpcError::Encode(e.to_string()))
    }
}
