//! Token metadata document loading
//!
//! The metadata document is keyed by network name, each entry holding a `tokens`
//! array:
//!
//! ```json
//! { "mainnet": { "tokens": [ { "address": "0x6B17...", "symbol": "DAI", "decimals": 18, "iconAddress": "" } ] } }
//! ```

use std::{path::Path, str::FromStr};

use alloy::primitives::Address;
use serde_json::Value;

use crate::{
    errors::LoadError,
    types::{ContractToken, TokenList, TokenRecord},
};

/// Read a file and parse it as JSON
pub async fn read_json_document(path: &Path) -> Result<Value, LoadError> {
    let display = path.display().to_string();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Read { path: display.clone(), reason: e.to_string() })?;
    serde_json::from_str(&content)
        .map_err(|e| LoadError::MalformedJson { path: display, reason: e.to_string() })
}

/// Load the token list declared for `network` from a metadata document on disk
pub async fn load_token_list(path: &Path, network: &str) -> Result<TokenList, LoadError> {
    let document = read_json_document(path).await?;
    token_list_from_document(&document, network, &path.display().to_string())
}

/// Extract the token list for `network` from an already parsed metadata document
///
/// # Arguments
/// * `document` - Parsed metadata document
/// * `network` - Network key (e.g., "mainnet")
/// * `source` - Document name used in error messages
pub fn token_list_from_document(
    document: &Value,
    network: &str,
    source: &str,
) -> Result<TokenList, LoadError> {
    let entry = document
        .get(network)
        .ok_or_else(|| LoadError::MissingField { path: source.to_string(), field: network.to_string() })?;
    let tokens = entry
        .get("tokens")
        .ok_or_else(|| LoadError::MissingField { path: source.to_string(), field: "tokens".to_string() })?;
    let tokens: Vec<TokenRecord> = serde_json::from_value(tokens.clone())
        .map_err(|e| LoadError::MalformedJson { path: source.to_string(), reason: e.to_string() })?;

    Ok(TokenList { network: network.to_string(), tokens })
}

impl TokenList {
    /// Records backed by a real contract, in document order
    ///
    /// The `ether` placeholder is dropped before anything else happens, so no
    /// call is ever built for it. Every remaining address must parse as 20 hex
    /// bytes; case is not checked here.
    pub fn contract_tokens(&self) -> Result<Vec<ContractToken>, LoadError> {
        self.tokens
            .iter()
            .filter(|record| !record.is_ether())
            .enumerate()
            .map(|(index, record)| {
                let address = Address::from_str(&record.address).map_err(|_| {
                    LoadError::InvalidTokenAddress { index, address: record.address.clone() }
                })?;
                Ok(ContractToken { index, address, record: record.clone() })
            })
            .collect()
    }

    /// Number of `ether` placeholders in the list
    pub fn ether_count(&self) -> usize {
        self.tokens.iter().filter(|record| record.is_ether()).count()
    }
}
