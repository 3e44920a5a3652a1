//! Core types for token metadata validation
//!
//! This module defines the data structures shared by every validation pass:
//! - Declared token metadata (`TokenRecord`, `TokenList`, `ContractToken`)
//! - Batched read requests (`BatchCall`)
//! - Decoded symbol payloads (`SymbolDecoding`)
//! - Findings and the final report (`Finding`, `FindingKind`, `ValidationReport`)

use std::fmt;

pub use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Address literal used by token lists for the native asset
pub const ETHER_ADDRESS: &str = "ether";

/// Declared metadata for a single token, as found in the metadata document
///
/// Extra fields in the document (`name`, `precision`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Declared address, expected in EIP-55 checksummed form, or `"ether"`
    pub address: String,
    /// Token symbol (e.g., "DAI", "USDC")
    pub symbol: String,
    /// Number of decimal places
    ///
    /// Wider than the on-chain `uint8`; out-of-range values surface as `WrongDecimals`.
    pub decimals: u64,
    /// Address used to resolve the token icon; empty when the icon is not address-based
    #[serde(default)]
    pub icon_address: String,
}

impl TokenRecord {
    /// Check if this record is the native-asset placeholder rather than a contract
    pub fn is_ether(&self) -> bool {
        self.address == ETHER_ADDRESS
    }
}

/// Ordered token records declared for one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenList {
    /// Network key the records were read from (e.g., "mainnet")
    pub network: String,
    /// Records in document order, `ether` included
    pub tokens: Vec<TokenRecord>,
}

/// A token record backed by a real contract
///
/// Produced by filtering the `ether` placeholder out of a [`TokenList`]; `index`
/// is the position in that filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractToken {
    /// Position among contract tokens
    pub index: usize,
    /// Parsed contract address
    pub address: Address,
    /// The declared record
    pub record: TokenRecord,
}

/// One entry of a batched read: target contract and encoded call data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCall {
    /// Contract to call
    pub target: Address,
    /// ABI-encoded call, selector included
    pub call_data: Bytes,
}

/// Result of decoding a raw `symbol()` return payload
///
/// The variant is chosen from the payload length alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolDecoding {
    /// 32-byte `bytes32` payload decoded as a null-padded string
    Fixed(String),
    /// 96-byte dynamic `string` payload, decoded from its tail word
    Dynamic(String),
    /// Any other length, or content that is not a valid padded string
    Unrecognized,
}

impl SymbolDecoding {
    /// Decoded symbol, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            SymbolDecoding::Fixed(value) | SymbolDecoding::Dynamic(value) => Some(value),
            SymbolDecoding::Unrecognized => None,
        }
    }
}

/// Kind of validation finding with its expected/actual values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FindingKind {
    /// On-chain `decimals()` differs from the declared value
    WrongDecimals {
        expected: u64,
        /// `None` when the return payload does not fit a uint256
        actual: Option<U256>,
    },
    /// On-chain `symbol()` differs from the declared value
    WrongSymbol {
        expected: String,
        /// `None` when the payload could not be decoded
        actual: Option<String>,
    },
    /// `symbol()` payload has an unrecognized encoding (strict mode only)
    UnrecognizedSymbolEncoding {
        expected: String,
    },
    /// Declared address is not in EIP-55 checksummed form
    NotChecksummed {
        checksummed: String,
    },
    /// Non-empty icon address does not match the token address
    IconAddressMismatch {
        icon_address: String,
    },
}

/// A single validation finding for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position among contract tokens
    pub index: usize,
    /// Declared token address, exactly as written in the document
    pub address: String,
    /// What went wrong
    pub kind: FindingKind,
}

impl Finding {
    /// Create a finding for a contract token
    pub fn new(token: &ContractToken, kind: FindingKind) -> Self {
        Self {
            index: token.index,
            address: token.record.address.clone(),
            kind,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FindingKind::WrongDecimals { .. } => write!(f, "Wrong decimals: {}", self.address),
            FindingKind::WrongSymbol { expected, actual } => write!(
                f,
                "Wrong symbol: {}, {}, {}",
                expected,
                actual.as_deref().unwrap_or("undefined"),
                self.address
            ),
            FindingKind::UnrecognizedSymbolEncoding { .. } => {
                write!(f, "Unrecognized symbol encoding: {}", self.address)
            }
            FindingKind::NotChecksummed { .. } => {
                write!(f, "Address not checksummed: {}, {}", self.index, self.address)
            }
            FindingKind::IconAddressMismatch { icon_address } => {
                write!(f, "Address mismatch: {}, {}", self.address, icon_address)
            }
        }
    }
}

/// Outcome of a full validation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Number of contract tokens checked
    pub tokens_checked: usize,
    /// Number of `ether` placeholders skipped
    pub tokens_skipped: usize,
    /// All findings, in pass order (decimals, symbols, addresses)
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Check if the run produced no findings
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    /// Process exit status for this report: 0 on success, 1 otherwise
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Findings reported for a given declared address
    pub fn findings_for<'a>(&'a self, address: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |finding| finding.address == address)
    }
}
