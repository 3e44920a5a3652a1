//! Error types for token metadata validation
//!
//! Only fatal conditions live here. Per-token mismatches are not errors; they are
//! collected as [`Finding`](crate::types::Finding)s and reported together at the end
//! of a run.
//!
//! The hierarchy mirrors the phases of a run:
//! - Initialization (RPC endpoint, multicall address)
//! - Loading input documents (ABI descriptors, token metadata)
//! - Batched RPC reads through the multicall contract

use thiserror::Error;

/// Top-level error type for a validation run
///
/// Any of these aborts the run immediately, without a partial report.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Errors occurring while setting up the RPC connection
    #[error("Failed to initialize validator: {0}")]
    Init(#[from] InitError),

    /// Errors occurring while reading or parsing input documents
    #[error("Failed to load input: {0}")]
    Load(#[from] LoadError),

    /// Errors occurring during a batched contract read
    #[error("Batch call failed: {0}")]
    Rpc(#[from] RpcError),
}

/// Initialization-specific errors
#[derive(Debug, Error)]
pub enum InitError {
    /// Invalid or malformed RPC URL
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    /// Multicall contract address is not a 20-byte hex string
    #[error("Invalid multicall address: {0}")]
    InvalidMulticallAddress(String),
}

/// Input document errors
///
/// Raised for missing files, malformed JSON, and documents that lack the
/// fields or functions the validator depends on.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {path}: {reason}")]
    Read {
        path: String,
        reason: String,
    },

    /// The file is not valid JSON or does not have the expected shape
    #[error("Malformed JSON in {path}: {reason}")]
    MalformedJson {
        path: String,
        reason: String,
    },

    /// A required top-level field is absent
    ///
    /// # Fields
    /// * `path` - Document the field was expected in
    /// * `field` - Name of the missing field (`abi`, `tokens`, or a network name)
    #[error("Missing field `{field}` in {path}")]
    MissingField {
        path: String,
        field: String,
    },

    /// The ABI descriptor does not expose a function the validator calls
    #[error("ABI {path} does not expose `{function}`")]
    MissingFunction {
        path: String,
        function: String,
    },

    /// A non-ether token address does not parse as 20 hex bytes
    #[error("Invalid token address at index {index}: {address}")]
    InvalidTokenAddress {
        index: usize,
        address: String,
    },
}

/// Batched read errors
///
/// There is no retry policy: transient and permanent failures both land here.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The request never produced a response (transport or node error)
    #[error("Transport error: {0}")]
    Transport(String),

    /// `aggregate` reverted, usually because one of the inner calls failed
    #[error("Multicall reverted: {0}")]
    Reverted(String),

    /// Calldata for `aggregate` could not be encoded
    #[error("Failed to encode aggregate call: {0}")]
    Encode(String),

    /// The `aggregate` return value could not be decoded
    #[error("Failed to decode aggregate result: {0}")]
    Decode(String),

    /// The response is not positionally aligned with the request
    #[error("Malformed batch response: expected {expected} results, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}
