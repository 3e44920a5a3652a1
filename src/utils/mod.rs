//! Utility functions for token metadata validation
//!
//! # Modules
//!
//! - [`abi_utils`]: ABI descriptor loading
//!   - ERC20 `decimals()` / `symbol()` bindings
//!   - Multicall `aggregate` encoding and decoding
//!
//! - [`metadata_utils`]: Token metadata document loading
//!
//! - [`multicall_utils`]: Batched contract reads
//!   - `BatchCaller` trait
//!   - RPC-backed Multicall implementation
//!
//! - [`erc20_utils`]: Decoding of `decimals()` and `symbol()` return payloads
//!
//! - [`checksum_utils`]: EIP-55 address and icon-address checks

/// ABI descriptor utilities
pub mod abi_utils;

/// Token metadata document utilities
pub mod metadata_utils;

/// Multicall utilities for batch contract calls
pub mod multicall_utils;

/// ERC20 return payload decoding
pub mod erc20_utils;

/// Address checksum utilities
pub mod checksum_utils;
