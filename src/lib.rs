//! # Token Metadata Validator
//!
//! Cross-checks a static token list against on-chain ERC20 state before it ships.
//!
//! ## Checks
//!
//! - **Decimals**: `decimals()` of every token must equal the declared value
//! - **Symbol**: `symbol()` of every token must equal the declared symbol, for both
//!   `bytes32` and dynamic `string` return encodings
//! - **Address checksum**: declared addresses must be EIP-55 checksummed, and a
//!   non-empty `iconAddress` must be the same address in checksummed form
//!
//! The `ether` placeholder entry is skipped. On-chain reads go through a deployed
//! Multicall contract, one `aggregate` round trip per checked field.
//!
//! ## Features
//!
//! - `rustls-tls`: Uses rustls as the TLS implementation instead of native-tls (OpenSSL).
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use token_metadata_validator::{
//!     config::ValidatorConfig,
//!     utils::{
//!         abi_utils::{Erc20Interface, MulticallInterface},
//!         metadata_utils::load_token_list,
//!         multicall_utils::{get_http_provider, RpcMulticall},
//!     },
//!     MetadataValidator,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ValidatorConfig::default();
//! let erc20 = Erc20Interface::load(&config.erc20_abi_path).await?;
//! let multicall = MulticallInterface::load(&config.multicall_abi_path).await?;
//! let tokens = load_token_list(&config.metadata_path, &config.network).await?;
//!
//! let provider = get_http_provider("https://eth.llamarpc.com")?;
//! let caller = RpcMulticall::new(provider, config.multicall_address, multicall);
//! let validator = MetadataValidator::new(caller, erc20, config);
//!
//! let report = validator.validate(&tokens).await?;
//! for finding in &report.findings {
//!     println!("{}", finding);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `types`: Token records, batch calls, findings and reports
//! - `config`: Run configuration and defaults
//! - `validator`: The validation passes
//! - `errors`: Fatal error types
//! - `utils`: ABI, metadata, multicall, decoding and checksum helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;
pub mod validator;

// Re-export only the essential types and functions
pub use config::ValidatorConfig;
pub use errors::ValidatorError;
pub use types::{Finding, FindingKind, TokenList, TokenRecord, ValidationReport};
pub use utils::multicall_utils::{BatchCaller, RpcMulticall};
pub use validator::MetadataValidator;
