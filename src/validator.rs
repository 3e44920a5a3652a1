//! Token metadata validator
//!
//! Runs three passes over the contract tokens of a [`TokenList`], in order:
//!
//! 1. **Decimals**: one batch of `decimals()` calls, compared to the declared value
//! 2. **Symbols**: one batch of `symbol()` calls, decoded by payload length and
//!    compared to the declared symbol; exempt addresses are skipped
//! 3. **Addresses**: local EIP-55 checksum and icon-address checks
//!
//! Each pass only starts once the previous one finished. Findings accumulate
//! across passes; a fatal error in any pass aborts the run with no report.

use alloy::primitives::{Address, Bytes, U256};
use log::{debug, info, warn};

use crate::{
    config::ValidatorConfig,
    errors::ValidatorError,
    types::{ContractToken, Finding, FindingKind, SymbolDecoding, TokenList, ValidationReport},
    utils::{
        abi_utils::Erc20Interface,
        checksum_utils::check_token_address,
        erc20_utils::{decode_decimals, decode_symbol},
        multicall_utils::{create_batch_calls, ensure_aligned, BatchCaller},
    },
};

/// Cross-checks declared token metadata against on-chain state
///
/// # Type Parameters
/// - `B`: Batch caller used for the on-chain reads
pub struct MetadataValidator<B> {
    caller: B,
    erc20: Erc20Interface,
    config: ValidatorConfig,
}

impl<B: BatchCaller> MetadataValidator<B> {
    /// Create a validator reading on-chain state through `caller`
    pub fn new(caller: B, erc20: Erc20Interface, config: ValidatorConfig) -> Self {
        Self { caller, erc20, config }
    }

    /// Settings of this validator
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every pass over a token list and collect the findings
    ///
    /// # Returns
    /// * `Ok(ValidationReport)` - All findings, possibly none
    /// * `Err(ValidatorError)` - On invalid token addresses or a failed batch
    pub async fn validate(&self, list: &TokenList) -> Result<ValidationReport, ValidatorError> {
        let tokens = list.contract_tokens()?;
        info!(
            "Validating {} tokens on {} ({} skipped as ether)",
            tokens.len(),
            list.network,
            list.ether_count()
        );

        let mut findings = self.check_decimals(&tokens).await?;
        findings.extend(self.check_symbols(&tokens).await?);
        findings.extend(check_addresses(&tokens));

        info!("Validation finished with {} findings", findings.len());
        Ok(ValidationReport {
            tokens_checked: tokens.len(),
            tokens_skipped: list.ether_count(),
            findings,
        })
    }

    /// Compare on-chain `decimals()` with the declared decimals
    pub async fn check_decimals(&self, tokens: &[ContractToken]) -> Result<Vec<Finding>, ValidatorError> {
        let responses = self.batch(tokens, self.erc20.decimals_call_data()).await?;
        info!("Checking decimals of {} tokens", tokens.len());

        let findings = tokens
            .iter()
            .zip(responses)
            .filter_map(|(token, data)| {
                let actual = decode_decimals(&data);
                debug!("{} decimals: declared {}, on-chain {:?}", token.record.address, token.record.decimals, actual);
                if actual == Some(U256::from(token.record.decimals)) {
                    None
                } else {
                    Some(Finding::new(token, FindingKind::WrongDecimals { expected: token.record.decimals, actual }))
                }
            })
            .collect();
        Ok(findings)
    }

    /// Compare on-chain `symbol()` with the declared symbol
    ///
    /// Exempt tokens are still queried; only their comparison is skipped.
    pub async fn check_symbols(&self, tokens: &[ContractToken]) -> Result<Vec<Finding>, ValidatorError> {
        let responses = self.batch(tokens, self.erc20.symbol_call_data()).await?;
        info!("Checking symbols of {} tokens", tokens.len());

        let mut findings = Vec::new();
        for (token, data) in tokens.iter().zip(responses) {
            if self.config.is_symbol_exempt(&token.address) {
                warn!("Skipping symbol check for exempt token {}", token.record.address);
                continue;
            }
            let decoded = decode_symbol(&data);
            debug!("{} symbol: declared {}, on-chain {:?}", token.record.address, token.record.symbol, decoded);
            if let Some(finding) = self.compare_symbol(token, decoded) {
                findings.push(finding);
            }
        }
        Ok(findings)
    }

    fn compare_symbol(&self, token: &ContractToken, decoded: SymbolDecoding) -> Option<Finding> {
        let expected = &token.record.symbol;
        match decoded {
            SymbolDecoding::Unrecognized if self.config.strict_symbol_encoding => Some(Finding::new(
                token,
                FindingKind::UnrecognizedSymbolEncoding { expected: expected.clone() },
            )),
            decoded if decoded.value() == Some(expected.as_str()) => None,
            decoded => Some(Finding::new(
                token,
                FindingKind::WrongSymbol {
                    expected: expected.clone(),
                    actual: decoded.value().map(str::to_string),
                },
            )),
        }
    }

    /// Issue one batched read of `call_data` against every token
    async fn batch(&self, tokens: &[ContractToken], call_data: Bytes) -> Result<Vec<Bytes>, ValidatorError> {
        let targets: Vec<Address> = tokens.iter().map(|token| token.address).collect();
        let calls = create_batch_calls(&targets, &call_data);
        let responses = self.caller.aggregate(&calls).await?;
        Ok(ensure_aligned(&calls, responses)?)
    }
}

/// Check declared and icon addresses of every token
pub fn check_addresses(tokens: &[ContractToken]) -> Vec<Finding> {
    info!("Checking address checksums of {} tokens", tokens.len());
    tokens.iter().flat_map(check_token_address).collect()
}
