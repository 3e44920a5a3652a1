//! Multicall utilities for batch contract calls
//!
//! Every validation pass sends its reads as one ordered batch. The validator only
//! depends on the [`BatchCaller`] contract: submit an ordered list of calls, get
//! back an ordered list of return payloads, with `response[i]` belonging to
//! `calls[i]`.
//!
//! [`RpcMulticall`] is the production implementation: a single `eth_call` to a
//! deployed Multicall contract's `aggregate((address,bytes)[])`. `aggregate`
//! reverts when any inner call fails, so a single bad token aborts the batch; the
//! revert reason is decoded into [`RpcError::Reverted`] when the node returns it.

use alloy::{
    network::Ethereum,
    primitives::{hex, Address, Bytes},
    providers::{Provider, ProviderBuilder},
    rpc::types::{TransactionInput, TransactionRequest},
    sol_types::decode_revert_reason,
};
use log::debug;

use crate::{
    errors::{InitError, RpcError},
    types::BatchCall,
    utils::abi_utils::MulticallInterface,
};

/// Executes an ordered batch of read-only contract calls
#[allow(async_fn_in_trait)]
pub trait BatchCaller {
    /// Execute all `calls` in one round trip
    ///
    /// # Returns
    /// * `Ok(Vec<Bytes>)` - Raw return data, one entry per call, in call order
    /// * `Err(RpcError)` - If the batch could not be executed or decoded
    async fn aggregate(&self, calls: &[BatchCall]) -> Result<Vec<Bytes>, RpcError>;
}

/// Build an HTTP provider for a JSON-RPC endpoint
pub fn get_http_provider(rpc_url: &str) -> Result<impl Provider<Ethereum> + Clone, InitError> {
    let url = rpc_url
        .parse()
        .map_err(|_| InitError::InvalidRpcUrl(rpc_url.to_string()))?;
    Ok(ProviderBuilder::new().connect_http(url))
}

/// Batch caller backed by a deployed Multicall contract
#[derive(Debug, Clone)]
pub struct RpcMulticall<P> {
    provider: P,
    address: Address,
    interface: MulticallInterface,
}

impl<P> RpcMulticall<P>
where
    P: Provider<Ethereum>,
{
    /// Create a batch caller for the Multicall contract at `address`
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> anyhow::Result<()> {
    /// use std::path::Path;
    /// use token_metadata_validator::{
    ///     config::DEFAULT_MULTICALL_ADDRESS,
    ///     utils::{abi_utils::MulticallInterface, multicall_utils::{get_http_provider, RpcMulticall}},
    /// };
    ///
    /// let provider = get_http_provider("https://eth.llamarpc.com")?;
    /// let interface = MulticallInterface::load(Path::new("abi/Multicall.json")).await?;
    /// let multicall = RpcMulticall::new(provider, DEFAULT_MULTICALL_ADDRESS, interface);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(provider: P, address: Address, interface: MulticallInterface) -> Self {
        Self { provider, address, interface }
    }

    /// Address of the Multicall contract
    pub fn address(&self) -> Address {
        self.address
    }
}

impl<P> BatchCaller for RpcMulticall<P>
where
    P: Provider<Ethereum>,
{
    async fn aggregate(&self, calls: &[BatchCall]) -> Result<Vec<Bytes>, RpcError> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }
        let data = self.interface.encode_aggregate(calls)?;
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(TransactionInput::new(data));
        let output = self
            .provider
            .call(tx)
            .await
            .map_err(|e| {
                match e.as_error_resp().and_then(|resp| resp.as_revert_data()) {
                    Some(data) => RpcError::Reverted(
                        decode_revert_reason(&data).unwrap_or_else(|| format!("0x{}", hex::encode(&data))),
                    ),
                    None => RpcError::Transport(e.to_string()),
                }
            })?;
        let (block_number, return_data) = self.interface.decode_aggregate(&output)?;
        debug!("aggregate of {} calls answered at block {}", calls.len(), block_number);
        ensure_aligned(calls, return_data)
    }
}

/// Check that a batch response is positionally aligned with its request
pub fn ensure_aligned(calls: &[BatchCall], return_data: Vec<Bytes>) -> Result<Vec<Bytes>, RpcError> {
    if return_data.len() != calls.len() {
        return Err(RpcError::LengthMismatch { expected: calls.len(), actual: return_data.len() });
    }
    Ok(return_data)
}

/// Build one call per target, all with the same call data
pub fn create_batch_calls(targets: &[Address], call_data: &Bytes) -> Vec<BatchCall> {
    targets
        .iter()
        .map(|target| BatchCall { target: *target, call_data: call_data.clone() })
        .collect()
}
