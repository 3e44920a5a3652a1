//! `validate-tokens`: check a token list against on-chain state
//!
//! Exits with status 0 when every check passes and 1 when any finding was
//! recorded. Fatal errors (unreadable input, unreachable RPC) exit non-zero with
//! the error printed.

use std::{path::PathBuf, process::ExitCode, str::FromStr};

use alloy::primitives::Address;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use token_metadata_validator::{
    config::{
        DEFAULT_ERC20_ABI_PATH, DEFAULT_METADATA_PATH, DEFAULT_MULTICALL_ABI_PATH, DEFAULT_NETWORK,
    },
    errors::InitError,
    utils::{
        abi_utils::{Erc20Interface, MulticallInterface},
        metadata_utils::load_token_list,
        multicall_utils::{get_http_provider, RpcMulticall},
    },
    MetadataValidator, ValidatorConfig,
};

#[derive(Parser, Debug)]
#[command(name = "validate-tokens")]
#[command(about = "Cross-check token list metadata against on-chain ERC20 state", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON-RPC endpoint URL
    #[arg(long, env = "RPC_URL")]
    rpc_url: String,

    /// Network key in the metadata document
    #[arg(long, env = "NETWORK", default_value = DEFAULT_NETWORK)]
    network: String,

    /// Address of the deployed Multicall contract (defaults to the mainnet deployment)
    #[arg(long, env = "MULTICALL_ADDRESS")]
    multicall: Option<String>,

    /// ABI descriptor exposing decimals() and symbol()
    #[arg(long, default_value = DEFAULT_ERC20_ABI_PATH)]
    erc20_abi: PathBuf,

    /// ABI descriptor exposing aggregate((address,bytes)[])
    #[arg(long, default_value = DEFAULT_MULTICALL_ABI_PATH)]
    multicall_abi: PathBuf,

    /// Token metadata document
    #[arg(long, default_value = DEFAULT_METADATA_PATH)]
    metadata: PathBuf,

    /// Additional token address to exclude from the symbol check (repeatable)
    #[arg(long = "exempt-symbol", value_name = "ADDRESS")]
    exempt_symbol: Vec<String>,

    /// Report undecodable symbol() payloads as their own finding
    #[arg(long)]
    strict_symbol_encoding: bool,

    /// Print progress while validating
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> Result<ValidatorConfig> {
        let mut config = ValidatorConfig {
            network: self.network.clone(),
            erc20_abi_path: self.erc20_abi.clone(),
            multicall_abi_path: self.multicall_abi.clone(),
            metadata_path: self.metadata.clone(),
            strict_symbol_encoding: self.strict_symbol_encoding,
            ..Default::default()
        };
        if let Some(multicall) = &self.multicall {
            config.multicall_address = Address::from_str(multicall)
                .map_err(|_| InitError::InvalidMulticallAddress(multicall.clone()))?;
        }
        for exempt in &self.exempt_symbol {
            let address = Address::from_str(exempt)
                .with_context(|| format!("Invalid --exempt-symbol address: {}", exempt))?;
            config.symbol_exemptions.insert(address);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = cli.to_config()?;
    let provider = get_http_provider(&cli.rpc_url)?;

    let erc20 = Erc20Interface::load(&config.erc20_abi_path).await?;
    let multicall = MulticallInterface::load(&config.multicall_abi_path).await?;
    let tokens = load_token_list(&config.metadata_path, &config.network).await?;

    let caller = RpcMulticall::new(provider, config.multicall_address, multicall);
    info!("Using Multicall at {}", caller.address());
    let validator = MetadataValidator::new(caller, erc20, config);

    let report = validator.validate(&tokens).await?;
    for finding in &report.findings {
        println!("{}", finding);
    }
    Ok(ExitCode::from(report.exit_status()))
}
