use std::{convert::Infallible, path::PathBuf};

use clap::{ArgAction, Parser as ClapParser, Subcommand as ClapSubcommand};
use eyre::{WrapErr, eyre};
use swisc_common::{
    Address, U256,
    types::LocalSigner,
    units::{parse_ether, parse_gwei},
    utils::{parse_address, to_checksum_address},
};
use tracing::Level;
use zeroize::Zeroizing;

use crate::{config::SwiscConfig, subcommands};

#[derive(ClapParser)]
#[command(
    name = "swisc",
    author,
    version,
    about = "Read the SWISC contracts and send signed legacy transfers over JSON-RPC",
    arg_required_else_help = true
)]
pub struct CLI {
    #[clap(flatten)]
    pub opts: Options,
    #[command(subcommand)]
    pub command: Subcommand,
}

#[derive(ClapParser, Debug)]
pub struct Options {
    #[arg(
        long = "config",
        env = "SWISC_CONFIG",
        value_name = "CONFIG_FILE",
        help = "TOML configuration file. Defaults to ./swisc.toml when it exists",
        global = true
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long = "addresses",
        value_name = "ADDRESSES_JSON",
        help = "JSON address book replacing the [addresses] table",
        global = true
    )]
    pub addresses: Option<PathBuf>,
    #[arg(
        long = "rpc-url",
        env = "SWISC_RPC_URL",
        value_name = "URL",
        help_heading = "Network options",
        global = true
    )]
    pub rpc_url: Option<String>,
    #[arg(
        long = "timeout",
        env = "SWISC_TIMEOUT",
        value_name = "SECONDS",
        help = "Bound on every request to the node",
        help_heading = "Network options",
        global = true
    )]
    pub timeout: Option<u64>,
    #[arg(
        long = "chain-id",
        env = "SWISC_CHAIN_ID",
        value_name = "CHAIN_ID",
        help = "Sign with EIP-155 replay protection for this chain",
        help_heading = "Network options",
        global = true
    )]
    pub chain_id: Option<u64>,
    #[arg(
        long = "log.level",
        default_value_t = Level::INFO,
        value_name = "LOG_LEVEL",
        help = "The verbosity level used for logs.",
        long_help = "Possible values: info, debug, trace, warn, error",
        global = true
    )]
    pub log_level: Level,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: Default::default(),
            addresses: Default::default(),
            rpc_url: Default::default(),
            timeout: Default::default(),
            chain_id: Default::default(),
            log_level: Level::INFO,
        }
    }
}

fn parse_secret(input: &str) -> Result<Zeroizing<String>, Infallible> {
    Ok(Zeroizing::new(input.to_owned()))
}

/// Where the signing key comes from. Never derives `Debug`.
#[derive(ClapParser, Default)]
pub struct KeyOptions {
    #[arg(
        long = "private-key",
        env = "SWISC_PRIVATE_KEY",
        hide_env_values = true,
        value_name = "PRIVATE_KEY",
        value_parser = parse_secret,
        help = "Hex encoded secp256k1 private key"
    )]
    pub private_key: Option<Zeroizing<String>>,
    #[arg(
        long = "private-key-file",
        value_name = "PATH",
        help = "File holding the hex encoded private key. Takes precedence over --private-key"
    )]
    pub private_key_file: Option<PathBuf>,
}

impl KeyOptions {
    pub fn signer(&self) -> eyre::Result<LocalSigner> {
        if let Some(path) = &self.private_key_file {
            let contents = Zeroizing::new(
                std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
            );
            return LocalSigner::from_hex(&contents)
                .wrap_err_with(|| format!("Invalid private key in {}", path.display()));
        }
        match &self.private_key {
            Some(key) => LocalSigner::from_hex(key).wrap_err("Invalid private key"),
            None => Err(eyre!(
                "No private key given. Use --private-key, SWISC_PRIVATE_KEY or --private-key-file"
            )),
        }
    }
}

#[derive(ClapParser, Default)]
pub struct TransferOptions {
    #[arg(long = "to", value_name = "ADDRESS", value_parser = parse_address)]
    pub to: Option<Address>,
    #[arg(
        long = "from",
        value_name = "ADDRESS",
        value_parser = parse_address,
        help = "Expected sender. Signing fails if the key does not control it"
    )]
    pub from: Option<Address>,
    #[arg(
        long = "value",
        value_name = "ETHER",
        value_parser = parse_ether,
        help = "Amount to send, in ether"
    )]
    pub value: Option<U256>,
    #[arg(long = "gas-limit", value_name = "GAS")]
    pub gas_limit: Option<u64>,
    #[arg(
        long = "gas-price",
        value_name = "GWEI",
        value_parser = parse_gwei,
        help = "Gas price, in gwei"
    )]
    pub gas_price: Option<U256>,
    #[arg(
        long = "dry-run",
        action = ArgAction::SetTrue,
        help = "Sign and print the raw transaction without broadcasting it"
    )]
    pub dry_run: bool,
    #[clap(flatten)]
    pub key: KeyOptions,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    #[clap(
        name = "contracts",
        about = "Print the state of the SWISC crowd-sale and token contracts"
    )]
    Contracts,
    #[clap(name = "transfer", about = "Sign and broadcast a legacy value transfer")]
    Transfer(TransferOptions),
    #[clap(name = "balance", about = "Print the ether balance of an account")]
    Balance {
        #[clap(required = true, value_name = "ADDRESS", value_parser = parse_address)]
        address: Address,
    },
    #[clap(name = "address", about = "Print the address controlled by a private key")]
    Address {
        #[clap(flatten)]
        key: KeyOptions,
    },
    #[clap(
        name = "decode",
        about = "Decode a signed raw transaction and recover its sender"
    )]
    Decode {
        #[clap(required = true, value_name = "RAW_TX", help = "Hex encoded signed transaction")]
        raw: String,
    },
}

impl Subcommand {
    pub async fn run(self, config: &SwiscConfig) -> eyre::Result<()> {
        match self {
            Subcommand::Contracts => subcommands::contracts::print_contracts(config).await,
            Subcommand::Transfer(opts) => subcommands::transfer::transfer(opts, config).await,
            Subcommand::Balance { address } => {
                subcommands::balance::print_balance(address, config).await
            }
            Subcommand::Address { key } => {
                let signer = key.signer()?;
                println!("{}", to_checksum_address(&signer.address));
                Ok(())
            }
            Subcommand::Decode { raw } => subcommands::decode::decode(&raw),
        }
    }
}
