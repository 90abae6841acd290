use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use swisc_common::{
    Address, U256,
    constants::{MAX_CHAIN_ID, TX_GAS_COST},
    errors::EncodingError,
    units::{parse_ether, parse_gwei},
    utils::parse_address,
};
use swisc_rpc::{EthClient, clients::eth::DEFAULT_TIMEOUT, eth_errors::EthClientError};
use tracing::debug;
use url::Url;

use crate::cli::Options;

pub const DEFAULT_CONFIG_FILE: &str = "swisc.toml";
/// 0.01 ether.
pub const DEFAULT_TRANSFER_VALUE: u64 = 10_000_000_000_000_000;
/// 10 gwei.
pub const DEFAULT_GAS_PRICE: u64 = 10_000_000_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to parse address book {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid address for {key}: {source}")]
    InvalidAddress {
        key: &'static str,
        source: EncodingError,
    },
    #[error("Invalid amount for {key}: {source}")]
    InvalidAmount {
        key: &'static str,
        source: EncodingError,
    },
    #[error("Invalid RPC url {url}: {source}")]
    InvalidRpcUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Chain id {0} is too large")]
    ChainIdTooLarge(u64),
    #[error("Timeout must be at least one second")]
    ZeroTimeout,
    #[error("No RPC url configured. Set network.rpc_url, --rpc-url or SWISC_RPC_URL")]
    MissingRpcUrl,
    #[error("No contract addresses configured. Add an [addresses] table or pass --addresses")]
    MissingAddresses,
    #[error("Failed to create RPC client: {0}")]
    Client(#[from] EthClientError),
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub network: NetworkSection,
    pub addresses: Option<AddressBook>,
    #[serde(default)]
    pub transfer: TransferSection,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct NetworkSection {
    pub rpc_url: Option<String>,
    pub chain_id: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// Contract and account addresses, keyed like the deployment's `rinkeby.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct AddressBook {
    #[serde(rename = "SWISCTokenContractAddress")]
    pub token: String,
    #[serde(rename = "SWISCCrowdSaleContractAddress")]
    pub crowd_sale: String,
    #[serde(rename = "CryptoBrokerWalletAddress")]
    pub crypto_broker_wallet: String,
    #[serde(rename = "bitboxAddress")]
    pub bitbox: String,
    #[serde(rename = "metamaskAddress")]
    pub metamask: String,
    #[serde(rename = "trezorAddress")]
    pub trezor: String,
}

/// Defaults for the `transfer` command. Key material only comes from `KeyOptions`.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct TransferSection {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Ether.
    pub value: Option<String>,
    pub gas_limit: Option<u64>,
    /// Gwei.
    pub gas_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addresses {
    pub token: Address,
    pub crowd_sale: Address,
    pub crypto_broker_wallet: Address,
    pub bitbox: Address,
    pub metamask: Address,
    pub trezor: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDefaults {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: U256,
}

impl Default for TransferDefaults {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            value: U256::from(DEFAULT_TRANSFER_VALUE),
            gas_limit: TX_GAS_COST,
            gas_price: U256::from(DEFAULT_GAS_PRICE),
        }
    }
}

/// Validated settings after layering file, address book and flags.
#[derive(Debug, Clone)]
pub struct SwiscConfig {
    pub rpc_url: Option<Url>,
    pub chain_id: Option<u64>,
    pub timeout: Duration,
    pub addresses: Option<Addresses>,
    pub transfer: TransferDefaults,
}

impl SwiscConfig {
    /// Reads the configuration named by `opts` and applies its overrides.
    ///
    /// A missing `swisc.toml` is only tolerated when no path was given.
    pub fn load(opts: &Options) -> Result<Self, ConfigError> {
        let file = match &opts.config {
            Some(path) => read_config_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                read_config_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                debug!("No {DEFAULT_CONFIG_FILE} found, using flags and environment only");
                ConfigFile::default()
            }
        };
        let address_book = opts
            .addresses
            .as_deref()
            .map(read_address_book)
            .transpose()?;

        Self::resolve(file, address_book, opts)
    }

    pub fn resolve(
        file: ConfigFile,
        address_book: Option<AddressBook>,
        opts: &Options,
    ) -> Result<Self, ConfigError> {
        let rpc_url = opts
            .rpc_url
            .clone()
            .or(file.network.rpc_url)
            .map(|url| {
                Url::parse(&url).map_err(|source| ConfigError::InvalidRpcUrl { url, source })
            })
            .transpose()?;

        let chain_id = opts.chain_id.or(file.network.chain_id);
        if let Some(chain_id) = chain_id {
            if chain_id > MAX_CHAIN_ID {
                return Err(ConfigError::ChainIdTooLarge(chain_id));
            }
        }

        let timeout = match opts.timeout.or(file.network.timeout_secs) {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let addresses = address_book
            .or(file.addresses)
            .map(|book| book.validate())
            .transpose()?;

        Ok(Self {
            rpc_url,
            chain_id,
            timeout,
            addresses,
            transfer: file.transfer.validate()?,
        })
    }

    pub fn client(&self) -> Result<EthClient, ConfigError> {
        let url = self.rpc_url.as_ref().ok_or(ConfigError::MissingRpcUrl)?;
        Ok(EthClient::new_with_timeout(url.as_str(), self.timeout)?)
    }

    pub fn addresses(&self) -> Result<&Addresses, ConfigError> {
        self.addresses.as_ref().ok_or(ConfigError::MissingAddresses)
    }
}

impl AddressBook {
    fn validate(self) -> Result<Addresses, ConfigError> {
        Ok(Addresses {
            token: address("SWISCTokenContractAddress", &self.token)?,
            crowd_sale: address("SWISCCrowdSaleContractAddress", &self.crowd_sale)?,
            crypto_broker_wallet: address(
                "CryptoBrokerWalletAddress",
                &self.crypto_broker_wallet,
            )?,
            bitbox: address("bitboxAddress", &self.bitbox)?,
            metamask: address("metamaskAddress", &self.metamask)?,
            trezor: address("trezorAddress", &self.trezor)?,
        })
    }
}

impl TransferSection {
    fn validate(self) -> Result<TransferDefaults, ConfigError> {
        Ok(TransferDefaults {
            from: self
                .from
                .map(|from| address("transfer.from", &from))
                .transpose()?,
            to: self.to.map(|to| address("transfer.to", &to)).transpose()?,
            value: self
                .value
                .map(|value| {
                    parse_ether(&value).map_err(|source| ConfigError::InvalidAmount {
                        key: "transfer.value",
                        source,
                    })
                })
                .transpose()?
                .unwrap_or(U256::from(DEFAULT_TRANSFER_VALUE)),
            gas_limit: self.gas_limit.unwrap_or(TX_GAS_COST),
            gas_price: self
                .gas_price
                .map(|price| {
                    parse_gwei(&price).map_err(|source| ConfigError::InvalidAmount {
                        key: "transfer.gas_price",
                        source,
                    })
                })
                .transpose()?
                .unwrap_or(U256::from(DEFAULT_GAS_PRICE)),
        })
    }
}

fn address(key: &'static str, value: &str) -> Result<Address, ConfigError> {
    parse_address(value).map_err(|source| ConfigError::InvalidAddress { key, source })
}

pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "Loaded configuration file");
    toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.to_owned(),
        source,
    })
}

pub fn read_address_book(path: &Path) -> Result<AddressBook, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.to_owned(),
        source,
    })
}
