//! JSON-RPC client for the subset of the Ethereum API used to read contract
//! state and submit signed legacy transactions.

pub mod clients;
pub mod rpc_types;
pub mod types;
pub mod utils;

pub use clients::{EthClient, eth_errors};
