pub mod eth;

pub use eth::{EthClient, errors as eth_errors};
