pub use ethereum_types::*;
pub mod constants;
pub mod errors;
pub mod types;
pub mod units;
pub mod utils;
pub use bytes::Bytes;
