pub mod calldata;
pub mod contracts;
pub mod errors;
pub mod transfer;

pub use errors::{NetworkError, SdkError};
pub use transfer::{
    TransferReceipt, TransferRequest, broadcast, fetch_nonce, get_balance, prepare_transfer,
    send_transfer,
};
