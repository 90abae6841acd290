use std::time::Duration;

use swisc_common::errors::{EncodingError, SigningError};
use swisc_rpc::clients::eth::errors::EthClientError;

use crate::calldata::{CalldataDecodeError, CalldataEncodeError};

/// Failure talking to the node, other than an expired timeout or a rejected transaction.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error(transparent)]
    Client(EthClientError),
    #[error("Malformed return data from {method}: {source}")]
    MalformedReturnData {
        method: String,
        source: CalldataDecodeError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),
    #[error("Failed to encode calldata: {0}")]
    Calldata(#[from] CalldataEncodeError),
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Transaction rejected by node: {message} (code: {code})")]
    BroadcastRejected { code: i32, message: String },
    #[error("{method} timed out after {timeout:?}")]
    Timeout { method: String, timeout: Duration },
}

impl From<EthClientError> for SdkError {
    fn from(error: EthClientError) -> Self {
        match error {
            EthClientError::Timeout { method, timeout } => SdkError::Timeout { method, timeout },
            EthClientError::TransactionRejected { code, message } => {
                SdkError::BroadcastRejected { code, message }
            }
            other => SdkError::Network(NetworkError::Client(other)),
        }
    }
}
