use std::time::Duration;

/// A single error type for all RPC request failures.
#[derive(Debug, thiserror::Error)]
pub enum RpcRequestError {
    #[error("{method}: {source}")]
    SerdeJSONError {
        method: String,
        source: serde_json::Error,
    },
    #[error("{method}: {message} (code: {code})")]
    RPCError {
        method: String,
        code: i32,
        message: String,
    },
    #[error("{method}: {message}")]
    ParseError { method: String, message: String },
    #[error("{method}: {source}")]
    HexError {
        method: String,
        source: hex::FromHexError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum EthClientError {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("{method} did not complete within {timeout:?}")]
    Timeout { method: String, timeout: Duration },
    #[error("RPC request error: {0}")]
    RpcRequestError(#[from] RpcRequestError),
    #[error("Failed to serialize request body: {0}")]
    FailedToSerializeRequestBody(String),
    #[error("Parse Url Error. {0}")]
    ParseUrlError(String),
    #[error("Transaction rejected by node: {message} (code: {code})")]
    TransactionRejected { code: i32, message: String },
}
