use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::{
    rpc_types::{RpcErrorResponse, RpcRequest, RpcRequestId, RpcSuccessResponse},
    types::block_identifier::BlockIdentifier,
    utils::{parse_json_hex, parse_json_hex_u256},
};
use bytes::Bytes;
use errors::{EthClientError, RpcRequestError};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{Value, json};
use swisc_common::{Address, H256, U256, utils::decode_hex};
use tracing::{debug, trace};

pub mod errors;

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Time allowed for a single request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RpcResponse {
    Success(RpcSuccessResponse),
    Error(RpcErrorResponse),
}

/// Client bound to a single node endpoint.
///
/// Requests are never retried. A request that does not complete within
/// `timeout` fails with [`EthClientError::Timeout`].
#[derive(Debug, Clone)]
pub struct EthClient {
    client: Client,
    pub url: Url,
    pub timeout: Duration,
}

fn next_request_id() -> RpcRequestId {
    RpcRequestId::Number(REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
}

fn rpc_error(method: &str, response: RpcErrorResponse) -> EthClientError {
    RpcRequestError::RPCError {
        method: method.to_owned(),
        code: response.error.code,
        message: response.error.message,
    }
    .into()
}

fn parse_error(method: &str, message: String) -> EthClientError {
    RpcRequestError::ParseError {
        method: method.to_owned(),
        message,
    }
    .into()
}

impl EthClient {
    pub fn new(url: &str) -> Result<EthClient, EthClientError> {
        Self::new_with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn new_with_timeout(url: &str, timeout: Duration) -> Result<EthClient, EthClientError> {
        let url = Url::parse(url)
            .map_err(|err| EthClientError::ParseUrlError(format!("{url}: {err}")))?;
        Ok(Self {
            client: Client::new(),
            url,
            timeout,
        })
    }

    /// Send a request to the node, giving up after `self.timeout`.
    pub async fn send_request(&self, request: RpcRequest) -> Result<RpcResponse, EthClientError> {
        let response = tokio::time::timeout(self.timeout, self.send_request_to_url(&request))
            .await
            .map_err(|_| EthClientError::Timeout {
                method: request.method.clone(),
                timeout: self.timeout,
            })??;

        match &response {
            RpcResponse::Success(_) => {
                debug!(endpoint = %self.url, method = %request.method, "RPC request successful")
            }
            RpcResponse::Error(err) => {
                debug!(endpoint = %self.url, method = %request.method, error = ?err.error, "RPC server returned an error")
            }
        }
        Ok(response)
    }

    async fn send_request_to_url(&self, request: &RpcRequest) -> Result<RpcResponse, EthClientError> {
        let id = &request.id;
        trace!(endpoint = %self.url, ?request, ?id, "Sending RPC request");

        self.client
            .post(self.url.as_str())
            .header("content-type", "application/json")
            .body(serde_json::ser::to_string(&request).map_err(|error| {
                EthClientError::FailedToSerializeRequestBody(format!("{error}: {request:?}"))
            })?)
            .send()
            .await
            .inspect(|_| trace!(endpoint = %self.url, ?id, "Request finished successfully"))?
            .json::<RpcResponse>()
            .await
            .inspect(|body| trace!(endpoint = %self.url, ?id, ?body, "Response deserialized successfully"))
            .inspect_err(|err| trace!(endpoint = %self.url, ?id, %err, "Failed to deserialize response"))
            .map_err(EthClientError::from)
    }

    /// Submits a signed, RLP-encoded transaction and returns the hash reported by the node.
    ///
    /// A JSON-RPC error here means the node refused the transaction and is
    /// reported as [`EthClientError::TransactionRejected`].
    pub async fn send_raw_transaction(&self, data: &[u8]) -> Result<H256, EthClientError> {
        const METHOD: &str = "eth_sendRawTransaction";
        let params = Some(vec![json!("0x".to_string() + &hex::encode(data))]);
        let request = RpcRequest::new(next_request_id(), METHOD, params);

        match self.send_request(request).await? {
            RpcResponse::Success(result) => serde_json::from_value(result.result)
                .map_err(|source| RpcRequestError::SerdeJSONError {
                    method: METHOD.to_owned(),
                    source,
                })
                .map_err(EthClientError::from),
            RpcResponse::Error(error_response) => Err(EthClientError::TransactionRejected {
                code: error_response.error.code,
                message: error_response.error.message,
            }),
        }
    }

    pub async fn get_nonce(
        &self,
        address: Address,
        block: BlockIdentifier,
    ) -> Result<u64, EthClientError> {
        const METHOD: &str = "eth_getTransactionCount";
        let params = Some(vec![json!(format!("{address:#x}")), block.into()]);
        let request = RpcRequest::new(next_request_id(), METHOD, params);

        match self.send_request(request).await? {
            RpcResponse::Success(result) => {
                parse_json_hex(&result.result).map_err(|message| parse_error(METHOD, message))
            }
            RpcResponse::Error(error_response) => Err(rpc_error(METHOD, error_response)),
        }
    }

    pub async fn get_balance(
        &self,
        address: Address,
        block: BlockIdentifier,
    ) -> Result<U256, EthClientError> {
        const METHOD: &str = "eth_getBalance";
        let params = Some(vec![json!(format!("{address:#x}")), block.into()]);
        let request = RpcRequest::new(next_request_id(), METHOD, params);

        match self.send_request(request).await? {
            RpcResponse::Success(result) => {
                parse_json_hex_u256(&result.result).map_err(|message| parse_error(METHOD, message))
            }
            RpcResponse::Error(error_response) => Err(rpc_error(METHOD, error_response)),
        }
    }

    /// Executes a read-only message call and returns the raw return data.
    pub async fn call(
        &self,
        to: Address,
        calldata: Bytes,
        block: BlockIdentifier,
    ) -> Result<Bytes, EthClientError> {
        const METHOD: &str = "eth_call";
        let params = Some(vec![
            json!({
                "to": format!("{to:#x}"),
                "data": format!("0x{}", hex::encode(&calldata)),
            }),
            Value::from(block),
        ]);
        let request = RpcRequest::new(next_request_id(), METHOD, params);

        match self.send_request(request).await? {
            RpcResponse::Success(result) => {
                let hex = serde_json::from_value::<String>(result.result).map_err(|source| {
                    RpcRequestError::SerdeJSONError {
                        method: METHOD.to_owned(),
                        source,
                    }
                })?;
                decode_hex(&hex)
                    .map(Bytes::from)
                    .map_err(|source| {
                        RpcRequestError::HexError {
                            method: METHOD.to_owned(),
                            source,
                        }
                        .into()
                    })
            }
            RpcResponse::Error(error_response) => Err(rpc_error(METHOD, error_response)),
        }
    }
}
