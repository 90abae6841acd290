//! Fixtures shared by the integration tests: a well known key and a mocked
//! JSON-RPC node built on `wiremock`.

use std::time::Duration;

use hex_literal::hex;
use serde_json::{Value, json};
use swisc_common::{Address, H160};
use swisc_rpc::{EthClient, eth_errors::EthClientError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method},
};

/// First account of the default Hardhat/Anvil mnemonic.
pub const TEST_PRIVATE_KEY: [u8; 32] =
    hex!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");
pub const TEST_ADDRESS: Address = H160(hex!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
pub const RECIPIENT: Address = H160(hex!("3ced54309c06e0830607f8565b56c443708363d8"));

/// Successful JSON-RPC response carrying `result`.
pub fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": result,
    }))
}

/// JSON-RPC error response.
pub fn rpc_error(code: i32, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": code, "message": message },
    }))
}

/// A 32 byte ABI word holding `value`, without prefix.
pub fn abi_word(value: u64) -> String {
    format!("{value:064x}")
}

/// ABI encoding of a single dynamic `string` return value.
pub fn abi_string(value: &str) -> String {
    let mut data = hex::encode(value);
    let padded = data.len().div_ceil(64) * 64;
    data.extend(std::iter::repeat_n('0', padded - data.len()));
    format!("0x{}{}{data}", abi_word(32), abi_word(value.len() as u64))
}

/// Answers every call to `rpc_method` with `response`.
pub async fn mock_rpc(server: &MockServer, rpc_method: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Answers the next `times` calls to `rpc_method` with `response`.
///
/// Mocks mounted earlier win, so chaining these scripts a sequence of answers.
pub async fn mock_rpc_times(
    server: &MockServer,
    rpc_method: &str,
    times: u64,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(response)
        .up_to_n_times(times)
        .mount(server)
        .await;
}

/// Answers `eth_call`s carrying exactly `calldata` with `result`.
pub async fn mock_eth_call(server: &MockServer, calldata: &str, result: &str) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "eth_call",
            "params": [{ "data": calldata }],
        })))
        .respond_with(rpc_result(json!(result)))
        .mount(server)
        .await;
}

/// Bodies of the requests received for `rpc_method`, in arrival order.
pub async fn received_calls(server: &MockServer, rpc_method: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| request.body_json::<Value>().ok())
        .filter(|body| body["method"] == rpc_method)
        .collect()
}

pub fn client_for(server: &MockServer, timeout: Duration) -> Result<EthClient, EthClientError> {
    EthClient::new_with_timeout(&server.uri(), timeout)
}
