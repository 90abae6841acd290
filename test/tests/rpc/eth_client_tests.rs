use std::time::Duration;

use bytes::Bytes;
use serde_json::json;
use swisc_common::{H256, U256};
use swisc_rpc::{
    eth_errors::{EthClientError, RpcRequestError},
    types::block_identifier::{BlockIdentifier, BlockTag},
};
use swisc_test::{
    TEST_ADDRESS, client_for, mock_rpc, received_calls, rpc_error, rpc_result,
};
use wiremock::{MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn get_nonce_queries_the_requested_block() {
    let server = MockServer::start().await;
    mock_rpc(&server, "eth_getTransactionCount", rpc_result(json!("0x1a"))).await;
    let client = client_for(&server, TIMEOUT).unwrap();

    let nonce = client
        .get_nonce(TEST_ADDRESS, BlockTag::Pending.into())
        .await
        .unwrap();
    assert_eq!(nonce, 26);

    let calls = received_calls(&server, "eth_getTransactionCount").await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["jsonrpc"], "2.0");
    assert_eq!(
        calls[0]["params"],
        json!(["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266", "pending"])
    );
}

#[tokio::test]
async fn get_balance_parses_quantities() {
    let server = MockServer::start().await;
    mock_rpc(&server, "eth_getBalance", rpc_result(json!("0xde0b6b3a7640000"))).await;
    let client = client_for(&server, TIMEOUT).unwrap();

    let balance = client
        .get_balance(TEST_ADDRESS, BlockIdentifier::Number(10))
        .await
        .unwrap();
    assert_eq!(balance, U256::from(1_000_000_000_000_000_000u64));

    let calls = received_calls(&server, "eth_getBalance").await;
    assert_eq!(calls[0]["params"][1], "0xa");
}

#[tokio::test]
async fn call_sends_data_and_returns_bytes() {
    let server = MockServer::start().await;
    mock_rpc(&server, "eth_call", rpc_result(json!("0x0102"))).await;
    let client = client_for(&server, TIMEOUT).unwrap();

    let output = client
        .call(
            TEST_ADDRESS,
            Bytes::from_static(&[0x06, 0xfd, 0xde, 0x03]),
            BlockIdentifier::default(),
        )
        .await
        .unwrap();
    assert_eq!(output, Bytes::from_static(&[0x01, 0x02]));

    let calls = received_calls(&server, "eth_call").await;
    assert_eq!(
        calls[0]["params"],
        json!([
            {
                "to": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
                "data": "0x06fdde03"
            },
            "latest"
        ])
    );
}

#[tokio::test]
async fn send_raw_transaction_returns_the_node_hash() {
    let server = MockServer::start().await;
    let hash = H256::repeat_byte(0xab);
    mock_rpc(
        &server,
        "eth_sendRawTransaction",
        rpc_result(json!(format!("{hash:#x}"))),
    )
    .await;
    let client = client_for(&server, TIMEOUT).unwrap();

    assert_eq!(client.send_raw_transaction(&[0xf8, 0x01]).await.unwrap(), hash);
    let calls = received_calls(&server, "eth_sendRawTransaction").await;
    assert_eq!(calls[0]["params"], json!(["0xf801"]));
}

#[tokio::test]
async fn rejected_transaction_keeps_the_node_message() {
    let server = MockServer::start().await;
    mock_rpc(&server, "eth_sendRawTransaction", rpc_error(-32000, "nonce too low")).await;
    let client = client_for(&server, TIMEOUT).unwrap();

    match client.send_raw_transaction(&[0xf8, 0x01]).await {
        Err(EthClientError::TransactionRejected { code, message }) => {
            assert_eq!(code, -32000);
            assert_eq!(message, "nonce too low");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn rpc_errors_on_queries_are_request_errors() {
    let server = MockServer::start().await;
    mock_rpc(&server, "eth_getBalance", rpc_error(-32602, "invalid argument")).await;
    let client = client_for(&server, TIMEOUT).unwrap();

    let result = client
        .get_balance(TEST_ADDRESS, BlockIdentifier::default())
        .await;
    assert!(matches!(
        result,
        Err(EthClientError::RpcRequestError(RpcRequestError::RPCError { code: -32602, .. }))
    ));
}

#[tokio::test]
async fn malformed_quantities_are_parse_errors() {
    let server = MockServer::start().await;
    mock_rpc(&server, "eth_getTransactionCount", rpc_result(json!("26"))).await;
    let client = client_for(&server, TIMEOUT).unwrap();

    let result = client
        .get_nonce(TEST_ADDRESS, BlockIdentifier::default())
        .await;
    assert!(matches!(
        result,
        Err(EthClientError::RpcRequestError(RpcRequestError::ParseError { .. }))
    ));
}

#[tokio::test]
async fn slow_node_times_out() {
    let server = MockServer::start().await;
    mock_rpc(
        &server,
        "eth_getTransactionCount",
        rpc_result(json!("0x1")).set_delay(Duration::from_secs(5)),
    )
    .await;
    let client = client_for(&server, Duration::from_millis(100)).unwrap();

    match client.get_nonce(TEST_ADDRESS, BlockIdentifier::default()).await {
        Err(EthClientError::Timeout { method, timeout }) => {
            assert_eq!(method, "eth_getTransactionCount");
            assert_eq!(timeout, Duration::from_millis(100));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn non_json_responses_are_transport_errors() {
    let server = MockServer::start().await;
    mock_rpc(
        &server,
        "eth_getTransactionCount",
        ResponseTemplate::new(502).set_body_string("bad gateway"),
    )
    .await;
    let client = client_for(&server, TIMEOUT).unwrap();

    assert!(matches!(
        client.get_nonce(TEST_ADDRESS, BlockIdentifier::default()).await,
        Err(EthClientError::ReqwestError(_))
    ));
}
