use std::time::Duration;

use swisc_common::{Address, U256};
use swisc_sdk::{
    SdkError,
    calldata::CalldataDecodeError,
    contracts::{CrowdSaleContract, TokenContract},
    errors::NetworkError,
};
use swisc_test::{
    RECIPIENT, abi_string, abi_word, client_for, mock_eth_call, received_calls,
};
use wiremock::MockServer;

const TIMEOUT: Duration = Duration::from_secs(5);
const CROWD_SALE: Address = Address::repeat_byte(0x22);
const TOKEN: Address = Address::repeat_byte(0x11);

fn word(value: u64) -> String {
    format!("0x{}", abi_word(value))
}

#[tokio::test]
async fn crowd_sale_getters_decode_words() {
    let server = MockServer::start().await;
    mock_eth_call(&server, "0x04eefecc", &word(100)).await;
    mock_eth_call(&server, "0x1515bc2b", &word(1)).await;
    mock_eth_call(&server, "0x8d4e4083", &word(0)).await;
    mock_eth_call(&server, "0x355274ea", &word(5_000_000)).await;
    mock_eth_call(&server, "0xb7a8807c", &word(1_530_446_400)).await;
    mock_eth_call(&server, "0x4f935945", &word(0)).await;
    let client = client_for(&server, TIMEOUT).unwrap();
    let crowd_sale = CrowdSaleContract::new(&client, CROWD_SALE);

    assert_eq!(crowd_sale.chf_token_rate().await.unwrap(), U256::from(100));
    assert!(crowd_sale.has_closed().await.unwrap());
    assert!(!crowd_sale.is_finalized().await.unwrap());
    assert_eq!(crowd_sale.cap().await.unwrap(), U256::from(5_000_000));
    assert_eq!(
        crowd_sale.opening_time().await.unwrap(),
        U256::from(1_530_446_400u64)
    );
    assert!(!crowd_sale.cap_reached().await.unwrap());

    let calls = received_calls(&server, "eth_call").await;
    assert_eq!(calls.len(), 6);
    assert!(
        calls
            .iter()
            .all(|call| call["params"][0]["to"] == format!("{CROWD_SALE:#x}"))
    );
}

#[tokio::test]
async fn token_price_index_passes_the_current_index() {
    let server = MockServer::start().await;
    mock_eth_call(&server, "0x1d23fce3", &word(2)).await;
    mock_eth_call(
        &server,
        &format!("0x86aaee49{}", abi_word(2)),
        &word(1_500),
    )
    .await;
    let client = client_for(&server, TIMEOUT).unwrap();
    let crowd_sale = CrowdSaleContract::new(&client, CROWD_SALE);

    let index = crowd_sale.current_price_index().await.unwrap();
    assert_eq!(index, U256::from(2));
    assert_eq!(
        crowd_sale.token_price_index(index).await.unwrap(),
        U256::from(1_500)
    );
}

#[tokio::test]
async fn token_getters_decode_strings_and_balances() {
    let server = MockServer::start().await;
    mock_eth_call(&server, "0x06fdde03", &abi_string("SWISC Token")).await;
    mock_eth_call(&server, "0x95d89b41", &abi_string("SWISC")).await;
    mock_eth_call(&server, "0x05d2035b", &word(1)).await;
    mock_eth_call(
        &server,
        &format!("0x70a08231{:0>64}", hex::encode(RECIPIENT)),
        &word(2_000_000_000_000_000_000),
    )
    .await;
    let client = client_for(&server, TIMEOUT).unwrap();
    let token = TokenContract::new(&client, TOKEN);

    assert_eq!(token.name().await.unwrap(), "SWISC Token");
    assert_eq!(token.symbol().await.unwrap(), "SWISC");
    assert!(token.minting_finished().await.unwrap());
    assert_eq!(
        token.balance_of(RECIPIENT).await.unwrap(),
        U256::from(2_000_000_000_000_000_000u64)
    );
}

#[tokio::test]
async fn empty_return_data_is_malformed() {
    let server = MockServer::start().await;
    mock_eth_call(&server, "0x18160ddd", "0x").await;
    let client = client_for(&server, TIMEOUT).unwrap();
    let token = TokenContract::new(&client, TOKEN);

    match token.total_supply().await {
        Err(SdkError::Network(NetworkError::MalformedReturnData { method, source })) => {
            assert_eq!(method, "totalSupply()");
            assert_eq!(source, CalldataDecodeError::Empty);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn non_boolean_word_is_malformed() {
    let server = MockServer::start().await;
    mock_eth_call(&server, "0x05d2035b", &word(2)).await;
    let client = client_for(&server, TIMEOUT).unwrap();
    let token = TokenContract::new(&client, TOKEN);

    assert!(matches!(
        token.minting_finished().await,
        Err(SdkError::Network(NetworkError::MalformedReturnData {
            source: CalldataDecodeError::InvalidBool(_),
            ..
        }))
    ));
}
