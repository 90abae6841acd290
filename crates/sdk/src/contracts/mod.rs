//! Read-only wrappers over the deployed SWISC contracts.

mod crowd_sale;
mod token;

pub use crowd_sale::CrowdSaleContract;
pub use token::TokenContract;

use bytes::Bytes;
use swisc_common::{Address, U256};
use swisc_rpc::{EthClient, types::block_identifier::BlockIdentifier};
use tracing::debug;

use crate::{
    calldata::{CalldataDecodeError, Value, decode_bool, decode_string, decode_uint, encode_calldata},
    errors::{NetworkError, SdkError},
};

async fn call(
    client: &EthClient,
    to: Address,
    signature: &str,
    args: &[Value],
) -> Result<Bytes, SdkError> {
    let calldata = encode_calldata(signature, args)?;
    debug!(contract = ?to, %signature, "Calling contract");
    let output = client
        .call(to, calldata, BlockIdentifier::default())
        .await?;
    Ok(output)
}

fn malformed(signature: &str) -> impl FnOnce(CalldataDecodeError) -> SdkError {
    let method = signature.to_owned();
    move |source| NetworkError::MalformedReturnData { method, source }.into()
}

async fn call_uint(
    client: &EthClient,
    to: Address,
    signature: &str,
    args: &[Value],
) -> Result<U256, SdkError> {
    let output = call(client, to, signature, args).await?;
    decode_uint(&output).map_err(malformed(signature))
}

async fn call_bool(client: &EthClient, to: Address, signature: &str) -> Result<bool, SdkError> {
    let output = call(client, to, signature, &[]).await?;
    decode_bool(&output).map_err(malformed(signature))
}

async fn call_string(client: &EthClient, to: Address, signature: &str) -> Result<String, SdkError> {
    let output = call(client, to, signature, &[]).await?;
    decode_string(&output).map_err(malformed(signature))
}
