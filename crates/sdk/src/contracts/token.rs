use swisc_common::{Address, U256};
use swisc_rpc::EthClient;

use super::{call_bool, call_string, call_uint};
use crate::{calldata::Value, errors::SdkError};

/// The SWISC ERC-20 token.
#[derive(Debug, Clone, Copy)]
pub struct TokenContract<'a> {
    client: &'a EthClient,
    pub address: Address,
}

impl<'a> TokenContract<'a> {
    pub fn new(client: &'a EthClient, address: Address) -> Self {
        Self { client, address }
    }

    pub async fn name(&self) -> Result<String, SdkError> {
        call_string(self.client, self.address, "name()").await
    }

    pub async fn symbol(&self) -> Result<String, SdkError> {
        call_string(self.client, self.address, "symbol()").await
    }

    pub async fn total_supply(&self) -> Result<U256, SdkError> {
        call_uint(self.client, self.address, "totalSupply()", &[]).await
    }

    pub async fn minting_finished(&self) -> Result<bool, SdkError> {
        call_bool(self.client, self.address, "mintingFinished()").await
    }

    /// Token balance of `owner`, in the smallest token unit (18 decimals).
    pub async fn balance_of(&self, owner: Address) -> Result<U256, SdkError> {
        call_uint(
            self.client,
            self.address,
            "balanceOf(address)",
            &[Value::Address(owner)],
        )
        .await
    }
}
