use swisc_common::{Address, U256};
use swisc_rpc::EthClient;

use super::{call_bool, call_uint};
use crate::{calldata::Value, errors::SdkError};

/// The SWISC crowd-sale contract.
#[derive(Debug, Clone, Copy)]
pub struct CrowdSaleContract<'a> {
    client: &'a EthClient,
    pub address: Address,
}

impl<'a> CrowdSaleContract<'a> {
    pub fn new(client: &'a EthClient, address: Address) -> Self {
        Self { client, address }
    }

    async fn uint(&self, signature: &str) -> Result<U256, SdkError> {
        call_uint(self.client, self.address, signature, &[]).await
    }

    async fn flag(&self, signature: &str) -> Result<bool, SdkError> {
        call_bool(self.client, self.address, signature).await
    }

    pub async fn chf_token_rate(&self) -> Result<U256, SdkError> {
        self.uint("chfTokenRate()").await
    }

    pub async fn has_closed(&self) -> Result<bool, SdkError> {
        self.flag("hasClosed()").await
    }

    pub async fn is_finalized(&self) -> Result<bool, SdkError> {
        self.flag("isFinalized()").await
    }

    pub async fn current_price_index(&self) -> Result<U256, SdkError> {
        self.uint("currentPriceIndex()").await
    }

    /// SWISC per ether at the given price tier.
    pub async fn token_price_index(&self, index: U256) -> Result<U256, SdkError> {
        call_uint(
            self.client,
            self.address,
            "tokenPriceIndex(uint256)",
            &[Value::Uint(index)],
        )
        .await
    }

    pub async fn cap(&self) -> Result<U256, SdkError> {
        self.uint("cap()").await
    }

    pub async fn wei_raised(&self) -> Result<U256, SdkError> {
        self.uint("weiRaised()").await
    }

    /// Unix timestamp in seconds.
    pub async fn opening_time(&self) -> Result<U256, SdkError> {
        self.uint("openingTime()").await
    }

    /// Unix timestamp in seconds.
    pub async fn closing_time(&self) -> Result<U256, SdkError> {
        self.uint("closingTime()").await
    }

    pub async fn min_contribution_chf(&self) -> Result<U256, SdkError> {
        self.uint("min_contribution_chf()").await
    }

    pub async fn tokens_minted(&self) -> Result<U256, SdkError> {
        self.uint("tokensMinted()").await
    }

    pub async fn cap_reached(&self) -> Result<bool, SdkError> {
        self.flag("capReached()").await
    }
}
