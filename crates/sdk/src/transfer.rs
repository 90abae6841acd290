use bytes::Bytes;
use swisc_common::{
    Address, H256, U256,
    constants::TX_GAS_COST,
    types::{LocalSigner, SignedTransaction, build_transaction},
};
use swisc_rpc::{
    EthClient,
    eth_errors::EthClientError,
    types::block_identifier::{BlockIdentifier, BlockTag},
};
use tracing::{info, warn};

use crate::errors::SdkError;

/// Everything needed to build a plain value transfer except the nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Expected sender. When set, the signing key must control it.
    pub from: Option<Address>,
    pub to: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_price: U256,
    pub chain_id: Option<u64>,
}

impl TransferRequest {
    /// A 21000 gas transfer with no chain id.
    pub fn new(to: Address, value: U256, gas_price: U256) -> Self {
        Self {
            from: None,
            to,
            value,
            gas_limit: TX_GAS_COST,
            gas_price,
            chain_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub nonce: u64,
    /// Hash returned by the node.
    pub tx_hash: H256,
    /// Hash of the bytes that were sent, computed locally.
    pub local_hash: H256,
    pub raw: Bytes,
}

/// Next nonce for `address`, counting transactions still in the node's pool.
pub async fn fetch_nonce(client: &EthClient, address: Address) -> Result<u64, SdkError> {
    let nonce = client
        .get_nonce(address, BlockTag::Pending.into())
        .await?;
    Ok(nonce)
}

/// Submits a serialized signed transaction and returns the hash reported by the node.
pub async fn broadcast(client: &EthClient, raw: &[u8]) -> Result<H256, SdkError> {
    client
        .send_raw_transaction(raw)
        .await
        .inspect_err(|err| {
            if let EthClientError::TransactionRejected { message, .. } = err {
                warn!(%message, "Node rejected transaction");
            }
        })
        .map_err(SdkError::from)
}

pub async fn get_balance(client: &EthClient, address: Address) -> Result<U256, SdkError> {
    let balance = client
        .get_balance(address, BlockIdentifier::default())
        .await?;
    Ok(balance)
}

/// Builds and signs the transfer for a given nonce without touching the network.
pub fn prepare_transfer(
    nonce: u64,
    request: &TransferRequest,
    signer: &LocalSigner,
) -> Result<SignedTransaction, SdkError> {
    if let Some(from) = request.from {
        signer.ensure_controls(from)?;
    }

    let mut tx = build_transaction(
        nonce,
        request.to.as_bytes(),
        request.value,
        request.gas_limit,
        request.gas_price,
    )?;
    if let Some(chain_id) = request.chain_id {
        tx = tx.with_chain_id(chain_id)?;
    }

    Ok(signer.sign_transaction(tx))
}

/// Fetches the nonce, builds, signs and broadcasts a single transfer.
pub async fn send_transfer(
    client: &EthClient,
    request: &TransferRequest,
    signer: &LocalSigner,
) -> Result<TransferReceipt, SdkError> {
    if let Some(from) = request.from {
        signer.ensure_controls(from)?;
    }

    let nonce = fetch_nonce(client, signer.address).await?;
    info!(sender = ?signer.address, nonce, "Fetched nonce");

    let signed = prepare_transfer(nonce, request, signer)?;
    let raw = signed.serialize();
    let local_hash = signed.hash();
    info!(
        recipient = ?request.to,
        value = %request.value,
        ?local_hash,
        "Broadcasting transfer"
    );

    let tx_hash = broadcast(client, &raw).await?;
    if tx_hash != local_hash {
        warn!(?tx_hash, ?local_hash, "Node reported a different transaction hash");
    }
    info!(?tx_hash, nonce, "Transfer accepted by node");

    Ok(TransferReceipt {
        nonce,
        tx_hash,
        local_hash,
        raw,
    })
}
