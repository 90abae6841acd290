use eyre::eyre;
use swisc_common::{units::format_ether, utils::to_checksum_address};
use swisc_sdk::{TransferRequest, fetch_nonce, get_balance, prepare_transfer, send_transfer};
use tracing::info;

use crate::{cli::TransferOptions, config::SwiscConfig};

/// Merges the command line flags over the configured transfer defaults.
pub fn transfer_request(
    opts: &TransferOptions,
    config: &SwiscConfig,
) -> eyre::Result<TransferRequest> {
    let defaults = &config.transfer;
    let to = opts
        .to
        .or(defaults.to)
        .ok_or_else(|| eyre!("No recipient given. Use --to or set transfer.to"))?;

    Ok(TransferRequest {
        from: opts.from.or(defaults.from),
        to,
        value: opts.value.unwrap_or(defaults.value),
        gas_limit: opts.gas_limit.unwrap_or(defaults.gas_limit),
        gas_price: opts.gas_price.unwrap_or(defaults.gas_price),
        chain_id: config.chain_id,
    })
}

pub async fn transfer(opts: TransferOptions, config: &SwiscConfig) -> eyre::Result<()> {
    let request = transfer_request(&opts, config)?;
    let signer = opts.key.signer()?;
    if let Some(from) = request.from {
        signer.ensure_controls(from)?;
    }
    let client = config.client()?;

    if opts.dry_run {
        let nonce = fetch_nonce(&client, signer.address).await?;
        let signed = prepare_transfer(nonce, &request, &signer)?;
        info!(nonce, "Dry run, not broadcasting");
        println!("nonce: {nonce}");
        println!("raw: 0x{}", hex::encode(signed.serialize()));
        println!("txHash: {:#x}", signed.hash());
        return Ok(());
    }

    let receipt = send_transfer(&client, &request, &signer).await?;
    println!("txHash: {:#x}", receipt.tx_hash);

    for (label, account) in [("Account 1", signer.address), ("Account 2", request.to)] {
        let balance = get_balance(&client, account).await?;
        println!(
            "{label} ({}): {}",
            to_checksum_address(&account),
            format_ether(balance)
        );
    }

    Ok(())
}
