use chrono::DateTime;
use swisc_common::{U256, units::format_ether, utils::to_checksum_address};
use swisc_sdk::{
    contracts::{CrowdSaleContract, TokenContract},
    get_balance,
};
use tracing::info;

use crate::config::SwiscConfig;

/// Prints the crowd-sale and token state, one call at a time.
pub async fn print_contracts(config: &SwiscConfig) -> eyre::Result<()> {
    let addresses = config.addresses()?;
    let client = config.client()?;
    info!(endpoint = %client.url, "Reading SWISC contracts");

    let crowd_sale = CrowdSaleContract::new(&client, addresses.crowd_sale);
    println!("\nSWISC Crowd Sale Contract");
    println!("=========================");
    println!("- chfTokenRate: {}", crowd_sale.chf_token_rate().await?);
    println!("- hasClosed: {}", crowd_sale.has_closed().await?);
    println!("- isFinalized: {}", crowd_sale.is_finalized().await?);
    let price_index = crowd_sale.current_price_index().await?;
    println!(
        "- SwiscPerEtherRate: {}",
        crowd_sale.token_price_index(price_index).await?
    );
    println!("- cap: {}", crowd_sale.cap().await?);
    println!("- weiRaised: {}", crowd_sale.wei_raised().await?);
    println!(
        "- openingTime: {}",
        format_timestamp(crowd_sale.opening_time().await?)
    );
    println!(
        "- closingTime: {}",
        format_timestamp(crowd_sale.closing_time().await?)
    );
    println!(
        "- min_contribution_chf: {}",
        crowd_sale.min_contribution_chf().await?
    );
    println!("- tokensMinted: {}", crowd_sale.tokens_minted().await?);
    println!("- capReached: {}", crowd_sale.cap_reached().await?);
    let broker_balance = get_balance(&client, addresses.crypto_broker_wallet).await?;
    println!(
        "- Contract wallet (future crypto broker) balance in ETH: {}",
        format_ether(broker_balance)
    );

    let token = TokenContract::new(&client, addresses.token);
    println!("\nSWISC Token Contract");
    println!("====================");
    println!("- Name: {}", token.name().await?);
    println!("- Symbol: {}", token.symbol().await?);
    println!("- Total supply: {}", token.total_supply().await?);
    println!("- Minting finished: {}", token.minting_finished().await?);
    for (label, account) in [
        ("Bitbox", addresses.bitbox),
        ("Metamask", addresses.metamask),
        ("TREZOR", addresses.trezor),
    ] {
        let balance = token.balance_of(account).await?;
        println!(
            "- {label} account balance in SWISC ({}): {}",
            to_checksum_address(&account),
            format_ether(balance)
        );
    }

    Ok(())
}

/// Unix seconds as a UTC date, or the raw number when out of range.
pub fn format_timestamp(seconds: U256) -> String {
    if seconds > U256::from(i64::MAX as u64) {
        return seconds.to_string();
    }
    DateTime::from_timestamp(seconds.as_u64() as i64, 0)
        .map(|date| date.format("%a %b %d %Y %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| seconds.to_string())
}
