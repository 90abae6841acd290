use swisc_common::{Address, units::format_ether, utils::to_checksum_address};
use swisc_sdk::get_balance;

use crate::config::SwiscConfig;

pub async fn print_balance(address: Address, config: &SwiscConfig) -> eyre::Result<()> {
    let client = config.client()?;
    let balance = get_balance(&client, address).await?;
    println!("{}: {} ETH", to_checksum_address(&address), format_ether(balance));
    Ok(())
}
