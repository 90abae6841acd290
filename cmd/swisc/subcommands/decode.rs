use swisc_common::{
    constants::GWEI_DECIMALS,
    types::SignedTransaction,
    units::{format_ether, format_units},
    utils::{decode_hex, to_checksum_address},
};

pub fn decode(raw: &str) -> eyre::Result<()> {
    let bytes = decode_hex(raw.trim())?;
    let signed = SignedTransaction::deserialize(&bytes)?;
    for line in describe(&signed)? {
        println!("{line}");
    }
    Ok(())
}

/// Human readable fields of a signed transaction, sender included.
pub fn describe(signed: &SignedTransaction) -> eyre::Result<Vec<String>> {
    let tx = &signed.tx;
    let chain_id = tx
        .chain_id
        .map_or_else(|| "none (pre EIP-155)".to_owned(), |id| id.to_string());

    Ok(vec![
        format!("hash: {:#x}", signed.hash()),
        format!("from: {}", to_checksum_address(&signed.sender()?)),
        format!("to: {}", to_checksum_address(&tx.to)),
        format!("nonce: {}", tx.nonce),
        format!("value: {} ETH", format_ether(tx.value)),
        format!("gasLimit: {}", tx.gas_limit),
        format!("gasPrice: {} gwei", format_units(tx.gas_price, GWEI_DECIMALS)),
        format!("data: 0x{}", hex::encode(&tx.data)),
        format!("chainId: {chain_id}"),
        format!("v: {}", signed.v),
        format!("r: {:#x}", signed.r),
        format!("s: {:#x}", signed.s),
    ])
}
