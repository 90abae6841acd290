use ethereum_types::Address;
use hex::FromHexError;
use keccak_hash::keccak;

use crate::errors::EncodingError;

pub fn decode_hex(hex: &str) -> Result<Vec<u8>, FromHexError> {
    let trimmed = hex.strip_prefix("0x").unwrap_or(hex);
    hex::decode(trimmed)
}

/// Builds an address from raw bytes, which must be exactly 20 bytes long.
pub fn address_from_slice(bytes: &[u8]) -> Result<Address, EncodingError> {
    if bytes.len() != Address::len_bytes() {
        return Err(EncodingError::InvalidAddressLength(bytes.len()));
    }
    Ok(Address::from_slice(bytes))
}

/// Parses a hex address with an optional `0x` prefix.
///
/// All-lowercase and all-uppercase inputs are accepted as-is. Mixed-case
/// inputs are treated as EIP-55 checksummed and must match their checksum.
pub fn parse_address(input: &str) -> Result<Address, EncodingError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let address = address_from_slice(&hex::decode(digits)?)?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum_address(&address)[2..] != *digits {
        return Err(EncodingError::InvalidChecksum(trimmed.to_owned()));
    }
    Ok(address)
}

/// Returns the EIP-55 mixed-case representation of an address, `0x` prefixed.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address.as_bytes());
    let hash = keccak(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash.0[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
