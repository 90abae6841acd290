use serde_json::Value;
use swisc_common::U256;

/// Parses a `0x`-prefixed hex quantity into a `u64`.
pub fn parse_json_hex(hex: &Value) -> Result<u64, String> {
    if let Value::String(maybe_hex) = hex {
        let trimmed = maybe_hex
            .strip_prefix("0x")
            .ok_or_else(|| format!("Missing 0x prefix in {maybe_hex}"))?;
        u64::from_str_radix(trimmed, 16).map_err(|_| format!("Could not parse given hex {maybe_hex}"))
    } else {
        Err(format!("Could not parse given hex {hex}"))
    }
}

/// Parses a `0x`-prefixed hex quantity into a `U256`.
pub fn parse_json_hex_u256(hex: &Value) -> Result<U256, String> {
    if let Value::String(maybe_hex) = hex {
        let trimmed = maybe_hex
            .strip_prefix("0x")
            .ok_or_else(|| format!("Missing 0x prefix in {maybe_hex}"))?;
        if trimmed.is_empty() {
            return Err(format!("Empty hex quantity {maybe_hex}"));
        }
        U256::from_str_radix(trimmed, 16).map_err(|_| format!("Could not parse given hex {maybe_hex}"))
    } else {
        Err(format!("Could not parse given hex {hex}"))
    }
}
