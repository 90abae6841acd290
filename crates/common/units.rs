//! Conversions between decimal denominations (ether, gwei) and wei.

use ethereum_types::U256;

use crate::{
    constants::{ETHER_DECIMALS, GWEI_DECIMALS},
    errors::EncodingError,
};

/// Parses a non-negative decimal amount into its smallest unit, `decimals`
/// places to the right of the point. Fractions finer than one unit are rejected.
pub fn parse_units(amount: &str, decimals: usize) -> Result<U256, EncodingError> {
    let trimmed = amount.trim();
    let (integer, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction)
    {
        return Err(EncodingError::InvalidAmount(amount.to_owned()));
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals {
        return Err(EncodingError::TooManyDecimals {
            amount: amount.to_owned(),
            decimals,
        });
    }

    let mut digits = String::with_capacity(integer.len() + decimals);
    digits.push_str(integer);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', decimals - fraction.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits).map_err(|_| EncodingError::Overflow)
}

/// Renders `value` with `decimals` places, dropping trailing zeros of the fraction.
pub fn format_units(value: U256, decimals: usize) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{digits:0>width$}", width = decimals + 1)
    } else {
        digits
    };
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{fraction}")
    }
}

pub fn parse_ether(amount: &str) -> Result<U256, EncodingError> {
    parse_units(amount, ETHER_DECIMALS)
}

pub fn parse_gwei(amount: &str) -> Result<U256, EncodingError> {
    parse_units(amount, GWEI_DECIMALS)
}

pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}
