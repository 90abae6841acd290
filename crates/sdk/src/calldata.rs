use bytes::Bytes;
use keccak_hash::keccak;
use swisc_common::{Address, H32, U256};

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Address(Address),
    Uint(U256),
    Bool(bool),
    Bytes(Bytes),
    String(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalldataEncodeError {
    #[error("Failed to parse function signature: {0}")]
    ParseError(String),
    #[error("Wrong number of arguments provided for calldata: expected {expected}, got {got}")]
    WrongArgumentLength { expected: usize, got: usize },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalldataDecodeError {
    #[error("Empty return data, the target is probably not a contract")]
    Empty,
    #[error("Return data too short: needed {needed} bytes, got {len}")]
    OutOfBounds { needed: usize, len: usize },
    #[error("Invalid bool word {0:#x}")]
    InvalidBool(U256),
    #[error("Offset or length {0:#x} does not fit in memory")]
    Overflow(U256),
    #[error("String is not valid UTF-8")]
    InvalidUtf8,
}

fn parse_signature(signature: &str) -> Result<(String, Vec<String>), CalldataEncodeError> {
    let sig = signature.trim().trim_start_matches("function ");
    let (name, params) = sig
        .split_once('(')
        .ok_or_else(|| CalldataEncodeError::ParseError(signature.to_owned()))?;
    let params = params
        .strip_suffix(')')
        .ok_or_else(|| CalldataEncodeError::ParseError(signature.to_owned()))?;
    let params: Vec<String> = params
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(|param| param.split_once(' ').map_or(param, |(ty, _)| ty).to_string())
        .collect();
    Ok((name.trim().to_string(), params))
}

/// First four bytes of the keccak of the normalized signature, e.g. `balanceOf(address)`.
pub fn compute_function_selector(name: &str, params: &[String]) -> H32 {
    let normalized_signature = format!("{name}({})", params.join(","));
    let hash = keccak(normalized_signature.as_bytes());
    H32::from_slice(&hash[..4])
}

/// Encodes a call to `signature` with the given arguments.
pub fn encode_calldata(signature: &str, values: &[Value]) -> Result<Bytes, CalldataEncodeError> {
    let (name, params) = parse_signature(signature)?;

    if params.len() != values.len() {
        return Err(CalldataEncodeError::WrongArgumentLength {
            expected: params.len(),
            got: values.len(),
        });
    }

    let function_selector = compute_function_selector(&name, &params);
    let mut with_selector = function_selector.as_bytes().to_vec();
    with_selector.extend_from_slice(&encode_tuple(values));

    Ok(with_selector.into())
}

/// Head/tail ABI encoding: static values go in the head, dynamic ones are
/// appended to the tail and the head holds their offset.
fn encode_tuple(values: &[Value]) -> Vec<u8> {
    let mut ret = vec![0; values.len() * 32];
    let mut current_dynamic_offset = ret.len();

    for (index, value) in values.iter().enumerate() {
        let head = index * 32;
        match value {
            Value::Address(address) => write_u256(&mut ret, address_to_word(*address), head),
            Value::Uint(number) => write_u256(&mut ret, *number, head),
            Value::Bool(boolean) => write_u256(&mut ret, U256::from(u8::from(*boolean)), head),
            Value::Bytes(bytes) => {
                write_u256(&mut ret, U256::from(current_dynamic_offset), head);
                let bytes_encoding = encode_bytes(bytes);
                current_dynamic_offset += bytes_encoding.len();
                ret.extend_from_slice(&bytes_encoding);
            }
            Value::String(string_value) => {
                write_u256(&mut ret, U256::from(current_dynamic_offset), head);
                let bytes_encoding = encode_bytes(string_value.as_bytes());
                current_dynamic_offset += bytes_encoding.len();
                ret.extend_from_slice(&bytes_encoding);
            }
        }
    }

    ret
}

fn write_u256(values: &mut [u8], number: U256, offset: usize) {
    values[offset..offset + 32].copy_from_slice(&number.to_big_endian());
}

/// Length word followed by the bytes, right-padded to a whole word.
fn encode_bytes(values: &[u8]) -> Vec<u8> {
    let padded_len = values.len().div_ceil(32) * 32;
    let mut ret = Vec::with_capacity(32 + padded_len);
    ret.extend_from_slice(&U256::from(values.len()).to_big_endian());
    ret.extend_from_slice(values);
    ret.resize(32 + padded_len, 0);
    ret
}

fn address_to_word(address: Address) -> U256 {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    U256::from_big_endian(&word)
}

// ========== Return data decoding ==========

fn word_at(data: &[u8], offset: usize) -> Result<&[u8], CalldataDecodeError> {
    let end = offset
        .checked_add(32)
        .ok_or(CalldataDecodeError::Overflow(U256::from(offset)))?;
    data.get(offset..end).ok_or(CalldataDecodeError::OutOfBounds {
        needed: end,
        len: data.len(),
    })
}

fn word_as_usize(word: &[u8]) -> Result<usize, CalldataDecodeError> {
    let value = U256::from_big_endian(word);
    if value > U256::from(u32::MAX) {
        return Err(CalldataDecodeError::Overflow(value));
    }
    Ok(value.as_usize())
}

pub fn decode_uint(data: &[u8]) -> Result<U256, CalldataDecodeError> {
    if data.is_empty() {
        return Err(CalldataDecodeError::Empty);
    }
    Ok(U256::from_big_endian(word_at(data, 0)?))
}

pub fn decode_bool(data: &[u8]) -> Result<bool, CalldataDecodeError> {
    match decode_uint(data)? {
        word if word.is_zero() => Ok(false),
        word if word == U256::one() => Ok(true),
        word => Err(CalldataDecodeError::InvalidBool(word)),
    }
}

/// Decodes a single `string` return value.
///
/// Some early tokens return `bytes32` from `name()`/`symbol()`; a lone word
/// is read that way, with trailing zero bytes dropped.
pub fn decode_string(data: &[u8]) -> Result<String, CalldataDecodeError> {
    if data.is_empty() {
        return Err(CalldataDecodeError::Empty);
    }

    let bytes = if data.len() == 32 {
        let end = data.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        &data[..end]
    } else {
        let offset = word_as_usize(word_at(data, 0)?)?;
        let len = word_as_usize(word_at(data, offset)?)?;
        let start = offset + 32;
        data.get(start..start + len)
            .ok_or(CalldataDecodeError::OutOfBounds {
                needed: start + len,
                len: data.len(),
            })?
    };

    String::from_utf8(bytes.to_vec()).map_err(|_| CalldataDecodeError::InvalidUtf8)
}
