use bytes::Bytes;
use ethereum_types::{Address, U256};

use crate::{
    constants::{MAX_SHORT_PAYLOAD, RLP_EMPTY_LIST, RLP_NULL},
    error::RLPDecodeError,
};

/// Largest payload a single item may declare.
const MAX_PAYLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Decoding is strict: every value has exactly one accepted encoding.
pub trait RLPDecode: Sized {
    /// Decodes the item at the front of `rlp` and returns the bytes after it.
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError>;

    fn decode(rlp: &[u8]) -> Result<Self, RLPDecodeError> {
        let (value, rest) = Self::decode_unfinished(rlp)?;
        if !rest.is_empty() {
            return Err(RLPDecodeError::TrailingBytes(rest.len()));
        }
        Ok(value)
    }
}

/// Payload of one item, without its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    String(&'a [u8]),
    List(&'a [u8]),
}

/// Splits the first item off `data`.
pub fn split_item(data: &[u8]) -> Result<(Item<'_>, &[u8]), RLPDecodeError> {
    let (&prefix, body) = data.split_first().ok_or(RLPDecodeError::Truncated)?;
    if prefix < RLP_NULL {
        return Ok((Item::String(&data[..1]), body));
    }

    let is_list = prefix >= RLP_EMPTY_LIST;
    let base = if is_list { RLP_EMPTY_LIST } else { RLP_NULL };
    let short_len = (prefix - base) as usize;
    let (len, body) = if short_len <= MAX_SHORT_PAYLOAD {
        (short_len, body)
    } else {
        read_long_length(body, short_len - MAX_SHORT_PAYLOAD)?
    };
    if body.len() < len {
        return Err(RLPDecodeError::Truncated);
    }
    let (payload, rest) = body.split_at(len);

    if is_list {
        return Ok((Item::List(payload), rest));
    }
    if matches!(payload, [byte] if *byte < RLP_NULL) {
        return Err(RLPDecodeError::NonCanonical("single byte with a string prefix"));
    }
    Ok((Item::String(payload), rest))
}

fn read_long_length(body: &[u8], len_of_len: usize) -> Result<(usize, &[u8]), RLPDecodeError> {
    if body.len() < len_of_len {
        return Err(RLPDecodeError::Truncated);
    }
    let (len_be, body) = body.split_at(len_of_len);
    let len = u64::from_be_bytes(left_pad(len_be)?);
    if len <= MAX_SHORT_PAYLOAD as u64 {
        return Err(RLPDecodeError::NonCanonical("long form for a short payload"));
    }
    if len > MAX_PAYLOAD_BYTES {
        return Err(RLPDecodeError::PayloadTooLarge(len));
    }
    Ok((len as usize, body))
}

/// Payload of a string item.
pub fn decode_string(rlp: &[u8]) -> Result<(&[u8], &[u8]), RLPDecodeError> {
    match split_item(rlp)? {
        (Item::String(payload), rest) => Ok((payload, rest)),
        (Item::List(_), _) => Err(RLPDecodeError::UnexpectedList),
    }
}

/// Right-aligns a big-endian integer in `N` bytes.
fn left_pad<const N: usize>(be_bytes: &[u8]) -> Result<[u8; N], RLPDecodeError> {
    if be_bytes.first() == Some(&0) {
        return Err(RLPDecodeError::NonCanonical("integer with leading zeros"));
    }
    if be_bytes.len() > N {
        return Err(RLPDecodeError::IntegerTooLarge {
            max_bytes: N,
            got: be_bytes.len(),
        });
    }
    let mut padded = [0; N];
    padded[N - be_bytes.len()..].copy_from_slice(be_bytes);
    Ok(padded)
}

impl RLPDecode for u64 {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_string(rlp)?;
        Ok((u64::from_be_bytes(left_pad(payload)?), rest))
    }
}

impl RLPDecode for U256 {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_string(rlp)?;
        let padded: [u8; 32] = left_pad(payload)?;
        Ok((U256::from_big_endian(&padded), rest))
    }
}

impl RLPDecode for Bytes {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_string(rlp)?;
        Ok((Bytes::copy_from_slice(payload), rest))
    }
}

impl RLPDecode for Address {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let (payload, rest) = decode_string(rlp)?;
        if payload.len() != Address::len_bytes() {
            return Err(RLPDecodeError::WrongLength {
                expected: Address::len_bytes(),
                got: payload.len(),
            });
        }
        Ok((Address::from_slice(payload), rest))
    }
}
