use bytes::{BufMut, Bytes};
use ethereum_types::{Address, U256};

use crate::constants::{MAX_SHORT_PAYLOAD, RLP_EMPTY_LIST, RLP_NULL};

pub trait RLPEncode {
    fn encode(&self, buf: &mut dyn BufMut);

    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }
}

/// Writes the prefix of an item whose payload is `len` bytes long.
/// `base` is [`RLP_NULL`] for strings and [`RLP_EMPTY_LIST`] for lists.
fn encode_header(base: u8, len: usize, buf: &mut dyn BufMut) {
    if len <= MAX_SHORT_PAYLOAD {
        buf.put_u8(base + len as u8);
        return;
    }
    let len_be = len.to_be_bytes();
    let zeros = len_be.iter().take_while(|byte| **byte == 0).count();
    buf.put_u8(base + MAX_SHORT_PAYLOAD as u8 + (len_be.len() - zeros) as u8);
    buf.put_slice(&len_be[zeros..]);
}

pub fn encode_list_header(payload_len: usize, buf: &mut dyn BufMut) {
    encode_header(RLP_EMPTY_LIST, payload_len, buf);
}

/// A lone byte below 0x80 is its own encoding.
fn encode_string(bytes: &[u8], buf: &mut dyn BufMut) {
    match bytes {
        [byte] if *byte < RLP_NULL => buf.put_u8(*byte),
        _ => {
            encode_header(RLP_NULL, bytes.len(), buf);
            buf.put_slice(bytes);
        }
    }
}

/// Integers are their big-endian bytes without leading zeros, so zero is the empty string.
fn encode_uint(be_bytes: &[u8], buf: &mut dyn BufMut) {
    let zeros = be_bytes.iter().take_while(|byte| **byte == 0).count();
    encode_string(&be_bytes[zeros..], buf);
}

impl RLPEncode for u8 {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_uint(&[*self], buf);
    }
}

impl RLPEncode for u64 {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_uint(&self.to_be_bytes(), buf);
    }
}

impl RLPEncode for U256 {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_uint(&self.to_big_endian(), buf);
    }
}

impl RLPEncode for Bytes {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_string(self, buf);
    }
}

// Fixed width, leading zeros are kept.
impl RLPEncode for Address {
    fn encode(&self, buf: &mut dyn BufMut) {
        encode_string(self.as_bytes(), buf);
    }
}
