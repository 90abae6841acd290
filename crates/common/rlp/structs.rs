//! Field-by-field access to RLP lists.
//!
//! ```
//! # use bytes::Bytes;
//! # use swisc_rlp::structs::{Decoder, Encoder};
//! let mut buf = Vec::new();
//! Encoder::new(&mut buf)
//!     .encode_field(&5u64)
//!     .encode_field(&Bytes::from_static(b"swisc"))
//!     .finish();
//! assert_eq!(buf, [0xc7, 0x05, 0x85, b's', b'w', b'i', b's', b'c']);
//!
//! let decoder = Decoder::new(&buf).unwrap();
//! let (nonce, decoder) = decoder.decode_field::<u64>("nonce").unwrap();
//! let (data, decoder) = decoder.decode_field::<Bytes>("data").unwrap();
//! assert!(decoder.finish().unwrap().is_empty());
//! assert_eq!((nonce, data.as_ref()), (5, &b"swisc"[..]));
//! ```

use bytes::BufMut;

use crate::{
    decode::{Item, RLPDecode, split_item},
    encode::{RLPEncode, encode_list_header},
    error::RLPDecodeError,
};

#[derive(Debug)]
#[must_use = "`finish` checks that every field was read"]
pub struct Decoder<'a> {
    fields: &'a [u8],
    rest: &'a [u8],
}

impl<'a> Decoder<'a> {
    pub fn new(rlp: &'a [u8]) -> Result<Self, RLPDecodeError> {
        match split_item(rlp)? {
            (Item::List(fields), rest) => Ok(Self { fields, rest }),
            (Item::String(_), _) => Err(RLPDecodeError::UnexpectedString),
        }
    }

    pub fn decode_field<T: RLPDecode>(
        self,
        name: &'static str,
    ) -> Result<(T, Self), RLPDecodeError> {
        let (value, fields) =
            T::decode_unfinished(self.fields).map_err(|source| RLPDecodeError::Field {
                name,
                source: Box::new(source),
            })?;
        Ok((value, Self { fields, ..self }))
    }

    /// Returns the input that follows the list.
    pub fn finish(self) -> Result<&'a [u8], RLPDecodeError> {
        if !self.fields.is_empty() {
            return Err(RLPDecodeError::ExtraFields(self.fields.len()));
        }
        Ok(self.rest)
    }
}

/// Fields are buffered until `finish`, which writes the list header and the payload.
#[must_use = "nothing is written until `finish`"]
pub struct Encoder<'a> {
    buf: &'a mut dyn BufMut,
    fields: Vec<u8>,
}

impl<'a> Encoder<'a> {
    pub fn new(buf: &'a mut dyn BufMut) -> Self {
        Self {
            buf,
            fields: Vec::new(),
        }
    }

    pub fn encode_field<T: RLPEncode>(mut self, value: &T) -> Self {
        value.encode(&mut self.fields);
        self
    }

    pub fn finish(self) {
        encode_list_header(self.fields.len(), self.buf);
        self.buf.put_slice(&self.fields);
    }
}
