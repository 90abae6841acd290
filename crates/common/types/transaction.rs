use bytes::{BufMut, Bytes};
use ethereum_types::{Address, H256, Signature, U256};
use keccak_hash::keccak;
use swisc_rlp::{
    decode::RLPDecode,
    encode::RLPEncode,
    error::RLPDecodeError,
    structs::{Decoder, Encoder},
};

use crate::{
    constants::{EIP155_V_OFFSET, LEGACY_V_OFFSET, MAX_CHAIN_ID},
    errors::{EncodingError, SigningError},
    types::recover_address,
    utils::address_from_slice,
};

/// A legacy (pre EIP-2718) transaction before signing.
///
/// When `chain_id` is set the signature follows EIP-155 and commits to it,
/// otherwise the transaction can be replayed on any chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: u64,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub chain_id: Option<u64>,
}

/// Builds a plain value transfer with empty data and no chain id.
///
/// Fails if `to` is not 20 bytes long or if the worst case cost of the
/// transaction (`value + gas_limit * gas_price`) does not fit in 256 bits.
pub fn build_transaction(
    nonce: u64,
    to: &[u8],
    value: U256,
    gas_limit: u64,
    gas_price: U256,
) -> Result<UnsignedTransaction, EncodingError> {
    let tx = UnsignedTransaction {
        nonce,
        gas_price,
        gas_limit,
        to: address_from_slice(to)?,
        value,
        data: Bytes::new(),
        chain_id: None,
    };
    tx.max_cost().ok_or(EncodingError::CostOverflow)?;
    Ok(tx)
}

impl UnsignedTransaction {
    /// Sets the chain id the signature will commit to.
    pub fn with_chain_id(mut self, chain_id: u64) -> Result<Self, EncodingError> {
        if chain_id > MAX_CHAIN_ID {
            return Err(EncodingError::ChainIdTooLarge(chain_id));
        }
        self.chain_id = Some(chain_id);
        Ok(self)
    }

    /// `value + gas_limit * gas_price`, or `None` if it overflows.
    pub fn max_cost(&self) -> Option<U256> {
        U256::from(self.gas_limit)
            .checked_mul(self.gas_price)?
            .checked_add(self.value)
    }

    /// Writes the RLP list that gets hashed and signed.
    pub fn encode_signing_payload(&self, buf: &mut dyn BufMut) {
        let encoder = Encoder::new(buf)
            .encode_field(&self.nonce)
            .encode_field(&self.gas_price)
            .encode_field(&self.gas_limit)
            .encode_field(&self.to)
            .encode_field(&self.value)
            .encode_field(&self.data);
        match self.chain_id {
            Some(chain_id) => encoder
                .encode_field(&chain_id)
                .encode_field(&0u8)
                .encode_field(&0u8)
                .finish(),
            None => encoder.finish(),
        }
    }

    pub fn signing_hash(&self) -> H256 {
        let mut buf = Vec::new();
        self.encode_signing_payload(&mut buf);
        keccak(buf)
    }

    /// `v` value for the given recovery id under this transaction's replay protection.
    pub fn v(&self, recovery_id: u8) -> u64 {
        match self.chain_id {
            Some(chain_id) => chain_id * 2 + EIP155_V_OFFSET + recovery_id as u64,
            None => LEGACY_V_OFFSET + recovery_id as u64,
        }
    }
}

/// A legacy transaction together with its `(v, r, s)` signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub tx: UnsignedTransaction,
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

impl SignedTransaction {
    /// Attaches a 65 byte `r || s || recovery_id` signature to `tx`.
    pub fn from_signature(tx: UnsignedTransaction, signature: &Signature) -> Self {
        let bytes = signature.as_bytes();
        let v = tx.v(bytes[64]);
        Self {
            tx,
            v,
            r: U256::from_big_endian(&bytes[..32]),
            s: U256::from_big_endian(&bytes[32..64]),
        }
    }

    pub fn recovery_id(&self) -> Result<u8, SigningError> {
        let (_, recovery_id) = split_v(self.v)?;
        Ok(recovery_id)
    }

    /// Signature as `r || s || recovery_id`.
    pub fn signature(&self) -> Result<Signature, SigningError> {
        let mut bytes = [0u8; 65];
        bytes[..32].copy_from_slice(&self.r.to_big_endian());
        bytes[32..64].copy_from_slice(&self.s.to_big_endian());
        bytes[64] = self.recovery_id()?;
        Ok(Signature::from(bytes))
    }

    /// Canonical RLP wire form, as sent with `eth_sendRawTransaction`.
    pub fn serialize(&self) -> Bytes {
        Bytes::from(self.encode_to_vec())
    }

    pub fn deserialize(raw: &[u8]) -> Result<Self, RLPDecodeError> {
        Self::decode(raw)
    }

    /// Transaction hash, the keccak of the serialized transaction.
    pub fn hash(&self) -> H256 {
        keccak(self.encode_to_vec())
    }

    /// Recovers the address that signed this transaction.
    pub fn sender(&self) -> Result<Address, SigningError> {
        recover_address(self.tx.signing_hash(), &self.signature()?)
    }
}

/// Splits a signature `v` into the chain id it commits to and the recovery id.
pub fn split_v(v: u64) -> Result<(Option<u64>, u8), SigningError> {
    match v {
        27 | 28 => Ok((None, (v - LEGACY_V_OFFSET) as u8)),
        v if v >= EIP155_V_OFFSET => {
            let offset = v - EIP155_V_OFFSET;
            Ok((Some(offset / 2), (offset % 2) as u8))
        }
        v => Err(SigningError::InvalidV(v)),
    }
}

impl RLPEncode for SignedTransaction {
    fn encode(&self, buf: &mut dyn BufMut) {
        Encoder::new(buf)
            .encode_field(&self.tx.nonce)
            .encode_field(&self.tx.gas_price)
            .encode_field(&self.tx.gas_limit)
            .encode_field(&self.tx.to)
            .encode_field(&self.tx.value)
            .encode_field(&self.tx.data)
            .encode_field(&self.v)
            .encode_field(&self.r)
            .encode_field(&self.s)
            .finish();
    }
}

impl RLPDecode for SignedTransaction {
    fn decode_unfinished(rlp: &[u8]) -> Result<(Self, &[u8]), RLPDecodeError> {
        let decoder = Decoder::new(rlp)?;
        let (nonce, decoder) = decoder.decode_field("nonce")?;
        let (gas_price, decoder) = decoder.decode_field("gas_price")?;
        let (gas_limit, decoder) = decoder.decode_field("gas_limit")?;
        let (to, decoder) = decoder.decode_field("to")?;
        let (value, decoder) = decoder.decode_field("value")?;
        let (data, decoder) = decoder.decode_field("data")?;
        let (v, decoder) = decoder.decode_field("v")?;
        let (r, decoder) = decoder.decode_field("r")?;
        let (s, decoder) = decoder.decode_field("s")?;
        let rest = decoder.finish()?;

        let (chain_id, _) =
            split_v(v).map_err(|err| RLPDecodeError::Custom(err.to_string()))?;
        let tx = UnsignedTransaction {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            chain_id,
        };
        Ok((Self { tx, v, r, s }, rest))
    }
}
