use std::fmt;

use ethereum_types::{Address, H256, Signature};
use keccak_hash::keccak;
use secp256k1::{
    Message, PublicKey, SECP256K1, SecretKey,
    ecdsa::{RecoverableSignature, RecoveryId},
};
use zeroize::Zeroizing;

use crate::{
    constants::SECP256K1_N_HALF,
    errors::SigningError,
    types::{SignedTransaction, UnsignedTransaction},
};

/// Signs with a private key held in memory.
///
/// The key is wiped when the signer is dropped and is never printed:
/// `Debug` only shows the address it controls.
pub struct LocalSigner {
    private_key: SecretKey,
    pub address: Address,
}

impl LocalSigner {
    pub fn new(private_key: SecretKey) -> Self {
        let address = public_key_to_address(&private_key.public_key(SECP256K1));
        Self {
            private_key,
            address,
        }
    }

    /// Builds a signer from a raw 32 byte secret.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SigningError> {
        if bytes.len() != 32 {
            return Err(SigningError::InvalidKeyLength(bytes.len()));
        }
        let private_key = SecretKey::from_slice(bytes).map_err(SigningError::InvalidKey)?;
        Ok(Self::new(private_key))
    }

    /// Builds a signer from a hex secret, `0x` prefix and surrounding whitespace allowed.
    pub fn from_hex(input: &str) -> Result<Self, SigningError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if digits.len() != 64 {
            return Err(SigningError::InvalidKeyLength(digits.len() / 2));
        }
        let mut bytes = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(digits, &mut *bytes).map_err(|_| SigningError::InvalidKeyHex)?;
        Self::from_slice(&*bytes)
    }

    pub fn sign_hash(&self, hash: H256) -> Signature {
        let msg = Message::from_digest(hash.0);
        let (recovery_id, signature) = SECP256K1
            .sign_ecdsa_recoverable(&msg, &self.private_key)
            .serialize_compact();

        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&signature);
        bytes[64] = recovery_id.to_i32() as u8;
        Signature::from(bytes)
    }

    /// Signs `tx` and attaches a `v` following its replay protection.
    pub fn sign_transaction(&self, tx: UnsignedTransaction) -> SignedTransaction {
        let signature = self.sign_hash(tx.signing_hash());
        SignedTransaction::from_signature(tx, &signature)
    }

    /// Fails unless this key controls `sender`.
    pub fn ensure_controls(&self, sender: Address) -> Result<(), SigningError> {
        if self.address != sender {
            return Err(SigningError::SenderMismatch {
                sender,
                key_address: self.address,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Drop for LocalSigner {
    fn drop(&mut self) {
        self.private_key.non_secure_erase();
    }
}

/// Signs `tx` with a raw 32 byte private key.
pub fn sign_transaction(
    tx: UnsignedTransaction,
    private_key: &[u8],
) -> Result<SignedTransaction, SigningError> {
    let signer = LocalSigner::from_slice(private_key)?;
    Ok(signer.sign_transaction(tx))
}

pub fn public_key_to_address(public_key: &PublicKey) -> Address {
    Address::from(keccak(&public_key.serialize_uncompressed()[1..]))
}

/// Recovers the signer of `hash` from an `r || s || recovery_id` signature.
///
/// High-s signatures are rejected, nodes refuse them since Homestead.
pub fn recover_address(hash: H256, signature: &Signature) -> Result<Address, SigningError> {
    let bytes = signature.as_bytes();
    if bytes[32..64] > SECP256K1_N_HALF[..] {
        return Err(SigningError::HighS);
    }

    let recovery_id =
        RecoveryId::from_i32(bytes[64] as i32).map_err(SigningError::InvalidSignature)?;
    let signature = RecoverableSignature::from_compact(&bytes[..64], recovery_id)
        .map_err(SigningError::InvalidSignature)?;
    let public_key = SECP256K1
        .recover_ecdsa(&Message::from_digest(hash.0), &signature)
        .map_err(SigningError::Recovery)?;

    Ok(public_key_to_address(&public_key))
}
