use ethereum_types::Address;

/// Errors raised while turning user input into a transaction or its wire form.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("Address must be exactly 20 bytes long, got {0}")]
    InvalidAddressLength(usize),
    #[error("Address checksum mismatch for {0}")]
    InvalidChecksum(String),
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount '{amount}' has more than {decimals} decimal places")]
    TooManyDecimals { amount: String, decimals: usize },
    #[error("Value does not fit in 256 bits")]
    Overflow,
    #[error("Maximum transaction cost (value + gas_limit * gas_price) does not fit in 256 bits")]
    CostOverflow,
    #[error("Chain id {0} is too large to be encoded in the signature")]
    ChainIdTooLarge(u64),
}

/// Errors raised while signing a transaction or recovering its sender.
///
/// None of the variants carry key material.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningError {
    #[error("Private key must be 32 bytes long, got {0}")]
    InvalidKeyLength(usize),
    #[error("Private key is not a valid hex string")]
    InvalidKeyHex,
    #[error("Private key is not a valid secp256k1 scalar: {0}")]
    InvalidKey(secp256k1::Error),
    #[error("Signature v value {0} is not a legacy or EIP-155 value")]
    InvalidV(u64),
    #[error("Signature s value is above half the curve order")]
    HighS,
    #[error("Invalid signature: {0}")]
    InvalidSignature(secp256k1::Error),
    #[error("Failed to recover public key: {0}")]
    Recovery(secp256k1::Error),
    #[error("Private key controls {key_address:#x}, expected sender {sender:#x}")]
    SenderMismatch {
        sender: Address,
        key_address: Address,
    },
}
