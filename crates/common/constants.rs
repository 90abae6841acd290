// === Legacy transaction signature constants ===

/// `v` offset for signatures that do not commit to a chain id (pre EIP-155).
pub const LEGACY_V_OFFSET: u64 = 27;

/// `v` offset for EIP-155 signatures: `v = chain_id * 2 + 35 + recovery_id`.
pub const EIP155_V_OFFSET: u64 = 35;

/// Largest chain id whose EIP-155 `v` still fits in a `u64`.
pub const MAX_CHAIN_ID: u64 = (u64::MAX - EIP155_V_OFFSET - 1) / 2;

// EIP-2: signatures with s above half the curve order are rejected.
pub const SECP256K1_N_HALF: [u8; 32] =
    hex_literal::hex!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");

// === Gas ===

/// Intrinsic gas of a plain value transfer.
pub const TX_GAS_COST: u64 = 21_000;

// === Units ===

pub const ETHER_DECIMALS: usize = 18;
pub const GWEI_DECIMALS: usize = 9;
