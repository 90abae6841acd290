/// Prefix of the empty string, which is also how zero is written.
pub const RLP_NULL: u8 = 0x80;

/// Prefix of the empty list.
pub const RLP_EMPTY_LIST: u8 = 0xc0;

/// Longest payload whose length fits in the prefix byte itself.
pub const MAX_SHORT_PAYLOAD: usize = 55;
