//! Recursive Length Prefix encoding for the legacy transaction format.
//!
//! Only the field types a transaction carries are supported: small integers,
//! `U256`, byte strings and addresses. Lists are written and read field by
//! field with [`structs::Encoder`] and [`structs::Decoder`].

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod structs;
