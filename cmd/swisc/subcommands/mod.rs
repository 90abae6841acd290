pub mod balance;
pub mod contracts;
pub mod decode;
pub mod transfer;
