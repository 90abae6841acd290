mod signer;
mod transaction;

pub use signer::*;
pub use transaction::*;
