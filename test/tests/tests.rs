mod rlp;
mod rpc;
mod sdk;
