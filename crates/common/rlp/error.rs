use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RLPDecodeError {
    #[error("Input ends in the middle of an item")]
    Truncated,
    #[error("{0} unexpected bytes after the item")]
    TrailingBytes(usize),
    #[error("Non-canonical encoding: {0}")]
    NonCanonical(&'static str),
    #[error("Integer of {got} bytes does not fit in {max_bytes}")]
    IntegerTooLarge { max_bytes: usize, got: usize },
    #[error("Expected {expected} bytes, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("Payload of {0} bytes is over the decoding limit")]
    PayloadTooLarge(u64),
    #[error("Expected a string, got a list")]
    UnexpectedList,
    #[error("Expected a list, got a string")]
    UnexpectedString,
    #[error("List has {0} bytes left after its last field")]
    ExtraFields(usize),
    #[error("Field '{name}': {source}")]
    Field {
        name: &'static str,
        source: Box<RLPDecodeError>,
    },
    #[error("{0}")]
    Custom(String),
}
