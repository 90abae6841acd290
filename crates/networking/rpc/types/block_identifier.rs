use std::fmt;

use serde_json::Value;

/// Block selector accepted by state-reading methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockIdentifier {
    Number(u64),
    Tag(BlockTag),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockTag {
    #[default]
    Latest,
    /// Includes transactions still in the node's pool.
    Pending,
}

impl Default for BlockIdentifier {
    fn default() -> Self {
        Self::Tag(BlockTag::default())
    }
}

impl From<BlockTag> for BlockIdentifier {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
        };
        f.write_str(tag)
    }
}

impl From<BlockIdentifier> for Value {
    fn from(value: BlockIdentifier) -> Self {
        match value {
            BlockIdentifier::Number(n) => Value::String(format!("{n:#x}")),
            BlockIdentifier::Tag(tag) => Value::String(tag.to_string()),
        }
    }
}
