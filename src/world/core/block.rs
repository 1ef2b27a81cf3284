use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::GRASS => write!(f, "Grass"),
            BlockId::DIRT => write!(f, "Dirt"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::SAND => write!(f, "Sand"),
            BlockId::GLASS => write!(f, "Glass"),
            BlockId::LOG => write!(f, "Log"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    // Engine block ids follow the registration order in `register_basic_blocks`
    pub const AIR: BlockId = BlockId(0);
    pub const GRASS: BlockId = BlockId(1);
    pub const DIRT: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const SAND: BlockId = BlockId(4);
    pub const GLASS: BlockId = BlockId(5);
    pub const LOG: BlockId = BlockId(6);

    /// Create a new BlockId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }

    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}
