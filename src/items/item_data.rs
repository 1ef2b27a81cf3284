//! Item Data - Pure DOP
//!
//! NO METHODS beyond constructors. All transformations happen in
//! item_operations.rs and the upgrade ledger.

use super::metadata::MetadataCompound;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u16);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Upgrade-related markers an item type carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCapabilities {
    pub armor_upgradeable: bool,
    pub tool_upgradeable: bool,
}

impl ItemCapabilities {
    pub const NONE: Self = Self {
        armor_upgradeable: false,
        tool_upgradeable: false,
    };

    pub const BOTH: Self = Self {
        armor_upgradeable: true,
        tool_upgradeable: true,
    };
}

/// Static properties of an item type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProperties {
    pub name: String,
    pub max_stack_size: u32,
    pub capabilities: ItemCapabilities,
}

impl Default for ItemProperties {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            max_stack_size: 64,
            capabilities: ItemCapabilities::NONE,
        }
    }
}

/// Registry of item types
#[derive(Debug, Clone, Default)]
pub struct ItemRegistryData {
    pub items: FxHashMap<ItemId, ItemProperties>,
    pub name_to_id: FxHashMap<String, ItemId>,
    pub next_id: u16,
}

/// A stack of items with optional persisted metadata
///
/// `metadata` stays `None` until the first write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    pub metadata: Option<MetadataCompound>,
}
