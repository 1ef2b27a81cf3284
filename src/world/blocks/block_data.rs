//! Block Data - Pure DOP
//!
//! Block property data structures. No methods.

use crate::world::core::CapabilitySet;

/// Block properties (from registry)
#[derive(Clone, Debug)]
pub struct BlockProperties {
    pub name: String,
    /// Aura capabilities of the plain block, used when no extended object is present
    pub capabilities: CapabilitySet,
}

impl Default for BlockProperties {
    fn default() -> Self {
        Self {
            name: "air".to_string(),
            capabilities: CapabilitySet::EMPTY,
        }
    }
}
