//! Clean interfaces to the host world
//!
//! The aura core never touches a concrete grid. It reads the host through
//! these traits, so any engine can plug in by implementing them. `WorldData`
//! and `BlockRegistryData` are the in-crate implementations.

use super::core::registry_operations::get_capabilities;
use super::core::{BlockId, BlockRegistryData, CapabilitySet, Location};
use super::data_types::{ExtendedObject, WorldData};
use super::world_operations::get_block;

/// Point-wise read access to a 3D grid
pub trait GridQuery {
    /// Whether the cell is currently addressable (loaded, in this world)
    fn exists(&self, loc: Location) -> bool;

    /// Whether the cell holds nothing (air). Nonexistent cells are empty.
    fn is_empty(&self, loc: Location) -> bool;

    /// Block type of the cell, `BlockId::AIR` for nonexistent cells
    fn cell_type(&self, loc: Location) -> BlockId;

    /// Extended object hosted by the cell, if any
    fn extended_object(&self, loc: Location) -> Option<&ExtendedObject>;
}

/// Grid access that can also mutate extended objects (controller pools)
pub trait GridQueryMut: GridQuery {
    fn extended_object_mut(&mut self, loc: Location) -> Option<&mut ExtendedObject>;
}

/// Capability lookup for plain block types
pub trait CapabilityQuery {
    fn block_capabilities(&self, block: BlockId) -> CapabilitySet;
}

impl GridQuery for WorldData {
    fn exists(&self, loc: Location) -> bool {
        loc.world == self.id && get_block(self, loc.pos).is_some()
    }

    fn is_empty(&self, loc: Location) -> bool {
        self.cell_type(loc).is_air()
    }

    fn cell_type(&self, loc: Location) -> BlockId {
        if loc.world != self.id {
            return BlockId::AIR;
        }
        get_block(self, loc.pos).unwrap_or(BlockId::AIR)
    }

    fn extended_object(&self, loc: Location) -> Option<&ExtendedObject> {
        if loc.world != self.id {
            return None;
        }
        self.extended_objects.get(&loc.pos)
    }
}

impl GridQueryMut for WorldData {
    fn extended_object_mut(&mut self, loc: Location) -> Option<&mut ExtendedObject> {
        if loc.world != self.id {
            return None;
        }
        self.extended_objects.get_mut(&loc.pos)
    }
}

impl CapabilityQuery for BlockRegistryData {
    fn block_capabilities(&self, block: BlockId) -> CapabilitySet {
        get_capabilities(self, block)
    }
}
