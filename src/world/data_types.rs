//! World Data Types - Pure DOP Structures
//!
//! These are the data structures that world_operations functions operate on.
//! NO METHODS beyond constructors - just pure data.

use super::core::{BlockId, CapabilitySet, ChunkPos, VoxelPos, WorldId};
use super::error::WorldError;
use crate::constants::core::MAX_CHUNK_SIZE;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// World data - the in-memory sparse voxel grid
///
/// Only loaded chunks exist. Cells outside them are reported as nonexistent
/// by the grid query layer, which is how the host treats unloaded terrain.
#[derive(Clone, Debug)]
pub struct WorldData {
    /// Which host world this grid belongs to
    pub id: WorldId,

    /// Loaded chunks keyed by chunk position
    pub chunks: FxHashMap<ChunkPos, ChunkData>,

    /// Extended objects (block entities) keyed by voxel position
    pub extended_objects: FxHashMap<VoxelPos, ExtendedObject>,

    /// Edge length of a chunk in voxels, always 1..=MAX_CHUNK_SIZE
    pub chunk_size: u32,
}

/// Single chunk's data (Structure of Arrays)
#[derive(Clone, Debug)]
pub struct ChunkData {
    /// Chunk position in chunk coordinates
    pub position: ChunkPos,

    /// Block IDs (flat array: size^3 blocks, x + y*s + z*s*s)
    pub blocks: Vec<BlockId>,

    /// Number of non-air blocks
    pub non_air_blocks: u32,
}

/// Extra per-cell state attached to a block (the host's block entity)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendedObject {
    /// Registry-style kind name, e.g. `aura:controller`
    pub kind: String,

    /// Capabilities the object exposes; these replace the block's own
    pub capabilities: CapabilitySet,

    /// Aura pool, present on controllers
    pub aura_pool: Option<AuraPool>,
}

/// Pooled aura owned by a controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraPool {
    pub stored: u32,
    pub capacity: u32,
    /// Maximum drained by a single burst
    pub burst_size: u32,
}

impl WorldData {
    /// Create new empty world data
    ///
    /// # Errors
    /// `InvalidChunkSize` when `chunk_size` is 0 or above `MAX_CHUNK_SIZE`
    pub fn new(id: WorldId, chunk_size: u32) -> Result<Self, WorldError> {
        if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
            return Err(WorldError::InvalidChunkSize(chunk_size));
        }

        Ok(Self {
            id,
            chunks: FxHashMap::default(),
            extended_objects: FxHashMap::default(),
            chunk_size,
        })
    }
}

impl ChunkData {
    /// Create new chunk with given position and chunk size
    ///
    /// Sizes come from a `WorldData`, which keeps them in 1..=MAX_CHUNK_SIZE.
    pub(crate) fn new(position: ChunkPos, chunk_size: u32) -> Self {
        let total_blocks = (chunk_size * chunk_size * chunk_size) as usize;

        Self {
            position,
            blocks: vec![BlockId::AIR; total_blocks],
            non_air_blocks: 0,
        }
    }

    /// Create chunk filled with a specific block
    pub(crate) fn filled(position: ChunkPos, chunk_size: u32, block: BlockId) -> Self {
        let total_blocks = (chunk_size * chunk_size * chunk_size) as usize;
        let non_air_blocks = if block.is_air() { 0 } else { total_blocks as u32 };

        Self {
            position,
            blocks: vec![block; total_blocks],
            non_air_blocks,
        }
    }
}

impl ExtendedObject {
    /// A controller object with a full pool
    pub fn controller(kind: &str, capacity: u32, burst_size: u32) -> Self {
        Self {
            kind: kind.to_string(),
            capabilities: CapabilitySet::EMPTY.with(super::core::CapabilityTag::Controller),
            aura_pool: Some(AuraPool {
                stored: capacity,
                capacity,
                burst_size,
            }),
        }
    }

    /// An object that only exposes capabilities
    pub fn with_capabilities(kind: &str, capabilities: CapabilitySet) -> Self {
        Self {
            kind: kind.to_string(),
            capabilities,
            aura_pool: None,
        }
    }
}

/// World statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub loaded_chunks: usize,
    pub non_air_blocks: u64,
    pub extended_objects: usize,
}
