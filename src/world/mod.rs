//! World Module
//!
//! The grid-facing side of the crate.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (BlockId, positions, capabilities, registry)
//! - **Blocks**: Block property data and the basic engine blocks
//! - **Data types**: The in-memory sparse grid (`WorldData`)
//! - **Operations**: Pure functions over `WorldData`
//! - **Interfaces**: The traits the aura core reads the host through
//!
//! # Design Principles
//!
//! 1. **DOP architecture**: data structs plus free functions
//! 2. **Host-agnostic**: everything downstream only sees `interfaces`

pub mod blocks;
pub mod core;
pub mod data_types;
pub mod error;
pub mod interfaces;
pub mod world_operations;

// Re-export core types for convenience
pub use core::{
    BlockId, BlockRegistryData, CapabilitySet, CapabilityTag, ChunkPos, Location, VoxelPos,
    WorldId,
};

pub use data_types::{AuraPool, ChunkData, ExtendedObject, WorldData, WorldStats};
pub use error::{WorldError, WorldErrorContext, WorldResult};
pub use interfaces::{CapabilityQuery, GridQuery, GridQueryMut};

// Re-export DOP world operations as the primary API
pub use world_operations::{
    chunk_to_world, get_block, get_blocks_batch, get_extended_object, get_loaded_chunks,
    get_local_position, get_world_stats, is_chunk_loaded, load_chunk, load_filled_chunk,
    log_world_stats, place_extended_object, remove_extended_object, set_block,
    set_blocks_batch, unload_chunk, validate_world_data, voxel_to_chunk, WorldModification,
};

pub use blocks::register_basic_blocks;
