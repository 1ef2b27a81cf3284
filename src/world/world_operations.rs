//! World Operations - Pure DOP Functions
//!
//! This is the PUBLIC API for manipulating the reference grid.
//! All functions take world data and return results.
//!
//! Hosts that bring their own grid skip this module and implement the
//! traits in `world::interfaces` instead.

use super::core::{BlockId, ChunkPos, VoxelPos};
use super::data_types::{ChunkData, ExtendedObject, WorldData, WorldStats};
use super::error::WorldError;

// ============================================================================
// BLOCK OPERATIONS
// ============================================================================

/// Get block at position
///
/// # Returns
/// `Some(BlockId)` if the chunk is loaded, `None` otherwise
pub fn get_block(world: &WorldData, pos: VoxelPos) -> Option<BlockId> {
    let chunk = world.chunks.get(&voxel_to_chunk(pos, world.chunk_size))?;
    chunk.blocks.get(local_index(pos, world.chunk_size)).copied()
}

/// Set block at position
///
/// Placing air also drops any extended object at that position.
///
/// # Returns
/// Ok(WorldModification) if successful
pub fn set_block(
    world: &mut WorldData,
    pos: VoxelPos,
    block_id: BlockId,
) -> Result<WorldModification, WorldError> {
    let chunk_size = world.chunk_size;
    let chunk = world
        .chunks
        .get_mut(&voxel_to_chunk(pos, chunk_size))
        .ok_or(WorldError::ChunkNotLoaded(pos))?;

    let index = local_index(pos, chunk_size);
    let slot = chunk
        .blocks
        .get_mut(index)
        .ok_or(WorldError::InvalidPosition(pos))?;

    let old_block = *slot;
    *slot = block_id;

    match (old_block.is_air(), block_id.is_air()) {
        (true, false) => chunk.non_air_blocks += 1,
        (false, true) => chunk.non_air_blocks = chunk.non_air_blocks.saturating_sub(1),
        _ => {}
    }
    if block_id.is_air() {
        world.extended_objects.remove(&pos);
    }

    Ok(WorldModification {
        position: pos,
        old_block,
        new_block: block_id,
    })
}

/// World modification record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldModification {
    pub position: VoxelPos,
    pub old_block: BlockId,
    pub new_block: BlockId,
}

// ============================================================================
// EXTENDED OBJECTS
// ============================================================================

/// Attach an extended object to a non-air block
///
/// # Returns
/// The object previously stored at that position, if any
pub fn place_extended_object(
    world: &mut WorldData,
    pos: VoxelPos,
    object: ExtendedObject,
) -> Result<Option<ExtendedObject>, WorldError> {
    match get_block(world, pos) {
        None => Err(WorldError::ChunkNotLoaded(pos)),
        Some(block) if block.is_air() => Err(WorldError::OperationFailed(format!(
            "cannot attach '{}' to air at {}",
            object.kind, pos
        ))),
        Some(_) => Ok(world.extended_objects.insert(pos, object)),
    }
}

/// Detach the extended object at a position
pub fn remove_extended_object(world: &mut WorldData, pos: VoxelPos) -> Option<ExtendedObject> {
    world.extended_objects.remove(&pos)
}

/// Get the extended object at a position
pub fn get_extended_object(world: &WorldData, pos: VoxelPos) -> Option<&ExtendedObject> {
    world.extended_objects.get(&pos)
}

// ============================================================================
// CHUNK OPERATIONS
// ============================================================================

/// Check if chunk is loaded
pub fn is_chunk_loaded(world: &WorldData, chunk_pos: ChunkPos) -> bool {
    world.chunks.contains_key(&chunk_pos)
}

/// Load an empty chunk (no-op if already loaded)
pub fn load_chunk(world: &mut WorldData, chunk_pos: ChunkPos) {
    let chunk_size = world.chunk_size;
    world
        .chunks
        .entry(chunk_pos)
        .or_insert_with(|| ChunkData::new(chunk_pos, chunk_size));
}

/// Load a chunk filled with one block, replacing any loaded chunk there
pub fn load_filled_chunk(world: &mut WorldData, chunk_pos: ChunkPos, block: BlockId) {
    let chunk = ChunkData::filled(chunk_pos, world.chunk_size, block);
    world.chunks.insert(chunk_pos, chunk);
}

/// Unload a chunk together with the extended objects inside it
pub fn unload_chunk(world: &mut WorldData, chunk_pos: ChunkPos) -> Option<ChunkData> {
    let chunk_size = world.chunk_size;
    world
        .extended_objects
        .retain(|pos, _| voxel_to_chunk(*pos, chunk_size) != chunk_pos);
    world.chunks.remove(&chunk_pos)
}

/// Get all loaded chunks
pub fn get_loaded_chunks(world: &WorldData) -> Vec<ChunkPos> {
    world.chunks.keys().copied().collect()
}

// ============================================================================
// BATCH OPERATIONS
// ============================================================================

/// Set multiple blocks at once
pub fn set_blocks_batch(
    world: &mut WorldData,
    blocks: &[(VoxelPos, BlockId)],
) -> Vec<Result<WorldModification, WorldError>> {
    blocks
        .iter()
        .map(|(pos, block_id)| set_block(world, *pos, *block_id))
        .collect()
}

/// Get multiple blocks at once
pub fn get_blocks_batch(world: &WorldData, positions: &[VoxelPos]) -> Vec<Option<BlockId>> {
    positions.iter().map(|pos| get_block(world, *pos)).collect()
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Convert voxel position to chunk position
pub fn voxel_to_chunk(pos: VoxelPos, chunk_size: u32) -> ChunkPos {
    pos.to_chunk_pos(chunk_size)
}

/// Convert chunk position to world position (chunk corner)
pub fn chunk_to_world(chunk_pos: ChunkPos, chunk_size: u32) -> VoxelPos {
    let chunk_size_i32 = chunk_size as i32;
    VoxelPos {
        x: chunk_pos.x * chunk_size_i32,
        y: chunk_pos.y * chunk_size_i32,
        z: chunk_pos.z * chunk_size_i32,
    }
}

/// Get local position within chunk (0 to chunk_size-1)
pub fn get_local_position(pos: VoxelPos, chunk_size: u32) -> (u32, u32, u32) {
    let chunk_size_i32 = chunk_size as i32;
    (
        pos.x.rem_euclid(chunk_size_i32) as u32,
        pos.y.rem_euclid(chunk_size_i32) as u32,
        pos.z.rem_euclid(chunk_size_i32) as u32,
    )
}

fn local_index(pos: VoxelPos, chunk_size: u32) -> usize {
    let (local_x, local_y, local_z) = get_local_position(pos, chunk_size);
    (local_x + local_y * chunk_size + local_z * chunk_size * chunk_size) as usize
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Collect world statistics
pub fn get_world_stats(world: &WorldData) -> WorldStats {
    WorldStats {
        loaded_chunks: world.chunks.len(),
        non_air_blocks: world.chunks.values().map(|c| c.non_air_blocks as u64).sum(),
        extended_objects: world.extended_objects.len(),
    }
}

/// Log world statistics
pub fn log_world_stats(world: &WorldData) {
    let stats = get_world_stats(world);
    log::info!("[World] Statistics for world {}:", world.id);
    log::info!("  Chunk size: {}", world.chunk_size);
    log::info!("  Loaded chunks: {}", stats.loaded_chunks);
    log::info!("  Non-air blocks: {}", stats.non_air_blocks);
    log::info!("  Extended objects: {}", stats.extended_objects);
}

/// Validate world data integrity
pub fn validate_world_data(world: &WorldData) -> Result<(), String> {
    let expected_blocks_per_chunk = (world.chunk_size.pow(3)) as usize;

    for chunk in world.chunks.values() {
        if chunk.blocks.len() != expected_blocks_per_chunk {
            return Err(format!(
                "Chunk at {:?} has {} blocks, expected {}",
                chunk.position,
                chunk.blocks.len(),
                expected_blocks_per_chunk
            ));
        }
    }

    for pos in world.extended_objects.keys() {
        match get_block(world, *pos) {
            Some(block) if !block.is_air() => {}
            _ => return Err(format!("Extended object at {} has no backing block", pos)),
        }
    }

    Ok(())
}
