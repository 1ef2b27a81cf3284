use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a host world (dimension)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WorldId(pub i32);

impl WorldId {
    pub const OVERWORLD: WorldId = WorldId(0);
}

impl Default for WorldId {
    fn default() -> Self {
        WorldId::OVERWORLD
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer voxel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position shifted by an offset, `None` if any axis leaves the i32 range
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    pub fn to_chunk_pos(self, chunk_size: u32) -> ChunkPos {
        let chunk_size_i32 = chunk_size as i32;
        ChunkPos {
            x: self.x.div_euclid(chunk_size_i32),
            y: self.y.div_euclid(chunk_size_i32),
            z: self.z.div_euclid(chunk_size_i32),
        }
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Chunk coordinate (voxel position divided by chunk size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A voxel position inside a specific world.
///
/// This is the key every grid query takes. Two locations with equal
/// coordinates in different worlds are different cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub world: WorldId,
    pub pos: VoxelPos,
}

impl Location {
    pub const fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self {
            world,
            pos: VoxelPos::new(x, y, z),
        }
    }

    pub const fn at(world: WorldId, pos: VoxelPos) -> Self {
        Self { world, pos }
    }

    /// Same world, shifted position
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            world: self.world,
            pos: self.pos.checked_offset(dx, dy, dz)?,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.world, self.pos)
    }
}
