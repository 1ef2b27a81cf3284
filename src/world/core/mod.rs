//! Core world data types and fundamental structures
//!
//! The essential data types that every grid query and registry lookup is
//! expressed in, independent of which grid backend answers the queries.

mod block;
mod capability;
mod position;
pub mod registry_data;
pub mod registry_operations;

pub use block::BlockId;
pub use capability::{CapabilitySet, CapabilityTag};
pub use position::{ChunkPos, Location, VoxelPos, WorldId};
pub use registry_data::{BlockRegistration, BlockRegistryData};
