/// World Error Handling
///
/// Error types and utilities for grid mutations.
use crate::error::{EngineError, EngineResult};
use super::core::VoxelPos;

/// World-specific result type
pub type WorldResult<T> = EngineResult<T>;

/// Error context for world operations
pub trait WorldErrorContext<T> {
    fn world_context(self, context: &str) -> WorldResult<T>;
}

impl<T> WorldErrorContext<T> for Option<T> {
    fn world_context(self, context: &str) -> WorldResult<T> {
        self.ok_or_else(|| EngineError::ResourceNotFound {
            resource_type: "world".to_string(),
            id: context.to_string(),
        })
    }
}

impl<T, E> WorldErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn world_context(self, context: &str) -> WorldResult<T> {
        self.map_err(|e| EngineError::SystemError {
            component: "world".to_string(),
            error: format!("{}: {}", context, e),
        })
    }
}

// WorldError for DOP operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Chunk not loaded for position {0}")]
    ChunkNotLoaded(VoxelPos),

    #[error("Invalid position {0}")]
    InvalidPosition(VoxelPos),

    #[error("Invalid chunk size {0} (must be 1..={max})", max = crate::constants::core::MAX_CHUNK_SIZE)]
    InvalidChunkSize(u32),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}
