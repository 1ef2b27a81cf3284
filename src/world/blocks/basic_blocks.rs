//! Basic engine blocks
//!
//! The fundamental blocks every world starts with. None of them carry aura
//! capabilities; games register their aura blocks on top of these.

use crate::error::EngineResult;
use crate::world::blocks::block_data::BlockProperties;
use crate::world::core::registry_data::BlockRegistryData;
use crate::world::core::registry_operations::register_block;

fn plain_block(name: &str) -> BlockProperties {
    BlockProperties {
        name: name.to_string(),
        ..BlockProperties::default()
    }
}

/// Register all basic engine blocks
///
/// Games should call this before registering their own blocks so the
/// `BlockId` constants line up with the assigned ids.
pub fn register_basic_blocks(registry: &mut BlockRegistryData) -> EngineResult<()> {
    // Air (BlockId 0) is implicit and never registered
    register_block(registry, "engine:grass", plain_block("grass"))?;
    register_block(registry, "engine:dirt", plain_block("dirt"))?;
    register_block(registry, "engine:stone", plain_block("stone"))?;
    register_block(registry, "engine:sand", plain_block("sand"))?;
    register_block(registry, "engine:glass", plain_block("glass"))?;
    register_block(registry, "engine:log", plain_block("log"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::registry_operations::{create_block_registry, get_id};
    use crate::world::core::BlockId;

    #[test]
    fn test_basic_block_ids_match_constants() {
        let mut registry = create_block_registry();
        register_basic_blocks(&mut registry).expect("Failed to register basic blocks");

        assert_eq!(get_id(&registry, "engine:grass"), Some(BlockId::GRASS));
        assert_eq!(get_id(&registry, "engine:stone"), Some(BlockId::STONE));
        assert_eq!(get_id(&registry, "engine:log"), Some(BlockId::LOG));
    }
}
