//! Block Registry Operations - Pure DOP Functions
//!
//! All functions take registry data and return results.
//! No methods, no self, just transformations.

use super::registry_data::{BlockRegistration, BlockRegistryData};
use super::{BlockId, CapabilitySet};
use crate::error::{EngineError, EngineResult};
use crate::world::blocks::block_data::BlockProperties;
use rustc_hash::FxHashMap;

/// Engine blocks use ids 1..ENGINE_ID_LIMIT, game blocks start there
pub const ENGINE_ID_LIMIT: u16 = 100;

/// Create new block registry data
pub fn create_block_registry() -> BlockRegistryData {
    BlockRegistryData {
        blocks: FxHashMap::default(),
        name_to_id: FxHashMap::default(),
        registrations: Vec::new(),
        next_engine_id: 1, // 0 is reserved for AIR
        next_game_id: ENGINE_ID_LIMIT,
    }
}

/// Register a new block type with properties
///
/// Names without a namespace, or in the `engine:` namespace, get engine ids.
/// Anything else (`aura:controller`, ...) is a game block.
pub fn register_block(
    data: &mut BlockRegistryData,
    name: &str,
    properties: BlockProperties,
) -> EngineResult<BlockId> {
    if let Some(existing) = data.name_to_id.get(name) {
        return Err(EngineError::InvalidConfig {
            field: "block".to_string(),
            value: name.to_string(),
            reason: format!("already registered as {}", existing.0),
        });
    }

    let is_engine_block = name.starts_with("engine:") || !name.contains(':');

    let id = if is_engine_block {
        if data.next_engine_id >= ENGINE_ID_LIMIT {
            return Err(EngineError::ResourceExhausted(format!(
                "too many engine blocks registered (max {})",
                ENGINE_ID_LIMIT - 1
            )));
        }
        let id = BlockId(data.next_engine_id);
        data.next_engine_id += 1;
        id
    } else {
        if data.next_game_id == u16::MAX {
            return Err(EngineError::ResourceExhausted(
                "game block id space exhausted".to_string(),
            ));
        }
        let id = BlockId(data.next_game_id);
        data.next_game_id += 1;
        id
    };

    data.blocks.insert(id, properties.clone());
    data.name_to_id.insert(name.to_string(), id);
    data.registrations.push(BlockRegistration {
        id,
        name: name.to_string(),
        properties,
    });

    log::info!(
        "[BlockRegistry] Registered block '{}' with ID {} (engine: {})",
        name,
        id.0,
        is_engine_block
    );
    Ok(id)
}

/// Get block properties by ID
pub fn get_properties(data: &BlockRegistryData, id: BlockId) -> Option<&BlockProperties> {
    data.blocks.get(&id)
}

/// Get a block ID by name
pub fn get_id(data: &BlockRegistryData, name: &str) -> Option<BlockId> {
    data.name_to_id.get(name).copied()
}

/// Get all registered blocks
pub fn get_registrations(data: &BlockRegistryData) -> &[BlockRegistration] {
    &data.registrations
}

/// Check if a block ID is registered
pub fn is_registered(data: &BlockRegistryData, id: BlockId) -> bool {
    data.blocks.contains_key(&id)
}

/// Aura capabilities of a plain block. Unknown ids and air expose nothing.
pub fn get_capabilities(data: &BlockRegistryData, id: BlockId) -> CapabilitySet {
    data.blocks
        .get(&id)
        .map(|props| props.capabilities)
        .unwrap_or(CapabilitySet::EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::CapabilityTag;

    #[test]
    fn test_game_blocks_get_game_ids() {
        let mut registry = create_block_registry();
        let engine = register_block(&mut registry, "engine:stone", BlockProperties::default())
            .expect("Failed to register engine block");
        let game = register_block(&mut registry, "aura:absorber", BlockProperties::default())
            .expect("Failed to register game block");

        assert_eq!(engine, BlockId(1));
        assert_eq!(game, BlockId(ENGINE_ID_LIMIT));
        assert!(is_registered(&registry, game));
        assert_eq!(get_registrations(&registry).len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = create_block_registry();
        register_block(&mut registry, "aura:node", BlockProperties::default())
            .expect("Failed to register block");
        let result = register_block(&mut registry, "aura:node", BlockProperties::default());
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_capabilities_lookup() {
        let mut registry = create_block_registry();
        let props = BlockProperties {
            name: "absorber".to_string(),
            capabilities: CapabilitySet::of(&[CapabilityTag::Absorber]),
            ..BlockProperties::default()
        };
        let id = register_block(&mut registry, "aura:absorber", props)
            .expect("Failed to register block");

        assert!(get_capabilities(&registry, id).contains(CapabilityTag::Absorber));
        assert!(get_capabilities(&registry, BlockId::AIR).is_empty());
        assert!(get_capabilities(&registry, BlockId(999)).is_empty());
    }
}
