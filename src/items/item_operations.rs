//! Item Registry Operations - Pure DOP Functions

use super::item_data::{ItemCapabilities, ItemId, ItemProperties, ItemRegistryData, ItemStack};
use crate::error::{EngineError, EngineResult};

/// Create an empty item registry
pub fn create_item_registry() -> ItemRegistryData {
    ItemRegistryData::default()
}

/// Register an item type under a unique name
pub fn register_item(
    data: &mut ItemRegistryData,
    name: &str,
    properties: ItemProperties,
) -> EngineResult<ItemId> {
    if let Some(existing) = data.name_to_id.get(name) {
        return Err(EngineError::InvalidConfig {
            field: "item".to_string(),
            value: name.to_string(),
            reason: format!("already registered as {}", existing),
        });
    }

    if data.next_id == u16::MAX {
        return Err(EngineError::ResourceExhausted(
            "item id space exhausted".to_string(),
        ));
    }

    let id = ItemId(data.next_id);
    data.next_id += 1;

    log::info!(
        "[ItemRegistry] Registered item '{}' with ID {} (armor: {}, tool: {})",
        name,
        id.0,
        properties.capabilities.armor_upgradeable,
        properties.capabilities.tool_upgradeable
    );

    data.items.insert(id, properties);
    data.name_to_id.insert(name.to_string(), id);
    Ok(id)
}

pub fn get_item_properties(data: &ItemRegistryData, id: ItemId) -> Option<&ItemProperties> {
    data.items.get(&id)
}

pub fn get_item_id(data: &ItemRegistryData, name: &str) -> Option<ItemId> {
    data.name_to_id.get(name).copied()
}

/// Upgrade markers of an item type. Unknown items carry none.
pub fn get_item_capabilities(data: &ItemRegistryData, id: ItemId) -> ItemCapabilities {
    data.items
        .get(&id)
        .map(|props| props.capabilities)
        .unwrap_or(ItemCapabilities::NONE)
}

/// Fresh stack without metadata
pub fn create_stack(item: ItemId, count: u32) -> ItemStack {
    ItemStack {
        item,
        count,
        metadata: None,
    }
}

/// Human-readable label used in messages, e.g. `1xaura:wand`
pub fn describe_stack(data: &ItemRegistryData, stack: &ItemStack) -> String {
    let name = get_item_properties(data, stack.item)
        .map(|props| props.name.as_str())
        .unwrap_or("unknown");
    format!("{}x{}", stack.count, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = create_item_registry();
        let props = ItemProperties {
            name: "aura:wand".to_string(),
            max_stack_size: 1,
            capabilities: ItemCapabilities::BOTH,
        };
        let id = register_item(&mut registry, "aura:wand", props).expect("Failed to register item");

        assert_eq!(get_item_id(&registry, "aura:wand"), Some(id));
        assert_eq!(get_item_capabilities(&registry, id), ItemCapabilities::BOTH);
        assert_eq!(get_item_capabilities(&registry, ItemId(500)), ItemCapabilities::NONE);
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut registry = create_item_registry();
        register_item(&mut registry, "aura:ring", ItemProperties::default())
            .expect("Failed to register item");
        assert!(register_item(&mut registry, "aura:ring", ItemProperties::default()).is_err());
    }

    #[test]
    fn test_describe_stack() {
        let mut registry = create_item_registry();
        let props = ItemProperties {
            name: "aura:shard".to_string(),
            ..ItemProperties::default()
        };
        let id = register_item(&mut registry, "aura:shard", props).expect("Failed to register item");

        assert_eq!(describe_stack(&registry, &create_stack(id, 3)), "3xaura:shard");
        assert_eq!(describe_stack(&registry, &create_stack(ItemId(77), 1)), "1xunknown");
    }
}
