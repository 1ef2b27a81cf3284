//! Upgrade Registry Operations - Pure DOP Functions

use super::upgrade_data::{UpgradeDefinition, UpgradeRegistryData};
use crate::error::{EngineError, EngineResult};

pub fn create_upgrade_registry() -> UpgradeRegistryData {
    UpgradeRegistryData::default()
}

/// Register an upgrade type
pub fn register_upgrade(
    data: &mut UpgradeRegistryData,
    definition: UpgradeDefinition,
) -> EngineResult<()> {
    if data.name_to_index.contains_key(&definition.name) {
        return Err(EngineError::InvalidConfig {
            field: "upgrade".to_string(),
            value: definition.name,
            reason: "already registered".to_string(),
        });
    }

    if definition.max_level == 0 {
        return Err(EngineError::InvalidConfig {
            field: "max_level".to_string(),
            value: "0".to_string(),
            reason: format!("upgrade '{}' must allow at least level 1", definition.name),
        });
    }

    log::info!(
        "[UpgradeRegistry] Registered upgrade '{}' (max level {})",
        definition.name,
        definition.max_level
    );

    data.name_to_index
        .insert(definition.name.clone(), data.definitions.len());
    data.definitions.push(definition);
    Ok(())
}

pub fn get_upgrade<'a>(data: &'a UpgradeRegistryData, name: &str) -> Option<&'a UpgradeDefinition> {
    data.name_to_index
        .get(name)
        .and_then(|&index| data.definitions.get(index))
}

/// Display name for a stored upgrade name, falling back to the raw name
pub fn display_name<'a>(data: &'a UpgradeRegistryData, name: &'a str) -> &'a str {
    get_upgrade(data, name)
        .map(|definition| definition.display_name.as_str())
        .unwrap_or(name)
}
