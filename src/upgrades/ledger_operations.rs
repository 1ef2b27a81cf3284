//! Upgrade Ledger - Pure DOP Functions
//!
//! Reads and edits the upgrade list persisted in a stack's metadata:
//!
//! ```text
//! aura:upgrade_info
//!   Upgrades: [ { Name: string, Level: i32 }, ... ]
//! ```
//!
//! Names are unique within the list. Adding an existing name bumps its level,
//! removing a level-1 entry deletes it.

use super::roman::roman_numerals;
use super::upgrade_data::{
    RemoveOutcome, UpgradeDefinition, UpgradeEligibility, UpgradeEntry, UpgradeRegistryData,
};
use super::upgrade_operations::{display_name, get_upgrade};
use crate::constants::metadata::{
    DISPLAY_KEY, LEVEL_KEY, LORE_KEY, NAME_KEY, UPGRADE_LIST_KEY, UPGRADE_NAMESPACE,
};
use crate::error::{EngineError, EngineResult};
use crate::items::item_data::{ItemCapabilities, ItemRegistryData, ItemStack};
use crate::items::item_operations::{describe_stack, get_item_capabilities};
use crate::items::metadata::{
    get_compound, get_list, get_or_create_compound, get_or_create_list, MetadataCompound,
    MetadataValue,
};
use rustc_hash::FxHashSet;

/// Highest level the ledger will store (levels persist as i32)
pub const MAX_STORED_LEVEL: u32 = i32::MAX as u32;

// ============================================================================
// ELIGIBILITY
// ============================================================================

pub fn is_eligible(rule: UpgradeEligibility, capabilities: ItemCapabilities) -> bool {
    match rule {
        UpgradeEligibility::RequireBoth => {
            capabilities.armor_upgradeable && capabilities.tool_upgradeable
        }
        UpgradeEligibility::RequireEither => {
            capabilities.armor_upgradeable || capabilities.tool_upgradeable
        }
    }
}

/// Fail with `IneligibleTarget` unless the stack's item satisfies `rule`
pub fn check_eligibility(
    items: &ItemRegistryData,
    stack: &ItemStack,
    rule: UpgradeEligibility,
) -> EngineResult<()> {
    if is_eligible(rule, get_item_capabilities(items, stack.item)) {
        Ok(())
    } else {
        Err(EngineError::IneligibleTarget {
            item: describe_stack(items, stack),
        })
    }
}

// ============================================================================
// RECORD ACCESS
// ============================================================================

fn record_name(record: &MetadataCompound) -> Option<&str> {
    record.get(NAME_KEY).and_then(MetadataValue::as_str)
}

/// Stored level; missing or negative levels read as 0
fn record_level(record: &MetadataCompound) -> u32 {
    record
        .get(LEVEL_KEY)
        .and_then(MetadataValue::as_i64)
        .and_then(|level| u32::try_from(level).ok())
        .unwrap_or(0)
}

fn level_value(level: u32) -> MetadataValue {
    MetadataValue::I32(i32::try_from(level).unwrap_or(i32::MAX))
}

fn new_record(name: &str, level: u32) -> MetadataValue {
    let mut record = MetadataCompound::new();
    record.insert(NAME_KEY.to_string(), MetadataValue::from(name));
    record.insert(LEVEL_KEY.to_string(), level_value(level));
    MetadataValue::Compound(record)
}

fn is_named(record: &MetadataValue, name: &str) -> bool {
    record.as_compound().and_then(record_name) == Some(name)
}

/// The persisted upgrade list, creating every missing level of the tree
fn upgrade_list_mut(stack: &mut ItemStack) -> EngineResult<&mut Vec<MetadataValue>> {
    let root = stack.metadata.get_or_insert_with(MetadataCompound::new);
    let info = get_or_create_compound(root, UPGRADE_NAMESPACE)?;
    get_or_create_list(info, UPGRADE_LIST_KEY)
}

/// Well-formed entries in stored order
///
/// Records that are not compounds, lack a name, carry a level below 1 or
/// repeat an earlier name are skipped with a warning.
pub fn read_entries(stack: &ItemStack) -> Vec<UpgradeEntry> {
    let Some(records) = stack
        .metadata
        .as_ref()
        .and_then(|root| get_compound(root, UPGRADE_NAMESPACE))
        .and_then(|info| get_list(info, UPGRADE_LIST_KEY))
    else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    let mut entries = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let Some(compound) = record.as_compound() else {
            log::warn!(
                "[Ledger] Skipping upgrade record {}: expected compound, found {}",
                index,
                record.type_name()
            );
            continue;
        };
        let Some(name) = record_name(compound) else {
            log::warn!("[Ledger] Skipping upgrade record {}: missing name", index);
            continue;
        };
        let level = record_level(compound);
        if level == 0 {
            log::warn!(
                "[Ledger] Skipping upgrade '{}': level must be at least 1",
                name
            );
            continue;
        }
        if !seen.insert(name) {
            log::warn!("[Ledger] Skipping duplicate upgrade '{}'", name);
            continue;
        }

        entries.push(UpgradeEntry {
            name: name.to_string(),
            level,
        });
    }

    entries
}

// ============================================================================
// LEDGER OPERATIONS
// ============================================================================

/// Upgrades on a stack, in stored order
pub fn get_upgrades_from_stack(
    items: &ItemRegistryData,
    stack: &ItemStack,
    rule: UpgradeEligibility,
) -> EngineResult<Vec<UpgradeEntry>> {
    check_eligibility(items, stack, rule)?;
    Ok(read_entries(stack))
}

/// Add one level of `name`, appending it at level 1 when absent
///
/// Returns the entry's new level.
pub fn add_upgrade_to_stack(
    items: &ItemRegistryData,
    stack: &mut ItemStack,
    name: &str,
    rule: UpgradeEligibility,
) -> EngineResult<u32> {
    check_eligibility(items, stack, rule)?;
    let label = describe_stack(items, stack);
    let records = upgrade_list_mut(stack)?;

    let existing = records.iter_mut().find_map(|record| match record {
        MetadataValue::Compound(compound) if record_name(compound) == Some(name) => Some(compound),
        _ => None,
    });

    let level = match existing {
        Some(compound) => {
            let level = record_level(compound).saturating_add(1).min(MAX_STORED_LEVEL);
            compound.insert(LEVEL_KEY.to_string(), level_value(level));
            level
        }
        None => {
            records.push(new_record(name, 1));
            1
        }
    };

    log::debug!("[Ledger] {} now has '{}' at level {}", label, name, level);
    Ok(level)
}

/// Remove one level of `name`; a level-1 entry is deleted
///
/// A missing entry leaves the ledger unchanged.
pub fn remove_upgrade_from_stack(
    items: &ItemRegistryData,
    stack: &mut ItemStack,
    name: &str,
    rule: UpgradeEligibility,
) -> EngineResult<RemoveOutcome> {
    check_eligibility(items, stack, rule)?;
    let label = describe_stack(items, stack);
    let records = upgrade_list_mut(stack)?;

    let Some(index) = records.iter().position(|record| is_named(record, name)) else {
        log::debug!("[Ledger] {} has no '{}' to remove", label, name);
        return Ok(RemoveOutcome::NotFound);
    };

    let level = records[index].as_compound().map(record_level).unwrap_or(0);
    let outcome = if level > 1 {
        if let MetadataValue::Compound(compound) = &mut records[index] {
            compound.insert(LEVEL_KEY.to_string(), level_value(level - 1));
        }
        RemoveOutcome::Decremented(level - 1)
    } else {
        records.remove(index);
        RemoveOutcome::Removed
    };

    log::debug!("[Ledger] Removed '{}' from {}: {:?}", name, label, outcome);
    Ok(outcome)
}

/// Rewrite the stack's tooltip lines from its ledger
///
/// Each line is the upgrade's display name and its level in Roman numerals.
/// Lines are stored under `display.Lore` and returned.
pub fn refresh_upgrade_display(
    stack: &mut ItemStack,
    registry: &UpgradeRegistryData,
) -> EngineResult<Vec<String>> {
    let lines: Vec<String> = read_entries(stack)
        .iter()
        .map(|entry| {
            format!(
                "{} {}",
                display_name(registry, &entry.name),
                roman_numerals(entry.level)
            )
        })
        .collect();

    let root = stack.metadata.get_or_insert_with(MetadataCompound::new);
    let display = get_or_create_compound(root, DISPLAY_KEY)?;
    display.insert(
        LORE_KEY.to_string(),
        MetadataValue::List(lines.iter().map(|line| MetadataValue::from(line.as_str())).collect()),
    );

    Ok(lines)
}

/// Registered definitions for the stack's upgrades; unknown names are skipped
pub fn known_upgrades(
    items: &ItemRegistryData,
    stack: &ItemStack,
    rule: UpgradeEligibility,
    registry: &UpgradeRegistryData,
) -> EngineResult<Vec<UpgradeDefinition>> {
    Ok(get_upgrades_from_stack(items, stack, rule)?
        .iter()
        .filter_map(|entry| {
            let definition = get_upgrade(registry, &entry.name);
            if definition.is_none() {
                log::debug!("[Ledger] Unknown upgrade '{}'", entry.name);
            }
            definition.cloned()
        })
        .collect())
}
