//! Upgrade Data - Pure DOP
//!
//! NO METHODS. Just data.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One ledger record: a named upgrade and its level (always >= 1)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpgradeEntry {
    pub name: String,
    pub level: u32,
}

/// A known upgrade type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    /// Identifier stored in the ledger
    pub name: String,
    /// Human-readable name used for display lines
    pub display_name: String,
    /// Informational; the ledger never clamps to it
    pub max_level: u32,
}

/// Registry of known upgrade types, in registration order
#[derive(Debug, Clone, Default)]
pub struct UpgradeRegistryData {
    pub definitions: Vec<UpgradeDefinition>,
    pub name_to_index: FxHashMap<String, usize>,
}

/// Which item markers a stack needs before the ledger will touch it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeEligibility {
    /// Armor-upgradeable and tool-upgradeable at once
    #[default]
    RequireBoth,
    /// Either marker is enough
    RequireEither,
}

/// What a removal did to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Entry kept at the contained level
    Decremented(u32),
    /// Entry was at level 1 and is gone
    Removed,
    /// No entry with that name
    NotFound,
}
