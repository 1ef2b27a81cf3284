//! Upgrade ledger on item metadata

// Data structures
pub mod upgrade_data;
// Pure functions
pub mod ledger_operations;
pub mod roman;
pub mod upgrade_operations;

pub use ledger_operations::{
    add_upgrade_to_stack, check_eligibility, get_upgrades_from_stack, is_eligible,
    known_upgrades, read_entries, refresh_upgrade_display, remove_upgrade_from_stack,
};
pub use roman::roman_numerals;
pub use upgrade_data::{
    RemoveOutcome, UpgradeDefinition, UpgradeEligibility, UpgradeEntry, UpgradeRegistryData,
};
pub use upgrade_operations::{create_upgrade_registry, display_name, get_upgrade, register_upgrade};
