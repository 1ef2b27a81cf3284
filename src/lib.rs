// Aura Engine - Data-Oriented Programming (DOP) Architecture
//
// Aura propagation, controller discovery and the item upgrade ledger for a
// host voxel game.
// - Data lives in *_data modules, transformations in *_operations modules
// - The host world is read through the traits in world::interfaces
// - AuraService bundles configuration and registries behind one API
//
// For new code, prefer:
// - AuraService for host integration
// - aura::scan for any neighborhood query
// - Pure functions over methods

// Constants module
pub mod constants;

pub mod config;

pub mod error;

// Domain modules
pub mod aura;
pub mod items;
pub mod upgrades;
pub mod world;

pub use aura::{
    AuraLocation, AuraService, AuraSurvey, BurstOutcome, ControllerFactory,
    DefaultControllerFactory, PassiveController, ResolvedController, ScanMode,
};
pub use config::AuraConfig;
pub use error::{EngineError, EngineResult, ErrorContext, OptionExt};
pub use items::{ItemCapabilities, ItemId, ItemProperties, ItemStack, MetadataValue};
pub use upgrades::{RemoveOutcome, UpgradeDefinition, UpgradeEligibility, UpgradeEntry};
pub use world::{
    BlockId, CapabilitySet, CapabilityTag, CapabilityQuery, ExtendedObject, GridQuery,
    GridQueryMut, Location, VoxelPos, WorldData, WorldId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exports_config_alongside_error_context() {
        let config = AuraConfig::from_toml_str("passive_burst = 2\n").expect("Failed to parse config");
        assert_eq!(config.passive_burst, 2);

        let failed: Result<u32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert_eq!(
            failed.context("reading config"),
            Err(EngineError::Internal {
                message: "reading config: gone".to_string()
            })
        );
    }
}
