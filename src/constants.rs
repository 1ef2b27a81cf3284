//! Engine-wide constants

/// Grid constants
pub mod core {
    /// Edge length of a reference-grid chunk in voxels
    pub const CHUNK_SIZE: u32 = 16;

    /// Largest accepted chunk edge; keeps size^3 well inside u32
    pub const MAX_CHUNK_SIZE: u32 = 256;
}

/// Neighborhood scan limits
pub mod scan {
    /// Radius used when the caller does not pass one
    pub const DEFAULT_SCAN_RADIUS: u32 = 8;

    /// Default upper bound accepted by the service
    pub const DEFAULT_MAX_SCAN_RADIUS: u32 = 32;

    /// Hard ceiling for `max_scan_radius`: (2*64+1)^3 is about 2.1M cells per scan
    pub const MAX_SUPPORTED_SCAN_RADIUS: u32 = 64;
}

/// Aura flow
pub mod aura {
    /// Aura yielded by one burst of a passive controller
    pub const DEFAULT_PASSIVE_BURST: u32 = 1;
}

/// Item metadata layout
pub mod metadata {
    /// Compound holding everything the upgrade ledger persists
    pub const UPGRADE_NAMESPACE: &str = "aura:upgrade_info";
    /// List of upgrade records inside the namespace
    pub const UPGRADE_LIST_KEY: &str = "Upgrades";
    pub const NAME_KEY: &str = "Name";
    pub const LEVEL_KEY: &str = "Level";

    /// Host display compound and its tooltip list
    pub const DISPLAY_KEY: &str = "display";
    pub const LORE_KEY: &str = "Lore";
}
