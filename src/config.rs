//! Aura engine configuration
//!
//! Loaded from TOML and validated before a service is built.

use crate::aura::{cube_volume, ScanMode};
use crate::constants;
use crate::upgrades::UpgradeEligibility;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aura engine configuration
///
/// Missing fields in a TOML file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    /// Radius used when a caller does not pass one
    pub default_scan_radius: u32,
    /// Larger requested radii are clamped to this
    pub max_scan_radius: u32,
    /// How absorber and emitter searches walk their cube
    pub scan_mode: ScanMode,
    /// Item markers required by the upgrade ledger
    pub upgrade_eligibility: UpgradeEligibility,
    /// Aura yielded by each passive controller burst
    pub passive_burst: u32,
}

impl AuraConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let ceiling = constants::scan::MAX_SUPPORTED_SCAN_RADIUS;

        if self.max_scan_radius > ceiling {
            return Err(anyhow::anyhow!(
                "AuraConfig: max_scan_radius {} exceeds maximum of {}",
                self.max_scan_radius,
                ceiling
            ));
        }

        if self.default_scan_radius > self.max_scan_radius {
            return Err(anyhow::anyhow!(
                "AuraConfig: default_scan_radius {} exceeds max_scan_radius {}",
                self.default_scan_radius,
                self.max_scan_radius
            ));
        }

        log::info!(
            "[AuraConfig] Validation: default_radius={}, max_radius={}, cells_per_scan<={}",
            self.default_scan_radius,
            self.max_scan_radius,
            cube_volume(self.max_scan_radius)
        );

        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("Failed to parse aura config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read aura config {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("Invalid aura config {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize aura config")
    }
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            default_scan_radius: constants::scan::DEFAULT_SCAN_RADIUS,
            max_scan_radius: constants::scan::DEFAULT_MAX_SCAN_RADIUS,
            scan_mode: ScanMode::Neighborhood,
            upgrade_eligibility: UpgradeEligibility::RequireBoth,
            passive_burst: constants::aura::DEFAULT_PASSIVE_BURST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AuraConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_scan_radius, 8);
        assert_eq!(config.scan_mode, ScanMode::Neighborhood);
        assert_eq!(config.upgrade_eligibility, UpgradeEligibility::RequireBoth);
    }

    #[test]
    fn test_invalid_radii_rejected() {
        let too_far = AuraConfig {
            max_scan_radius: 1000,
            ..AuraConfig::default()
        };
        assert!(too_far.validate().is_err());

        let inverted = AuraConfig {
            default_scan_radius: 9,
            max_scan_radius: 4,
            ..AuraConfig::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AuraConfig {
            scan_mode: ScanMode::OriginOnly,
            upgrade_eligibility: UpgradeEligibility::RequireEither,
            passive_burst: 4,
            ..AuraConfig::default()
        };
        let text = config.to_toml_string().expect("Failed to serialize config");
        assert!(text.contains("scan_mode = \"origin_only\""));

        let parsed = AuraConfig::from_toml_str(&text).expect("Failed to parse config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = AuraConfig::from_toml_str("max_scan_radius = 12\n")
            .expect("Failed to parse config");
        assert_eq!(parsed.max_scan_radius, 12);
        assert_eq!(parsed.default_scan_radius, 8);
        assert_eq!(parsed.passive_burst, 1);

        assert!(AuraConfig::from_toml_str("default_scan_radius = 20\nmax_scan_radius = 10\n").is_err());
        assert!(AuraConfig::from_toml_str("scan_mode = \"sideways\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "default_scan_radius = 4").expect("Failed to write config");
        writeln!(file, "upgrade_eligibility = \"require_either\"").expect("Failed to write config");

        let config = AuraConfig::load_from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.default_scan_radius, 4);
        assert_eq!(config.upgrade_eligibility, UpgradeEligibility::RequireEither);

        assert!(AuraConfig::load_from_file(file.path().with_extension("missing")).is_err());
    }
}
