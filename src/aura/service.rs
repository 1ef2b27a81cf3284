//! Aura Service
//!
//! The public entry point. Owns its configuration and registries and hands
//! the grid through to the pure functions on every call, so one service can
//! serve any number of worlds.

use super::aura_data::{
    Absorber, AuraLocation, AuraSurvey, BurstOutcome, Controller, Emitter, PassiveEmitter,
    ResolvedController, ScanMode,
};
use super::controller_operations::{resolve_controller, ControllerFactory, DefaultControllerFactory};
use super::router;
use crate::error::EngineResult;
use crate::items::{ItemRegistryData, ItemStack};
use crate::upgrades::{
    self, RemoveOutcome, UpgradeDefinition, UpgradeEntry, UpgradeRegistryData,
};
use crate::world::core::{BlockRegistryData, Location};
use crate::world::interfaces::{CapabilityQuery, GridQuery, GridQueryMut};
use crate::AuraConfig;

/// Aura and upgrade API bound to one configuration
#[derive(Debug, Clone)]
pub struct AuraService<R = BlockRegistryData, F = DefaultControllerFactory>
where
    R: CapabilityQuery,
    F: ControllerFactory,
{
    config: AuraConfig,
    capabilities: R,
    items: ItemRegistryData,
    upgrades: UpgradeRegistryData,
    factory: F,
}

impl<R: CapabilityQuery> AuraService<R, DefaultControllerFactory> {
    /// Service with the default passive controller factory
    pub fn new(
        config: AuraConfig,
        capabilities: R,
        items: ItemRegistryData,
        upgrades: UpgradeRegistryData,
    ) -> anyhow::Result<Self> {
        let factory = DefaultControllerFactory {
            passive_burst: config.passive_burst,
        };
        Self::with_factory(config, capabilities, items, upgrades, factory)
    }
}

impl<R: CapabilityQuery, F: ControllerFactory> AuraService<R, F> {
    /// Service with a host-supplied controller factory
    pub fn with_factory(
        config: AuraConfig,
        capabilities: R,
        items: ItemRegistryData,
        upgrades: UpgradeRegistryData,
        factory: F,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        log::info!(
            "[Aura] Service ready: radius {} (max {}), scan mode {:?}, eligibility {:?}",
            config.default_scan_radius,
            config.max_scan_radius,
            config.scan_mode,
            config.upgrade_eligibility
        );

        Ok(Self {
            config,
            capabilities,
            items,
            upgrades,
            factory,
        })
    }

    pub fn config(&self) -> &AuraConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &R {
        &self.capabilities
    }

    pub fn capabilities_mut(&mut self) -> &mut R {
        &mut self.capabilities
    }

    pub fn items(&self) -> &ItemRegistryData {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemRegistryData {
        &mut self.items
    }

    pub fn upgrades(&self) -> &UpgradeRegistryData {
        &self.upgrades
    }

    pub fn upgrades_mut(&mut self) -> &mut UpgradeRegistryData {
        &mut self.upgrades
    }

    /// Requested radius, defaulted and clamped to `max_scan_radius`
    pub fn effective_radius(&self, radius: Option<u32>) -> u32 {
        let requested = radius.unwrap_or(self.config.default_scan_radius);
        if requested > self.config.max_scan_radius {
            log::warn!(
                "[Aura] Scan radius {} exceeds maximum {}, clamping",
                requested,
                self.config.max_scan_radius
            );
            return self.config.max_scan_radius;
        }
        requested
    }

    // ========================================================================
    // AURA
    // ========================================================================

    /// Nearest controller to `origin`, or a passive one bound to it
    pub fn get_controller_for_location<G>(
        &self,
        grid: &G,
        origin: Location,
        radius: Option<u32>,
    ) -> EngineResult<ResolvedController>
    where
        G: GridQuery + ?Sized,
    {
        let radius = self.effective_radius(radius);
        resolve_controller(grid, &self.capabilities, &self.factory, origin, radius)
    }

    /// Burst the controller servicing the absorber at `origin`
    pub fn request_aura<G>(
        &self,
        grid: &mut G,
        origin: Location,
        radius: Option<u32>,
    ) -> EngineResult<BurstOutcome>
    where
        G: GridQueryMut + ?Sized,
    {
        let radius = self.effective_radius(radius);
        router::request_aura(grid, &self.capabilities, &self.factory, origin, radius)
    }

    pub fn find_all_absorbers_within_range<G>(
        &self,
        grid: &G,
        origin: Location,
        radius: Option<u32>,
    ) -> Vec<AuraLocation<Absorber>>
    where
        G: GridQuery + ?Sized,
    {
        self.find::<Absorber, G>(grid, origin, radius, self.config.scan_mode)
    }

    pub fn find_all_emitters_within_range<G>(
        &self,
        grid: &G,
        origin: Location,
        radius: Option<u32>,
    ) -> Vec<AuraLocation<Emitter>>
    where
        G: GridQuery + ?Sized,
    {
        self.find::<Emitter, G>(grid, origin, radius, self.config.scan_mode)
    }

    pub fn find_all_passive_emitters_within_range<G>(
        &self,
        grid: &G,
        origin: Location,
        radius: Option<u32>,
    ) -> Vec<AuraLocation<PassiveEmitter>>
    where
        G: GridQuery + ?Sized,
    {
        self.find::<PassiveEmitter, G>(grid, origin, radius, self.config.scan_mode)
    }

    /// Every controller in range, in scan order. Always a neighborhood scan.
    pub fn find_all_controllers_within_range<G>(
        &self,
        grid: &G,
        origin: Location,
        radius: Option<u32>,
    ) -> Vec<AuraLocation<Controller>>
    where
        G: GridQuery + ?Sized,
    {
        self.find::<Controller, G>(grid, origin, radius, ScanMode::Neighborhood)
    }

    pub fn survey<G>(&self, grid: &G, origin: Location, radius: Option<u32>) -> EngineResult<AuraSurvey>
    where
        G: GridQuery + ?Sized,
    {
        let radius = self.effective_radius(radius);
        router::survey(
            grid,
            &self.capabilities,
            &self.factory,
            origin,
            radius,
            self.config.scan_mode,
        )
    }

    fn find<C, G>(
        &self,
        grid: &G,
        origin: Location,
        radius: Option<u32>,
        mode: ScanMode,
    ) -> Vec<AuraLocation<C>>
    where
        C: super::aura_data::Capability,
        G: GridQuery + ?Sized,
    {
        let radius = self.effective_radius(radius);
        router::find_within_range::<C, _, _>(grid, &self.capabilities, origin, radius, mode)
    }

    // ========================================================================
    // UPGRADES
    // ========================================================================

    pub fn get_upgrades_from_stack(&self, stack: &ItemStack) -> EngineResult<Vec<UpgradeEntry>> {
        upgrades::get_upgrades_from_stack(&self.items, stack, self.config.upgrade_eligibility)
    }

    pub fn add_upgrade_to_stack(&self, stack: &mut ItemStack, name: &str) -> EngineResult<u32> {
        upgrades::add_upgrade_to_stack(&self.items, stack, name, self.config.upgrade_eligibility)
    }

    pub fn remove_upgrade_from_stack(
        &self,
        stack: &mut ItemStack,
        name: &str,
    ) -> EngineResult<RemoveOutcome> {
        upgrades::remove_upgrade_from_stack(
            &self.items,
            stack,
            name,
            self.config.upgrade_eligibility,
        )
    }

    pub fn refresh_upgrade_display(&self, stack: &mut ItemStack) -> EngineResult<Vec<String>> {
        upgrades::refresh_upgrade_display(stack, &self.upgrades)
    }

    pub fn known_upgrades(&self, stack: &ItemStack) -> EngineResult<Vec<UpgradeDefinition>> {
        upgrades::known_upgrades(
            &self.items,
            stack,
            self.config.upgrade_eligibility,
            &self.upgrades,
        )
    }
}
