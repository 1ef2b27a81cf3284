//! Controller Operations - Pure DOP Functions
//!
//! Resolving which controller services a point, and bursting it.

use super::aura_data::{
    AuraController, AuraLocation, BurstOutcome, Controller, PassiveController, PooledController,
    ResolvedController, ScanMode,
};
use super::scanner::scan;
use crate::error::{EngineError, EngineResult};
use crate::world::core::Location;
use crate::world::data_types::AuraPool;
use crate::world::interfaces::{CapabilityQuery, GridQuery, GridQueryMut};
use cgmath::{MetricSpace, Point3};

// ============================================================================
// CONTROLLER FACTORY
// ============================================================================

/// Builds the passive fallback controller
pub trait ControllerFactory {
    fn create_passive(&self, origin: Location) -> EngineResult<PassiveController>;
}

/// Factory yielding a fixed amount of aura per passive burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultControllerFactory {
    pub passive_burst: u32,
}

impl Default for DefaultControllerFactory {
    fn default() -> Self {
        Self {
            passive_burst: crate::constants::aura::DEFAULT_PASSIVE_BURST,
        }
    }
}

impl ControllerFactory for DefaultControllerFactory {
    fn create_passive(&self, origin: Location) -> EngineResult<PassiveController> {
        Ok(PassiveController::new(origin, self.passive_burst))
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Euclidean distance between two cell coordinates (world ids are ignored)
pub fn distance_between(a: Location, b: Location) -> f64 {
    let pa = Point3::new(a.pos.x as f64, a.pos.y as f64, a.pos.z as f64);
    let pb = Point3::new(b.pos.x as f64, b.pos.y as f64, b.pos.z as f64);
    pa.distance(pb)
}

/// Nearest controller in the cube, if any
///
/// Ties keep the earliest hit in scan order.
pub fn find_nearest_controller<G, R>(
    grid: &G,
    capabilities: &R,
    origin: Location,
    radius: u32,
) -> Option<AuraLocation<Controller>>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
{
    let mut closest: Option<(AuraLocation<Controller>, f64)> = None;

    for candidate in scan::<Controller, _, _>(grid, capabilities, origin, radius, ScanMode::Neighborhood)
    {
        let distance = distance_between(origin, candidate.location);
        match closest {
            Some((_, best)) if best <= distance => {}
            _ => closest = Some((candidate, distance)),
        }
    }

    closest.map(|(found, _)| found)
}

/// Controller servicing `origin`, falling back to a passive one
///
/// Only a failing host factory can make this return `Err`.
pub fn resolve_controller<G, R, F>(
    grid: &G,
    capabilities: &R,
    factory: &F,
    origin: Location,
    radius: u32,
) -> EngineResult<ResolvedController>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
    F: ControllerFactory + ?Sized,
{
    if let Some(found) = find_nearest_controller(grid, capabilities, origin, radius) {
        log::debug!(
            "[Aura] Controller for {} resolved to {}",
            origin,
            found.location
        );
        return Ok(ResolvedController::World(found));
    }

    match factory.create_passive(origin) {
        Ok(passive) => {
            log::debug!(
                "[Aura] No controller within {} of {}, using passive controller",
                radius,
                origin
            );
            Ok(ResolvedController::Passive(passive))
        }
        Err(err) => {
            log::error!(
                "[Aura] Failed to construct passive controller at {}: {}",
                origin,
                err
            );
            Err(EngineError::ConstructionFailure {
                location: origin,
                reason: err.to_string(),
            })
        }
    }
}

// ============================================================================
// BURST
// ============================================================================

/// Burst a resolved controller
///
/// Placed controllers drain their extended object's pool in place. A placed
/// controller without a pool releases nothing.
pub fn burst_controller<G>(grid: &mut G, controller: ResolvedController) -> EngineResult<BurstOutcome>
where
    G: GridQueryMut + ?Sized,
{
    match controller {
        ResolvedController::Passive(mut passive) => Ok(passive.burst()),
        ResolvedController::World(found) => {
            let location = found.location;
            if !grid.exists(location) {
                return Err(EngineError::InvalidLocation { location });
            }

            // Block-level controller capability has no object behind it
            let pool = grid
                .extended_object_mut(location)
                .and_then(|object| object.aura_pool.as_mut());

            match pool {
                Some(pool) => Ok(PooledController { location, pool }.burst()),
                None => {
                    log::debug!("[Aura] Controller at {} has no aura pool", location);
                    Ok(BurstOutcome {
                        source: location,
                        amount: 0,
                        passive: false,
                    })
                }
            }
        }
    }
}

/// Aura currently stored by a resolved controller, `None` for passive ones
pub fn stored_aura<G>(grid: &G, controller: &ResolvedController) -> Option<AuraPool>
where
    G: GridQuery + ?Sized,
{
    match controller {
        ResolvedController::Passive(_) => None,
        ResolvedController::World(found) => grid
            .extended_object(found.location)
            .and_then(|object| object.aura_pool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::test_support::AuraFixture;
    use crate::world::blocks::BlockProperties;
    use crate::world::core::registry_operations::register_block;
    use crate::world::core::{BlockId, CapabilitySet, CapabilityTag};

    struct BrokenFactory;

    impl ControllerFactory for BrokenFactory {
        fn create_passive(&self, _origin: Location) -> EngineResult<PassiveController> {
            Err(EngineError::Internal {
                message: "no passive controller type".to_string(),
            })
        }
    }

    #[test]
    fn test_single_controller_is_resolved_for_every_radius() {
        let mut fixture = AuraFixture::new();
        let controller = fixture.place_controller(2, -1, 1, 100, 10);
        let origin = fixture.loc(0, 0, 0);

        for radius in 2..=5 {
            let resolved = resolve_controller(
                &fixture.world,
                &fixture.blocks,
                &DefaultControllerFactory::default(),
                origin,
                radius,
            )
            .expect("Resolution should succeed");
            assert_eq!(resolved.location(), controller);
            assert!(!resolved.is_passive());
        }
    }

    #[test]
    fn test_no_controller_falls_back_to_passive_at_origin() {
        let fixture = AuraFixture::new();
        let origin = fixture.loc(-3, 4, 5);

        for radius in 0..=3 {
            let resolved = resolve_controller(
                &fixture.world,
                &fixture.blocks,
                &DefaultControllerFactory { passive_burst: 4 },
                origin,
                radius,
            )
            .expect("Resolution should succeed");
            assert_eq!(
                resolved,
                ResolvedController::Passive(PassiveController::new(origin, 4))
            );
        }
    }

    #[test]
    fn test_nearest_of_two_controllers_wins() {
        let mut fixture = AuraFixture::new();
        // Scanned first but farther away
        fixture.place_controller(-3, -3, -3, 10, 1);
        let near = fixture.place_controller(1, 1, 0, 10, 1);
        let origin = fixture.loc(0, 0, 0);

        let found = find_nearest_controller(&fixture.world, &fixture.blocks, origin, 4)
            .expect("Controller should be found");
        assert_eq!(found.location, near);
    }

    #[test]
    fn test_equidistant_controllers_keep_scan_order() {
        let mut fixture = AuraFixture::new();
        let first = fixture.place_controller(-2, 0, 0, 10, 1);
        fixture.place_controller(2, 0, 0, 10, 1);
        fixture.place_controller(0, 2, 0, 10, 1);
        let origin = fixture.loc(0, 0, 0);

        let found = find_nearest_controller(&fixture.world, &fixture.blocks, origin, 2)
            .expect("Controller should be found");
        assert_eq!(found.location, first);
    }

    #[test]
    fn test_controller_on_origin_cell_counts() {
        let mut fixture = AuraFixture::new();
        let origin = fixture.place_controller(0, 0, 0, 10, 1);

        let found = find_nearest_controller(&fixture.world, &fixture.blocks, origin, 0)
            .expect("Controller should be found");
        assert_eq!(found.location, origin);
    }

    #[test]
    fn test_failing_factory_surfaces_construction_failure() {
        let fixture = AuraFixture::new();
        let origin = fixture.loc(0, 0, 0);
        let result = resolve_controller(&fixture.world, &fixture.blocks, &BrokenFactory, origin, 1);
        assert!(matches!(
            result,
            Err(EngineError::ConstructionFailure { location, .. }) if location == origin
        ));
    }

    #[test]
    fn test_burst_drains_world_pool() {
        let mut fixture = AuraFixture::new();
        fixture.place_controller(1, 0, 0, 25, 10);
        let origin = fixture.loc(0, 0, 0);

        let resolved = resolve_controller(
            &fixture.world,
            &fixture.blocks,
            &DefaultControllerFactory::default(),
            origin,
            1,
        )
        .expect("Resolution should succeed");

        let amounts: Vec<u32> = (0..4)
            .map(|_| {
                burst_controller(&mut fixture.world, resolved)
                    .expect("Burst should succeed")
                    .amount
            })
            .collect();
        assert_eq!(amounts, vec![10, 10, 5, 0]);
        assert_eq!(stored_aura(&fixture.world, &resolved).map(|p| p.stored), Some(0));
    }

    #[test]
    fn test_block_level_controller_bursts_nothing() {
        let mut fixture = AuraFixture::new();
        let props = BlockProperties {
            name: "relay".to_string(),
            capabilities: CapabilitySet::of(&[CapabilityTag::Controller]),
            ..BlockProperties::default()
        };
        let relay = register_block(&mut fixture.blocks, "aura:relay", props)
            .expect("Failed to register relay");
        fixture.place_block(0, 1, 0, relay);
        fixture.place_block(0, 0, 0, BlockId::STONE);

        let resolved = resolve_controller(
            &fixture.world,
            &fixture.blocks,
            &DefaultControllerFactory::default(),
            fixture.loc(0, 0, 0),
            1,
        )
        .expect("Resolution should succeed");
        let outcome = burst_controller(&mut fixture.world, resolved).expect("Burst should succeed");
        assert_eq!(outcome.amount, 0);
        assert!(!outcome.passive);
    }
}
