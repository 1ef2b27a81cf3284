//! Energy Request Router
//!
//! Validates a requester, finds its controller and bursts it. Holds no state
//! of its own; the only mutation is inside the controller's pool.

use super::aura_data::{
    Absorber, AuraLocation, AuraSurvey, BurstOutcome, Capability, Emitter, PassiveEmitter,
    ScanMode,
};
use super::classifier::classify;
use super::controller_operations::{burst_controller, resolve_controller, ControllerFactory};
use super::scanner::scan;
use crate::error::{EngineError, EngineResult};
use crate::world::core::{CapabilityTag, Location};
use crate::world::interfaces::{CapabilityQuery, GridQuery, GridQueryMut};

/// Check that `origin` may draw aura
///
/// # Errors
/// * `InvalidLocation` - the cell does not exist or is air
/// * `MissingCapability` - the cell (or its extended object) is not an absorber
pub fn validate_absorber<G, R>(grid: &G, capabilities: &R, origin: Location) -> EngineResult<()>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
{
    if !grid.exists(origin) || grid.is_empty(origin) {
        return Err(EngineError::InvalidLocation { location: origin });
    }

    if !classify(grid, capabilities, origin).contains(CapabilityTag::Absorber) {
        return Err(EngineError::MissingCapability {
            location: origin,
            capability: CapabilityTag::Absorber,
        });
    }

    Ok(())
}

/// Request a burst of aura for the absorber at `origin`
///
/// Uses the nearest controller within `radius`, or a passive one when none
/// is in range.
pub fn request_aura<G, R, F>(
    grid: &mut G,
    capabilities: &R,
    factory: &F,
    origin: Location,
    radius: u32,
) -> EngineResult<BurstOutcome>
where
    G: GridQueryMut + ?Sized,
    R: CapabilityQuery + ?Sized,
    F: ControllerFactory + ?Sized,
{
    validate_absorber(grid, capabilities, origin)?;

    let controller = resolve_controller(grid, capabilities, factory, origin, radius)?;
    let outcome = burst_controller(grid, controller)?;

    log::debug!(
        "[Aura] {} drew {} aura from {}{}",
        origin,
        outcome.amount,
        outcome.source,
        if outcome.passive { " (passive)" } else { "" }
    );
    Ok(outcome)
}

/// Collect a scan into a list
pub fn find_within_range<C, G, R>(
    grid: &G,
    capabilities: &R,
    origin: Location,
    radius: u32,
    mode: ScanMode,
) -> Vec<AuraLocation<C>>
where
    C: Capability,
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
{
    scan::<C, _, _>(grid, capabilities, origin, radius, mode).collect()
}

/// Absorbers, emitters, passive emitters and the servicing controller around `origin`
pub fn survey<G, R, F>(
    grid: &G,
    capabilities: &R,
    factory: &F,
    origin: Location,
    radius: u32,
    mode: ScanMode,
) -> EngineResult<AuraSurvey>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
    F: ControllerFactory + ?Sized,
{
    Ok(AuraSurvey {
        origin,
        radius,
        absorbers: find_within_range::<Absorber, _, _>(grid, capabilities, origin, radius, mode),
        emitters: find_within_range::<Emitter, _, _>(grid, capabilities, origin, radius, mode),
        passive_emitters: find_within_range::<PassiveEmitter, _, _>(
            grid,
            capabilities,
            origin,
            radius,
            mode,
        ),
        controller: resolve_controller(grid, capabilities, factory, origin, radius)?,
    })
}
