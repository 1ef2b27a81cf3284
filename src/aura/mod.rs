//! Aura propagation and controller discovery
//!
//! Classifier, scanner, controller resolution and the request router, plus
//! `AuraService` which bundles them behind one API. All functions borrow the
//! grid for the duration of a call; nothing is cached between calls.

// Data structures
pub mod aura_data;
// Pure functions
pub mod classifier;
pub mod controller_operations;
pub mod router;
pub mod scanner;

pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use aura_data::{
    Absorber, AuraController, AuraLocation, AuraSurvey, BurstOutcome, Capability,
    CapabilitySource, Controller, Emitter, PassiveController, PassiveEmitter, PooledController,
    ResolvedController, ScanMode,
};
pub use classifier::{classify, classify_with_source, exposes};
pub use controller_operations::{
    burst_controller, distance_between, find_nearest_controller, resolve_controller,
    stored_aura, ControllerFactory, DefaultControllerFactory,
};
pub use router::{find_within_range, request_aura, survey, validate_absorber};
pub use scanner::{cube_volume, scan, CubeOffsets, CubeScan};
pub use service::AuraService;
