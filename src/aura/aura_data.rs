//! Aura Data - Pure DOP
//!
//! Query results and controller views. Everything here is recomputed per
//! request; nothing is meant to outlive the tick it was produced in.

use crate::world::core::{BlockId, CapabilityTag, Location};
use crate::world::data_types::AuraPool;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// CAPABILITY MARKERS
// ============================================================================

/// Compile-time handle for a capability tag
pub trait Capability: fmt::Debug + Copy + Eq + 'static {
    const TAG: CapabilityTag;
}

/// Marker for `CapabilityTag::Absorber`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Absorber;

/// Marker for `CapabilityTag::Emitter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Emitter;

/// Marker for `CapabilityTag::PassiveEmitter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassiveEmitter;

/// Marker for `CapabilityTag::Controller`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Controller;

impl Capability for Absorber {
    const TAG: CapabilityTag = CapabilityTag::Absorber;
}

impl Capability for Emitter {
    const TAG: CapabilityTag = CapabilityTag::Emitter;
}

impl Capability for PassiveEmitter {
    const TAG: CapabilityTag = CapabilityTag::PassiveEmitter;
}

impl Capability for Controller {
    const TAG: CapabilityTag = CapabilityTag::Controller;
}

// ============================================================================
// SCAN RESULTS
// ============================================================================

/// Where a cell's capabilities came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilitySource {
    /// The plain block type
    Block(BlockId),
    /// The extended object hosted by the cell
    ExtendedObject,
}

/// A location proven to expose capability `C` at scan time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuraLocation<C: Capability> {
    pub location: Location,
    pub source: CapabilitySource,
    marker: PhantomData<C>,
}

impl<C: Capability> AuraLocation<C> {
    pub fn new(location: Location, source: CapabilitySource) -> Self {
        Self {
            location,
            source,
            marker: PhantomData,
        }
    }

    pub fn tag(&self) -> CapabilityTag {
        C::TAG
    }
}

/// How the absorber/emitter helpers walk their cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Classify every cell of the cube
    #[default]
    Neighborhood,
    /// Legacy behavior: for every existing non-empty cell of the cube,
    /// classify the origin instead. Yields the origin repeatedly.
    OriginOnly,
}

// ============================================================================
// CONTROLLERS
// ============================================================================

/// Result of one controller burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurstOutcome {
    /// Controller location (the requester's origin for passive controllers)
    pub source: Location,
    /// Aura released by the burst
    pub amount: u32,
    pub passive: bool,
}

/// Anything that can release aura on request
pub trait AuraController {
    fn location(&self) -> Location;
    fn burst(&mut self) -> BurstOutcome;
}

/// Transient controller used when no placed controller is in range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveController {
    pub location: Location,
    /// Aura released per burst, drawn from the environment
    pub yield_per_burst: u32,
}

impl PassiveController {
    pub fn new(location: Location, yield_per_burst: u32) -> Self {
        Self {
            location,
            yield_per_burst,
        }
    }
}

impl AuraController for PassiveController {
    fn location(&self) -> Location {
        self.location
    }

    fn burst(&mut self) -> BurstOutcome {
        BurstOutcome {
            source: self.location,
            amount: self.yield_per_burst,
            passive: true,
        }
    }
}

/// Mutable view of a placed controller's pool
#[derive(Debug)]
pub struct PooledController<'a> {
    pub location: Location,
    pub pool: &'a mut AuraPool,
}

impl AuraController for PooledController<'_> {
    fn location(&self) -> Location {
        self.location
    }

    fn burst(&mut self) -> BurstOutcome {
        let amount = self.pool.burst_size.min(self.pool.stored);
        self.pool.stored -= amount;
        BurstOutcome {
            source: self.location,
            amount,
            passive: false,
        }
    }
}

/// The controller servicing a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedController {
    /// A controller placed in the world
    World(AuraLocation<Controller>),
    /// Fallback bound to the requesting origin
    Passive(PassiveController),
}

impl ResolvedController {
    pub fn location(&self) -> Location {
        match self {
            ResolvedController::World(found) => found.location,
            ResolvedController::Passive(passive) => passive.location,
        }
    }

    pub fn is_passive(&self) -> bool {
        matches!(self, ResolvedController::Passive(_))
    }
}

/// Everything aura-related around a point, gathered in one pass per tag
#[derive(Debug, Clone, PartialEq)]
pub struct AuraSurvey {
    pub origin: Location,
    pub radius: u32,
    pub absorbers: Vec<AuraLocation<Absorber>>,
    pub emitters: Vec<AuraLocation<Emitter>>,
    pub passive_emitters: Vec<AuraLocation<PassiveEmitter>>,
    pub controller: ResolvedController,
}
