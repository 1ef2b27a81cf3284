//! Capability Classifier
//!
//! Decides which aura capabilities a single cell exposes right now.

use super::aura_data::CapabilitySource;
use crate::world::core::{CapabilitySet, CapabilityTag, Location};
use crate::world::interfaces::{CapabilityQuery, GridQuery};

/// Classify a cell, reporting where its capabilities came from
///
/// Nonexistent and empty cells return `None` before any capability lookup.
/// A hosted extended object's set replaces the block's own set entirely.
pub fn classify_with_source<G, R>(
    grid: &G,
    capabilities: &R,
    loc: Location,
) -> Option<(CapabilitySet, CapabilitySource)>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
{
    if !grid.exists(loc) || grid.is_empty(loc) {
        return None;
    }

    match grid.extended_object(loc) {
        Some(object) => Some((object.capabilities, CapabilitySource::ExtendedObject)),
        None => {
            let block = grid.cell_type(loc);
            Some((
                capabilities.block_capabilities(block),
                CapabilitySource::Block(block),
            ))
        }
    }
}

/// Capabilities a cell currently exposes
pub fn classify<G, R>(grid: &G, capabilities: &R, loc: Location) -> CapabilitySet
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
{
    classify_with_source(grid, capabilities, loc)
        .map(|(set, _)| set)
        .unwrap_or(CapabilitySet::EMPTY)
}

/// Whether a cell currently exposes one capability
pub fn exposes<G, R>(grid: &G, capabilities: &R, loc: Location, tag: CapabilityTag) -> bool
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
{
    classify(grid, capabilities, loc).contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::test_support::AuraFixture;
    use crate::world::core::BlockId;
    use crate::world::data_types::ExtendedObject;

    #[test]
    fn test_missing_and_air_cells_expose_nothing() {
        let fixture = AuraFixture::new();
        // Outside every loaded chunk
        let far = fixture.loc(1000, 0, 0);
        assert!(classify_with_source(&fixture.world, &fixture.blocks, far).is_none());
        // Loaded but air
        let air = fixture.loc(1, 1, 1);
        assert!(classify(&fixture.world, &fixture.blocks, air).is_empty());
    }

    #[test]
    fn test_block_capabilities_used_without_object() {
        let mut fixture = AuraFixture::new();
        let loc = fixture.place_block(2, 2, 2, fixture.absorber_block);

        let (set, source) = classify_with_source(&fixture.world, &fixture.blocks, loc)
            .expect("Absorber cell should classify");
        assert!(set.contains(CapabilityTag::Absorber));
        assert_eq!(source, CapabilitySource::Block(fixture.absorber_block));
    }

    #[test]
    fn test_extended_object_replaces_block_capabilities() {
        let mut fixture = AuraFixture::new();
        let loc = fixture.place_block(3, 3, 3, fixture.absorber_block);
        fixture.attach(
            loc,
            ExtendedObject::with_capabilities(
                "aura:inert",
                CapabilitySet::of(&[CapabilityTag::Emitter]),
            ),
        );

        assert!(!exposes(&fixture.world, &fixture.blocks, loc, CapabilityTag::Absorber));
        assert!(exposes(&fixture.world, &fixture.blocks, loc, CapabilityTag::Emitter));
    }

    #[test]
    fn test_plain_block_has_no_capabilities() {
        let mut fixture = AuraFixture::new();
        let loc = fixture.place_block(0, 0, 0, BlockId::STONE);
        let (set, _) = classify_with_source(&fixture.world, &fixture.blocks, loc)
            .expect("Stone cell should classify");
        assert!(set.is_empty());
    }
}
