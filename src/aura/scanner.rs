//! Spatial Scanner
//!
//! The single neighborhood-search primitive. Walks the inclusive cube
//! `[-radius, radius]^3` around an origin with x outermost, then y, then z,
//! all ascending, and yields the cells exposing one capability.
//!
//! Scans borrow the grid, so the grid cannot change while one is in flight.
//! Results are in scan order, not distance order.

use super::aura_data::{AuraLocation, Capability, ScanMode};
use super::classifier::classify_with_source;
use crate::world::core::Location;
use crate::world::interfaces::{CapabilityQuery, GridQuery};
use std::marker::PhantomData;

/// Number of cells in a scan cube, saturating at `u64::MAX`
pub fn cube_volume(radius: u32) -> u64 {
    let edge = 2 * radius as u64 + 1;
    edge.saturating_mul(edge).saturating_mul(edge)
}

/// Offsets of the scan cube in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeOffsets {
    radius: i32,
    next: Option<(i32, i32, i32)>,
}

impl CubeOffsets {
    pub fn new(radius: u32) -> Self {
        let radius = i32::try_from(radius).unwrap_or(i32::MAX);
        Self {
            radius,
            next: Some((-radius, -radius, -radius)),
        }
    }
}

impl Iterator for CubeOffsets {
    type Item = (i32, i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (i, j, k) = current;
        let r = self.radius;

        self.next = if k < r {
            Some((i, j, k + 1))
        } else if j < r {
            Some((i, j + 1, -r))
        } else if i < r {
            Some((i + 1, -r, -r))
        } else {
            None
        };

        Some(current)
    }
}

/// Lazy scan over the cube around `origin` for capability `C`
///
/// Cloning a scan restarts nothing; it forks the remaining sequence. Call
/// `scan` again for a fresh walk.
pub struct CubeScan<'a, G: ?Sized, R: ?Sized, C> {
    grid: &'a G,
    capabilities: &'a R,
    origin: Location,
    mode: ScanMode,
    offsets: CubeOffsets,
    marker: PhantomData<C>,
}

impl<G: ?Sized, R: ?Sized, C> Clone for CubeScan<'_, G, R, C> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            capabilities: self.capabilities,
            origin: self.origin,
            mode: self.mode,
            offsets: self.offsets.clone(),
            marker: PhantomData,
        }
    }
}

impl<G, R, C> Iterator for CubeScan<'_, G, R, C>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
    C: Capability,
{
    type Item = AuraLocation<C>;

    fn next(&mut self) -> Option<Self::Item> {
        for (i, j, k) in self.offsets.by_ref() {
            let Some(target) = self.origin.checked_offset(i, j, k) else {
                continue;
            };

            let classified = match self.mode {
                ScanMode::Neighborhood => classify_with_source(self.grid, self.capabilities, target)
                    .map(|(set, source)| (target, set, source)),
                ScanMode::OriginOnly => {
                    // The neighbor gates the check, but the origin is what gets classified
                    if !self.grid.exists(target) || self.grid.is_empty(target) {
                        continue;
                    }
                    classify_with_source(self.grid, self.capabilities, self.origin)
                        .map(|(set, source)| (self.origin, set, source))
                }
            };

            if let Some((location, set, source)) = classified {
                if set.contains(C::TAG) {
                    return Some(AuraLocation::new(location, source));
                }
            }
        }
        None
    }
}

/// Start a scan for capability `C`
pub fn scan<'a, C, G, R>(
    grid: &'a G,
    capabilities: &'a R,
    origin: Location,
    radius: u32,
    mode: ScanMode,
) -> CubeScan<'a, G, R, C>
where
    G: GridQuery + ?Sized,
    R: CapabilityQuery + ?Sized,
    C: Capability,
{
    log::debug!(
        "[Scanner] Scanning {} cells around {} for {} ({:?})",
        cube_volume(radius),
        origin,
        C::TAG,
        mode
    );
    CubeScan {
        grid,
        capabilities,
        origin,
        mode,
        offsets: CubeOffsets::new(radius),
        marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aura::aura_data::{Absorber, CapabilitySource, Controller, Emitter};
    use crate::aura::test_support::AuraFixture;
    use crate::world::core::BlockId;

    #[test]
    fn test_offsets_cover_cube_in_order() {
        let offsets: Vec<_> = CubeOffsets::new(1).collect();
        assert_eq!(offsets.len() as u64, cube_volume(1));
        assert_eq!(offsets[0], (-1, -1, -1));
        assert_eq!(offsets[1], (-1, -1, 0));
        assert_eq!(offsets[3], (-1, 0, -1));
        assert_eq!(offsets[9], (0, -1, -1));
        assert_eq!(offsets[13], (0, 0, 0));
        assert_eq!(offsets[26], (1, 1, 1));
    }

    #[test]
    fn test_cube_volume_saturates_for_huge_radii() {
        assert_eq!(cube_volume(0), 1);
        assert_eq!(cube_volume(2), 125);
        assert_eq!(cube_volume(u32::MAX), u64::MAX);
    }

    #[test]
    fn test_scan_near_coordinate_limit_skips_overflowing_cells() {
        let fixture = AuraFixture::new();
        let edge = Location::new(fixture.world.id, i32::MAX, i32::MAX, i32::MAX);
        let hits: Vec<_> =
            scan::<Absorber, _, _>(&fixture.world, &fixture.blocks, edge, 1, ScanMode::Neighborhood)
                .collect();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_radius_zero_is_origin_only() {
        let offsets: Vec<_> = CubeOffsets::new(0).collect();
        assert_eq!(offsets, vec![(0, 0, 0)]);
    }

    #[test]
    fn test_neighborhood_scan_finds_offset_cells() {
        let mut fixture = AuraFixture::new();
        let origin = fixture.place_block(0, 0, 0, BlockId::STONE);
        let a = fixture.place_block(1, 0, 0, fixture.absorber_block);
        let b = fixture.place_block(-2, 1, 0, fixture.absorber_block);
        fixture.place_block(0, 0, 1, fixture.emitter_block);

        let found: Vec<_> = scan::<Absorber, _, _>(
            &fixture.world,
            &fixture.blocks,
            origin,
            2,
            ScanMode::Neighborhood,
        )
        .map(|hit| hit.location)
        .collect();

        // x ascending: (-2,1,0) before (1,0,0)
        assert_eq!(found, vec![b, a]);
    }

    #[test]
    fn test_scan_excludes_cells_outside_radius() {
        let mut fixture = AuraFixture::new();
        let origin = fixture.loc(0, 0, 0);
        fixture.place_block(3, 0, 0, fixture.emitter_block);

        let hits = scan::<Emitter, _, _>(
            &fixture.world,
            &fixture.blocks,
            origin,
            2,
            ScanMode::Neighborhood,
        )
        .count();
        assert_eq!(hits, 0);
    }

    #[test]
    fn test_scan_is_deterministic_and_restartable() {
        let mut fixture = AuraFixture::new();
        for (x, y, z) in [(1, 1, 1), (-1, 0, 2), (0, -3, 0), (2, 2, -2)] {
            fixture.place_controller(x, y, z, 10, 1);
        }
        let origin = fixture.loc(0, 0, 0);

        let first = scan::<Controller, _, _>(
            &fixture.world,
            &fixture.blocks,
            origin,
            3,
            ScanMode::Neighborhood,
        );
        let forked = first.clone();
        let a: Vec<_> = first.collect();
        let b: Vec<_> = forked.collect();
        let c: Vec<_> = scan::<Controller, _, _>(
            &fixture.world,
            &fixture.blocks,
            origin,
            3,
            ScanMode::Neighborhood,
        )
        .collect();

        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(a.iter().all(|hit| hit.source == CapabilitySource::ExtendedObject));
    }

    #[test]
    fn test_origin_only_mode_repeats_origin() {
        let mut fixture = AuraFixture::new();
        let origin = fixture.place_block(0, 0, 0, fixture.absorber_block);
        // Two more non-air neighbors; only their existence matters
        fixture.place_block(1, 0, 0, BlockId::STONE);
        fixture.place_block(0, -1, 0, fixture.emitter_block);

        let hits: Vec<_> = scan::<Absorber, _, _>(
            &fixture.world,
            &fixture.blocks,
            origin,
            1,
            ScanMode::OriginOnly,
        )
        .collect();

        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|hit| hit.location == origin));
    }

    #[test]
    fn test_origin_only_mode_ignores_capable_neighbors() {
        let mut fixture = AuraFixture::new();
        let origin = fixture.place_block(0, 0, 0, BlockId::STONE);
        fixture.place_block(1, 0, 0, fixture.absorber_block);

        let hits = scan::<Absorber, _, _>(
            &fixture.world,
            &fixture.blocks,
            origin,
            1,
            ScanMode::OriginOnly,
        )
        .count();
        assert_eq!(hits, 0);
    }
}
