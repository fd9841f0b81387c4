//! Reference all-pairs neighbor scan.

use mm_core::{BoidId, Vec2};

use crate::{NeighborIndex, is_neighbor};

/// Scans every other boid.  O(n) per query, O(n²) per frame; appropriate
/// for hundreds to a few thousand boids.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForceIndex;

impl NeighborIndex for BruteForceIndex {
    fn rebuild(&mut self, _positions: &[Vec2], _radius: f32) {}

    fn neighbors_of(
        &self,
        boid:      BoidId,
        positions: &[Vec2],
        radius_sq: f32,
        out:       &mut Vec<BoidId>,
    ) {
        out.clear();
        let origin = positions[boid.index()];
        for (j, &other) in positions.iter().enumerate() {
            if j != boid.index() && is_neighbor(origin, other, radius_sq) {
                out.push(BoidId(j as u32));
            }
        }
    }
}
