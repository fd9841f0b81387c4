//! R-tree neighbor index.
//!
//! An R-tree (via `rstar`) over boid positions, bulk-loaded once per frame.
//! `locate_within_distance` returns every entry with `d² <= r²`; the strict
//! membership rule is applied afterwards.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use mm_core::{BoidId, Vec2};

use crate::{NeighborIndex, is_neighbor};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with the boid's id.
#[derive(Clone)]
struct BoidEntry {
    point: [f32; 2],
    id:    BoidId,
}

impl RTreeObject for BoidEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BoidEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeIndex ────────────────────────────────────────────────────────────────

/// Bulk-loaded R-tree.  Rebuild cost is O(n log n); queries are
/// O(log n + k).  Pays off at large, sparse populations.
pub struct RTreeIndex {
    tree: RTree<BoidEntry>,
}

impl RTreeIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for RTreeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborIndex for RTreeIndex {
    fn rebuild(&mut self, positions: &[Vec2], _radius: f32) {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(i, p)| BoidEntry { point: [p.x, p.y], id: BoidId(i as u32) })
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    fn neighbors_of(
        &self,
        boid:      BoidId,
        positions: &[Vec2],
        radius_sq: f32,
        out:       &mut Vec<BoidId>,
    ) {
        out.clear();
        if radius_sq.is_nan() || radius_sq <= 0.0 {
            return;
        }
        let origin = positions[boid.index()];
        out.extend(
            self.tree
                .locate_within_distance([origin.x, origin.y], radius_sq)
                .filter(|e| e.id != boid && is_neighbor(origin, positions[e.id.index()], radius_sq))
                .map(|e| e.id),
        );
        out.sort_unstable();
    }
}
