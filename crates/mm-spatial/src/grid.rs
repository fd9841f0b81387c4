//! Uniform bucket grid.
//!
//! # Layout
//!
//! The plane is cut into square cells slightly larger than the perception
//! radius, so every neighbor of a boid lies in its own cell or one of the
//! eight surrounding cells.  Only occupied cells are stored:
//!
//! ```text
//! cells: FxHashMap<(cx, cy), Vec<boid index>>
//! ```
//!
//! Cell keys are integer coordinates, which is where FxHash beats SipHash by
//! a wide margin.  The map is rebuilt from scratch every frame.

use rustc_hash::FxHashMap;

use mm_core::{BoidId, Vec2};

use crate::{NeighborIndex, is_neighbor};

/// Cell edge as a multiple of the radius.  The slack absorbs rounding in
/// `x / cell` so a neighbor can never land two cells away.
const CELL_MARGIN: f32 = 1.001;

type CellKey = (i32, i32);

/// Bucket grid with cell edge ≈ perception radius.
#[derive(Debug, Default)]
pub struct GridIndex {
    /// `None` when the radius is zero or non-finite; queries then fall back
    /// to a full scan.
    cell:  Option<f32>,
    cells: FxHashMap<CellKey, Vec<u32>>,
}

impl GridIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied cells after the last rebuild.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn key(p: Vec2, cell: f32) -> CellKey {
        // `as` saturates, so far-out coordinates collapse into edge cells
        // instead of wrapping.
        ((p.x / cell).floor() as i32, (p.y / cell).floor() as i32)
    }
}

impl NeighborIndex for GridIndex {
    fn rebuild(&mut self, positions: &[Vec2], radius: f32) {
        self.cells.clear();
        let cell = radius.abs() * CELL_MARGIN;
        if !(cell.is_finite() && cell > 0.0) {
            self.cell = None;
            return;
        }
        self.cell = Some(cell);
        for (i, &p) in positions.iter().enumerate() {
            self.cells.entry(Self::key(p, cell)).or_default().push(i as u32);
        }
    }

    fn neighbors_of(
        &self,
        boid:      BoidId,
        positions: &[Vec2],
        radius_sq: f32,
        out:       &mut Vec<BoidId>,
    ) {
        out.clear();
        let origin = positions[boid.index()];

        let Some(cell) = self.cell else {
            for (j, &other) in positions.iter().enumerate() {
                if j != boid.index() && is_neighbor(origin, other, radius_sq) {
                    out.push(BoidId(j as u32));
                }
            }
            return;
        };

        let (cx, cy) = Self::key(origin, cell);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                let Some(members) = self.cells.get(&key) else { continue };
                for &j in members {
                    if j as usize != boid.index()
                        && is_neighbor(origin, positions[j as usize], radius_sq)
                    {
                        out.push(BoidId(j));
                    }
                }
            }
        }
        // Saturated keys can visit the same cell twice at the i32 edges.
        out.sort_unstable();
        out.dedup();
    }
}
