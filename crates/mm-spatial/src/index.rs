//! The `NeighborIndex` trait and the shared membership rule.
//!
//! # Pluggability
//!
//! `mm-sim` finds neighbors through [`NeighborIndex`], so applications can
//! pick the structure that suits their population density without touching
//! the force evaluator.  [`BruteForceIndex`][crate::BruteForceIndex] is the
//! reference; the grid and R-tree must agree with it exactly.

use mm_core::{BoidId, Vec2};

/// `true` when `other` lies strictly inside the perception disc of `origin`
/// and is not coincident with it.
#[inline]
pub fn is_neighbor(origin: Vec2, other: Vec2, radius_sq: f32) -> bool {
    let d_sq = (other - origin).length_squared();
    d_sq > 0.0 && d_sq < radius_sq
}

/// Spatial acceleration structure for per-frame neighbor queries.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: with the `parallel` feature of
/// `mm-sim` many boids are queried concurrently through `&self`.
pub trait NeighborIndex: Send + Sync {
    /// Rebuild from this frame's positions.  Called once per frame, before
    /// any query, with the frame's perception radius.
    fn rebuild(&mut self, positions: &[Vec2], radius: f32);

    /// Replace the contents of `out` with the neighbors of `boid`, in
    /// ascending `BoidId` order.
    ///
    /// `positions` is the same slice passed to the preceding `rebuild`.
    fn neighbors_of(
        &self,
        boid:      BoidId,
        positions: &[Vec2],
        radius_sq: f32,
        out:       &mut Vec<BoidId>,
    );
}
