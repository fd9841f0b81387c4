//! The three flocking terms and the per-boid force breakdown.
//!
//! Each function takes the focal boid's own state, its neighbor ids (as
//! returned by a `NeighborIndex`), and the frame's read-only SoA slices.
//! With no neighbors every term is exactly zero.

use mm_core::{BoidId, Vec2, normalize};

// ── Steering ──────────────────────────────────────────────────────────────────

/// Weighted contributions to one boid's acceleration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Steering {
    pub separation: Vec2,
    pub alignment:  Vec2,
    pub cohesion:   Vec2,
    pub pointer:    Vec2,
}

impl Steering {
    pub const ZERO: Steering = Steering {
        separation: Vec2::ZERO,
        alignment:  Vec2::ZERO,
        cohesion:   Vec2::ZERO,
        pointer:    Vec2::ZERO,
    };

    /// Flocking terms only, pointer left at zero.
    pub fn flocking(separation: Vec2, alignment: Vec2, cohesion: Vec2) -> Self {
        Self { separation, alignment, cohesion, pointer: Vec2::ZERO }
    }

    /// Sum of every term: the boid's acceleration for this frame.
    #[inline]
    pub fn total(&self) -> Vec2 {
        self.separation + self.alignment + self.cohesion + self.pointer
    }
}

// ── Terms ─────────────────────────────────────────────────────────────────────

/// Unweighted sum of unit vectors pointing away from each neighbor.
pub fn separation(origin: Vec2, neighbors: &[BoidId], positions: &[Vec2]) -> Vec2 {
    neighbors
        .iter()
        .fold(Vec2::ZERO, |acc, n| acc - normalize(positions[n.index()] - origin))
}

/// Unit steer from `own_velocity` toward the neighbors' average velocity.
pub fn alignment(own_velocity: Vec2, neighbors: &[BoidId], velocities: &[Vec2]) -> Vec2 {
    match mean(neighbors, velocities) {
        Some(avg) => normalize(avg - own_velocity),
        None => Vec2::ZERO,
    }
}

/// Unit steer from `origin` toward the neighbors' centroid.
pub fn cohesion(origin: Vec2, neighbors: &[BoidId], positions: &[Vec2]) -> Vec2 {
    match mean(neighbors, positions) {
        Some(centroid) => normalize(centroid - origin),
        None => Vec2::ZERO,
    }
}

fn mean(ids: &[BoidId], values: &[Vec2]) -> Option<Vec2> {
    if ids.is_empty() {
        return None;
    }
    let sum = ids.iter().fold(Vec2::ZERO, |acc, id| acc + values[id.index()]);
    Some(sum / ids.len() as f32)
}
