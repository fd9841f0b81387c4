//! Read-only frame state passed to every steering callback.

use mm_core::{FlockConfig, Frame, Vec2};

use crate::PointerState;

/// A read-only snapshot of the flock taken at the start of a frame.
///
/// Built once per frame by mm-sim and shared (immutably) across every boid's
/// force evaluation.  Positions and velocities are those from before any
/// boid in this frame was integrated.
///
/// # Lifetimes
///
/// All borrows live for the duration of one frame's force phase.  mm-sim
/// never allows mutable access to these slices while `SteerContext` is live.
pub struct SteerContext<'a> {
    pub frame:      Frame,
    pub positions:  &'a [Vec2],
    pub velocities: &'a [Vec2],
    pub config:     &'a FlockConfig,
    pub pointer:    &'a PointerState,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(
        frame:      Frame,
        positions:  &'a [Vec2],
        velocities: &'a [Vec2],
        config:     &'a FlockConfig,
        pointer:    &'a PointerState,
    ) -> Self {
        Self { frame, positions, velocities, config, pointer }
    }
}
