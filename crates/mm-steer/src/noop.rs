//! A steering model that never steers.

use mm_core::BoidId;

use crate::{SteerContext, Steering, SteeringModel};

/// Boids ignore each other and coast under their own velocity.  Pointer
/// interaction still applies through [`evaluate`](crate::evaluate).
///
/// Useful for testing the integrator and scheduler in isolation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Drift;

impl SteeringModel for Drift {
    fn flock(&self, _boid: BoidId, _neighbors: &[BoidId], _ctx: &SteerContext<'_>) -> Steering {
        Steering::ZERO
    }
}
