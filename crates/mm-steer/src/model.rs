//! The `SteeringModel` trait, the extension point for flocking rules.

use mm_core::BoidId;

use crate::{SteerContext, Steering, alignment, cohesion, pointer_force, separation};

/// Pluggable flocking rule.
///
/// Implement this trait to change how a boid reacts to its neighbors.  The
/// pointer term is not part of the model: [`evaluate`] adds it for every
/// model.
///
/// # Thread safety
///
/// The simulation may evaluate many boids in parallel via Rayon, so
/// implementations must be `Send + Sync`.  Per-boid state belongs in the
/// agent store, not in the model.
pub trait SteeringModel: Send + Sync + 'static {
    /// Flocking contribution for `boid`.
    ///
    /// `neighbors` holds every boid strictly inside the perception radius,
    /// excluding `boid` itself and any boid at the same position, in
    /// ascending id order.
    fn flock(&self, boid: BoidId, neighbors: &[BoidId], ctx: &SteerContext<'_>) -> Steering;
}

/// Classic separation / alignment / cohesion, weighted by the
/// configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reynolds;

impl SteeringModel for Reynolds {
    fn flock(&self, boid: BoidId, neighbors: &[BoidId], ctx: &SteerContext<'_>) -> Steering {
        if neighbors.is_empty() {
            return Steering::ZERO;
        }
        let i = boid.index();
        let cfg = ctx.config;
        let origin = ctx.positions[i];
        Steering::flocking(
            separation(origin, neighbors, ctx.positions) * cfg.separation,
            alignment(ctx.velocities[i], neighbors, ctx.velocities) * cfg.alignment,
            cohesion(origin, neighbors, ctx.positions) * cfg.cohesion,
        )
    }
}

/// Full steering for `boid`: the model's flocking terms plus the pointer
/// term.
pub fn evaluate<M: SteeringModel + ?Sized>(
    model:     &M,
    boid:      BoidId,
    neighbors: &[BoidId],
    ctx:       &SteerContext<'_>,
) -> Steering {
    let mut steering = model.flock(boid, neighbors, ctx);
    steering.pointer = pointer_force(ctx.positions[boid.index()], ctx.pointer, ctx.config.mouse_force);
    steering
}
