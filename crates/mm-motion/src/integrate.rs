//! The per-frame motion step.

use mm_agent::{BoidStore, Trail};
use mm_core::{FlockConfig, Frame, SteeringLimit, Vec2, WorldSize, limit_magnitude, saturate};

use crate::wrap_toroidal;

/// Advance one boid and return its new `(position, velocity)`.
///
/// Pure: the caller decides where the results are written and records the
/// trail sample.  The result is finite for any finite `position`, even when
/// huge weights have driven `acceleration` to infinity or NaN.
#[inline]
pub fn integrate_boid(
    position:     Vec2,
    velocity:     Vec2,
    acceleration: Vec2,
    config:       &FlockConfig,
    world:        WorldSize,
) -> (Vec2, Vec2) {
    let acceleration = saturate(acceleration);
    let acceleration = match config.steering_limit {
        SteeringLimit::Unclamped => acceleration,
        SteeringLimit::ClampToMaxForce => limit_magnitude(acceleration, config.max_force),
    };
    let velocity = limit_magnitude(velocity + acceleration, config.max_speed);
    let position = wrap_toroidal(position + velocity, world);
    (position, velocity)
}

/// Integrate every boid in `store` using the accelerations already written
/// to `store.accelerations` for `frame`.
///
/// Trails receive the new position when `frame` falls on the configured
/// sampling cadence, and are truncated to the configured capacity on every
/// frame so that a lowered `trail_length` applies immediately.
pub fn integrate(store: &mut BoidStore, config: &FlockConfig, world: WorldSize, frame: Frame) {
    let sample = frame.on_cadence(config.trail_interval());
    let capacity = config.trail_capacity();

    let BoidStore { positions, velocities, accelerations, trails, .. } = store;
    for (((pos, vel), acc), trail) in positions
        .iter_mut()
        .zip(velocities.iter_mut())
        .zip(accelerations.iter())
        .zip(trails.iter_mut())
    {
        (*pos, *vel) = integrate_boid(*pos, *vel, *acc, config, world);
        record_trail(trail, *pos, sample, capacity);
    }
}

#[inline]
fn record_trail(trail: &mut Trail, position: Vec2, sample: bool, capacity: usize) {
    if sample {
        trail.push_bounded(position, capacity);
    } else {
        trail.truncate_to(capacity);
    }
}
