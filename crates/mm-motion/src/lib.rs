//! `mm-motion` — advancing boids by one frame.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`wrap`]      | `wrap_toroidal`: hard edge teleport per axis             |
//! | [`integrate`] | `integrate`, `integrate_boid`: the per-frame motion step |
//!
//! # Motion model (unit-step Euler)
//!
//! One frame is one unit of simulated time:
//!
//! 1. `velocity += acceleration` (optionally clamped to `max_force` first).
//! 2. `velocity = limit_magnitude(velocity, max_speed)`.
//! 3. `position += velocity`, then wrap each axis.
//! 4. On the trail cadence, append the new position to the boid's trail.
//!    The trail bound is enforced every frame.
//!
//! The integrator assumes every acceleration for the frame has already been
//! computed from the pre-frame snapshot; it never reads other boids.

pub mod integrate;
pub mod wrap;


pub use integrate::{integrate, integrate_boid};
pub use wrap::wrap_toroidal;
