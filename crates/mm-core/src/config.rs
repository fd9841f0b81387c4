//! Tunable flocking parameters and world dimensions.
//!
//! `FlockConfig` is a plain record: the engine never validates its fields.
//! Every field is read once per frame, and every finite value (including
//! zero and negatives) yields finite output.  The accessors below are the
//! only places where raw values are interpreted.

use crate::{CoreError, CoreResult};

// ── SteeringLimit ─────────────────────────────────────────────────────────────

/// Whether `max_force` caps the accumulated steering acceleration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SteeringLimit {
    /// Acceleration is added to velocity as computed; only speed is clamped.
    #[default]
    Unclamped,
    /// Acceleration is limited to `max_force` before the velocity update.
    ClampToMaxForce,
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Behavior parameters read by the force evaluator and integrator.
///
/// Typically edited live by a control panel, or loaded from a JSON document
/// by the application crate (with the `serde` feature, missing fields fall
/// back to [`Default`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Weight applied to the summed separation vector.
    pub separation: f32,
    /// Weight applied to the unit alignment steer.
    pub alignment: f32,
    /// Weight applied to the unit cohesion steer.
    pub cohesion: f32,
    /// Neighbor cutoff distance.
    pub perception_radius: f32,
    /// Upper bound on speed after every integration step.
    pub max_speed: f32,
    /// Ceiling on accumulated steering.  Only applied under
    /// [`SteeringLimit::ClampToMaxForce`].
    pub max_force: f32,
    /// Maximum number of samples kept per trail.
    pub trail_length: f32,
    /// Pointer interaction radius.
    pub mouse_force: f32,
    /// Frames between trail samples.
    pub trail_interval: u32,
    /// Whether accumulated steering is clamped to `max_force` before it
    /// reaches the velocity.
    pub steering_limit: SteeringLimit,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            separation:        1.5,
            alignment:         1.0,
            cohesion:          1.0,
            perception_radius: 50.0,
            max_speed:         4.0,
            max_force:         0.1,
            trail_length:      20.0,
            mouse_force:       150.0,
            trail_interval:    2,
            steering_limit:    SteeringLimit::Unclamped,
        }
    }
}

impl FlockConfig {
    /// Squared neighbor cutoff.
    #[inline]
    pub fn perception_radius_sq(&self) -> f32 {
        self.perception_radius * self.perception_radius
    }

    /// Trail capacity in samples: `floor(trail_length)`, or 0 for negative
    /// and NaN lengths.
    #[inline]
    pub fn trail_capacity(&self) -> usize {
        if self.trail_length.is_nan() || self.trail_length <= 0.0 {
            0
        } else {
            // `as` saturates for +inf.
            self.trail_length.floor() as usize
        }
    }

    /// Sampling cadence in frames, never below 1.
    #[inline]
    pub fn trail_interval(&self) -> u64 {
        u64::from(self.trail_interval.max(1))
    }
}

// ── WorldSize ─────────────────────────────────────────────────────────────────

/// Extent of the toroidal world.  Positions live in `[0, width] × [0, height]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSize {
    pub width:  f32,
    pub height: f32,
}

impl WorldSize {
    /// Construct a world, rejecting negative or non-finite extents.
    ///
    /// Zero-width (or zero-height) worlds are allowed; every boid is then
    /// pinned to 0 on that axis.
    pub fn new(width: f32, height: f32) -> CoreResult<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(CoreError::InvalidWorld { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

impl std::fmt::Display for WorldSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
