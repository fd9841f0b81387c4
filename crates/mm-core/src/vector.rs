//! 2-D vector helpers with explicit zero guards.
//!
//! Positions, velocities, and forces are `glam::Vec2` (single precision).
//! `limit_magnitude` and `normalize` are the only normalisation paths used by
//! the force evaluator and integrator; both return a defined value for a
//! zero-length input instead of producing NaN.  `limit_magnitude` also stays
//! finite when a component has overflowed.

pub use glam::Vec2;

/// Rescale `v` to exactly `max` if its magnitude exceeds `max`.
///
/// A zero vector is returned unchanged.  A negative `max` behaves like zero,
/// so the result never has a magnitude greater than `max.max(0.0)`.
///
/// Always finite: NaN components count as 0 and infinite components as
/// `±f32::MAX`.  Vectors whose squared length overflows are measured
/// against their largest component instead.
#[inline]
pub fn limit_magnitude(v: Vec2, max: f32) -> Vec2 {
    let max = max.max(0.0);
    let v = saturate(v);
    let len_sq = v.length_squared();
    if len_sq.is_finite() {
        return if len_sq > max * max && len_sq > 0.0 {
            v * (max / len_sq.sqrt())
        } else {
            v
        };
    }
    // |v| >= ~1.8e19 here, so `scale` is far from zero.
    let scale = v.abs().max_element();
    let unit = v / scale;
    let len = unit.length();
    if len > max / scale {
        unit * (max / len)
    } else {
        v
    }
}

/// Replace NaN with 0 and clamp each component to `[-f32::MAX, f32::MAX]`.
#[inline]
pub fn saturate(v: Vec2) -> Vec2 {
    let finite = |x: f32| if x.is_nan() { 0.0 } else { x.clamp(-f32::MAX, f32::MAX) };
    Vec2::new(finite(v.x), finite(v.y))
}

/// Unit vector in the direction of `v`, or `Vec2::ZERO` when `v` has zero
/// length.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}
