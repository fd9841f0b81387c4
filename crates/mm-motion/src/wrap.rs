//! Toroidal boundary policy.

use mm_core::{Vec2, WorldSize};

/// Teleport `p` to the opposite edge on any axis where it left
/// `[0, extent]`.
///
/// `x < 0` becomes `width`, `x > width` becomes `0`; likewise for `y`.  A
/// NaN coordinate becomes `0`, so the result always lies in
/// `[0, width] × [0, height]`.
#[inline]
pub fn wrap_toroidal(p: Vec2, world: WorldSize) -> Vec2 {
    Vec2::new(wrap_axis(p.x, world.width), wrap_axis(p.y, world.height))
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}
