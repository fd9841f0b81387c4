//! Pointer attraction and repulsion.
//!
//! The pointer is owned by the UI: it writes position, pressed state, and
//! mode on every movement; the engine reads a copy at the start of each
//! frame.

use mm_core::Vec2;

/// Peak pointer acceleration, reached as the distance approaches zero.
const POINTER_GAIN: f32 = 2.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerMode {
    #[default]
    Attract,
    Repel,
}

/// Current pointer input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerState {
    pub position: Vec2,
    /// `false` while the pointer is released or outside the surface.
    pub active:   bool,
    pub mode:     PointerMode,
}

impl PointerState {
    /// Active pointer pulling boids toward `position`.
    pub fn attract_at(position: Vec2) -> Self {
        Self { position, active: true, mode: PointerMode::Attract }
    }

    /// Active pointer pushing boids away from `position`.
    pub fn repel_at(position: Vec2) -> Self {
        Self { position, active: true, mode: PointerMode::Repel }
    }
}

/// Pointer acceleration on a boid at `position`.
///
/// Within `radius` of an active pointer the magnitude is
/// `(1 - dist / radius) * 2`, directed toward the pointer (attract) or away
/// from it (repel).  Outside the radius, at zero distance, or with a
/// non-positive radius the result is zero.
pub fn pointer_force(position: Vec2, pointer: &PointerState, radius: f32) -> Vec2 {
    if !pointer.active {
        return Vec2::ZERO;
    }
    let delta = pointer.position - position;
    let dist = delta.length();
    // `0 < dist < radius` implies `radius > 0`, so the division below is safe.
    let inside = dist > 0.0 && dist < radius;
    if !inside {
        return Vec2::ZERO;
    }
    let strength = (1.0 - dist / radius) * POINTER_GAIN;
    let toward = delta / dist;
    match pointer.mode {
        PointerMode::Attract => toward * strength,
        PointerMode::Repel => -toward * strength,
    }
}
