//! Per-boid record types.

use mm_core::Vec2;

/// Rendering-only hue offset in degrees, assigned once at creation.
///
/// The engine carries the tag so a renderer can read it alongside position
/// and velocity; physics never reads it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualTag(pub f32);

/// One boid, by value.
///
/// Used to seed a store with explicit state ([`BoidStore::from_boids`]) and
/// as the read-only view returned by [`BoidStore::boid`].
///
/// [`BoidStore::from_boids`]: crate::BoidStore::from_boids
/// [`BoidStore::boid`]: crate::BoidStore::boid
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    pub position:     Vec2,
    pub velocity:     Vec2,
    /// Steering accumulated for the most recent frame.  Overwritten in full
    /// every frame before integration.
    pub acceleration: Vec2,
    pub tag:          VisualTag,
}

impl Boid {
    /// A boid at `position` moving with `velocity`, zero acceleration and a
    /// default tag.
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity, acceleration: Vec2::ZERO, tag: VisualTag::default() }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Mutable handle to one boid's SoA slots.
///
/// The tag is copied out rather than borrowed: it is immutable for the
/// boid's lifetime.
pub struct BoidMut<'a> {
    pub position:     &'a mut Vec2,
    pub velocity:     &'a mut Vec2,
    pub acceleration: &'a mut Vec2,
    pub tag:          VisualTag,
}
