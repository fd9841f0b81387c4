//! Core boid storage: `BoidStore` (SoA arrays plus one trail per boid).
//!
//! # Why separate arrays?
//!
//! The force phase reads every boid's position and velocity while writing
//! accelerations.  Keeping `accelerations` in its own `Vec` lets the
//! simulation borrow `&positions` / `&velocities` and `&mut accelerations`
//! at the same time, which is exactly the "read the unmodified snapshot,
//! write to a separate buffer" ordering the frame needs:
//!
//! ```ignore
//! // mm-sim force phase (simplified):
//! let BoidStore { positions, velocities, accelerations, .. } = &mut store;
//! for (i, acc) in accelerations.iter_mut().enumerate() {
//!     *acc = evaluate(i, positions, velocities);
//! }
//! ```

use mm_core::{BoidId, MAX_BOIDS, SimRng, Vec2, WorldSize};

use crate::{Boid, BoidMut, Trail, VisualTag};

/// Range of each initial velocity component.
const INITIAL_SPEED_SPAN: f32 = 1.0;

/// Structure-of-Arrays storage for all boid state.
///
/// Every `Vec` field has exactly `count` elements; the `BoidId` value is the
/// index into all of them.  `count` never exceeds [`MAX_BOIDS`].
#[derive(Clone, Debug, Default)]
pub struct BoidStore {
    /// Number of boids.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub positions: Vec<Vec2>,

    /// Magnitude bounded by `max_speed` after every integration step.
    pub velocities: Vec<Vec2>,

    /// Per-frame steering accumulator, fully rewritten before integration.
    pub accelerations: Vec<Vec2>,

    /// Rendering tag per boid.  Never read by physics.
    pub tags: Vec<VisualTag>,

    /// One trail per boid, emptied on every re-initialization.
    pub trails: Vec<Trail>,
}

impl BoidStore {
    /// Build a store from explicit boid records (no randomness).
    ///
    /// Trails start empty.  Records past [`MAX_BOIDS`] are dropped.
    pub fn from_boids<I: IntoIterator<Item = Boid>>(boids: I) -> Self {
        let mut store = Self::default();
        for boid in boids.into_iter().take(MAX_BOIDS) {
            store.positions.push(boid.position);
            store.velocities.push(boid.velocity);
            store.accelerations.push(boid.acceleration);
            store.tags.push(boid.tag);
            store.trails.push(Trail::new());
        }
        store.count = store.positions.len();
        store
    }

    /// Replace the whole population with `count` fresh boids.
    ///
    /// Positions are uniform in the world rectangle, velocity components are
    /// uniform in `[-1, 1)`, acceleration is zero, and each boid receives a
    /// new hue tag in `[0, 360)`.  All trails are reset to empty.  `count`
    /// is capped at [`MAX_BOIDS`].
    pub fn initialize(&mut self, count: usize, world: WorldSize, rng: &mut SimRng) {
        let count = count.min(MAX_BOIDS);
        self.positions.clear();
        self.velocities.clear();
        self.accelerations.clear();
        self.tags.clear();
        self.trails.clear();

        self.positions.reserve(count);
        self.velocities.reserve(count);
        self.tags.reserve(count);

        for _ in 0..count {
            self.positions.push(Vec2::new(rng.along(world.width), rng.along(world.height)));
            self.velocities.push(Vec2::new(
                rng.between(-INITIAL_SPEED_SPAN, INITIAL_SPEED_SPAN),
                rng.between(-INITIAL_SPEED_SPAN, INITIAL_SPEED_SPAN),
            ));
            self.tags.push(VisualTag(rng.between(0.0, 360.0)));
        }
        self.accelerations.resize(count, Vec2::ZERO);
        self.trails.resize_with(count, Trail::new);
        self.count = count;
    }

    /// `true` if there are no boids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of boids.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Iterator over all `BoidId`s in ascending index order.
    pub fn boid_ids(&self) -> impl Iterator<Item = BoidId> + '_ {
        (0..self.count as u32).map(BoidId)
    }

    /// Copy of one boid's state.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn boid(&self, id: BoidId) -> Boid {
        let i = id.index();
        Boid {
            position:     self.positions[i],
            velocity:     self.velocities[i],
            acceleration: self.accelerations[i],
            tag:          self.tags[i],
        }
    }

    /// Mutable handle to one boid's slots.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    pub fn boid_mut(&mut self, id: BoidId) -> BoidMut<'_> {
        let i = id.index();
        BoidMut {
            position:     &mut self.positions[i],
            velocity:     &mut self.velocities[i],
            acceleration: &mut self.accelerations[i],
            tag:          self.tags[i],
        }
    }

    /// Trail for one boid.
    #[inline]
    pub fn trail(&self, id: BoidId) -> &Trail {
        &self.trails[id.index()]
    }

    /// All boids by value, in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Boid> + '_ {
        (0..self.count).map(move |i| self.boid(BoidId(i as u32)))
    }
}
