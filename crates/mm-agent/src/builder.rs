//! Fluent builder for a seeded `BoidStore`.
//!
//! # Usage
//!
//! ```rust
//! use mm_agent::BoidStoreBuilder;
//! use mm_core::WorldSize;
//!
//! let store = BoidStoreBuilder::new(1_000, /*seed=*/ 42)
//!     .world(WorldSize::new(640.0, 480.0).unwrap())
//!     .build();
//!
//! assert_eq!(store.count, 1_000);
//! assert!(store.trails.iter().all(|t| t.is_empty()));
//! ```

use mm_core::{SimRng, WorldSize};

use crate::BoidStore;

/// Fluent builder for [`BoidStore`].
pub struct BoidStoreBuilder {
    count: usize,
    seed:  u64,
    world: WorldSize,
}

impl BoidStoreBuilder {
    /// Create a builder for `count` boids using `seed` for placement.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed, world: WorldSize::default() }
    }

    /// World rectangle used for initial placement.  Default: 800×600.
    pub fn world(mut self, world: WorldSize) -> Self {
        self.world = world;
        self
    }

    /// Allocate and randomly initialise the population.
    pub fn build(self) -> BoidStore {
        let mut rng = SimRng::new(self.seed);
        let mut store = BoidStore::default();
        store.initialize(self.count, self.world, &mut rng);
        store
    }
}
