//! Fluent builder for constructing a [`Flock`].

use tracing::info;

use mm_agent::{Boid, BoidStore};
use mm_core::{FlockConfig, Frame, MAX_BOIDS, SimRng, WorldSize};
use mm_spatial::NeighborIndex;
use mm_steer::{PointerState, SteeringModel};

use crate::{Flock, FpsMeter, RunState, SimError, SimResult};

/// Population used when [`population`](FlockBuilder::population) is not set.
pub const DEFAULT_POPULATION: usize = 200;

/// Seed used when [`seed`](FlockBuilder::seed) is not set.
pub const DEFAULT_SEED: u64 = 0x6d75_726d_7572;

/// Fluent builder for [`Flock<M, I>`].
///
/// # Required inputs
///
/// - `M: SteeringModel`, e.g. [`mm_steer::Reynolds`]
/// - `I: NeighborIndex`, e.g. [`mm_spatial::GridIndex`]
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                          |
/// |--------------------|----------------------------------|
/// | `.config(c)`       | `FlockConfig::default()`         |
/// | `.world(w)`        | 800 × 600                        |
/// | `.population(n)`   | [`DEFAULT_POPULATION`]           |
/// | `.seed(s)`         | [`DEFAULT_SEED`]                 |
/// | `.boids(v)`        | random placement from the seed   |
/// | `.running(b)`      | `true`                           |
///
/// # Example
///
/// ```rust,ignore
/// let mut flock = FlockBuilder::new(Reynolds, RTreeIndex::new())
///     .world(WorldSize::new(1920.0, 1080.0)?)
///     .population(1_500)
///     .seed(7)
///     .build()?;
/// ```
pub struct FlockBuilder<M: SteeringModel, I: NeighborIndex> {
    model:      M,
    index:      I,
    config:     FlockConfig,
    world:      WorldSize,
    population: Option<usize>,
    seed:       u64,
    boids:      Option<Vec<Boid>>,
    running:    bool,
}

impl<M: SteeringModel, I: NeighborIndex> FlockBuilder<M, I> {
    pub fn new(model: M, index: I) -> Self {
        Self {
            model,
            index,
            config:     FlockConfig::default(),
            world:      WorldSize::default(),
            population: None,
            seed:       DEFAULT_SEED,
            boids:      None,
            running:    true,
        }
    }

    pub fn config(mut self, config: FlockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn world(mut self, world: WorldSize) -> Self {
        self.world = world;
        self
    }

    /// Number of boids to place at random.
    ///
    /// When combined with [`boids`](Self::boids) the two must agree.
    pub fn population(mut self, count: usize) -> Self {
        self.population = Some(count);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Start from explicit boids instead of random placement.
    pub fn boids(mut self, boids: Vec<Boid>) -> Self {
        self.boids = Some(boids);
        self
    }

    /// Start paused with `false`.
    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Validate inputs, place the initial population, and return a
    /// ready-to-tick [`Flock`].
    pub fn build(self) -> SimResult<Flock<M, I>> {
        // Fields are public, so a hand-built `WorldSize` may bypass `new`.
        let world = WorldSize::new(self.world.width, self.world.height)?;
        let mut rng = SimRng::new(self.seed);

        let (store, population) = match self.boids {
            Some(boids) => {
                if let Some(expected) = self.population {
                    if expected != boids.len() {
                        return Err(SimError::PopulationMismatch {
                            expected,
                            got: boids.len(),
                        });
                    }
                }
                let store = BoidStore::from_boids(boids);
                let count = store.count;
                (store, count)
            }
            None => {
                let count = self.population.unwrap_or(DEFAULT_POPULATION).min(MAX_BOIDS);
                let mut store = BoidStore::default();
                store.initialize(count, world, &mut rng);
                (store, count)
            }
        };

        info!(boids = population, world = %world, seed = self.seed, "flock built");

        Ok(Flock {
            config:     self.config,
            pointer:    PointerState::default(),
            model:      self.model,
            index:      self.index,
            store,
            world,
            population,
            state:      if self.running { RunState::Running } else { RunState::Paused },
            frame:      Frame::ZERO,
            generation: 0,
            rng,
            fps:        FpsMeter::new(),
            scratch:    Vec::new(),
            control:    None,
            control_tx: None,
        })
    }
}
