//! The `Flock` struct and its frame loop.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use mm_agent::{Boid, BoidStore, Trail, VisualTag};
use mm_core::{BoidId, FlockConfig, Frame, MAX_BOIDS, SimRng, Vec2, WorldSize};
use mm_motion::integrate;
use mm_spatial::NeighborIndex;
use mm_steer::{PointerState, SteerContext, SteeringModel, evaluate};

use crate::control::{self, ControlCommand, ControlHandle};
use crate::{FlockObserver, FpsMeter, SimResult};

// ── RunState ──────────────────────────────────────────────────────────────────

/// Whether ticks advance the simulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    #[inline]
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

// ── FrameSnapshot ─────────────────────────────────────────────────────────────

/// Read-only view of the flock after a completed frame, handed to the
/// renderer.
pub struct FrameSnapshot<'a> {
    /// The frame that just completed.
    pub frame:       Frame,
    /// Incremented on every re-initialization; a renderer can drop caches
    /// keyed on boid index when it changes.
    pub generation:  u64,
    /// Latest FPS figure (updated at most once per second).
    pub fps:         Option<f32>,
    /// `true` if `fps` was updated by this frame.
    pub fps_updated: bool,
    /// `false` only for [`Flock::snapshot`] taken while paused.
    pub running:     bool,
    pub boids:       &'a BoidStore,
}

impl<'a> FrameSnapshot<'a> {
    pub fn len(&self) -> usize {
        self.boids.count
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn positions(&self) -> &'a [Vec2] {
        &self.boids.positions
    }

    pub fn velocities(&self) -> &'a [Vec2] {
        &self.boids.velocities
    }

    pub fn tags(&self) -> &'a [VisualTag] {
        &self.boids.tags
    }

    pub fn trails(&self) -> &'a [Trail] {
        &self.boids.trails
    }
}

// ── Flock ─────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Flock<M, I>` owns all simulation state and drives the two-phase frame:
///
/// 1. **Force phase** (optionally parallel with the `parallel` feature):
///    rebuild the neighbor index, then write every boid's acceleration from
///    the positions and velocities as they stood before the frame.
/// 2. **Integration phase** (sequential): advance every boid and sample
///    trails.
///
/// Configuration and pointer edits take effect on the next frame.
/// Population, world, and reset edits re-initialize the store immediately;
/// because they need `&mut self` they can never interleave with a frame.
///
/// Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct Flock<M: SteeringModel, I: NeighborIndex> {
    /// Behavior parameters, read at the start of every frame.
    pub config: FlockConfig,

    /// Pointer input, read at the start of every frame.
    pub pointer: PointerState,

    /// The steering model.  Called once per boid per frame.
    pub model: M,

    /// Neighbor index, rebuilt once per frame.
    pub index: I,

    pub(crate) store:      BoidStore,
    pub(crate) world:      WorldSize,
    pub(crate) population: usize,
    pub(crate) state:      RunState,
    pub(crate) frame:      Frame,
    pub(crate) generation: u64,
    pub(crate) rng:        SimRng,
    pub(crate) fps:        FpsMeter,

    /// Reused neighbor buffer for the sequential force phase.
    #[cfg_attr(feature = "parallel", allow(dead_code))]
    pub(crate) scratch: Vec<BoidId>,

    /// Receiving side of the control queue, created on first
    /// [`control_handle`](Self::control_handle) call.
    pub(crate) control: Option<Receiver<ControlCommand>>,
    pub(crate) control_tx: Option<Sender<ControlCommand>>,
}

impl<M: SteeringModel, I: NeighborIndex> Flock<M, I> {
    // ── Frame driving ─────────────────────────────────────────────────────

    /// Drive one frame.
    ///
    /// Applies queued control commands, then, if running, computes and
    /// integrates one frame and returns its snapshot.  Returns `None` while
    /// paused; nothing advances.
    pub fn tick(&mut self, now: Instant) -> Option<FrameSnapshot<'_>> {
        self.drain_control();
        if !self.state.is_running() {
            return None;
        }

        let frame = self.frame;
        self.step(frame);
        self.frame = frame.next();

        let fresh = self.fps.record(now);
        if let Some(fps) = fresh {
            debug!(frame = frame.0, fps, boids = self.store.count, "fps window closed");
        }
        Some(self.snapshot_of(frame, fresh.is_some()))
    }

    /// Drive `n` ticks synchronously, stamped `start`, `start + interval`, …
    ///
    /// Returns the number of frames that actually ran (ticks while paused do
    /// not count).  Useful for tests and headless drivers.
    pub fn run_frames<O: FlockObserver>(
        &mut self,
        n:        u64,
        start:    Instant,
        interval: Duration,
        observer: &mut O,
    ) -> u64 {
        let mut ran = 0;
        let mut now = start;
        for _ in 0..n {
            observer.on_frame_start(self.frame);
            if let Some(snapshot) = self.tick(now) {
                ran += 1;
                if snapshot.fps_updated {
                    if let Some(fps) = snapshot.fps {
                        observer.on_fps(snapshot.frame, fps);
                    }
                }
                observer.on_frame_end(&snapshot);
            }
            now += interval;
        }
        observer.on_run_end(self.frame);
        ran
    }

    /// Snapshot of the current state without advancing.
    ///
    /// `frame` is the last completed frame.  Before the first frame it is
    /// also `Frame::ZERO`; use [`last_frame`](Self::last_frame) to tell the
    /// two apart.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        let last = Frame(self.frame.0.saturating_sub(1));
        self.snapshot_of(last, false)
    }

    // ── Run state ─────────────────────────────────────────────────────────

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Resume or pause.  Pausing between frames is always clean: a frame in
    /// progress holds `&mut self`, so it completes first.
    pub fn set_running(&mut self, running: bool) {
        let next = if running { RunState::Running } else { RunState::Paused };
        if next == self.state {
            return;
        }
        self.state = next;
        // Paused wall time must not count toward the next FPS window.
        self.fps.reset();
        info!(state = ?next, frame = self.frame.0, "run state changed");
    }

    // ── Inbound configuration ─────────────────────────────────────────────

    /// Replace the configuration; applies from the next frame.
    pub fn set_config(&mut self, config: FlockConfig) {
        self.config = config;
    }

    /// Replace the pointer state; applies from the next frame.
    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Re-initialize with `count` boids.
    pub fn set_population(&mut self, count: usize) {
        self.population = count.min(MAX_BOIDS);
        self.reinitialize();
    }

    /// Re-initialize in `world`, e.g. after the surface was resized.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite extents; the flock is untouched.
    pub fn set_world(&mut self, world: WorldSize) -> SimResult<()> {
        self.world = WorldSize::new(world.width, world.height)?;
        self.reinitialize();
        Ok(())
    }

    /// Shorthand for `set_world(WorldSize::new(width, height)?)`.
    pub fn resize(&mut self, width: f32, height: f32) -> SimResult<()> {
        self.set_world(WorldSize::new(width, height)?)
    }

    /// Re-initialize with the current population and world.
    pub fn reset(&mut self) {
        self.reinitialize();
    }

    /// Restart the placement RNG from `seed`, then re-initialize.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SimRng::new(seed);
        self.reinitialize();
    }

    /// Replace the population with explicit boids (no randomness).
    pub fn load_boids<B: IntoIterator<Item = Boid>>(&mut self, boids: B) {
        self.store = BoidStore::from_boids(boids);
        self.population = self.store.count;
        self.generation += 1;
        info!(boids = self.population, generation = self.generation, "population loaded");
    }

    /// Apply one control command immediately.
    pub fn apply(&mut self, command: ControlCommand) -> SimResult<()> {
        debug!(?command, "applying control command");
        match command {
            ControlCommand::SetConfig(config)      => self.set_config(config),
            ControlCommand::SetPointer(pointer)    => self.set_pointer(pointer),
            ControlCommand::SetRunning(running)    => self.set_running(running),
            ControlCommand::SetPopulation(count)   => self.set_population(count),
            ControlCommand::Resize { width, height } => self.resize(width, height)?,
            ControlCommand::Reset                  => self.reset(),
            ControlCommand::Reseed(seed)           => self.reseed(seed),
        }
        Ok(())
    }

    /// A cloneable handle for queuing commands from another thread.
    ///
    /// Queued commands are applied at the start of the next [`tick`](Self::tick),
    /// in the order they were sent.
    pub fn control_handle(&mut self) -> ControlHandle {
        if let Some(tx) = &self.control_tx {
            return ControlHandle::new(tx.clone());
        }
        let (tx, rx) = mpsc::channel();
        self.control = Some(rx);
        self.control_tx = Some(tx.clone());
        ControlHandle::new(tx)
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn store(&self) -> &BoidStore {
        &self.store
    }

    pub fn world(&self) -> WorldSize {
        self.world
    }

    pub fn population(&self) -> usize {
        self.population
    }

    /// Index of the next frame to run.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Last completed frame, or `None` if no frame has run yet.
    pub fn last_frame(&self) -> Option<Frame> {
        self.frame.0.checked_sub(1).map(Frame)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fps(&self) -> Option<f32> {
        self.fps.current()
    }

    // ── Core frame processing ─────────────────────────────────────────────

    fn step(&mut self, frame: Frame) {
        trace!(frame = frame.0, boids = self.store.count, "frame start");
        self.compute_accelerations(frame);
        integrate(&mut self.store, &self.config, self.world, frame);
    }

    /// Force phase: write `store.accelerations` for every boid.
    ///
    /// Positions and velocities are borrowed immutably for the whole phase,
    /// so no boid can observe another's integration from the same frame.
    fn compute_accelerations(&mut self, frame: Frame) {
        let BoidStore { positions, velocities, accelerations, .. } = &mut self.store;
        let positions: &[Vec2] = positions;
        let velocities: &[Vec2] = velocities;

        self.index.rebuild(positions, self.config.perception_radius);

        let radius_sq = self.config.perception_radius_sq();
        let ctx = SteerContext::new(frame, positions, velocities, &self.config, &self.pointer);
        let model = &self.model;
        let index = &self.index;

        #[cfg(not(feature = "parallel"))]
        {
            let scratch = &mut self.scratch;
            for (i, acc) in accelerations.iter_mut().enumerate() {
                // The store caps `count` at MAX_BOIDS, so `i` fits.
                let boid = BoidId(i as u32);
                index.neighbors_of(boid, positions, radius_sq, scratch);
                *acc = evaluate(model, boid, scratch, &ctx).total();
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Each worker keeps its own neighbor buffer; every boid's sum is
            // still accumulated sequentially, so results match the serial path.
            accelerations
                .par_iter_mut()
                .enumerate()
                .for_each_init(Vec::new, |scratch, (i, acc)| {
                    let boid = BoidId(i as u32);
                    index.neighbors_of(boid, positions, radius_sq, scratch);
                    *acc = evaluate(model, boid, scratch, &ctx).total();
                });
        }
    }

    fn reinitialize(&mut self) {
        self.store.initialize(self.population, self.world, &mut self.rng);
        self.generation += 1;
        info!(
            boids = self.population,
            world = %self.world,
            generation = self.generation,
            "population initialized"
        );
    }

    fn drain_control(&mut self) {
        let Some(rx) = &self.control else { return };
        for command in control::drain(rx) {
            if let Err(e) = self.apply(command) {
                warn!(error = %e, "control command rejected");
            }
        }
    }

    fn snapshot_of(&self, frame: Frame, fps_updated: bool) -> FrameSnapshot<'_> {
        FrameSnapshot {
            frame,
            generation: self.generation,
            fps: self.fps.current(),
            fps_updated,
            running: self.state.is_running(),
            boids: &self.store,
        }
    }
}
