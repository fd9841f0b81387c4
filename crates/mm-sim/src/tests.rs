//! Integration tests for mm-sim.

use std::time::{Duration, Instant};

use mm_agent::Boid;
use mm_core::{FlockConfig, Vec2, WorldSize};
use mm_spatial::{BruteForceIndex, GridIndex, NeighborIndex, RTreeIndex};
use mm_steer::{Reynolds, SteeringModel};

use crate::{Flock, FlockBuilder, FlockObserver, FrameSnapshot, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const STEP: Duration = Duration::from_millis(16);

fn flock(n: usize, seed: u64) -> Flock<Reynolds, GridIndex> {
    FlockBuilder::new(Reynolds, GridIndex::new())
        .population(n)
        .seed(seed)
        .build()
        .unwrap()
}

fn run<M: SteeringModel, I: NeighborIndex>(flock: &mut Flock<M, I>, frames: u64) -> u64 {
    flock.run_frames(frames, Instant::now(), STEP, &mut NoopObserver)
}

/// Config with every flocking weight zero.
fn quiet_config() -> FlockConfig {
    FlockConfig { separation: 0.0, alignment: 0.0, cohesion: 0.0, ..FlockConfig::default() }
}

fn explicit<M: SteeringModel>(model: M, config: FlockConfig, boids: Vec<Boid>) -> Flock<M, BruteForceIndex> {
    FlockBuilder::new(model, BruteForceIndex)
        .config(config)
        .boids(boids)
        .build()
        .unwrap()
}

#[derive(Default)]
struct Counting {
    starts:   usize,
    ends:     usize,
    fps:      Vec<f32>,
    run_ends: usize,
}

impl FlockObserver for Counting {
    fn on_frame_start(&mut self, _frame: mm_core::Frame) {
        self.starts += 1;
    }
    fn on_frame_end(&mut self, _snapshot: &FrameSnapshot<'_>) {
        self.ends += 1;
    }
    fn on_fps(&mut self, _frame: mm_core::Frame, fps: f32) {
        self.fps.push(fps);
    }
    fn on_run_end(&mut self, _frame: mm_core::Frame) {
        self.run_ends += 1;
    }
}

// ── FlockBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let flock = FlockBuilder::new(Reynolds, GridIndex::new()).build().unwrap();
        assert_eq!(flock.store().count, crate::builder::DEFAULT_POPULATION);
        assert_eq!(flock.world(), WorldSize::default());
        assert!(flock.is_running());
        assert_eq!(flock.frame(), mm_core::Frame::ZERO);
    }

    #[test]
    fn initial_positions_lie_inside_world() {
        let world = WorldSize::new(300.0, 200.0).unwrap();
        let flock = FlockBuilder::new(Reynolds, GridIndex::new())
            .world(world)
            .population(500)
            .build()
            .unwrap();
        for p in &flock.store().positions {
            assert!((0.0..=300.0).contains(&p.x) && (0.0..=200.0).contains(&p.y), "{p}");
        }
        assert!(flock.store().trails.iter().all(|t| t.is_empty()));
    }

    #[test]
    fn population_and_boid_count_mismatch_errors() {
        let result = FlockBuilder::new(Reynolds, BruteForceIndex)
            .population(3)
            .boids(vec![Boid::default(); 2])
            .build();
        assert!(matches!(result, Err(SimError::PopulationMismatch { expected: 3, got: 2 })));
    }

    #[test]
    fn invalid_world_errors() {
        let result = FlockBuilder::new(Reynolds, BruteForceIndex)
            .world(WorldSize { width: -1.0, height: 10.0 })
            .build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn starts_paused_when_asked() {
        let mut flock = FlockBuilder::new(Reynolds, BruteForceIndex)
            .population(4)
            .running(false)
            .build()
            .unwrap();
        assert!(flock.tick(Instant::now()).is_none());
    }
}

// ── Frame invariants ──────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    #[test]
    fn speed_never_exceeds_max_speed() {
        let mut flock = flock(300, 1);
        flock.config.max_speed = 3.0;
        for _ in 0..60 {
            flock.tick(Instant::now());
            for v in &flock.store().velocities {
                assert!(v.length() <= 3.0 + 1e-4, "speed {}", v.length());
            }
        }
    }

    #[test]
    fn extreme_weights_keep_state_finite_and_bounded() {
        let mut flock = flock(300, 17);
        flock.config = FlockConfig {
            separation:  3.0e38,
            alignment:   -3.0e38,
            cohesion:    3.0e38,
            mouse_force: 1.0e30,
            ..FlockConfig::default()
        };
        flock.set_pointer(mm_steer::PointerState::repel_at(Vec2::new(400.0, 300.0)));
        let world = flock.world();
        for _ in 0..30 {
            flock.tick(Instant::now());
            let store = flock.store();
            for (p, v) in store.positions.iter().zip(&store.velocities) {
                assert!(p.is_finite() && v.is_finite(), "p {p} v {v}");
                assert!(v.length() <= 4.0 + 1e-4, "speed {}", v.length());
                assert!(p.x >= 0.0 && p.x <= world.width && p.y >= 0.0 && p.y <= world.height, "{p}");
            }
        }
    }

    #[test]
    fn overflowing_separation_clamps_to_max_speed() {
        let config = FlockConfig { separation: 3.0e38, ..quiet_config() };
        let boids = [100.0, 101.0, 102.0]
            .into_iter()
            .map(|x| Boid::new(Vec2::new(x, 100.0), Vec2::ZERO))
            .collect();
        let mut flock = explicit(Reynolds, config, boids);
        flock.tick(Instant::now());
        let store = flock.store();
        // Both neighbors of the outer boids lie on one side; the middle one
        // is pushed equally both ways.
        assert_eq!(store.velocities, vec![Vec2::new(-4.0, 0.0), Vec2::ZERO, Vec2::new(4.0, 0.0)]);
        assert_eq!(
            store.positions,
            vec![Vec2::new(96.0, 100.0), Vec2::new(101.0, 100.0), Vec2::new(106.0, 100.0)]
        );
    }

    #[test]
    fn positions_stay_inside_world() {
        let mut flock = flock(300, 2);
        let world = flock.world();
        for _ in 0..120 {
            flock.tick(Instant::now());
            for p in &flock.store().positions {
                assert!(p.x >= 0.0 && p.x <= world.width, "{p}");
                assert!(p.y >= 0.0 && p.y <= world.height, "{p}");
            }
        }
    }

    #[test]
    fn trails_stay_bounded() {
        let mut flock = flock(50, 3);
        flock.config.trail_length = 5.0;
        flock.config.trail_interval = 1;
        run(&mut flock, 20);
        assert!(flock.store().trails.iter().all(|t| t.len() == 5));

        flock.config.trail_length = 2.0;
        run(&mut flock, 1);
        assert!(flock.store().trails.iter().all(|t| t.len() == 2));
    }

    #[test]
    fn lone_boid_coasts_in_a_straight_line() {
        let boid = Boid::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
        let mut flock = explicit(Reynolds, FlockConfig::default(), vec![boid]);
        run(&mut flock, 3);
        let b = flock.store().boid(mm_core::BoidId(0));
        assert_eq!(b.position, Vec2::new(103.0, 100.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn close_pair_pushes_apart() {
        let config = FlockConfig { separation: 1.5, perception_radius: 50.0, ..quiet_config() };
        let boids = vec![
            Boid::new(Vec2::new(100.0, 100.0), Vec2::ZERO),
            Boid::new(Vec2::new(110.0, 100.0), Vec2::ZERO),
        ];
        let mut flock = explicit(Reynolds, config, boids);
        flock.tick(Instant::now());
        let store = flock.store();
        assert_eq!(store.accelerations[0], Vec2::new(-1.5, 0.0));
        assert_eq!(store.accelerations[1], Vec2::new(1.5, 0.0));
        assert_eq!(store.positions[0], Vec2::new(98.5, 100.0));
        assert_eq!(store.positions[1], Vec2::new(111.5, 100.0));
    }

    #[test]
    fn pointer_attracts_within_radius() {
        let config = FlockConfig { mouse_force: 100.0, ..quiet_config() };
        let mut flock = explicit(Reynolds, config, vec![Boid::new(Vec2::new(100.0, 100.0), Vec2::ZERO)]);
        flock.set_pointer(mm_steer::PointerState::attract_at(Vec2::new(150.0, 100.0)));
        flock.tick(Instant::now());
        assert_eq!(flock.store().velocities[0], Vec2::new(1.0, 0.0));
        assert_eq!(flock.store().positions[0], Vec2::new(101.0, 100.0));
    }

    #[test]
    fn config_edit_applies_on_next_frame() {
        let boid = Boid::new(Vec2::new(100.0, 100.0), Vec2::new(3.0, 0.0));
        let mut flock = explicit(Reynolds, FlockConfig::default(), vec![boid]);
        flock.tick(Instant::now());
        assert_eq!(flock.store().velocities[0], Vec2::new(3.0, 0.0));

        flock.set_config(FlockConfig { max_speed: 1.0, ..FlockConfig::default() });
        flock.tick(Instant::now());
        assert_eq!(flock.store().velocities[0], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn empty_flock_ticks_without_effect() {
        let mut flock = flock(0, 4);
        let snapshot = flock.tick(Instant::now()).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(flock.frame(), mm_core::Frame(1));
    }
}

// ── Determinism and index equivalence ─────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn positions_after<I: NeighborIndex>(index: I, frames: u64) -> Vec<Vec2> {
        let mut flock = FlockBuilder::new(Reynolds, index)
            .population(250)
            .seed(99)
            .build()
            .unwrap();
        run(&mut flock, frames);
        flock.store().positions.clone()
    }

    #[test]
    fn same_seed_same_trajectory() {
        let a = positions_after(GridIndex::new(), 40);
        let b = positions_after(GridIndex::new(), 40);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_placement() {
        let a = flock(20, 1);
        let b = flock(20, 2);
        assert_ne!(a.store().positions, b.store().positions);
    }

    #[test]
    fn every_index_produces_identical_frames() {
        let brute = positions_after(BruteForceIndex, 40);
        let grid = positions_after(GridIndex::new(), 40);
        let rtree = positions_after(RTreeIndex::new(), 40);
        assert_eq!(brute, grid);
        assert_eq!(brute, rtree);
    }

    #[test]
    fn reseed_replays_placement() {
        let mut a = flock(30, 1);
        let mut b = flock(30, 2);
        a.reseed(7);
        b.reseed(7);
        assert_eq!(a.store().positions, b.store().positions);
        assert_eq!(a.store().velocities, b.store().velocities);
    }
}

// ── Re-initialization ─────────────────────────────────────────────────────────

#[cfg(test)]
mod reinit {
    use super::*;

    #[test]
    fn set_population_replaces_store_and_trails() {
        let mut flock = flock(20, 5);
        flock.config.trail_interval = 1;
        run(&mut flock, 10);
        let generation = flock.generation();

        flock.set_population(7);
        let store = flock.store();
        assert_eq!(store.count, 7);
        assert_eq!(store.positions.len(), 7);
        assert_eq!(store.velocities.len(), 7);
        assert_eq!(store.accelerations.len(), 7);
        assert_eq!(store.tags.len(), 7);
        assert_eq!(store.trails.len(), 7);
        assert!(store.trails.iter().all(|t| t.is_empty()));
        assert_eq!(flock.generation(), generation + 1);
    }

    #[test]
    fn frame_counter_survives_reinit() {
        let mut flock = flock(10, 6);
        run(&mut flock, 5);
        flock.reset();
        assert_eq!(flock.frame(), mm_core::Frame(5));
    }

    #[test]
    fn resize_places_boids_in_new_world() {
        let mut flock = flock(100, 7);
        flock.resize(50.0, 40.0).unwrap();
        assert_eq!(flock.world(), WorldSize::new(50.0, 40.0).unwrap());
        for p in &flock.store().positions {
            assert!(p.x <= 50.0 && p.y <= 40.0, "{p}");
        }
    }

    #[test]
    fn invalid_resize_leaves_flock_untouched() {
        let mut flock = flock(10, 8);
        let before = flock.store().positions.clone();
        assert!(flock.resize(f32::NAN, 10.0).is_err());
        assert_eq!(flock.world(), WorldSize::default());
        assert_eq!(flock.store().positions, before);
    }

    #[test]
    fn load_boids_replaces_population() {
        let mut flock = flock(10, 9);
        flock.load_boids(vec![Boid::new(Vec2::new(1.0, 2.0), Vec2::ZERO); 3]);
        assert_eq!(flock.population(), 3);
        assert_eq!(flock.store().positions, vec![Vec2::new(1.0, 2.0); 3]);
    }
}

// ── Run state & control queue ─────────────────────────────────────────────────

#[cfg(test)]
mod control {
    use super::*;
    use crate::{ControlCommand, RunState};

    #[test]
    fn paused_tick_is_a_no_op() {
        let mut flock = flock(20, 10);
        run(&mut flock, 2);
        flock.set_running(false);
        let before = flock.store().positions.clone();
        assert!(flock.tick(Instant::now()).is_none());
        assert_eq!(flock.frame(), mm_core::Frame(2));
        assert_eq!(flock.store().positions, before);
        assert_eq!(flock.run_state(), RunState::Paused);

        flock.set_running(true);
        assert!(flock.tick(Instant::now()).is_some());
        assert_eq!(flock.frame(), mm_core::Frame(3));
    }

    #[test]
    fn queued_commands_land_on_next_tick() {
        let mut flock = flock(20, 11);
        let handle = flock.control_handle();
        assert!(handle.send(ControlCommand::SetPopulation(5)));
        // Nothing happens until the flock ticks.
        assert_eq!(flock.store().count, 20);

        let snapshot = flock.tick(Instant::now()).unwrap();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.generation, 1);
    }

    #[test]
    fn resume_command_works_while_paused() {
        let mut flock = flock(5, 12);
        let handle = flock.control_handle();
        handle.set_running(false);
        assert!(flock.tick(Instant::now()).is_none());
        assert!(flock.tick(Instant::now()).is_none());
        handle.set_running(true);
        assert!(flock.tick(Instant::now()).is_some());
    }

    #[test]
    fn commands_from_another_thread() {
        let mut flock = flock(5, 13);
        let handle = flock.control_handle();
        std::thread::spawn(move || {
            let config = FlockConfig { max_speed: 0.0, ..FlockConfig::default() };
            handle.set_config(config);
            handle.send(ControlCommand::Resize { width: 100.0, height: 100.0 });
        })
        .join()
        .unwrap();

        flock.tick(Instant::now());
        assert_eq!(flock.config.max_speed, 0.0);
        assert_eq!(flock.world(), WorldSize::new(100.0, 100.0).unwrap());
        assert!(flock.store().velocities.iter().all(|v| *v == Vec2::ZERO));
    }

    #[test]
    fn rejected_command_does_not_stop_the_frame() {
        let mut flock = flock(5, 14);
        let handle = flock.control_handle();
        handle.send(ControlCommand::Resize { width: -3.0, height: 10.0 });
        assert!(flock.tick(Instant::now()).is_some());
        assert_eq!(flock.world(), WorldSize::default());
    }

    #[test]
    fn handles_share_one_queue() {
        let mut flock = flock(5, 15);
        let a = flock.control_handle();
        let b = a.clone();
        a.send(ControlCommand::SetPopulation(2));
        b.send(ControlCommand::SetPopulation(9));
        flock.tick(Instant::now());
        assert_eq!(flock.store().count, 9);
    }

    #[test]
    fn handle_reports_dropped_flock() {
        let mut flock = flock(1, 16);
        let handle = flock.control_handle();
        drop(flock);
        assert!(!handle.send(ControlCommand::Reset));
    }
}

// ── FPS and observer ──────────────────────────────────────────────────────────

#[cfg(test)]
mod reporting {
    use super::*;

    #[test]
    fn fps_reported_once_per_second() {
        let mut flock = flock(10, 20);
        let mut obs = Counting::default();
        let t0 = Instant::now();
        // Frames at 0, 100 ms, …, 2000 ms.
        let ran = flock.run_frames(21, t0, Duration::from_millis(100), &mut obs);
        assert_eq!(ran, 21);
        assert_eq!(obs.fps.len(), 2);
        assert!(obs.fps.iter().all(|f| (*f - 10.0).abs() < 1e-3), "{:?}", obs.fps);
        assert_eq!(flock.fps(), Some(obs.fps[1]));
    }

    #[test]
    fn last_frame_is_none_until_a_frame_runs() {
        let mut flock = flock(10, 23);
        assert_eq!(flock.last_frame(), None);
        assert_eq!(flock.snapshot().frame, mm_core::Frame::ZERO);

        flock.tick(Instant::now());
        assert_eq!(flock.last_frame(), Some(mm_core::Frame::ZERO));
        assert_eq!(flock.snapshot().frame, mm_core::Frame::ZERO);

        run(&mut flock, 2);
        assert_eq!(flock.last_frame(), Some(mm_core::Frame(2)));
        assert_eq!(flock.frame(), mm_core::Frame(3));
    }

    #[test]
    fn no_fps_before_first_window_closes() {
        let mut flock = flock(10, 21);
        let mut obs = Counting::default();
        flock.run_frames(5, Instant::now(), Duration::from_millis(100), &mut obs);
        assert!(obs.fps.is_empty());
        assert_eq!(flock.fps(), None);
    }

    #[test]
    fn paused_time_is_not_counted() {
        let mut flock = flock(10, 22);
        let t0 = Instant::now();
        flock.tick(t0);
        flock.set_running(false);
        flock.set_running(true);
        // The window reopened on resume; one more second is needed.
        assert!(flock.tick(t0 + Duration::from_secs(5)).unwrap().fps.is_none());
        let snapshot = flock.tick(t0 + Duration::from_secs(6)).unwrap();
        assert!(snapshot.fps_updated);
        assert_eq!(snapshot.fps, Some(1.0));
    }

    #[test]
    fn observer_sees_only_completed_frames() {
        let mut flock = flock(10, 23);
        let mut obs = Counting::default();
        flock.run_frames(4, Instant::now(), STEP, &mut obs);
        flock.set_running(false);
        let ran = flock.run_frames(3, Instant::now(), STEP, &mut obs);
        assert_eq!(ran, 0);
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 4);
        assert_eq!(obs.run_ends, 2);
    }

    #[test]
    fn snapshot_exposes_render_state() {
        let mut flock = flock(12, 24);
        let snapshot = flock.tick(Instant::now()).unwrap();
        assert_eq!(snapshot.frame, mm_core::Frame(0));
        assert_eq!(snapshot.positions().len(), 12);
        assert_eq!(snapshot.velocities().len(), 12);
        assert_eq!(snapshot.tags().len(), 12);
        assert_eq!(snapshot.trails().len(), 12);
        assert!(snapshot.running);
    }
}
