//! `headless` — fixed-step flock run with a scripted pointer, no renderer.
//!
//! A circling pointer is fed through the control queue exactly as a UI
//! thread would, flipping between attract and repel every few seconds.
//! FPS windows are logged as they close; a JSON summary is printed at the
//! end.
//!
//! Run with:
//!   cargo run -p headless --release -- [config.json]
//!
//! The optional JSON document may set any subset of the fields of
//! [`DemoConfig`]; e.g. `{"population": 800, "flock": {"cohesion": 2.0}}`.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mm_agent::BoidStore;
use mm_core::{FlockConfig, Frame, Vec2, WorldSize};
use mm_sim::{ControlHandle, FlockBuilder, FlockObserver, FrameSnapshot};
use mm_spatial::GridIndex;
use mm_steer::{PointerMode, PointerState, Reynolds};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    flock:      FlockConfig,
    world:      WorldSize,
    population: usize,
    seed:       u64,
    frames:     u64,
    /// Simulated frame interval; 16 ms ≈ a 60 Hz display.
    frame_ms:   u64,
    /// Frames between pointer mode flips.
    flip_every: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            flock:      FlockConfig::default(),
            world:      WorldSize::default(),
            population: 400,
            seed:       42,
            frames:     1_800,
            frame_ms:   16,
            flip_every: 300,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Scripted pointer ──────────────────────────────────────────────────────────

/// Moves the pointer around the world centre, one revolution per
/// `period` frames.
struct PointerScript {
    control:    ControlHandle,
    centre:     Vec2,
    orbit:      f32,
    period:     u64,
    flip_every: u64,
    fps_log:    Vec<f32>,
}

impl PointerScript {
    fn pointer_at(&self, frame: Frame) -> PointerState {
        let turns = (frame.0 % self.period) as f32 / self.period as f32;
        let angle = turns * std::f32::consts::TAU;
        let position = self.centre + Vec2::from_angle(angle) * self.orbit;
        let repel = (frame.0 / self.flip_every.max(1)) % 2 == 1;
        PointerState {
            position,
            active: true,
            mode: if repel { PointerMode::Repel } else { PointerMode::Attract },
        }
    }
}

impl FlockObserver for PointerScript {
    fn on_frame_start(&mut self, frame: Frame) {
        // Lands at the start of this very tick.
        self.control.set_pointer(self.pointer_at(frame));
    }

    fn on_frame_end(&mut self, snapshot: &FrameSnapshot<'_>) {
        if snapshot.frame.on_cadence(self.flip_every) && snapshot.frame != Frame::ZERO {
            let mode = self.pointer_at(snapshot.frame + 1).mode;
            info!(frame = %snapshot.frame, ?mode, "pointer mode");
        }
    }

    fn on_fps(&mut self, frame: Frame, fps: f32) {
        info!(%frame, fps, "fps");
        self.fps_log.push(fps);
    }

    fn on_run_end(&mut self, final_frame: Frame) {
        info!(%final_frame, "run complete");
    }
}

fn mean_speed(store: &BoidStore) -> f32 {
    if store.is_empty() {
        return 0.0;
    }
    store.iter().map(|b| b.speed()).sum::<f32>() / store.len() as f32
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args().nth(1);
    let cfg = load_config(path.as_deref().map(Path::new))?;
    info!(population = cfg.population, world = %cfg.world, frames = cfg.frames, "config loaded");

    let mut flock = FlockBuilder::new(Reynolds, GridIndex::new())
        .config(cfg.flock.clone())
        .world(cfg.world)
        .population(cfg.population)
        .seed(cfg.seed)
        .build()?;

    let world = flock.world();
    let mut script = PointerScript {
        control:    flock.control_handle(),
        centre:     Vec2::new(world.width / 2.0, world.height / 2.0),
        orbit:      world.width.min(world.height) / 3.0,
        period:     600,
        flip_every: cfg.flip_every,
        fps_log:    Vec::new(),
    };

    let wall = Instant::now();
    let ran = flock.run_frames(
        cfg.frames,
        Instant::now(),
        Duration::from_millis(cfg.frame_ms),
        &mut script,
    );
    let elapsed = wall.elapsed();

    let summary = serde_json::json!({
        "frames":          ran,
        "boids":           flock.store().len(),
        "mean_speed":      mean_speed(flock.store()),
        "simulated_fps":   script.fps_log.last(),
        "wall_ms":         elapsed.as_secs_f64() * 1e3,
        "wall_ms_per_frame": elapsed.as_secs_f64() * 1e3 / ran.max(1) as f64,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
