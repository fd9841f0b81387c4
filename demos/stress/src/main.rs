//! `stress` — wall-clock cost of a frame at growing populations, per
//! neighbor index.
//!
//! Every population runs at the same density (boids per square pixel) so
//! the neighbor count per boid stays roughly constant and the table shows
//! how each index scales.  The force phase runs on Rayon.
//!
//! Run with:
//!   cargo run -p stress --profile fast

// Use mimalloc so per-frame index rebuilds do not dominate on the system heap.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::{Duration, Instant};

use anyhow::Result;
use memory_stats::memory_stats;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mm_core::{FlockConfig, WorldSize};
use mm_sim::FlockBuilder;
use mm_spatial::{BruteForceIndex, GridIndex, NeighborIndex, RTreeIndex};
use mm_steer::Reynolds;

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATIONS:  [usize; 5] = [1_000, 5_000, 20_000, 50_000, 100_000];
/// Boids per square pixel; 800×600 with ~500 boids.
const DENSITY:      f32        = 0.001;
const ASPECT:       f32        = 4.0 / 3.0;
const WARMUP:       u64        = 10;
const FRAMES:       u64        = 100;
const SEED:         u64        = 7;
/// The O(n²) reference index is only timed up to this population.
const BRUTE_LIMIT:  usize      = 5_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mem_mb() -> f64 {
    memory_stats()
        .map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

/// World with the requested area at `ASPECT`.
fn world_for(population: usize) -> Result<WorldSize> {
    let area = population as f32 / DENSITY;
    let height = (area / ASPECT).sqrt();
    let world = WorldSize::new(height * ASPECT, height)?;
    Ok(world)
}

/// Mean wall time of one frame after warm-up.
fn time_frames<I: NeighborIndex>(index: I, population: usize) -> Result<Duration> {
    let world = world_for(population)?;
    let mut flock = FlockBuilder::new(Reynolds, index)
        .config(FlockConfig::default())
        .world(world)
        .population(population)
        .seed(SEED)
        .build()?;

    for _ in 0..WARMUP {
        flock.tick(Instant::now());
    }
    let start = Instant::now();
    for _ in 0..FRAMES {
        flock.tick(Instant::now());
    }
    let per_frame = start.elapsed() / FRAMES as u32;

    let density = flock.store().len() as f32 / flock.world().area();
    info!(population, world = %world, density, mem_mb = mem_mb(), "timed");
    Ok(per_frame)
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(threads = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1), "stress run");

    println!("{:>9}  {:>10}  {:>10}  {:>10}", "boids", "brute ms", "grid ms", "rtree ms");
    for &population in &POPULATIONS {
        let brute = if population <= BRUTE_LIMIT {
            format!("{:>10.3}", ms(time_frames(BruteForceIndex, population)?))
        } else {
            format!("{:>10}", "-")
        };
        let grid = ms(time_frames(GridIndex::new(), population)?);
        let rtree = ms(time_frames(RTreeIndex::new(), population)?);
        println!("{population:>9}  {brute}  {grid:>10.3}  {rtree:>10.3}");
    }
    println!("RSS ≈ {:.0} MB", mem_mb());
    Ok(())
}
