//! `mm-sim` — frame scheduler for the murmur flocking engine.
//!
//! # Two-phase frame
//!
//! ```text
//! tick(now):
//!   ⓪ Control   — drain queued ControlCommands (config, pointer, resize,
//!                 population, reset, run/pause) at the frame boundary.
//!   ① Gate      — paused: return None, nothing advances.
//!   ② Index     — rebuild the NeighborIndex from current positions.
//!   ③ Forces    — for every boid, neighbors + SteeringModel + pointer
//!                 → store.accelerations (parallel with `parallel`).
//!                 Reads only the pre-frame positions and velocities.
//!   ④ Integrate — velocity, speed clamp, position, wrap, trail sample.
//!   ⑤ Report    — FPS meter, FrameSnapshot for the renderer.
//! ```
//!
//! The crate never owns a clock: the driver (display refresh callback,
//! fixed-step loop, or a test calling `tick` N times) passes `now`, which
//! feeds only the FPS figure.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the force phase on Rayon's thread pool.           |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `ControlCommand`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::time::{Duration, Instant};
//! use mm_sim::{FlockBuilder, NoopObserver};
//! use mm_spatial::GridIndex;
//! use mm_steer::Reynolds;
//!
//! let mut flock = FlockBuilder::new(Reynolds, GridIndex::new())
//!     .population(1_000)
//!     .build()?;
//! flock.run_frames(600, Instant::now(), Duration::from_millis(16), &mut NoopObserver);
//! ```

pub mod builder;
pub mod control;
pub mod error;
pub mod fps;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::FlockBuilder;
pub use control::{ControlCommand, ControlHandle};
pub use error::{SimError, SimResult};
pub use fps::FpsMeter;
pub use observer::{FlockObserver, NoopObserver};
pub use sim::{Flock, FrameSnapshot, RunState};
