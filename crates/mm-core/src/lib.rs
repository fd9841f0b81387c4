//! `mm-core` — foundational types for the `murmur` flocking engine.
//!
//! This crate is a dependency of every other `mm-*` crate.  It has no `mm-*`
//! dependencies and only a handful of external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vector`]      | `Vec2`, `limit_magnitude`, `normalize`, `saturate`    |
//! | [`config`]      | `FlockConfig`, `SteeringLimit`, `WorldSize`           |
//! | [`ids`]         | `BoidId`                                              |
//! | [`time`]        | `Frame`                                               |
//! | [`rng`]         | `SimRng` (population seeding)                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FlockConfig, SteeringLimit, WorldSize};
pub use error::{CoreError, CoreResult};
pub use ids::{BoidId, MAX_BOIDS};
pub use rng::SimRng;
pub use time::Frame;
pub use vector::{Vec2, limit_magnitude, normalize, saturate};
