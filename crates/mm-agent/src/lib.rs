//! `mm-agent` — Structure-of-Arrays boid storage for the `murmur` engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`boid`]        | `Boid` (by-value record), `BoidMut` (handle), `VisualTag` |
//! | [`trail`]       | `Trail`, a bounded FIFO of past positions                 |
//! | [`store`]       | `BoidStore` (SoA arrays + one trail per boid)             |
//! | [`builder`]     | `BoidStoreBuilder` (seeded construction)                  |
//!
//! # Lifecycle
//!
//! Boids are only created and destroyed in bulk: [`BoidStore::initialize`]
//! replaces the whole population and empties every trail.  There is no
//! per-boid add/remove, so a `BoidId` is stable until the next
//! re-initialization.

pub mod boid;
pub mod builder;
pub mod store;
pub mod trail;


pub use boid::{Boid, BoidMut, VisualTag};
pub use builder::BoidStoreBuilder;
pub use store::BoidStore;
pub use trail::Trail;
