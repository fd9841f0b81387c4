//! `mm-steer` — force evaluation for one boid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`pointer`] | `PointerState`, `PointerMode`, `pointer_force`               |
//! | [`context`] | `SteerContext`: read-only frame snapshot                     |
//! | [`forces`]  | `Steering` breakdown, separation / alignment / cohesion      |
//! | [`model`]   | `SteeringModel` trait, `Reynolds`, `evaluate`                |
//! | [`noop`]    | `Drift`: a model that never steers                           |
//!
//! # Output
//!
//! [`evaluate`] returns a [`Steering`] whose [`total`](Steering::total) is
//! the boid's acceleration for the frame: the plain sum of the weighted
//! separation, alignment, and cohesion terms plus the pointer term.  No
//! clamping happens here.

pub mod context;
pub mod forces;
pub mod model;
pub mod noop;
pub mod pointer;


pub use context::SteerContext;
pub use forces::{Steering, alignment, cohesion, separation};
pub use model::{Reynolds, SteeringModel, evaluate};
pub use noop::Drift;
pub use pointer::{PointerMode, PointerState, pointer_force};
