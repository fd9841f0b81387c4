//! `mm-spatial` — neighbor membership queries.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`index`]   | `NeighborIndex` trait, `is_neighbor` membership rule         |
//! | [`brute`]   | `BruteForceIndex`: O(n) scan per boid                       |
//! | [`grid`]    | `GridIndex`: uniform buckets keyed by `FxHashMap`           |
//! | [`rtree`]   | `RTreeIndex`: `rstar` R-tree, bulk-loaded every frame       |
//!
//! # Membership
//!
//! Boid `j` is a neighbor of boid `i` iff `j != i` and
//! `0 < |p_j - p_i|² < r²`.  Coincident boids are never neighbors: the
//! separation term would otherwise divide by zero.  Every index returns the
//! same members in ascending `BoidId` order, so swapping indices changes
//! only the cost of a frame, never its result.

pub mod brute;
pub mod grid;
pub mod index;
pub mod rtree;


pub use brute::BruteForceIndex;
pub use grid::GridIndex;
pub use index::{NeighborIndex, is_neighbor};
pub use rtree::RTreeIndex;
