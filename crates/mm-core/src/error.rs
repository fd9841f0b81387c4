//! Core error type.
//!
//! The numerical core is infallible: zero distances and zero-length vectors
//! are guarded at the source.  Errors only arise at the configuration
//! boundary (world dimensions).

use thiserror::Error;

/// The top-level error type for `mm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid world size {width}x{height}: extents must be finite and non-negative")]
    InvalidWorld { width: f32, height: f32 },
}

/// Shorthand result type for all `mm-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
