//! Observer trait for progress reporting and frame consumption.

use mm_core::Frame;

use crate::FrameSnapshot;

/// Callbacks invoked by [`Flock::run_frames`][crate::Flock::run_frames].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: FPS printer
///
/// ```rust,ignore
/// struct FpsPrinter;
///
/// impl FlockObserver for FpsPrinter {
///     fn on_fps(&mut self, frame: Frame, fps: f32) {
///         println!("{frame}: {fps:.1} fps");
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called before each tick, with the index of the frame about to run.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after each completed frame with read-only access to the boids
    /// and their trails.  Not called for ticks skipped while paused.
    fn on_frame_end(&mut self, _snapshot: &FrameSnapshot<'_>) {}

    /// Called when a one-second FPS window closes.
    fn on_fps(&mut self, _frame: Frame, _fps: f32) {}

    /// Called once after the last requested tick.
    fn on_run_end(&mut self, _final_frame: Frame) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
