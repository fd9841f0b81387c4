//! Rolling frames-per-second figure.
//!
//! Purely observational: the meter sees the driver's timestamps and never
//! feeds back into physics.

use std::time::{Duration, Instant};

/// Minimum span of one measurement window.
const WINDOW: Duration = Duration::from_secs(1);

/// Counts completed frames and reports one figure per window of at least
/// one second.
#[derive(Clone, Debug, Default)]
pub struct FpsMeter {
    window_start: Option<Instant>,
    frames:       u32,
    current:      Option<f32>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame completed at `now`.
    ///
    /// The first frame after construction or [`reset`](Self::reset) opens a
    /// window.  Returns `Some(fps)` when the window closes.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames = 0;
            return None;
        };
        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed < WINDOW {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.current = Some(fps);
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }

    /// Discard the open window (e.g. on pause) so idle time is not counted.
    /// The last reported figure is kept.
    pub fn reset(&mut self) {
        self.window_start = None;
        self.frames = 0;
    }

    /// Last reported figure, if any window has closed yet.
    pub fn current(&self) -> Option<f32> {
        self.current
    }
}
