//! Inbound edits from a UI running on another thread.
//!
//! A control panel holds a [`ControlHandle`] and sends [`ControlCommand`]s;
//! the flock drains them at the start of its next tick.  Every edit
//! therefore lands on a frame boundary, and the panel never touches the
//! agent store directly.
//!
//! ```rust,ignore
//! let handle = flock.control_handle();
//! std::thread::spawn(move || {
//!     handle.send(ControlCommand::SetPopulation(2_000));
//!     handle.send(ControlCommand::SetRunning(false));
//! });
//! ```

use std::sync::mpsc::{Receiver, Sender};

use mm_core::FlockConfig;
use mm_steer::PointerState;

/// One edit to the running flock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ControlCommand {
    /// Replace the whole behavior configuration.
    SetConfig(FlockConfig),
    /// Latest pointer position, pressed state, and mode.
    SetPointer(PointerState),
    /// Resume (`true`) or pause (`false`) frame scheduling.
    SetRunning(bool),
    /// Re-initialize with this many boids.
    SetPopulation(usize),
    /// Re-initialize in a world of this size.
    Resize { width: f32, height: f32 },
    /// Re-initialize with the current population and world.
    Reset,
    /// Restart the placement RNG from `seed`, then re-initialize.
    Reseed(u64),
}

/// Cloneable sending side of a flock's control queue.
#[derive(Clone)]
pub struct ControlHandle {
    tx: Sender<ControlCommand>,
}

impl ControlHandle {
    pub(crate) fn new(tx: Sender<ControlCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command.  Returns `false` if the flock has been dropped.
    pub fn send(&self, command: ControlCommand) -> bool {
        self.tx.send(command).is_ok()
    }

    pub fn set_pointer(&self, pointer: PointerState) -> bool {
        self.send(ControlCommand::SetPointer(pointer))
    }

    pub fn set_config(&self, config: FlockConfig) -> bool {
        self.send(ControlCommand::SetConfig(config))
    }

    pub fn set_running(&self, running: bool) -> bool {
        self.send(ControlCommand::SetRunning(running))
    }
}

/// Take every command currently queued, oldest first, without blocking.
pub(crate) fn drain(rx: &Receiver<ControlCommand>) -> Vec<ControlCommand> {
    rx.try_iter().collect()
}
