//! Crate-wide error type
//!
//! Splits failures the way the drills need to react to them:
//! - `NotConnected` is a contract violation and aborts the program
//! - `Cancelled` unwinds the active round without touching session stats
//! - everything else is surfaced to `main` and printed

use thiserror::Error;

/// Errors produced by the MIDI layer and the drill loops
#[derive(Debug, Error)]
pub enum DrillError {
    /// Listening was attempted without an open MIDI port.
    #[error("MIDI port not connected; connect a device before listening")]
    NotConnected,

    /// No MIDI input ports are available on this machine.
    #[error("no MIDI input devices found")]
    NoDevices,

    /// The MIDI backend reported a failure (init, enumeration, connect).
    #[error("MIDI device error: {0}")]
    Midi(String),

    /// A note name, interval, or mode fell outside the theory tables.
    #[error("music theory error: {0}")]
    Theory(String),

    /// The user interrupted the session (Ctrl+C).
    #[error("practice session cancelled")]
    Cancelled,

    /// Terminal or stdin I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DrillError {
    /// True for user-initiated cancellation, which drills treat as a
    /// clean session end rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DrillError::Cancelled)
    }
}
