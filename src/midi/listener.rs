//! Deadline-bounded note listening
//!
//! A single poll/sleep loop serves both bounded and unbounded waits. The
//! loop checks cancellation and the deadline on every pass, so worst-case
//! extra latency is one poll quantum.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::DrillError;
use crate::midi::source::{NoteEvent, NoteSource};

/// Shared cancellation flag, set from the Ctrl+C handler and checked at
/// every suspension point.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Blocks for the next key press with an optional deadline.
pub struct NoteListener {
    poll_quantum: Duration,
    cancel: CancelFlag,
}

impl NoteListener {
    /// Listener with the standard 10 ms poll quantum.
    pub fn new(cancel: CancelFlag) -> Self {
        Self::with_quantum(cancel, Duration::from_millis(10))
    }

    /// Listener with a custom poll quantum. Tests use a short quantum so
    /// deadline behavior can be exercised in milliseconds.
    pub fn with_quantum(cancel: CancelFlag, poll_quantum: Duration) -> Self {
        NoteListener {
            poll_quantum,
            cancel,
        }
    }

    /// Whether the shared cancellation flag has been set.
    pub fn cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the next key press from `source`.
    ///
    /// Returns `Ok(Some(event))` on a press, `Ok(None)` once `timeout`
    /// elapses, and blocks indefinitely when `timeout` is `None`.
    /// Zero-velocity note-ons (release on some keyboards) are consumed and
    /// ignored. Listening on a closed source is a contract violation and
    /// fails with `NotConnected` immediately.
    pub fn listen(
        &self,
        source: &mut dyn NoteSource,
        timeout: Option<Duration>,
    ) -> Result<Option<NoteEvent>, DrillError> {
        if !source.is_connected() {
            return Err(DrillError::NotConnected);
        }

        let deadline = timeout.map(|t| Instant::now() + t);

        loop {
            if self.cancel.is_cancelled() {
                return Err(DrillError::Cancelled);
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Ok(None);
                }
            }

            match source.poll() {
                Some(event) if event.is_press() => return Ok(Some(event)),
                // Release or zero-velocity activation: keep waiting
                Some(_) => {}
                None => thread::sleep(self.poll_quantum),
            }
        }
    }
}
