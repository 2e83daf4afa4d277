//! MIDI Input: device connection and deadline-bounded listening
//!
//! # Components
//! - `source.rs`: note events, the `NoteSource` polling contract, and the
//!   midir-backed `MidiSource`
//! - `listener.rs`: `NoteListener` bounded-wait loop and Ctrl+C flag

pub mod listener;
pub mod source;

pub use listener::{CancelFlag, NoteListener};
pub use source::{MidiSource, NoteEvent, NoteSource};
