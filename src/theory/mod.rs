//! Music Theory: note tables, intervals, and scale generation
//!
//! # Components
//! - `notes.rs`: chromatic note names, octave reduction, enharmonic matching
//! - `scales.rs`: scale-degree intervals, diatonic modes, scale generation
//!
//! Everything here is a pure lookup; the drill loops consume these
//! functions and never mutate theory state.

pub mod notes;
pub mod scales;

pub use notes::{midi_to_note_name, note_name_to_index, notes_match, random_note};
pub use scales::{
    calculate_interval, format_interval_prompt, generate_scale, random_interval, random_mode,
};
