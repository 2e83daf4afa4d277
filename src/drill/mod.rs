//! Practice Drills: validators, session statistics, and drill loops
//!
//! # Components
//! - `session.rs`: correct/incorrect counters and accuracy
//! - `prompt.rs`: single-note prompt validation with timeout hint
//! - `sequence.rs`: ordered scale-sequence validation with deadlines
//! - `modes.rs`: the scale-degree and mode practice loops

pub mod modes;
pub mod prompt;
pub mod sequence;
pub mod session;

pub use modes::{mode_practice, scale_degree_practice};
pub use prompt::{prompt_and_validate, RoundOutcome};
pub use sequence::play_scale_sequence;
pub use session::SessionStats;
