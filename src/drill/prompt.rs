//! Single-note prompt validation
//!
//! One round: prompt, wait with a deadline, reveal a hint and wait without
//! one if the deadline passes, then judge the played note against the
//! expected name (enharmonic spellings match).

use std::time::Duration;

use crate::cli::display::Display;
use crate::error::DrillError;
use crate::midi::listener::NoteListener;
use crate::midi::source::{NoteEvent, NoteSource};
use crate::theory::notes::{midi_to_note_name, notes_match};

use super::session::SessionStats;

/// Result of one prompt round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Correct,
    Incorrect { played: String, expected: String },
    /// A bounded wait expired with no note. Inside a round this triggers
    /// the hint path rather than ending the round.
    TimedOut,
}

impl RoundOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, RoundOutcome::Correct)
    }
}

fn judge(event: NoteEvent, expected_note: &str) -> RoundOutcome {
    let played = midi_to_note_name(event.note);
    if notes_match(played, expected_note) {
        RoundOutcome::Correct
    } else {
        RoundOutcome::Incorrect {
            played: played.to_string(),
            expected: expected_note.to_string(),
        }
    }
}

/// Run one prompt round and record its outcome.
///
/// Setup rounds (`is_setup`) confirm a reference note and are judged and
/// displayed like any other round but never touch `stats`. Retrying after
/// a miss is the caller's decision, not this function's.
#[allow(clippy::too_many_arguments)]
pub fn prompt_and_validate(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    stats: &mut SessionStats,
    expected_note: &str,
    prompt_text: &str,
    is_setup: bool,
    timeout: Option<Duration>,
) -> Result<RoundOutcome, DrillError> {
    display.show_prompt(prompt_text)?;

    let mut outcome = match listener.listen(source, timeout)? {
        Some(event) => judge(event, expected_note),
        None => RoundOutcome::TimedOut,
    };

    if outcome == RoundOutcome::TimedOut {
        // Deadline passed: reveal the answer, then wait with no deadline.
        // This second wait ends only on a note or cancellation.
        display.show_hint(expected_note)?;
        outcome = match listener.listen(source, None)? {
            Some(event) => judge(event, expected_note),
            None => RoundOutcome::TimedOut,
        };
    }

    match &outcome {
        RoundOutcome::Correct => {
            display.show_correct()?;
            if !is_setup {
                stats.record_correct();
            }
        }
        RoundOutcome::Incorrect { played, expected } => {
            display.show_incorrect(played, expected)?;
            if !is_setup {
                stats.record_incorrect();
            }
        }
        // Unbounded waits only end without a note on cancellation, which
        // surfaces as an error above.
        RoundOutcome::TimedOut => {}
    }

    Ok(outcome)
}
