//! Ordered scale-sequence validation
//!
//! The player works through the expected notes strictly in order. Two
//! clocks run at once: a short per-note bound that only exists so the
//! overall deadline is re-checked between notes, and the overall sequence
//! deadline that actually fails the attempt.

use std::time::{Duration, Instant};

use crate::cli::display::Display;
use crate::error::DrillError;
use crate::midi::listener::NoteListener;
use crate::midi::source::NoteSource;
use crate::theory::notes::{midi_to_note_name, notes_match};

/// Per-note listen bound inside a sequence. Deliberately fixed and
/// independent of the user's `--timeout`; only the overall sequence
/// deadline scales with it. A per-note expiry is not a failure.
pub const NOTE_TIMEOUT: Duration = Duration::from_secs(3);

/// Listen for `expected` played front to back.
///
/// Returns `Ok(true)` only when every note matched in order. The first
/// mismatch discards the whole attempt; there is no resuming from the
/// failed position. An empty `expected` succeeds without consuming input.
pub fn play_scale_sequence(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    expected: &[String],
    direction: &str,
    note_timeout: Duration,
    sequence_timeout: Option<Duration>,
) -> Result<bool, DrillError> {
    let start = Instant::now();
    let mut notes_played: Vec<String> = Vec::new();
    let mut current_index = 0;

    display.show_sequence_prompt(expected)?;

    while current_index < expected.len() {
        // The overall deadline dominates the per-note bound.
        if let Some(timeout) = sequence_timeout {
            if start.elapsed() >= timeout {
                display.show_sequence_timeout()?;
                return Ok(false);
            }
        }

        let event = match listener.listen(source, Some(note_timeout))? {
            Some(event) => event,
            // Per-note expiry: loop back so the sequence deadline is
            // evaluated again.
            None => continue,
        };

        let played = midi_to_note_name(event.note);
        display.show_played_note(played)?;
        notes_played.push(played.to_string());

        if notes_match(played, &expected[current_index]) {
            current_index += 1;
        } else {
            display.show_sequence_mismatch(&expected[current_index], played, &notes_played)?;
            return Ok(false);
        }
    }

    display.show_sequence_complete(direction)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi::listener::CancelFlag;
    use crate::midi::source::testing::{press, ScriptedSource};

    fn quick_listener() -> NoteListener {
        NoteListener::with_quantum(CancelFlag::new(), Duration::from_millis(1))
    }

    fn names(notes: &[&str]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    fn run(
        source: &mut ScriptedSource,
        expected: &[String],
        note_timeout: Duration,
        sequence_timeout: Option<Duration>,
    ) -> bool {
        play_scale_sequence(
            source,
            &quick_listener(),
            &Display::new(),
            expected,
            "ascending",
            note_timeout,
            sequence_timeout,
        )
        .unwrap()
    }

    #[test]
    fn test_full_scale_in_order_succeeds() {
        // C major ascending: C D E F G A B C
        let mut source = ScriptedSource::immediate(&[
            press(60),
            press(62),
            press(64),
            press(65),
            press(67),
            press(69),
            press(71),
            press(72),
        ]);
        let expected = names(&["C", "D", "E", "F", "G", "A", "B", "C"]);
        assert!(run(
            &mut source,
            &expected,
            Duration::from_millis(20),
            Some(Duration::from_secs(30)),
        ));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_out_of_order_fails_at_second_note() {
        // Input A C B against expected A B C
        let mut source = ScriptedSource::immediate(&[press(69), press(72), press(71)]);
        let expected = names(&["A", "B", "C"]);
        assert!(!run(
            &mut source,
            &expected,
            Duration::from_millis(20),
            Some(Duration::from_secs(30)),
        ));
        // The third event was never consumed
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_incomplete_sequence_times_out() {
        // Only A and B arrive for an A B C expectation; the overall
        // deadline must end the attempt instead of hanging.
        let mut source = ScriptedSource::immediate(&[press(69), press(71)]);
        let expected = names(&["A", "B", "C"]);
        assert!(!run(
            &mut source,
            &expected,
            Duration::from_millis(10),
            Some(Duration::from_millis(60)),
        ));
    }

    #[test]
    fn test_flat_spelled_scale_accepts_sharp_input() {
        // Bb major is spelled with flats; MIDI reads sharps
        let mut source = ScriptedSource::immediate(&[
            press(70), // A# -> Bb
            press(72),
            press(74),
            press(75), // D# -> Eb
            press(77),
            press(79),
            press(81),
            press(82),
        ]);
        let expected = names(&["Bb", "C", "D", "Eb", "F", "G", "A", "Bb"]);
        assert!(run(
            &mut source,
            &expected,
            Duration::from_millis(20),
            Some(Duration::from_secs(30)),
        ));
    }

    #[test]
    fn test_empty_expected_succeeds_without_input() {
        let mut source = ScriptedSource::immediate(&[press(60)]);
        assert!(run(
            &mut source,
            &[],
            Duration::from_millis(10),
            Some(Duration::from_millis(50)),
        ));
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_per_note_expiry_alone_is_not_failure() {
        // The note arrives after several per-note windows but well within
        // the overall deadline.
        let mut source = ScriptedSource::timed(vec![(Duration::from_millis(50), press(60))]);
        let expected = names(&["C"]);
        assert!(run(
            &mut source,
            &expected,
            Duration::from_millis(10),
            Some(Duration::from_secs(2)),
        ));
    }

    #[test]
    fn test_unbounded_sequence_waits_for_all_notes() {
        let mut source = ScriptedSource::timed(vec![
            (Duration::from_millis(10), press(60)),
            (Duration::from_millis(30), press(62)),
        ]);
        let expected = names(&["C", "D"]);
        assert!(run(&mut source, &expected, Duration::from_millis(10), None));
    }

    #[test]
    fn test_cancellation_propagates() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let listener = NoteListener::with_quantum(cancel, Duration::from_millis(1));
        let mut source = ScriptedSource::silent();
        let expected = names(&["C"]);
        let err = play_scale_sequence(
            &mut source,
            &listener,
            &Display::new(),
            &expected,
            "ascending",
            Duration::from_millis(10),
            Some(Duration::from_secs(1)),
        )
        .unwrap_err();
        assert!(err.is_cancelled());
    }
}
