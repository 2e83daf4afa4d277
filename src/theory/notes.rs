//! Note names, octave reduction, and enharmonic equivalence
//!
//! Notes are octave-reduced to one of twelve chromatic positions. Two
//! spellings of the same position (C#/Db, Eb/D#, ...) compare equal.

use rand::seq::SliceRandom;

/// Chromatic scale starting from C, sharp spellings.
pub const CHROMATIC_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The same twelve positions with flat spellings.
pub const FLAT_NOTES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Convert a MIDI note number (0-127) to a note name, ignoring octave.
/// MIDI input always reports sharp spellings.
pub fn midi_to_note_name(midi_num: u8) -> &'static str {
    CHROMATIC_NOTES[(midi_num % 12) as usize]
}

/// Chromatic index (0-11) for a note name in either spelling, or `None`
/// if the name is not in the tables.
pub fn note_name_to_index(note_name: &str) -> Option<usize> {
    CHROMATIC_NOTES
        .iter()
        .position(|&n| n == note_name)
        .or_else(|| FLAT_NOTES.iter().position(|&n| n == note_name))
}

/// Whether two note names denote the same chromatic position.
/// Enharmonic spellings (e.g. C# and Db) match; unknown names never do.
pub fn notes_match(note1: &str, note2: &str) -> bool {
    if note1 == note2 {
        return true;
    }
    match (note_name_to_index(note1), note_name_to_index(note2)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Pick a random root note (sharp spelling, accidentals included).
pub fn random_note() -> &'static str {
    let mut rng = rand::thread_rng();
    CHROMATIC_NOTES
        .choose(&mut rng)
        .copied()
        .unwrap_or("C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midi_to_note_name() {
        assert_eq!(midi_to_note_name(60), "C");
        assert_eq!(midi_to_note_name(61), "C#");
        assert_eq!(midi_to_note_name(69), "A");
        // Octave reduction: C in any octave is still C
        assert_eq!(midi_to_note_name(0), "C");
        assert_eq!(midi_to_note_name(72), "C");
        assert_eq!(midi_to_note_name(127), "G");
    }

    #[test]
    fn test_note_name_to_index() {
        assert_eq!(note_name_to_index("C"), Some(0));
        assert_eq!(note_name_to_index("C#"), Some(1));
        assert_eq!(note_name_to_index("Db"), Some(1));
        assert_eq!(note_name_to_index("B"), Some(11));
        assert_eq!(note_name_to_index("H"), None);
        assert_eq!(note_name_to_index(""), None);
    }

    #[test]
    fn test_notes_match_reflexive() {
        for name in CHROMATIC_NOTES.iter().chain(FLAT_NOTES.iter()) {
            assert!(notes_match(name, name), "{} should match itself", name);
        }
    }

    #[test]
    fn test_enharmonic_pairs_symmetric() {
        let pairs = [
            ("C#", "Db"),
            ("D#", "Eb"),
            ("F#", "Gb"),
            ("G#", "Ab"),
            ("A#", "Bb"),
        ];
        for (sharp, flat) in pairs {
            assert!(notes_match(sharp, flat), "{} vs {}", sharp, flat);
            assert!(notes_match(flat, sharp), "{} vs {}", flat, sharp);
        }
    }

    #[test]
    fn test_different_positions_do_not_match() {
        assert!(!notes_match("E", "Eb"));
        assert!(!notes_match("C", "B"));
        assert!(!notes_match("F#", "G"));
    }

    #[test]
    fn test_unknown_names_never_match() {
        assert!(!notes_match("X", "C"));
        assert!(!notes_match("C", "X"));
    }

    #[test]
    fn test_random_note_is_chromatic() {
        for _ in 0..50 {
            let note = random_note();
            assert!(CHROMATIC_NOTES.contains(&note));
        }
    }
}
