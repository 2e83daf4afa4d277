//! Scale-degree intervals and diatonic modes
//!
//! Interval names follow jazz shorthand ("3", "b7", "#4"); modes are the
//! seven diatonic patterns, each spanning root to octave.

use rand::seq::SliceRandom;

use super::notes::{note_name_to_index, CHROMATIC_NOTES, FLAT_NOTES};

/// Scale degrees and their distance in semitones from the root.
pub const INTERVALS: [(&str, u8); 14] = [
    ("1", 0),
    ("b2", 1),
    ("2", 2),
    ("b3", 3),
    ("3", 4),
    ("4", 5),
    ("#4", 6),
    ("b5", 6),
    ("5", 7),
    ("#5", 8),
    ("b6", 8),
    ("6", 9),
    ("b7", 10),
    ("7", 11),
];

/// The seven diatonic modes as semitone offsets from the root, octave included.
pub const MODES: [(&str, [u8; 8]); 7] = [
    ("Ionian", [0, 2, 4, 5, 7, 9, 11, 12]),
    ("Dorian", [0, 2, 3, 5, 7, 9, 10, 12]),
    ("Phrygian", [0, 1, 3, 5, 7, 8, 10, 12]),
    ("Lydian", [0, 2, 4, 6, 7, 9, 11, 12]),
    ("Mixolydian", [0, 2, 4, 5, 7, 9, 10, 12]),
    ("Aeolian", [0, 2, 3, 5, 7, 8, 10, 12]),
    ("Locrian", [0, 1, 3, 5, 6, 8, 10, 12]),
];

fn interval_semitones(interval: &str) -> Option<u8> {
    INTERVALS
        .iter()
        .find(|(name, _)| *name == interval)
        .map(|&(_, semitones)| semitones)
}

/// Spell a chromatic index; flat roots get flat spellings.
fn spell(index: usize, use_flats: bool) -> String {
    if use_flats {
        FLAT_NOTES[index].to_string()
    } else {
        CHROMATIC_NOTES[index].to_string()
    }
}

/// The note a given scale degree above `root_note`, or `None` when the
/// root or interval is not in the tables.
pub fn calculate_interval(root_note: &str, interval: &str) -> Option<String> {
    let semitones = interval_semitones(interval)?;
    let root_index = note_name_to_index(root_note)?;
    let result_index = (root_index + semitones as usize) % 12;
    Some(spell(result_index, root_note.contains('b')))
}

/// Format a scale degree for prompts, e.g. "the b7".
pub fn format_interval_prompt(interval: &str) -> String {
    format!("the {}", interval)
}

/// All eight notes of `mode` starting from `root_note`, octave included.
/// `None` when the root or mode is unknown.
pub fn generate_scale(root_note: &str, mode: &str) -> Option<Vec<String>> {
    let (_, pattern) = MODES.iter().find(|(name, _)| *name == mode)?;
    let root_index = note_name_to_index(root_note)?;
    let use_flats = root_note.contains('b');

    Some(
        pattern
            .iter()
            .map(|&offset| spell((root_index + offset as usize) % 12, use_flats))
            .collect(),
    )
}

/// Random scale degree for practice. Excludes "1": prompting the root
/// again would be a free answer.
pub fn random_interval() -> &'static str {
    let mut rng = rand::thread_rng();
    let choices: Vec<&'static str> = INTERVALS
        .iter()
        .map(|&(name, _)| name)
        .filter(|&name| name != "1")
        .collect();
    choices.choose(&mut rng).copied().unwrap_or("5")
}

/// Random diatonic mode for practice.
pub fn random_mode() -> &'static str {
    let mut rng = rand::thread_rng();
    MODES
        .choose(&mut rng)
        .map(|&(name, _)| name)
        .unwrap_or("Ionian")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_interval() {
        assert_eq!(calculate_interval("C", "3").as_deref(), Some("E"));
        assert_eq!(calculate_interval("C", "5").as_deref(), Some("G"));
        assert_eq!(calculate_interval("D", "b7").as_deref(), Some("C"));
        assert_eq!(calculate_interval("A", "b3").as_deref(), Some("C"));
        // Wraps around the octave
        assert_eq!(calculate_interval("B", "2").as_deref(), Some("C#"));
    }

    #[test]
    fn test_calculate_interval_flat_root_spelling() {
        // Flat roots are spelled with flats
        assert_eq!(calculate_interval("Bb", "3").as_deref(), Some("D"));
        assert_eq!(calculate_interval("Bb", "b3").as_deref(), Some("Db"));
        assert_eq!(calculate_interval("Eb", "b7").as_deref(), Some("Db"));
    }

    #[test]
    fn test_calculate_interval_rejects_unknown() {
        assert!(calculate_interval("C", "b9").is_none());
        assert!(calculate_interval("X", "3").is_none());
    }

    #[test]
    fn test_generate_scale_c_ionian() {
        let scale = generate_scale("C", "Ionian").unwrap();
        assert_eq!(scale, vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
    }

    #[test]
    fn test_generate_scale_d_dorian() {
        let scale = generate_scale("D", "Dorian").unwrap();
        assert_eq!(scale, vec!["D", "E", "F", "G", "A", "B", "C", "D"]);
    }

    #[test]
    fn test_generate_scale_flat_root_uses_flats() {
        let scale = generate_scale("Bb", "Ionian").unwrap();
        assert_eq!(scale, vec!["Bb", "C", "D", "Eb", "F", "G", "A", "Bb"]);
    }

    #[test]
    fn test_generate_scale_rejects_unknown_mode() {
        assert!(generate_scale("C", "Pentatonic").is_none());
        assert!(generate_scale("X", "Ionian").is_none());
    }

    #[test]
    fn test_random_interval_never_root() {
        for _ in 0..100 {
            assert_ne!(random_interval(), "1");
        }
    }

    #[test]
    fn test_random_mode_is_known() {
        for _ in 0..20 {
            let mode = random_mode();
            assert!(MODES.iter().any(|(name, _)| *name == mode));
        }
    }

    #[test]
    fn test_format_interval_prompt() {
        assert_eq!(format_interval_prompt("b7"), "the b7");
    }
}
