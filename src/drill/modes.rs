//! Drill loops
//!
//! Each loop owns the note source, listener, and session stats for its
//! whole run, keeps going until the player quits, and folds cancellation
//! into a clean session end with the stats accumulated so far.

use std::time::Duration;

use rand::Rng;

use crate::cli::display::Display;
use crate::cli::menu;
use crate::error::DrillError;
use crate::midi::listener::NoteListener;
use crate::midi::source::NoteSource;
use crate::theory::notes::random_note;
use crate::theory::scales::{
    calculate_interval, format_interval_prompt, generate_scale, random_interval, random_mode,
};

use super::prompt::prompt_and_validate;
use super::sequence::{play_scale_sequence, NOTE_TIMEOUT};
use super::session::SessionStats;

/// Scale degree practice: confirm a random root, then answer 5-7 random
/// interval prompts from it. A missed prompt is re-issued exactly once;
/// both attempts are scored. The root confirmation is a setup round.
pub fn scale_degree_practice(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    timeout: Option<Duration>,
) -> Result<SessionStats, DrillError> {
    let mut stats = SessionStats::new();

    display.show_drill_header(
        "Scale Degree Practice Mode",
        &["Play the notes as prompted. Press Ctrl+C to exit."],
    )?;

    loop {
        match degree_round(source, listener, display, &mut stats, timeout) {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => {
                display.show_session_ended()?;
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(stats)
}

/// One root-note round: setup confirmation plus a handful of interval
/// prompts. A wrong root ends the round early; the caller restarts with a
/// fresh root.
fn degree_round(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    stats: &mut SessionStats,
    timeout: Option<Duration>,
) -> Result<(), DrillError> {
    let root_note = random_note();
    let prompts_in_round = rand::thread_rng().gen_range(5..=7);

    display.show_new_root()?;
    let root = prompt_and_validate(
        source, listener, display, stats, root_note, root_note, true, timeout,
    )?;
    if !root.is_correct() {
        return Ok(());
    }

    for _ in 0..prompts_in_round {
        let interval = random_interval();
        let expected_note = calculate_interval(root_note, interval).ok_or_else(|| {
            DrillError::Theory(format!("unsupported interval {} from {}", interval, root_note))
        })?;
        let prompt_text = format!(
            "{} (from {})",
            format_interval_prompt(interval),
            root_note
        );
        prompt_with_retry(
            source,
            listener,
            display,
            stats,
            &expected_note,
            &prompt_text,
            timeout,
        )?;
    }

    Ok(())
}

/// Issue a prompt and, on a miss, repeat it once. Both attempts are
/// scored; the second result stands either way.
fn prompt_with_retry(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    stats: &mut SessionStats,
    expected_note: &str,
    prompt_text: &str,
    timeout: Option<Duration>,
) -> Result<(), DrillError> {
    let first = prompt_and_validate(
        source,
        listener,
        display,
        stats,
        expected_note,
        prompt_text,
        false,
        timeout,
    )?;
    if !first.is_correct() {
        prompt_and_validate(
            source,
            listener,
            display,
            stats,
            expected_note,
            prompt_text,
            false,
            timeout,
        )?;
    }
    Ok(())
}

/// Mode practice: play a random mode's scale ascending then descending.
/// Each completed direction scores one correct; a failed direction scores
/// one incorrect and ends the round.
pub fn mode_practice(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    timeout: Option<Duration>,
) -> Result<SessionStats, DrillError> {
    let mut stats = SessionStats::new();

    display.show_drill_header(
        "Mode Practice",
        &[
            "Play the complete scale ascending, then descending.",
            "Press Ctrl+C to exit.",
        ],
    )?;

    // Eight notes get three prompt-lengths of overall time.
    let sequence_timeout = timeout.map(|t| t * 3);

    loop {
        let mode = random_mode();
        let key = random_note();

        match mode_round(
            source,
            listener,
            display,
            &mut stats,
            mode,
            key,
            NOTE_TIMEOUT,
            sequence_timeout,
        ) {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => {
                display.show_session_ended()?;
                break;
            }
            Err(err) => return Err(err),
        }

        if !menu::wait_for_enter("\nPress Enter for next mode...")? || listener.cancelled() {
            display.show_session_ended()?;
            break;
        }
    }

    Ok(stats)
}

/// One mode round: show the scale, validate ascending, then descending.
#[allow(clippy::too_many_arguments)]
fn mode_round(
    source: &mut dyn NoteSource,
    listener: &NoteListener,
    display: &Display,
    stats: &mut SessionStats,
    mode: &str,
    key: &str,
    note_timeout: Duration,
    sequence_timeout: Option<Duration>,
) -> Result<(), DrillError> {
    let scale_ascending = generate_scale(key, mode)
        .ok_or_else(|| DrillError::Theory(format!("unsupported mode {} in {}", mode, key)))?;
    let scale_descending: Vec<String> = scale_ascending.iter().rev().cloned().collect();

    display.show_mode_round(mode, key, &scale_ascending)?;

    display.show_direction("ascending")?;
    let ascending_correct = play_scale_sequence(
        source,
        listener,
        display,
        &scale_ascending,
        "ascending",
        note_timeout,
        sequence_timeout,
    )?;

    if !ascending_correct {
        stats.record_incorrect();
        display.show_mode_round_result(false)?;
        return Ok(());
    }
    stats.record_correct();

    display.show_direction("descending")?;
    let descending_correct = play_scale_sequence(
        source,
        listener,
        display,
        &scale_descending,
        "descending",
        note_timeout,
        sequence_timeout,
    )?;

    if descending_correct {
        stats.record_correct();
    } else {
        stats.record_incorrect();
    }
    display.show_mode_round_result(descending_correct)?;

    Ok(())
}
