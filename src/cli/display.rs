//! Terminal rendering for the drill transcript
//!
//! Line-oriented output: each prompt, verdict, and hint is appended to the
//! scrolling transcript. Green = correct, red = wrong, yellow = hint or
//! timeout, blue = headers.

use std::io::{stdout, Result as IoResult, Write};

use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::drill::session::SessionStats;

/// Renders drill output to stdout.
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Startup banner.
    pub fn banner(&self) -> IoResult<()> {
        let mut stdout = stdout();
        let rule = "=".repeat(50);
        execute!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("{}\n", rule)),
            Print("  Piano Practice - MIDI Trainer\n"),
            Print(format!("{}\n\n", rule)),
            SetAttribute(Attribute::Reset),
        )?;
        stdout.flush()
    }

    /// Drill header with usage lines.
    pub fn show_drill_header(&self, title: &str, lines: &[&str]) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("\n=== {} ===\n", title)),
            SetAttribute(Attribute::Reset),
        )?;
        for line in lines {
            execute!(stdout, Print(format!("{}\n", line)))?;
        }
        execute!(stdout, Print("\n"))?;
        stdout.flush()
    }

    /// Announce a fresh root note round.
    pub fn show_new_root(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::Blue),
            SetAttribute(Attribute::Bold),
            Print("New Root Note:\n"),
            SetAttribute(Attribute::Reset),
            ResetColor,
        )?;
        stdout.flush()
    }

    /// Prompt the player, e.g. "Play: the b7 (from D)".
    pub fn show_prompt(&self, prompt_text: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("\n"),
            SetAttribute(Attribute::Bold),
            Print(format!("Play: {}\n", prompt_text)),
            SetAttribute(Attribute::Reset),
        )?;
        stdout.flush()
    }

    /// Reveal the expected note after a prompt deadline passes.
    pub fn show_hint(&self, expected_note: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print(format!("⏱  Hint: The note is {}\n", expected_note)),
            ResetColor,
        )?;
        stdout.flush()
    }

    pub fn show_correct(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print("✓ Correct!\n"),
            ResetColor,
        )?;
        stdout.flush()
    }

    pub fn show_incorrect(&self, played: &str, expected: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Red),
            Print(format!(
                "✗ Wrong note (you played {}, expected {})\n",
                played, expected
            )),
            ResetColor,
        )?;
        stdout.flush()
    }

    /// Header for one mode round: mode, key, and the scale to play.
    pub fn show_mode_round(&self, mode: &str, key: &str, scale: &[String]) -> IoResult<()> {
        let mut stdout = stdout();
        let rule = "=".repeat(50);
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::Blue),
            SetAttribute(Attribute::Bold),
            Print(format!("{}\n", rule)),
            SetAttribute(Attribute::Reset),
            ResetColor,
            SetAttribute(Attribute::Bold),
            Print(format!("Mode: {} | Key: {}\n", mode, key)),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Blue),
            Print(format!("Scale: {}\n", scale.join(" - "))),
            Print(format!("{}\n\n", rule)),
            ResetColor,
        )?;
        stdout.flush()
    }

    /// "Play ASCENDING:" / "Play DESCENDING:".
    pub fn show_direction(&self, direction: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("Play {}:\n", direction.to_uppercase())),
            SetAttribute(Attribute::Reset),
        )?;
        stdout.flush()
    }

    /// Expected sequence line plus the live "Playing..." marker.
    pub fn show_sequence_prompt(&self, expected: &[String]) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print(format!("  Expected: {}\n", expected.join(" → "))),
            SetForegroundColor(Color::Yellow),
            Print("  Playing..."),
            ResetColor,
            Print(" "),
        )?;
        stdout.flush()
    }

    /// Echo one played note on the progress line.
    pub fn show_played_note(&self, note: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(stdout, Print(format!("{} ", note)))?;
        stdout.flush()
    }

    pub fn show_sequence_timeout(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::Red),
            Print("  ⏱ Timeout! Try again.\n"),
            ResetColor,
        )?;
        stdout.flush()
    }

    pub fn show_sequence_mismatch(
        &self,
        expected: &str,
        played: &str,
        notes_played: &[String],
    ) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::Red),
            Print(format!("  ✗ Wrong! Expected {}, got {}\n", expected, played)),
            ResetColor,
            Print(format!("  You played: {}\n", notes_played.join(" → "))),
        )?;
        stdout.flush()
    }

    pub fn show_sequence_complete(&self, direction: &str) -> IoResult<()> {
        let mut stdout = stdout();
        let mut label = direction.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Color::Green),
            Print(format!("  ✓ {} scale correct!\n", label)),
            ResetColor,
        )?;
        stdout.flush()
    }

    /// Verdict after a full ascending+descending round.
    pub fn show_mode_round_result(&self, completed: bool) -> IoResult<()> {
        let mut stdout = stdout();
        if completed {
            execute!(
                stdout,
                Print("\n"),
                SetForegroundColor(Color::Green),
                SetAttribute(Attribute::Bold),
                Print("✓ Complete! Well done!\n"),
                SetAttribute(Attribute::Reset),
                ResetColor,
            )?;
        } else {
            execute!(
                stdout,
                Print("\n"),
                SetForegroundColor(Color::Yellow),
                Print("Try this mode again...\n"),
                ResetColor,
            )?;
        }
        stdout.flush()
    }

    /// Yellow notice when the session is ended by the player.
    pub fn show_session_ended(&self) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("\n\n"),
            SetForegroundColor(Color::Yellow),
            Print("Practice session ended.\n"),
            ResetColor,
        )?;
        stdout.flush()
    }

    /// Final statistics block.
    pub fn show_final_stats(&self, stats: &SessionStats) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            Print("\n"),
            SetAttribute(Attribute::Bold),
            Print("=== Session Statistics ===\n"),
            SetAttribute(Attribute::Reset),
            Print(format!("{}\n\n", stats)),
        )?;
        stdout.flush()
    }

    /// Plain informational line.
    pub fn show_info(&self, text: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(stdout, Print(format!("{}\n", text)))?;
        stdout.flush()
    }

    /// Red error line.
    pub fn show_error(&self, text: &str) -> IoResult<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Red),
            Print(format!("{}\n", text)),
            ResetColor,
        )?;
        stdout.flush()
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
