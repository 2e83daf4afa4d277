//! Stdin menus for mode and device selection
//!
//! Plain line-based prompts; raw mode is never enabled because notes are
//! played on the MIDI keyboard, not typed. EOF on stdin means quit.

use std::io::{stdin, stdout, Result as IoResult, Write};

use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

/// The two drills on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeMode {
    /// Random intervals prompted from a root note.
    ScaleDegree,
    /// Complete modes played ascending and descending.
    Mode,
}

/// Read one trimmed line from stdin; `None` on EOF.
fn read_line() -> IoResult<Option<String>> {
    let mut line = String::new();
    if stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(text: &str) -> IoResult<()> {
    let mut stdout = stdout();
    execute!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset),
    )?;
    stdout.flush()
}

/// Show the practice-mode menu and read a selection.
/// Returns `None` when the user quits (Q or EOF).
pub fn select_practice_mode() -> IoResult<Option<PracticeMode>> {
    let mut out = stdout();
    execute!(
        out,
        Print("\n"),
        SetAttribute(Attribute::Bold),
        Print("Select Practice Mode:\n"),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::Blue),
        Print("  1."),
        ResetColor,
        Print(" Scale Degree Practice\n"),
        Print("     - Random intervals from a root note\n"),
        Print("     - Example: 'Play the 3', 'Play the b7'\n\n"),
        SetForegroundColor(Color::Blue),
        Print("  2."),
        ResetColor,
        Print(" Mode/Scale Practice\n"),
        Print("     - Play complete modes ascending and descending\n"),
        Print("     - Example: 'Dorian in F#', 'Lydian in Bb'\n\n"),
        SetForegroundColor(Color::Blue),
        Print("  Q."),
        ResetColor,
        Print(" Quit\n\n"),
    )?;
    out.flush()?;

    loop {
        prompt("Enter choice (1, 2, or Q): ")?;
        let line = match read_line()? {
            Some(line) => line.to_uppercase(),
            None => return Ok(None),
        };
        match line.as_str() {
            "1" => return Ok(Some(PracticeMode::ScaleDegree)),
            "2" => return Ok(Some(PracticeMode::Mode)),
            "Q" => return Ok(None),
            _ => {
                execute!(
                    stdout(),
                    SetForegroundColor(Color::Red),
                    Print("Invalid choice. Please enter 1, 2, or Q.\n"),
                    ResetColor,
                )?;
            }
        }
    }
}

/// Ask which MIDI device to use when several are connected.
/// Empty input defaults to the first device; `None` on EOF.
pub fn select_device(devices: &[String]) -> IoResult<Option<usize>> {
    let mut out = stdout();
    execute!(out, Print("\nMultiple MIDI devices found:\n"))?;
    for (i, name) in devices.iter().enumerate() {
        execute!(out, Print(format!("  {}. {}\n", i + 1, name)))?;
    }
    out.flush()?;

    loop {
        prompt("\nSelect device number (or press Enter for device 1): ")?;
        let line = match read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let choice = if line.is_empty() { "1" } else { line.as_str() };
        match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= devices.len() => return Ok(Some(n - 1)),
            Ok(_) => {
                execute!(
                    stdout(),
                    Print(format!(
                        "Please enter a number between 1 and {}\n",
                        devices.len()
                    )),
                )?;
            }
            Err(_) => {
                execute!(stdout(), Print("Please enter a valid number\n"))?;
            }
        }
    }
}

/// Pause until the user presses Enter. `false` on EOF.
pub fn wait_for_enter(message: &str) -> IoResult<bool> {
    prompt(message)?;
    Ok(read_line()?.is_some())
}
