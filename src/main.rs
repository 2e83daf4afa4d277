//! Piano Practice - MIDI trainer for scale degrees and modes
//!
//! Single-session, self-contained CLI application. Listens to a MIDI
//! keyboard and drills the player on scale degrees and diatonic modes
//! under a configurable time limit.

mod cli;
mod drill;
mod error;
mod midi;
mod theory;

use std::error::Error;
use std::time::Duration;

use clap::Parser;

use cli::display::Display;
use cli::menu::{self, PracticeMode};
use drill::{mode_practice, scale_degree_practice};
use error::DrillError;
use midi::listener::{CancelFlag, NoteListener};
use midi::source::{MidiSource, NoteSource};

#[derive(Parser, Debug)]
#[command(name = "Piano Practice")]
#[command(about = "MIDI piano practice drills: scale degrees and modes")]
struct Args {
    /// MIDI input device to use (substring match against port names)
    #[arg(short, long)]
    device: Option<String>,

    /// Seconds to wait per prompt before revealing a hint (0 = no limit)
    #[arg(short, long, default_value = "10")]
    timeout: u64,
}

/// Pick a MIDI input port: `--device` substring match first, otherwise the
/// only port, otherwise ask the user.
fn resolve_port(preferred: Option<&str>, devices: &[String]) -> Result<Option<usize>, DrillError> {
    if devices.is_empty() {
        return Err(DrillError::NoDevices);
    }

    if let Some(wanted) = preferred {
        return match devices.iter().position(|name| name.contains(wanted)) {
            Some(index) => Ok(Some(index)),
            None => Err(DrillError::Midi(format!(
                "no MIDI device matching '{}'",
                wanted
            ))),
        };
    }

    if devices.len() == 1 {
        return Ok(Some(0));
    }

    Ok(menu::select_device(devices)?)
}

fn connect_midi(display: &Display, preferred: Option<&str>) -> Result<Option<MidiSource>, DrillError> {
    display.show_info("Connecting to MIDI device...")?;

    let devices = MidiSource::list_ports()?;
    let port_index = match resolve_port(preferred, &devices)? {
        Some(index) => index,
        // User backed out of the device menu
        None => return Ok(None),
    };

    let source = MidiSource::connect(port_index)?;
    display.show_info(&format!("\nConnected to MIDI device: {}", source.device_name()))?;
    Ok(Some(source))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let display = Display::new();
    display.banner()?;

    let mut source = match connect_midi(&display, args.device.as_deref()) {
        Ok(Some(source)) => source,
        Ok(None) => return Ok(()),
        Err(err) => {
            display.show_error(&format!("\nFailed to connect to MIDI device: {}", err))?;
            display.show_info("Please ensure:")?;
            display.show_info("  1. Your MIDI keyboard is connected")?;
            display.show_info("  2. No other application is using the MIDI device")?;
            std::process::exit(1);
        }
    };

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || handler_flag.cancel())?;
    let listener = NoteListener::new(cancel);

    let timeout = match args.timeout {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    let result = match menu::select_practice_mode()? {
        Some(PracticeMode::ScaleDegree) => {
            scale_degree_practice(&mut source, &listener, &display, timeout)
        }
        Some(PracticeMode::Mode) => mode_practice(&mut source, &listener, &display, timeout),
        None => {
            display.show_info("Exiting...")?;
            source.close();
            return Ok(());
        }
    };

    source.close();
    display.show_info("MIDI connection closed.")?;

    match result {
        Ok(stats) => {
            display.show_final_stats(&stats)?;
            display.show_info("Thanks for practicing!\n")?;
            Ok(())
        }
        Err(err) => {
            display.show_error(&format!("\nError during practice session: {}", err))?;
            Err(err.into())
        }
    }
}
