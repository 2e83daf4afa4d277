//! MIDI note sources
//!
//! `MidiSource` opens a midir input port and bridges its callback thread to
//! the drill thread through a channel, so `poll` never blocks. The drill
//! loop owns the source exclusively for the whole session.

use std::sync::mpsc::{channel, Receiver};

use midir::{Ignore, MidiInput, MidiInputConnection};

use crate::error::DrillError;

/// A single note-on message, octave intact.
///
/// Velocity 0 is kept as-is: some keyboards encode release as a
/// zero-velocity note-on, and the listener is responsible for rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// MIDI note number (0-127).
    pub note: u8,
    /// Key velocity (0-127).
    pub velocity: u8,
}

impl NoteEvent {
    /// True for an actual key press (positive velocity).
    pub fn is_press(&self) -> bool {
        self.velocity > 0
    }

    /// Parse a raw MIDI message, keeping only note-on events on any channel.
    pub fn from_midi_bytes(message: &[u8]) -> Option<NoteEvent> {
        match message {
            [status, note, velocity, ..] if status & 0xF0 == 0x90 => Some(NoteEvent {
                note: *note,
                velocity: *velocity,
            }),
            _ => None,
        }
    }
}

/// Polling contract between a device and the note listener.
pub trait NoteSource {
    /// Next buffered event, if any. Never blocks.
    fn poll(&mut self) -> Option<NoteEvent>;

    /// Whether the underlying device is open.
    fn is_connected(&self) -> bool;

    /// Release the device. Idempotent; safe even if never opened.
    fn close(&mut self);
}

/// Live MIDI input device.
pub struct MidiSource {
    conn: Option<MidiInputConnection<()>>,
    events: Receiver<NoteEvent>,
    device_name: String,
}

impl MidiSource {
    /// Names of all MIDI input ports currently available.
    pub fn list_ports() -> Result<Vec<String>, DrillError> {
        let midi_in = MidiInput::new("piano-drill").map_err(|e| DrillError::Midi(e.to_string()))?;
        let ports = midi_in.ports();
        let mut names = Vec::with_capacity(ports.len());
        for port in &ports {
            names.push(
                midi_in
                    .port_name(port)
                    .map_err(|e| DrillError::Midi(e.to_string()))?,
            );
        }
        Ok(names)
    }

    /// Open the input port at `port_index` (as returned by `list_ports`).
    pub fn connect(port_index: usize) -> Result<MidiSource, DrillError> {
        let mut midi_in =
            MidiInput::new("piano-drill").map_err(|e| DrillError::Midi(e.to_string()))?;
        midi_in.ignore(Ignore::All);

        let ports = midi_in.ports();
        let port = ports.get(port_index).ok_or(DrillError::NoDevices)?;
        let device_name = midi_in
            .port_name(port)
            .map_err(|e| DrillError::Midi(e.to_string()))?;

        let (tx, rx) = channel();
        let conn = midi_in
            .connect(
                port,
                "piano-drill-input",
                move |_timestamp, message, _| {
                    if let Some(event) = NoteEvent::from_midi_bytes(message) {
                        // The drill thread may have exited; dropped events
                        // are fine once the session is over.
                        let _ = tx.send(event);
                    }
                },
                (),
            )
            .map_err(|e| DrillError::Midi(e.to_string()))?;

        Ok(MidiSource {
            conn: Some(conn),
            events: rx,
            device_name,
        })
    }

    /// Name of the connected port.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

impl NoteSource for MidiSource {
    fn poll(&mut self) -> Option<NoteEvent> {
        if self.conn.is_none() {
            return None;
        }
        self.events.try_recv().ok()
    }

    fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            let _ = conn.close();
        }
    }
}
