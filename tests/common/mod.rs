#![allow(dead_code)]

/// End of track event with a zero delta
pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];

/// Helper function to create a MIDI file from a format code, a resolution and
/// the event data of each track. The header declares one track per entry.
pub fn create_midi(format: u16, ticks_per_quarter_note: u16, tracks: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = Vec::new();

    // MIDI Header
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x06]);
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&ticks_per_quarter_note.to_be_bytes());

    for events in tracks {
        bytes.extend_from_slice(&track_chunk(events));
    }
    bytes
}

/// Wraps event data in an `MTrk` chunk
pub fn track_chunk(events: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&(events.len() as u32).to_be_bytes());
    bytes.extend_from_slice(events);
    bytes
}

/// Concatenates events and appends an end of track
pub fn track(events: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes: Vec<u8> = events.concat();
    bytes.extend_from_slice(&END_OF_TRACK);
    bytes
}

/// A variable length quantity
pub fn varlen(mut value: u32) -> Vec<u8> {
    let mut bytes = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        bytes.insert(0, (value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    bytes
}

/// Note on for channel one
pub fn note_on(delta: u32, note: u8, velocity: u8) -> Vec<u8> {
    let mut bytes = varlen(delta);
    bytes.extend_from_slice(&[0x90, note, velocity]);
    bytes
}

/// Note off for channel one
pub fn note_off(delta: u32, note: u8) -> Vec<u8> {
    let mut bytes = varlen(delta);
    bytes.extend_from_slice(&[0x80, note, 0x00]);
    bytes
}

/// Set tempo meta event
pub fn set_tempo(delta: u32, micros_per_quarter_note: u32) -> Vec<u8> {
    let mut bytes = varlen(delta);
    bytes.extend_from_slice(&[0xFF, 0x51, 0x03]);
    bytes.extend_from_slice(&micros_per_quarter_note.to_be_bytes()[1..]);
    bytes
}

/// Track name meta event at delta zero
pub fn track_name(name: &str) -> Vec<u8> {
    let mut bytes = vec![0x00, 0xFF, 0x03, name.len() as u8];
    bytes.extend_from_slice(name.as_bytes());
    bytes
}
