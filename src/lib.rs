#![doc = r#"
Decode Standard MIDI Files into a time-resolved performance.

`midiline` reads a format 1 (simultaneous tracks) MIDI file from a byte buffer,
decodes every track's events, and replays all tracks against a single evolving
tempo to recover the notes that were actually played: when each one started,
how long it lasted, and roughly what note value that duration corresponds to.

# Example
```rust
# use midiline::prelude::*;
# fn file_bytes() -> Vec<u8> {
#     let track = [
#         0x00, 0x90, 0x3C, 0x40, // note on, C4
#         0x83, 0x60, 0x80, 0x3C, 0x00, // 480 ticks later, note off
#         0x00, 0xFF, 0x2F, 0x00, // end of track
#     ];
#     let mut bytes = Vec::new();
#     bytes.extend_from_slice(b"MThd");
#     bytes.extend_from_slice(&[0, 0, 0, 6, 0, 1, 0, 1, 0x01, 0xE0]);
#     bytes.extend_from_slice(b"MTrk");
#     bytes.extend_from_slice(&(track.len() as u32).to_be_bytes());
#     bytes.extend_from_slice(&track);
#     bytes
# }
let bytes = file_bytes();
let file = MidiFile::parse(&bytes).unwrap();

let played = file.tracks()[0].played_notes();
assert_eq!(played.len(), 1);
assert_eq!(played[0].duration(), Micros::new(500_000));
assert_eq!(played[0].length(), NoteLength::Quarter);
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod config;
pub use config::*;

pub mod events;
pub mod file;
pub mod message;

mod micros;
pub use micros::*;

mod note;
pub use note::*;

pub mod reader;
pub mod timeline;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        config::*,
        events::*,
        file::{meta::*, *},
        message::{channel::*, system_exclusive::*},
        micros::*,
        note::*,
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
        timeline::*,
    };
}
