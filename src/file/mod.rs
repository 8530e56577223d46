#![doc = r#"
Rusty representation of a [`MidiFile`]
"#]

/// Contains the [`MidiFileBuilder`], which assembles a [`MidiFile`]
/// from its decoded chunks.
pub mod builder;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

pub mod meta;

use crate::{
    Micros, ParseConfig,
    file::{builder::MidiFileBuilder, meta::Tempo},
    reader::{ReadResult, Reader},
    timeline::{TempoChange, TempoMap},
};
use alloc::vec::Vec;

#[doc = r#"
A decoded format 1 MIDI file and the performance recovered from it.

Decoding is all or nothing: [`MidiFile::parse`] either returns a file whose
tracks are fully decoded and replayed, or the first error it met.

# Example
```rust
# use midiline::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
];
let file = MidiFile::parse(&bytes).unwrap();

assert_eq!(file.header().ticks_per_quarter_note(), 96);
assert_eq!(file.tracks().len(), 1);
assert_eq!(file.tempo(), Tempo::DEFAULT);
assert!(file.tempo_changes().is_empty());
```
"#]
#[derive(Clone, Debug, PartialEq)]
pub struct MidiFile<'a> {
    bytes: &'a [u8],
    header: MidiFileHeader,
    tracks: Vec<Track<'a>>,
    tempo: Tempo,
    tempo_map: TempoMap,
    length: Micros,
    loaded: bool,
}

impl<'a> MidiFile<'a> {
    /// Parse a set of bytes into a file struct, strictly
    pub fn parse(bytes: &'a [u8]) -> ReadResult<Self> {
        Self::parse_with(bytes, ParseConfig::default())
    }

    /// Parse a set of bytes into a file struct with the given options
    pub fn parse_with(bytes: &'a [u8], config: ParseConfig) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);
        let mut builder = MidiFileBuilder::default();

        let header = MidiFileHeader::read(&mut reader)?;
        builder
            .handle_header(header)
            .map_err(|e| reader.error(e))?;

        for index in 0..header.num_tracks() {
            let track = Track::read(&mut reader, index, config)?;
            builder.handle_track(track).map_err(|e| reader.error(e))?;
        }

        #[cfg(feature = "tracing")]
        if !reader.is_at_end() {
            tracing::debug!(
                "{} bytes after the last declared track were ignored",
                reader.remaining()
            );
        }

        builder.build(bytes).map_err(|e| reader.error(e))
    }

    /// The file header
    pub fn header(&self) -> &MidiFileHeader {
        &self.header
    }

    /// The tracks, in file order
    pub fn tracks(&self) -> &[Track<'a>] {
        &self.tracks
    }

    /// The tempo the song starts with. This is the default tempo unless a
    /// tempo change happens at time zero.
    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// Every tempo change, in the order they happened
    pub fn tempo_changes(&self) -> &[TempoChange] {
        self.tempo_map.changes()
    }

    /// The tempo changes, for converting ticks or looking up tempos
    pub fn tempo_map(&self) -> &TempoMap {
        &self.tempo_map
    }

    /// The buffer the file was parsed from
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// True once every track was decoded and replayed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The time of the latest event in any track
    pub fn length(&self) -> Micros {
        self.length
    }
}
