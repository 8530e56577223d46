use super::{MidiFile, MidiFileHeader, Track};
use crate::{reader::HeaderError, timeline::Timeline};
use alloc::vec::Vec;
use core::num::NonZeroU16;

#[doc = r#"
A builder used to create a new [`MidiFile`].

The header has to be handled before any track. [`MidiFileBuilder::build`]
replays the tracks and hands each one the notes it played.
"#]
#[derive(Debug, Default)]
pub struct MidiFileBuilder<'a> {
    header: Option<MidiFileHeader>,
    tracks: Vec<Track<'a>>,
}

impl<'a> MidiFileBuilder<'a> {
    /// Handles the header chunk of a midi file.
    pub fn handle_header(&mut self, header: MidiFileHeader) -> Result<(), HeaderError> {
        if self.header.is_some() {
            return Err(HeaderError::Duplicate);
        }
        self.header = Some(header);
        Ok(())
    }

    /// Handles the next track chunk of a midi file.
    pub fn handle_track(&mut self, track: Track<'a>) -> Result<(), HeaderError> {
        if self.header.is_none() {
            return Err(HeaderError::Missing);
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Replays the tracks and finishes the file.
    pub fn build(self, bytes: &'a [u8]) -> Result<MidiFile<'a>, HeaderError> {
        let Some(header) = self.header else {
            return Err(HeaderError::Missing);
        };
        if self.tracks.len() != header.num_tracks() as usize {
            return Err(HeaderError::TrackCount {
                declared: header.num_tracks(),
                found: self.tracks.len(),
            });
        }

        let resolution = NonZeroU16::new(header.ticks_per_quarter_note())
            .ok_or(HeaderError::ZeroTicksPerQuarterNote)?;

        let mut tracks = self.tracks;
        let performance = Timeline::new(resolution).reconstruct(&tracks);
        for (track, played) in tracks.iter_mut().zip(performance.played_notes) {
            track.set_played_notes(played);
        }

        Ok(MidiFile {
            bytes,
            header,
            tracks,
            tempo: performance.starting_tempo,
            tempo_map: performance.tempo_map,
            length: performance.length,
            loaded: true,
        })
    }
}
