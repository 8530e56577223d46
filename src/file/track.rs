use crate::{
    ParseConfig,
    events::{TrackDecoder, TrackEvent, TrackMessage},
    file::meta::MetaMessage,
    reader::{ReadResult, Reader, ReaderError, TrackError},
    timeline::PlayedNote,
};
use alloc::{borrow::Cow, string::String, vec::Vec};

const TRACK_MAGIC: &[u8; 4] = b"MTrk";

#[doc = r#"
A decoded track chunk.

Holds the raw chunk data, the decoded events, and once the file has been
replayed, the notes that were played in this track.
"#]
#[derive(Clone, Debug, PartialEq)]
pub struct Track<'a> {
    data: &'a [u8],
    events: Vec<TrackEvent<'a>>,
    name: Option<Cow<'a, str>>,
    sequence_number: u16,
    played_notes: Vec<PlayedNote>,
}

impl<'a> Track<'a> {
    /// Read a track chunk. `index` is the track's position in the file.
    pub fn read(reader: &mut Reader<'a>, index: u16, config: ParseConfig) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let magic: [u8; 4] = reader.read_exact_size()?;
        if &magic != TRACK_MAGIC {
            return Err(ReaderError::new(start, TrackError::Magic(magic).into()));
        }
        let length = reader.read_u32()?;
        let data_start = reader.buffer_position();
        let data = reader.read_exact(length as usize)?;

        let events = TrackDecoder::from_reader(Reader::with_offset(data, data_start), config)
            .decode_all()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("track {index}: {} events in {length} bytes", events.len());

        Ok(Self::new(data, events, index))
    }

    /// Create a track from already decoded events
    pub fn new(data: &'a [u8], events: Vec<TrackEvent<'a>>, index: u16) -> Self {
        let mut name = None;
        let mut sequence_number = None;
        for event in &events {
            match event.event() {
                TrackMessage::Meta(MetaMessage::TrackName(bytes)) => {
                    name = Some(String::from_utf8_lossy(*bytes));
                }
                TrackMessage::Meta(MetaMessage::SequenceNumber(Some(number)))
                    if sequence_number.is_none() =>
                {
                    sequence_number = Some(*number);
                }
                _ => {}
            }
        }
        Self {
            data,
            events,
            name,
            sequence_number: sequence_number.unwrap_or(index),
            played_notes: Vec::new(),
        }
    }

    /// The chunk data, without the `MTrk` header
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// The chunk's declared length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the chunk has no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The decoded events, ending with the end of track
    pub fn events(&self) -> &[TrackEvent<'a>] {
        &self.events
    }

    /// The name from the last track name event
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The sequence number event's value, or the track's position in the file
    pub fn sequence_number(&self) -> u16 {
        self.sequence_number
    }

    /// Notes played in this track, in the order they stopped
    pub fn played_notes(&self) -> &[PlayedNote] {
        &self.played_notes
    }

    pub(crate) fn set_played_notes(&mut self, played_notes: Vec<PlayedNote>) {
        self.played_notes = played_notes;
    }
}

impl<'a> AsRef<[TrackEvent<'a>]> for Track<'a> {
    fn as_ref(&self) -> &[TrackEvent<'a>] {
        &self.events
    }
}
