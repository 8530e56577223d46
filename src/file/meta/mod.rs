#![doc = r#"
Meta events: information about a track that is not sent to an instrument.

Meta events begin with the status byte `0xFF`, followed by a subtype byte.
Most subtypes then carry a one byte length and that many bytes of data:

```text
FF 03 05 50 69 61 6E 6F      track name "Piano"
FF 51 03 07 A1 20            tempo, 500 000 µs per quarter note
FF 2F 00                     end of track
```

[`MetaType::EndOfTrack`] is followed by exactly one byte, and the sequencer
control subtypes (`0xF8`, `0xFA`, `0xFB`, `0xFC`) by none at all.
"#]

mod signature;
pub use signature::*;

mod tempo;
pub use tempo::*;

use crate::{
    ParseConfig,
    events::EventBytes,
    reader::{EventError, ReadResult, TrackError},
};
use alloc::borrow::Cow;
use alloc::string::String;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Meta subtypes that are skipped over even when decoding strictly.
pub const ALWAYS_SKIPPED_META_TYPES: [u8; 2] = [0x21, 0x48];

/// The subtype byte of a meta event
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum MetaType {
    SequenceNumber = 0x00,
    Text = 0x01,
    Copyright = 0x02,
    TrackName = 0x03,
    InstrumentName = 0x04,
    Lyric = 0x05,
    Marker = 0x06,
    CuePoint = 0x07,
    EndOfTrack = 0x2F,
    Tempo = 0x51,
    TimeSignature = 0x58,
    KeySignature = 0x59,
    SequencerSpecific = 0x7F,
    TimingClock = 0xF8,
    StartSequence = 0xFA,
    ContinueSequence = 0xFB,
    StopSequence = 0xFC,
}

#[doc = r#"
A decoded meta event.

Text payloads are kept as the raw bytes from the file; see
[`MetaMessage::text`] for a lossy string view.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaMessage<'a> {
    /// The sequence number, if the event carries the two byte form
    SequenceNumber(Option<u16>),
    /// Free text. Copyright notices are reported as text too.
    Text(&'a [u8]),
    /// The name of the track
    TrackName(&'a [u8]),
    /// The instrument the track is meant for
    InstrumentName(&'a [u8]),
    /// A lyric syllable
    Lyric(&'a [u8]),
    /// A rehearsal mark or section name
    Marker(&'a [u8]),
    /// A cue for something outside the music
    CuePoint(&'a [u8]),
    /// A change of tempo
    Tempo(Tempo),
    /// A change of time signature
    TimeSignature(TimeSignature),
    /// A change of key signature
    KeySignature(KeySignature),
    /// Data for a particular sequencer
    SequencerSpecific(&'a [u8]),
    /// The last event of every track
    EndOfTrack,
    /// Sequencer timing clock
    TimingClock,
    /// Sequencer start
    StartSequence,
    /// Sequencer continue
    ContinueSequence,
    /// Sequencer stop
    StopSequence,
    /// A subtype that was skipped
    Unknown {
        /// The subtype byte
        kind: u8,
        /// The skipped payload
        data: &'a [u8],
    },
}

impl<'a> MetaMessage<'a> {
    /// Lossy UTF-8 view of a text-like payload
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match self {
            Self::Text(bytes)
            | Self::TrackName(bytes)
            | Self::InstrumentName(bytes)
            | Self::Lyric(bytes)
            | Self::Marker(bytes)
            | Self::CuePoint(bytes) => Some(String::from_utf8_lossy(bytes)),
            _ => None,
        }
    }

    /// True for [`MetaMessage::EndOfTrack`]
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack)
    }

    /// Reads everything after the `0xFF` status byte.
    pub(crate) fn read(bytes: &mut EventBytes<'_, 'a>, config: ParseConfig) -> ReadResult<Self> {
        let kind = bytes.next()?;
        let Ok(meta_type) = MetaType::try_from(kind) else {
            let tolerated = ALWAYS_SKIPPED_META_TYPES.contains(&kind);
            if config.is_strict() && !tolerated {
                return Err(bytes.error(EventError::MetaType(kind)));
            }
            let data = bytes.length_prefixed()?;
            #[cfg(feature = "tracing")]
            if tolerated {
                tracing::debug!("skipping meta event {kind:#04X} ({} bytes)", data.len());
            } else {
                tracing::warn!("skipping unknown meta event {kind:#04X} ({} bytes)", data.len());
            }
            return Ok(Self::Unknown { kind, data });
        };

        use MetaType as M;
        Ok(match meta_type {
            M::EndOfTrack => {
                bytes.next()?;
                Self::EndOfTrack
            }
            M::TimingClock => Self::TimingClock,
            M::StartSequence => Self::StartSequence,
            M::ContinueSequence => Self::ContinueSequence,
            M::StopSequence => Self::StopSequence,
            M::SequenceNumber => {
                let data = bytes.length_prefixed()?;
                Self::SequenceNumber(data.get(..2).map(|n| u16::from_be_bytes([n[0], n[1]])))
            }
            M::Text | M::Copyright => Self::Text(bytes.length_prefixed()?),
            M::TrackName => Self::TrackName(bytes.length_prefixed()?),
            M::InstrumentName => Self::InstrumentName(bytes.length_prefixed()?),
            M::Lyric => Self::Lyric(bytes.length_prefixed()?),
            M::Marker => Self::Marker(bytes.length_prefixed()?),
            M::CuePoint => Self::CuePoint(bytes.length_prefixed()?),
            M::Tempo => {
                let data = bytes.length_prefixed()?;
                Self::Tempo(Tempo::from_be_bytes(fixed(bytes, kind, data)?))
            }
            M::TimeSignature => {
                let data = bytes.length_prefixed()?;
                Self::TimeSignature(TimeSignature::from_bytes(fixed(bytes, kind, data)?))
            }
            M::KeySignature => {
                let data = bytes.length_prefixed()?;
                Self::KeySignature(KeySignature::from_bytes(fixed(bytes, kind, data)?))
            }
            M::SequencerSpecific => Self::SequencerSpecific(bytes.length_prefixed()?),
        })
    }
}

/// The first `N` bytes of a payload that must be at least that long.
fn fixed<const N: usize>(bytes: &EventBytes<'_, '_>, kind: u8, data: &[u8]) -> ReadResult<[u8; N]> {
    data.get(..N)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or_else(|| {
            bytes.error(TrackError::MetaLength {
                kind,
                expected: N,
                found: data.len(),
            })
        })
}
