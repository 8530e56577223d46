use crate::{Note, events::EventBytes, reader::ReadResult};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The high nibble of a channel voice status byte.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum VoiceKind {
    NoteOff = 0x8,
    NoteOn = 0x9,
    KeyAfterTouch = 0xA,
    ControlChange = 0xB,
    PatchChange = 0xC,
    ChannelAfterTouch = 0xD,
    PitchWheelChange = 0xE,
}

impl VoiceKind {
    /// The voice kind of a status byte, if it is a channel voice status
    pub fn from_status(status: u8) -> Option<Self> {
        Self::try_from(status >> 4).ok()
    }
}

#[doc = r#"
The payload of a channel voice message.

Note-related kinds carry a [`Note`], whose velocity is the pressure value for
[`VoiceEvent::KeyAfterTouch`].
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// A key was released
    NoteOff(Note),
    /// A key was pressed. A velocity of zero means released.
    NoteOn(Note),
    /// Pressure on a single held key changed
    KeyAfterTouch(Note),
    /// A controller moved
    ControlChange {
        /// Controller number
        controller: u8,
        /// New value
        value: u8,
    },
    /// The instrument changed
    PatchChange {
        /// Program number
        program: u8,
    },
    /// Pressure on every held key changed
    ChannelAfterTouch {
        /// Pressure value
        pressure: u8,
    },
    /// The pitch wheel moved
    ///
    /// The value is `second * 256 + first` from the two data bytes as
    /// they appear in the file.
    PitchWheelChange {
        /// Combined wheel value
        value: u16,
    },
}

impl VoiceEvent {
    /// The kind of this event
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff(_) => VoiceKind::NoteOff,
            Self::NoteOn(_) => VoiceKind::NoteOn,
            Self::KeyAfterTouch(_) => VoiceKind::KeyAfterTouch,
            Self::ControlChange { .. } => VoiceKind::ControlChange,
            Self::PatchChange { .. } => VoiceKind::PatchChange,
            Self::ChannelAfterTouch { .. } => VoiceKind::ChannelAfterTouch,
            Self::PitchWheelChange { .. } => VoiceKind::PitchWheelChange,
        }
    }

    /// The note, for note off, note on and key after touch
    pub const fn note(&self) -> Option<Note> {
        match self {
            Self::NoteOff(note) | Self::NoteOn(note) | Self::KeyAfterTouch(note) => Some(*note),
            _ => None,
        }
    }

    pub(crate) fn read(kind: VoiceKind, bytes: &mut EventBytes<'_, '_>) -> ReadResult<Self> {
        Ok(match kind {
            VoiceKind::NoteOff => Self::NoteOff(Note::new(bytes.next()?, bytes.next()?)),
            VoiceKind::NoteOn => Self::NoteOn(Note::new(bytes.next()?, bytes.next()?)),
            VoiceKind::KeyAfterTouch => {
                Self::KeyAfterTouch(Note::new(bytes.next()?, bytes.next()?))
            }
            VoiceKind::ControlChange => Self::ControlChange {
                controller: bytes.next()?,
                value: bytes.next()?,
            },
            VoiceKind::PatchChange => Self::PatchChange {
                program: bytes.next()?,
            },
            VoiceKind::ChannelAfterTouch => Self::ChannelAfterTouch {
                pressure: bytes.next()?,
            },
            VoiceKind::PitchWheelChange => {
                let first = bytes.next()? as u16;
                let second = bytes.next()? as u16;
                Self::PitchWheelChange {
                    value: second * 256 + first,
                }
            }
        })
    }
}

#[test]
fn voice_kind_from_status() {
    assert_eq!(VoiceKind::from_status(0x93), Some(VoiceKind::NoteOn));
    assert_eq!(VoiceKind::from_status(0xEF), Some(VoiceKind::PitchWheelChange));
    assert_eq!(VoiceKind::from_status(0xF0), None);
    assert_eq!(VoiceKind::from_status(0x40), None);
}
