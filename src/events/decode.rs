use super::{TrackEvent, TrackMessage};
use crate::{
    ParseConfig,
    file::meta::MetaMessage,
    message::{
        channel::{Channel, ChannelVoiceMessage, VoiceEvent, VoiceKind},
        system_exclusive::SystemExclusiveMessage,
    },
    reader::{EventError, ReadResult, Reader, ReaderError, ReaderErrorKind},
};
use alloc::vec::Vec;

const META_STATUS: u8 = 0xFF;
const SYSTEM_EXCLUSIVE_STATUS: u8 = 0xF0;

/// The payload bytes of a single event.
///
/// When an event reuses the running status, its first data byte has already
/// been read in place of a status byte. That byte is handed out first.
pub(crate) struct EventBytes<'r, 'a> {
    reader: &'r mut Reader<'a>,
    pending: Option<u8>,
}

impl<'a> EventBytes<'_, 'a> {
    pub(crate) fn next(&mut self) -> ReadResult<u8> {
        match self.pending.take() {
            Some(byte) => Ok(byte),
            None => self.reader.read_next(),
        }
    }

    /// A one byte length followed by that many bytes.
    pub(crate) fn length_prefixed(&mut self) -> ReadResult<&'a [u8]> {
        let len = self.next()?;
        self.reader.read_exact(len as usize)
    }

    pub(crate) fn error(&self, kind: impl Into<ReaderErrorKind>) -> ReaderError {
        self.reader.error(kind)
    }
}

#[doc = r#"
Decodes the events of one track, keeping the running status between events.

# Running status

A channel voice status byte may be left out when it is the same as the previous
one. A data byte (high bit clear) where a status byte is expected is the first
data byte of an event with the previous status:

```text
00 90 3C 40     note on C4
00    3E 40     note on D4, status 90 omitted
```

# Example
```rust
# use midiline::prelude::*;
let bytes = [0x00, 0x90, 0x3C, 0x40, 0x60, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00];
let events = TrackDecoder::new(&bytes, ParseConfig::default()).decode_all().unwrap();

assert_eq!(events.len(), 3);
assert_eq!(events[1].accumulated_ticks(), 0x60);
assert!(events[2].is_end_of_track());
```
"#]
pub struct TrackDecoder<'a> {
    reader: Reader<'a>,
    config: ParseConfig,
    running_status: Option<u8>,
    accumulated_ticks: u32,
    finished: bool,
}

impl<'a> TrackDecoder<'a> {
    /// Decode the event data of a track (without the `MTrk` chunk header)
    pub const fn new(data: &'a [u8], config: ParseConfig) -> Self {
        Self::from_reader(Reader::from_byte_slice(data), config)
    }

    /// Decode from a reader positioned at the first event
    pub const fn from_reader(reader: Reader<'a>, config: ParseConfig) -> Self {
        Self {
            reader,
            config,
            running_status: None,
            accumulated_ticks: 0,
            finished: false,
        }
    }

    /// True once the end of track event has been read
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// The status byte the next data-first event would reuse
    pub const fn running_status(&self) -> Option<u8> {
        self.running_status
    }

    /// Read the next event.
    ///
    /// Running out of bytes, including before an end of track event, is
    /// [`ReaderErrorKind::Truncated`].
    pub fn read_event(&mut self) -> ReadResult<TrackEvent<'a>> {
        let delta_ticks = self.reader.read_varlen()?;
        let byte = self.reader.read_next()?;

        let (status, pending) = if byte & 0x80 != 0 {
            self.running_status = Some(byte);
            (byte, None)
        } else {
            let Some(status) = self.running_status else {
                return Err(self.reader.error(EventError::NoRunningStatus(byte)));
            };
            (status, Some(byte))
        };

        let mut bytes = EventBytes {
            reader: &mut self.reader,
            pending,
        };
        let message = match status {
            META_STATUS => TrackMessage::Meta(MetaMessage::read(&mut bytes, self.config)?),
            SYSTEM_EXCLUSIVE_STATUS => {
                TrackMessage::SystemExclusive(SystemExclusiveMessage::new(bytes.length_prefixed()?))
            }
            status => match VoiceKind::from_status(status) {
                Some(kind) => TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
                    Channel::from_status(status),
                    VoiceEvent::read(kind, &mut bytes)?,
                )),
                None if self.config.is_strict() => {
                    return Err(bytes.error(EventError::Status(status)));
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("ignoring unknown status {status:#04X}");
                    TrackMessage::Unrecognized(status)
                }
            },
        };

        if matches!(message, TrackMessage::Meta(MetaMessage::EndOfTrack)) {
            self.finished = true;
        }
        self.accumulated_ticks = self.accumulated_ticks.saturating_add(delta_ticks);
        Ok(TrackEvent::with_accumulated(
            delta_ticks,
            self.accumulated_ticks,
            message,
        ))
    }

    /// Read events up to and including the end of track event.
    pub fn decode_all(mut self) -> ReadResult<Vec<TrackEvent<'a>>> {
        let mut events = Vec::new();
        while !self.finished {
            events.push(self.read_event()?);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Note, file::meta::Tempo};
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> ReadResult<Vec<TrackEvent<'_>>> {
        TrackDecoder::new(bytes, ParseConfig::strict()).decode_all()
    }

    fn voice(event: &TrackEvent<'_>) -> ChannelVoiceMessage {
        match event.event() {
            TrackMessage::ChannelVoice(cv) => *cv,
            other => panic!("expected a channel voice message, got {other:?}"),
        }
    }

    #[test]
    fn omitted_status_matches_repeated_status() {
        let explicit = decode(&[
            0x00, 0x91, 0x3C, 0x40, 0x10, 0x91, 0x3E, 0x50, 0x00, 0xFF, 0x2F, 0x00,
        ])
        .unwrap();
        let running = decode(&[
            0x00, 0x91, 0x3C, 0x40, 0x10, 0x3E, 0x50, 0x00, 0xFF, 0x2F, 0x00,
        ])
        .unwrap();

        assert_eq!(explicit, running);
        assert_eq!(
            voice(&running[1]),
            ChannelVoiceMessage::new(Channel::Two, VoiceEvent::NoteOn(Note::new(0x3E, 0x50)))
        );
    }

    #[test]
    fn running_status_for_every_voice_kind() {
        let bytes = [
            0x00, 0xC2, 0x05, // patch change
            0x00, 0x07, // patch change, running
            0x00, 0xB2, 0x07, 0x64, // control change
            0x00, 0x0A, 0x40, // control change, running
            0x00, 0xE2, 0x00, 0x40, // pitch wheel
            0x00, 0x10, 0x20, // pitch wheel, running
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let events = decode(&bytes).unwrap();
        let kinds: Vec<_> = events[..6].iter().map(|e| *voice(e).event()).collect();
        assert_eq!(
            kinds,
            alloc::vec![
                VoiceEvent::PatchChange { program: 0x05 },
                VoiceEvent::PatchChange { program: 0x07 },
                VoiceEvent::ControlChange {
                    controller: 0x07,
                    value: 0x64
                },
                VoiceEvent::ControlChange {
                    controller: 0x0A,
                    value: 0x40
                },
                VoiceEvent::PitchWheelChange { value: 0x4000 },
                VoiceEvent::PitchWheelChange { value: 0x2010 },
            ]
        );
    }

    #[test]
    fn data_byte_before_any_status_is_rejected() {
        let err = decode(&[0x00, 0x3C, 0x40]).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::UnrecognizedEvent(EventError::NoRunningStatus(0x3C))
        );
    }

    #[test]
    fn missing_end_of_track_is_truncated() {
        let err = decode(&[0x00, 0x90, 0x3C, 0x40]).unwrap_err();
        assert!(err.is_truncated());
        let err = decode(&[0x00, 0x90, 0x3C]).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn stops_at_end_of_track() {
        let events = decode(&[0x00, 0xFF, 0x2F, 0x00, 0x00, 0x90, 0x3C, 0x40]).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_end_of_track());
    }

    #[test]
    fn meta_events() {
        let bytes = [
            0x00, 0xFF, 0x00, 0x02, 0x00, 0x07, // sequence number
            0x00, 0xFF, 0x02, 0x03, b'(', b'C', b')', // copyright
            0x00, 0xFF, 0x03, 0x04, b'L', b'e', b'a', b'd', // track name
            0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // tempo
            0x00, 0xFF, 0x58, 0x04, 0x03, 0x02, 0x18, 0x08, // 3/4
            0x00, 0xFF, 0xF8, // timing clock
            0x00, 0xFF, 0x7F, 0x02, 0x43, 0x00, // sequencer specific
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let events = decode(&bytes).unwrap();
        let metas: Vec<_> = events
            .iter()
            .map(|e| match e.event() {
                TrackMessage::Meta(meta) => *meta,
                other => panic!("unexpected {other:?}"),
            })
            .collect();

        assert_eq!(metas[0], MetaMessage::SequenceNumber(Some(7)));
        assert_eq!(metas[1], MetaMessage::Text(b"(C)"));
        assert_eq!(metas[2].text().unwrap(), "Lead");
        assert_eq!(metas[3], MetaMessage::Tempo(Tempo::DEFAULT));
        let MetaMessage::TimeSignature(sig) = metas[4] else {
            panic!("expected a time signature");
        };
        assert_eq!((sig.numerator(), sig.denominator()), (3, Some(4)));
        assert_eq!(metas[5], MetaMessage::TimingClock);
        assert_eq!(metas[6], MetaMessage::SequencerSpecific(&[0x43, 0x00]));
        assert_eq!(metas[7], MetaMessage::EndOfTrack);
    }

    #[test]
    fn unknown_meta_depends_on_strictness() {
        let bytes = [0x00, 0xFF, 0x60, 0x01, 0x00, 0x00, 0xFF, 0x2F, 0x00];
        let err = decode(&bytes).unwrap_err();
        assert!(err.is_unrecognized_event());

        let events = TrackDecoder::new(&bytes, ParseConfig::lenient())
            .decode_all()
            .unwrap();
        assert_eq!(
            events[0].event(),
            &TrackMessage::Meta(MetaMessage::Unknown {
                kind: 0x60,
                data: &[0x00]
            })
        );
    }

    #[test]
    fn port_and_0x48_meta_are_always_skipped() {
        let bytes = [
            0x00, 0xFF, 0x21, 0x01, 0x00, // midi port
            0x00, 0xFF, 0x48, 0x02, 0x01, 0x02, // 0x48
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let events = decode(&bytes).unwrap();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn unknown_status_depends_on_strictness() {
        let bytes = [0x00, 0xF3, 0x00, 0xFF, 0x2F, 0x00];
        let err = decode(&bytes).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::UnrecognizedEvent(EventError::Status(0xF3))
        );

        let events = TrackDecoder::new(&bytes, ParseConfig::lenient())
            .decode_all()
            .unwrap();
        assert_eq!(events[0].event(), &TrackMessage::Unrecognized(0xF3));
        assert!(events[1].is_end_of_track());
    }

    #[test]
    fn system_exclusive_is_length_prefixed() {
        let bytes = [
            0x00, 0xF0, 0x04, 0x43, 0x12, 0x00, 0xF7, 0x00, 0xFF, 0x2F, 0x00,
        ];
        let events = decode(&bytes).unwrap();
        let TrackMessage::SystemExclusive(sysex) = events[0].event() else {
            panic!("expected system exclusive");
        };
        assert_eq!(sysex.data(), &[0x43, 0x12, 0x00, 0xF7]);
        assert_eq!(sysex.manufacturer(), Some(0x43));
    }

    #[test]
    fn short_tempo_payload_is_unreadable() {
        let err = decode(&[0x00, 0xFF, 0x51, 0x02, 0x07, 0xA1, 0x00, 0xFF, 0x2F, 0x00]).unwrap_err();
        assert!(err.is_unreadable_track());
    }

    #[test]
    fn delta_times_accumulate() {
        let bytes = [
            0x00, 0x90, 0x3C, 0x40, 0x83, 0x60, 0x80, 0x3C, 0x00, 0x81, 0x00, 0xFF, 0x2F, 0x00,
        ];
        let events = decode(&bytes).unwrap();
        let ticks: Vec<_> = events
            .iter()
            .map(|e| (e.delta_ticks(), e.accumulated_ticks()))
            .collect();
        assert_eq!(ticks, alloc::vec![(0, 0), (480, 480), (128, 608)]);
    }
}
