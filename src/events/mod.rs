#![doc = r#"
Events as they appear inside a track chunk.

Each event in a track is a delta time, measured in ticks since the previous
event of the same track, followed by a message. The [`TrackDecoder`] turns a
track's bytes into [`TrackEvent`]s.
"#]

mod decode;
pub use decode::*;

use crate::{
    file::meta::MetaMessage,
    message::{channel::ChannelVoiceMessage, system_exclusive::SystemExclusiveMessage},
};

#[doc = r#"
The message part of a [`TrackEvent`]
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMessage<'a> {
    /// A message for one channel
    ChannelVoice(ChannelVoiceMessage),
    /// An opaque system exclusive message
    SystemExclusive(SystemExclusiveMessage<'a>),
    /// A meta event
    Meta(MetaMessage<'a>),
    /// A status byte lenient decoding did not understand. Nothing after the
    /// status byte was consumed.
    Unrecognized(u8),
}

impl<'a> From<ChannelVoiceMessage> for TrackMessage<'a> {
    fn from(value: ChannelVoiceMessage) -> Self {
        Self::ChannelVoice(value)
    }
}

impl<'a> From<SystemExclusiveMessage<'a>> for TrackMessage<'a> {
    fn from(value: SystemExclusiveMessage<'a>) -> Self {
        Self::SystemExclusive(value)
    }
}

impl<'a> From<MetaMessage<'a>> for TrackMessage<'a> {
    fn from(value: MetaMessage<'a>) -> Self {
        Self::Meta(value)
    }
}

#[doc = r#"
A message with its delta time.

`accumulated_ticks` is the running sum of delta times in the track up to and
including this event.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent<'a> {
    delta_ticks: u32,
    accumulated_ticks: u32,
    event: TrackMessage<'a>,
}

impl<'a> TrackEvent<'a> {
    /// Create an event whose accumulated ticks equal its delta.
    pub fn new(delta_ticks: u32, event: impl Into<TrackMessage<'a>>) -> Self {
        Self {
            delta_ticks,
            accumulated_ticks: delta_ticks,
            event: event.into(),
        }
    }

    pub(crate) const fn with_accumulated(
        delta_ticks: u32,
        accumulated_ticks: u32,
        event: TrackMessage<'a>,
    ) -> Self {
        Self {
            delta_ticks,
            accumulated_ticks,
            event,
        }
    }

    /// Ticks since the previous event in the track
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }

    /// Ticks since the start of the track
    pub const fn accumulated_ticks(&self) -> u32 {
        self.accumulated_ticks
    }

    /// The message
    pub const fn event(&self) -> &TrackMessage<'a> {
        &self.event
    }

    /// True if this is the end of the track
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self.event, TrackMessage::Meta(MetaMessage::EndOfTrack))
    }
}
