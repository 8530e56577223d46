#![doc = r#"
Contains all Channel Voice Message types

A channel voice message is identified by a status byte whose high nibble is
`0x8` through `0xE`. The low nibble is the channel.

```text
status  kind                 data bytes
8n      Note Off             note, velocity
9n      Note On              note, velocity
An      Key After Touch      note, pressure
Bn      Control Change       controller, value
Cn      Patch Change         program
Dn      Channel After Touch  pressure
En      Pitch Wheel Change   first, second
```
"#]

mod voice_event;
pub use voice_event::*;

use crate::Note;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
One of the sixteen MIDI channels.

`Channel::One` is encoded as `0` on the wire.
"#]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The channel in the low nibble of a status byte
    pub const fn from_status(status: u8) -> Self {
        use Channel::*;
        const ALL: [Channel; 16] = [
            One, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Eleven, Twelve, Thirteen,
            Fourteen, Fifteen, Sixteen,
        ];
        ALL[(status & 0x0F) as usize]
    }

    /// The wire value, `0..=15`
    pub fn number(self) -> u8 {
        self.into()
    }
}

#[doc = r#"
A channel voice message: a [`Channel`] and what happened on it.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceMessage {
    pub(crate) channel: Channel,
    pub(crate) event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// The channel the message is sent on
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// What the message does
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The note of a note off, note on or key after touch
    pub const fn note(&self) -> Option<Note> {
        self.event.note()
    }
}

#[test]
fn channel_from_status() {
    assert_eq!(Channel::from_status(0x90), Channel::One);
    assert_eq!(Channel::from_status(0x8F), Channel::Sixteen);
    assert_eq!(Channel::from_status(0xE9).number(), 9);
    assert_eq!(Channel::try_from(3u8).ok(), Some(Channel::Four));
}
