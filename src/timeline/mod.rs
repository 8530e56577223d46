#![doc = r#"
Recovering what was played from the events of every track.

Tracks in a format 1 file play at the same time, but each one only records how
many ticks pass between its own events. How long a tick lasts depends on the
tempo, and a tempo change in any track applies to all of them. The
[`Timeline`] replays the tracks together, one event at a time, so that each
delta is converted with the tempo changes discovered so far:

1. pick the track whose next event comes first,
2. convert that event's delta to microseconds with the [`TempoMap`],
3. start, stop or retime notes depending on the event,
4. advance that track.

Choosing the next event compares each track's elapsed microseconds plus the
next event's delta in *ticks*. This matches the reference ordering of events
exactly while the tempo is the default one.
"#]

mod played;
pub use played::*;

mod tempo_map;
pub use tempo_map::*;

use crate::{
    Micros, Note,
    events::{TrackEvent, TrackMessage},
    file::meta::{MetaMessage, Tempo},
    message::channel::{Channel, VoiceEvent},
};
use alloc::vec::Vec;
use core::num::NonZeroU16;

/// What an event means for the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Start(Channel, Note),
    Stop(Note),
    SetTempo(Tempo),
    Nothing,
}

impl Cue {
    /// A note on with zero velocity stops the note.
    fn of(message: &TrackMessage<'_>) -> Self {
        match message {
            TrackMessage::ChannelVoice(cv) => match cv.event() {
                VoiceEvent::NoteOn(note) if note.velocity() == 0 => Cue::Stop(*note),
                VoiceEvent::NoteOn(note) => Cue::Start(cv.channel(), *note),
                VoiceEvent::NoteOff(note) => Cue::Stop(*note),
                _ => Cue::Nothing,
            },
            TrackMessage::Meta(MetaMessage::Tempo(tempo)) => Cue::SetTempo(*tempo),
            _ => Cue::Nothing,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenNote {
    channel: Channel,
    note: Note,
    start: Micros,
}

struct TrackCursor<'e, 'a> {
    events: &'e [TrackEvent<'a>],
    next: usize,
    elapsed: Micros,
    open: Vec<OpenNote>,
    played: Vec<PlayedNote>,
}

impl<'e, 'a> TrackCursor<'e, 'a> {
    fn pending(&self) -> Option<&'e TrackEvent<'a>> {
        self.events.get(self.next)
    }
}

/// The result of replaying every track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Performance {
    /// Played notes per track, in the order they stopped
    pub played_notes: Vec<Vec<PlayedNote>>,
    /// Every tempo change, in the order they were met
    pub tempo_map: TempoMap,
    /// The tempo set by the first event of any track, or the default tempo
    pub starting_tempo: Tempo,
    /// The time of the latest event in any track
    pub length: Micros,
}

#[doc = r#"
Merges the events of simultaneous tracks into a single performance.

# Example
```rust
# use midiline::prelude::*;
let track = [
    TrackEvent::new(0, ChannelVoiceMessage::new(Channel::One, VoiceEvent::NoteOn(Note::new(60, 64)))),
    TrackEvent::new(480, ChannelVoiceMessage::new(Channel::One, VoiceEvent::NoteOff(Note::new(60, 0)))),
    TrackEvent::new(0, MetaMessage::EndOfTrack),
];

let resolution = core::num::NonZeroU16::new(480).unwrap();
let performance = Timeline::new(resolution).reconstruct(&[&track[..]]);
let played = &performance.played_notes[0];

assert_eq!(played.len(), 1);
assert_eq!(played[0].start(), Micros::ZERO);
assert_eq!(played[0].duration(), Micros::new(500_000));
assert_eq!(played[0].length(), NoteLength::Quarter);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    ticks_per_quarter_note: NonZeroU16,
}

impl Timeline {
    /// A timeline for a file with the given resolution
    pub const fn new(ticks_per_quarter_note: NonZeroU16) -> Self {
        Self {
            ticks_per_quarter_note,
        }
    }

    /// Replay `tracks` and collect what was played.
    pub fn reconstruct<'a, T>(&self, tracks: &[T]) -> Performance
    where
        T: AsRef<[TrackEvent<'a>]>,
    {
        let mut cursors: Vec<TrackCursor<'_, 'a>> = tracks
            .iter()
            .map(|track| TrackCursor {
                events: track.as_ref(),
                next: 0,
                elapsed: Micros::ZERO,
                open: Vec::new(),
                played: Vec::new(),
            })
            .collect();

        let mut tempo_map = TempoMap::default();
        let mut tempo = Tempo::DEFAULT;
        let mut starting_tempo = Tempo::DEFAULT;

        while let Some(index) = next_track(&cursors) {
            let cursor = &mut cursors[index];
            let Some(event) = cursor.pending() else {
                break;
            };

            let start = cursor.elapsed;
            let time = start
                + tempo_map.ticks_to_micros(
                    event.delta_ticks(),
                    tempo,
                    start,
                    self.ticks_per_quarter_note.get(),
                );

            #[cfg(feature = "tracing")]
            tracing::trace!("track {index} event {} at {time}", cursor.next);

            match Cue::of(event.event()) {
                Cue::Start(channel, note) => cursor.open.push(OpenNote {
                    channel,
                    note,
                    start: time,
                }),
                Cue::Stop(note) => {
                    match cursor
                        .open
                        .iter()
                        .position(|open| open.note.number() == note.number())
                    {
                        Some(position) => {
                            let open = cursor.open.remove(position);
                            let duration = time.saturating_sub(open.start);
                            cursor.played.push(PlayedNote::new(
                                open.note,
                                open.channel,
                                open.start,
                                duration,
                                NoteLength::classify(duration, tempo),
                            ));
                        }
                        None => {
                            #[cfg(feature = "tracing")]
                            tracing::warn!(
                                "track {index}: note off for {} at {time} was never started",
                                note.number()
                            );
                        }
                    }
                }
                Cue::SetTempo(new_tempo) => {
                    tempo_map.push(TempoChange::new(tempo, new_tempo, time));
                    if start == Micros::ZERO {
                        starting_tempo = new_tempo;
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!("tempo {tempo} -> {new_tempo} at {time}");
                    tempo = new_tempo;
                }
                Cue::Nothing => {}
            }

            cursor.elapsed = time;
            cursor.next += 1;
        }

        let length = cursors
            .iter()
            .map(|cursor| cursor.elapsed)
            .max()
            .unwrap_or_default();

        Performance {
            played_notes: cursors.into_iter().map(|cursor| cursor.played).collect(),
            tempo_map,
            starting_tempo,
            length,
        }
    }
}

/// The track whose next event comes first. Ties go to the lowest index.
fn next_track(cursors: &[TrackCursor<'_, '_>]) -> Option<usize> {
    cursors
        .iter()
        .enumerate()
        .filter_map(|(index, cursor)| {
            let event = cursor.pending()?;
            Some((index, cursor.elapsed.us().saturating_add(event.delta_ticks() as u64)))
        })
        .min_by_key(|(_, due)| *due)
        .map(|(index, _)| index)
}
