use crate::{Micros, Note, file::meta::Tempo, message::channel::Channel};

#[doc = r#"
A rough note value for a duration, relative to the tempo.

The duration is divided by the length of a quarter note and compared against
each value's window in turn, from longest to shortest. The first window that
contains the ratio wins.

| value                | quarter notes | tolerance |
|----------------------|---------------|-----------|
| `DoubleWhole`        | 8             | 0.1       |
| `Whole`              | 4             | 0.1       |
| `Half`               | 2             | 0.1       |
| `Quarter`            | 1             | 0.1       |
| `Eighth`             | 0.5           | 0.05      |
| `Sixteenth`          | 0.25          | 0.05      |
| `ThirtySecond`       | 0.125         | 0.0125    |
| `SixtyFourth`        | 0.0625        | 0.0005    |
| `HundredTwentyEighth`| 0.03125       | 0.00005   |

# Example
```rust
# use midiline::prelude::*;
let length = NoteLength::classify(Micros::new(250_000), Tempo::DEFAULT);
assert_eq!(length, NoteLength::Eighth);
```
"#]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteLength {
    DoubleWhole,
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
    Unknown,
}

const WINDOWS: [(NoteLength, f64, f64); 9] = [
    (NoteLength::DoubleWhole, 8.0, 0.1),
    (NoteLength::Whole, 4.0, 0.1),
    (NoteLength::Half, 2.0, 0.1),
    (NoteLength::Quarter, 1.0, 0.1),
    (NoteLength::Eighth, 0.5, 0.05),
    (NoteLength::Sixteenth, 0.25, 0.05),
    (NoteLength::ThirtySecond, 0.125, 0.0125),
    (NoteLength::SixtyFourth, 0.0625, 0.0005),
    (NoteLength::HundredTwentyEighth, 0.03125, 0.00005),
];

impl NoteLength {
    /// Classify `duration` against the length of a quarter note at `tempo`
    pub fn classify(duration: Micros, tempo: Tempo) -> Self {
        let ratio = duration.us() as f64 / tempo.micros_per_quarter_note() as f64;
        WINDOWS
            .iter()
            .find(|(_, quarters, tolerance)| {
                let distance = if ratio > *quarters {
                    ratio - quarters
                } else {
                    quarters - ratio
                };
                distance <= *tolerance
            })
            .map(|(length, _, _)| *length)
            .unwrap_or(NoteLength::Unknown)
    }

    /// The nominal length in quarter notes, `None` for [`NoteLength::Unknown`]
    pub fn quarter_notes(&self) -> Option<f64> {
        WINDOWS
            .iter()
            .find(|(length, _, _)| length == self)
            .map(|(_, quarters, _)| *quarters)
    }
}

/// A note that was started and then stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayedNote {
    note: Note,
    channel: Channel,
    start: Micros,
    duration: Micros,
    length: NoteLength,
}

impl PlayedNote {
    /// Create a played note
    pub const fn new(
        note: Note,
        channel: Channel,
        start: Micros,
        duration: Micros,
        length: NoteLength,
    ) -> Self {
        Self {
            note,
            channel,
            start,
            duration,
            length,
        }
    }

    /// The note, with the velocity it was started with
    pub const fn note(&self) -> Note {
        self.note
    }

    /// The channel of the note on
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// When the note started, from the start of the song
    pub const fn start(&self) -> Micros {
        self.start
    }

    /// How long the note sounded
    pub const fn duration(&self) -> Micros {
        self.duration
    }

    /// When the note stopped
    pub fn end(&self) -> Micros {
        self.start + self.duration
    }

    /// The duration as a rough note value
    pub const fn length(&self) -> NoteLength {
        self.length
    }
}

#[test]
fn classification_windows() {
    let tempo = Tempo::DEFAULT;
    let cases = [
        (4_000_000, NoteLength::DoubleWhole),
        (2_000_000, NoteLength::Whole),
        (1_040_000, NoteLength::Half),
        (500_000, NoteLength::Quarter),
        (549_999, NoteLength::Quarter),
        (250_000, NoteLength::Eighth),
        (125_000, NoteLength::Sixteenth),
        (62_500, NoteLength::ThirtySecond),
        (31_250, NoteLength::SixtyFourth),
        (15_625, NoteLength::HundredTwentyEighth),
        (15_700, NoteLength::Unknown),
        (750_000, NoteLength::Unknown),
        (0, NoteLength::Unknown),
    ];
    for (micros, expected) in cases {
        assert_eq!(
            NoteLength::classify(Micros::new(micros), tempo),
            expected,
            "{micros}µs"
        );
    }
}

#[test]
fn classification_follows_tempo() {
    let fast = Tempo::new(250_000);
    assert_eq!(
        NoteLength::classify(Micros::new(250_000), fast),
        NoteLength::Quarter
    );
    assert_eq!(NoteLength::Half.quarter_notes(), Some(2.));
    assert_eq!(NoteLength::Unknown.quarter_notes(), None);
}
