use crate::{Micros, file::meta::Tempo};
use alloc::vec::Vec;

/// The tempo changed at some point in the song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoChange {
    old: Tempo,
    new: Tempo,
    time: Micros,
}

impl TempoChange {
    /// Create a change from `old` to `new` at `time`
    pub const fn new(old: Tempo, new: Tempo, time: Micros) -> Self {
        Self { old, new, time }
    }

    /// The tempo before the change
    pub const fn old(&self) -> Tempo {
        self.old
    }

    /// The tempo after the change
    pub const fn new_tempo(&self) -> Tempo {
        self.new
    }

    /// When the change takes effect, from the start of the song
    pub const fn time(&self) -> Micros {
        self.time
    }
}

#[doc = r#"
The tempo changes of a song, in the order they were discovered.

The map is built while the tracks are being merged, and every tick to time
conversion made during the merge only sees the changes recorded so far.

# Converting ticks

A delta is first converted at the current tempo, which gives the time it would
end at. Every recorded change strictly between the delta's start and that end
splits the delta: the ticks up to the change are converted at the tempo before
it. Whatever ticks remain are converted at the current tempo.

```rust
# use midiline::prelude::*;
let mut map = TempoMap::default();
map.push(TempoChange::new(
    Tempo::new(500_000),
    Tempo::new(250_000),
    Micros::new(500_000),
));

// 1440 ticks at 480 per quarter note would end at 750 000 µs, past the change:
// one quarter at 500 000 µs, then two quarters at 250 000 µs.
let micros = map.ticks_to_micros(1440, Tempo::new(250_000), Micros::ZERO, 480);
assert_eq!(micros, Micros::new(1_000_000));

// 960 ticks would end at 500 000 µs, on the change, so it does not apply.
let micros = map.ticks_to_micros(960, Tempo::new(250_000), Micros::ZERO, 480);
assert_eq!(micros, Micros::new(500_000));
```
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoMap {
    changes: Vec<TempoChange>,
}

impl TempoMap {
    /// Record a tempo change
    pub fn push(&mut self, change: TempoChange) {
        self.changes.push(change);
    }

    /// Every recorded change
    pub fn changes(&self) -> &[TempoChange] {
        &self.changes
    }

    /// Number of recorded changes
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True if the tempo never changed
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The tempo in force at `time`.
    ///
    /// Before the first change this is that change's old tempo, and
    /// [`Tempo::DEFAULT`] if nothing was recorded.
    pub fn tempo_at(&self, time: Micros) -> Tempo {
        self.changes
            .iter()
            .rev()
            .find(|change| change.time <= time)
            .map(|change| change.new)
            .or_else(|| self.changes.first().map(|change| change.old))
            .unwrap_or(Tempo::DEFAULT)
    }

    /// Convert `ticks` starting at `start` into a duration.
    ///
    /// Only changes strictly after `start` and strictly before the end the
    /// delta would have at `current` are applied. If the ticks run out before
    /// an applied change is reached, they are all converted at that change's
    /// old tempo.
    pub fn ticks_to_micros(
        &self,
        ticks: u32,
        current: Tempo,
        start: Micros,
        ticks_per_quarter_note: u16,
    ) -> Micros {
        let mut remaining = ticks as f64;
        let target = start.us() as f64 + current.micros_for_ticks(remaining, ticks_per_quarter_note);
        let mut elapsed = 0.;
        let mut position = start;

        for change in &self.changes {
            if change.time <= position || change.time.us() as f64 >= target {
                continue;
            }
            let span = (change.time - position).us() as f64;
            let ticks_to_change = change.old.ticks_for_micros(span, ticks_per_quarter_note);
            if ticks_to_change >= remaining {
                elapsed += change.old.micros_for_ticks(remaining, ticks_per_quarter_note);
                remaining = 0.;
                break;
            }
            elapsed += span;
            remaining -= ticks_to_change;
            position = change.time;
        }

        Micros::from_f64(elapsed + current.micros_for_ticks(remaining, ticks_per_quarter_note))
    }
}
