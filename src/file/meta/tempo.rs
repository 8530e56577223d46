use core::fmt;

#[doc = r#"
A tempo, in microseconds per quarter note.

MIDI files store tempo as a 24-bit big-endian integer. Without any tempo event
a file plays at [`Tempo::DEFAULT`], 120 beats per minute.

# Example
```rust
# use midiline::prelude::*;
let tempo = Tempo::from_be_bytes([0x07, 0xA1, 0x20]);
assert_eq!(tempo, Tempo::DEFAULT);
assert_eq!(tempo.bpm(), 120.);

// 480 ticks per quarter note: 240 ticks is an eighth note
assert_eq!(tempo.micros_for_ticks(240., 480), 250_000.);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tempo {
    /// 500 000 µs per quarter note
    pub const DEFAULT: Self = Self(500_000);

    /// Create a tempo from microseconds per quarter note
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note)
    }

    /// Decode the three payload bytes of a tempo meta event
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute
    pub fn bpm(&self) -> f64 {
        60_000_000. / self.0 as f64
    }

    /// How long `ticks` last at this tempo
    pub fn micros_for_ticks(&self, ticks: f64, ticks_per_quarter_note: u16) -> f64 {
        ticks * self.0 as f64 / ticks_per_quarter_note as f64
    }

    /// How many ticks fit in `micros` at this tempo
    pub fn ticks_for_micros(&self, micros: f64, ticks_per_quarter_note: u16) -> f64 {
        micros * ticks_per_quarter_note as f64 / self.0 as f64
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}µs/quarter", self.0)
    }
}

#[test]
fn tempo_conversions_agree() {
    let tempo = Tempo::new(250_000);
    assert_eq!(tempo.bpm(), 240.);
    assert_eq!(tempo.micros_for_ticks(480., 480), 250_000.);
    assert_eq!(tempo.ticks_for_micros(250_000., 480), 480.);
    assert_eq!(Tempo::from_be_bytes([0x03, 0xD0, 0x90]), tempo);
}
