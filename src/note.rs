use core::fmt;

#[doc = r#"
A note carried by a note-related channel voice message.

The note number is kept exactly as it was read. The pitch class ([`Key`]) and
[`Octave`] are derived from it: `octave = number / 12`, `key = number % 12`.

# Example
```rust
# use midiline::prelude::*;

let note = Note::new(63, 100);

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave(), Octave::new(5));
assert_eq!(note.velocity(), 100);
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    number: u8,
    velocity: u8,
}

impl Note {
    /// Create a note from its number and velocity
    pub const fn new(number: u8, velocity: u8) -> Self {
        Self { number, velocity }
    }

    /// The raw note number
    #[inline]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Velocity, or the pressure value for key after touch
    #[inline]
    pub const fn velocity(&self) -> u8 {
        self.velocity
    }

    /// Identifies the pitch class of the note
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_number(self.number)
    }

    /// Identifies the octave of the note
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_number(self.number)
    }

    /// Same note, different velocity
    pub const fn with_velocity(self, velocity: u8) -> Self {
        Self {
            number: self.number,
            velocity,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
The pitch class of a note number, from [`Key::C`] through [`Key::B`].

# Example
```rust
# use midiline::prelude::*;
assert_eq!(Key::from_number(12), Key::C);
assert_eq!(Key::from_number(94), Key::ASharp);
assert!(Key::ASharp.is_sharp());
```
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Returns an array beginning with [`Key::C`] to [`Key::B`]
    pub const fn all() -> [Key; 12] {
        use Key::*;
        [C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B]
    }

    /// The pitch class of a note number
    #[inline]
    pub const fn from_number(number: u8) -> Self {
        Self::all()[(number % 12) as usize]
    }

    /// Position in the cycle, `C = 0` through `B = 11`
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// True for the five black keys
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#/Db",
            D => "D",
            DSharp => "D#/Eb",
            E => "E",
            F => "F",
            FSharp => "F#/Gb",
            G => "G",
            GSharp => "G#/Ab",
            A => "A",
            ASharp => "A#/Bb",
            B => "B",
        };
        f.write_str(name)
    }
}

/// The octave of a note number, `number / 12`.
///
/// Note number 0 is in octave 0, and 127 in octave 10.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(u8);

impl Octave {
    /// Create an octave
    pub const fn new(octave: u8) -> Self {
        Self(octave)
    }

    /// Identify the octave of a note number
    pub const fn from_number(number: u8) -> Self {
        Self(number / 12)
    }

    /// The octave number
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn test_key() {
    assert_eq!(Key::C, Note::new(12, 0).key());
    assert_eq!(Key::ASharp, Note::new(94, 0).key());
    assert_eq!(Key::B, Note::new(127 - 8, 0).key());
}

#[test]
fn test_octave() {
    assert_eq!(1, Note::new(12, 0).octave().value());
    assert_eq!(7, Note::new(94, 0).octave().value());
    assert_eq!(0, Note::new(0, 0).octave().value());
}

#[test]
fn keys_cycle_every_twelve() {
    for number in 0..128u8 {
        let note = Note::new(number, 64);
        assert_eq!(note.key().index(), number % 12);
        assert_eq!(note.octave().value() * 12 + note.key().index(), number);
    }
}

#[test]
fn display_names() {
    use alloc::string::ToString;
    assert_eq!(Note::new(60, 0).to_string(), "C5");
    assert_eq!(Note::new(61, 0).to_string(), "C#/Db5");
}
