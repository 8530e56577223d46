/// A time signature meta event payload (`FF 58 04 nn dd cc bb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    numerator: u8,
    denominator_power: u8,
    clocks_per_click: u8,
    thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    pub(crate) const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            numerator: bytes[0],
            denominator_power: bytes[1],
            clocks_per_click: bytes[2],
            thirty_seconds_per_quarter: bytes[3],
        }
    }

    /// Beats per bar
    pub const fn numerator(&self) -> u8 {
        self.numerator
    }

    /// The denominator as written, `2^power`. `None` if it does not fit in a `u32`.
    pub const fn denominator(&self) -> Option<u32> {
        1u32.checked_shl(self.denominator_power as u32)
    }

    /// The denominator as stored in the file, a power of two
    pub const fn denominator_power(&self) -> u8 {
        self.denominator_power
    }

    /// MIDI clocks per metronome click
    pub const fn clocks_per_click(&self) -> u8 {
        self.clocks_per_click
    }

    /// Notated 32nd notes per MIDI quarter note
    pub const fn thirty_seconds_per_quarter(&self) -> u8 {
        self.thirty_seconds_per_quarter
    }
}

/// A key signature meta event payload (`FF 59 02 sf mi`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    accidentals: i8,
    minor: bool,
}

impl KeySignature {
    pub(crate) const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            accidentals: bytes[0] as i8,
            minor: bytes[1] == 1,
        }
    }

    /// Sharps if positive, flats if negative
    pub const fn accidentals(&self) -> i8 {
        self.accidentals
    }

    /// True for a minor key
    pub const fn is_minor(&self) -> bool {
        self.minor
    }
}

#[test]
fn six_eight() {
    let sig = TimeSignature::from_bytes([6, 3, 36, 8]);
    assert_eq!(sig.numerator(), 6);
    assert_eq!(sig.denominator(), Some(8));
    assert_eq!(sig.clocks_per_click(), 36);
}

#[test]
fn e_flat_minor() {
    let key = KeySignature::from_bytes([0xFA, 1]);
    assert_eq!(key.accidentals(), -6);
    assert!(key.is_minor());
}
