use core::{
    fmt,
    ops::{Add, AddAssign, Sub},
};

/// A point in or span of song time, in microseconds.
///
/// Absolute times count from the start of the song. Durations are the
/// difference between two absolute times, so neither is ever negative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Micros(u64);

impl Micros {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates a new instance of microseconds
    #[inline]
    pub const fn new(microseconds: u64) -> Self {
        Self(microseconds)
    }

    /// Returns the microseconds as a u64
    #[inline]
    pub const fn us(&self) -> u64 {
        self.0
    }

    /// Rounds a fractional microsecond count to the nearest whole microsecond.
    ///
    /// Negative and NaN inputs become zero.
    pub(crate) fn from_f64(micros: f64) -> Self {
        if micros.is_nan() || micros <= 0. {
            return Self::ZERO;
        }
        Self((micros + 0.5) as u64)
    }

    /// Returns no time if I am less than other.
    pub const fn saturating_sub(&self, other: Self) -> Micros {
        Micros(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Micros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}µs", self.0)
    }
}

impl Add for Micros {
    type Output = Micros;
    fn add(self, rhs: Self) -> Self::Output {
        Micros(self.0 + rhs.0)
    }
}

impl AddAssign for Micros {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Micros {
    type Output = Micros;
    fn sub(self, rhs: Self) -> Self::Output {
        Micros(self.0 - rhs.0)
    }
}

impl From<u64> for Micros {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[test]
fn rounds_to_nearest() {
    assert_eq!(Micros::from_f64(249_999.6), Micros::new(250_000));
    assert_eq!(Micros::from_f64(-3.), Micros::ZERO);
    assert_eq!(Micros::from_f64(f64::NAN), Micros::ZERO);
}
