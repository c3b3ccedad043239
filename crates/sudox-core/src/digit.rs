//! The nine sudoku digits.

use std::fmt::{self, Display};

/// A digit 1-9, the only values a solved cell can hold.
///
/// Keeping digits as an enum rather than a raw `u8` rules out 0 and
/// out-of-range values everywhere downstream; candidate sets and boards never
/// have to validate their elements.
///
/// # Examples
///
/// ```
/// use sudox_core::Digit;
///
/// assert_eq!(Digit::from_value(7), Digit::D7);
/// assert_eq!(Digit::D7.value(), 7);
/// assert_eq!(Digit::ALL.map(|d| d.value()), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// Digit 1.
    D1 = 1,
    /// Digit 2.
    D2 = 2,
    /// Digit 3.
    D3 = 3,
    /// Digit 4.
    D4 = 4,
    /// Digit 5.
    D5 = 5,
    /// Digit 6.
    D6 = 6,
    /// Digit 7.
    D7 = 7,
    /// Digit 8.
    D8 = 8,
    /// Digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits, ascending.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Converts a numeric value into the corresponding digit.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Returns the digit as a number (1-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
