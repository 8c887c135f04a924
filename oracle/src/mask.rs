// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::{
    fmt,
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

const MASK: u8 = (1 << 4) - 1;

/// A 4-bit unsigned integer. Values are first truncated to 8 bits, wrapping like an unsigned
/// byte cast, and then masked to the low nibble, so every integer maps into `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uint4(u8);

impl Uint4 {
    pub const MAX: Uint4 = Uint4(MASK);

    /// Parses a decimal integer, allowing surrounding whitespace and a sign, and masks it.
    /// Integers of any length are accepted, as are whole numbers written in floating-point form
    /// such as `12.0` or `1e3`.
    /// # Errors
    ///
    /// Returns an error if `s` is not a number or has a fractional part.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        let s = s.trim();
        match s.parse::<i128>() {
            Ok(value) => Ok(Self::from(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Ok(Self::from_low_digits(s))
                }
                _ => Self::from_whole_float(s).ok_or(e),
            },
        }
    }

    // Only called on strings the integer parser accepted up to overflow, so every byte after
    // the sign is an ASCII digit. 16 divides 10^4, so the last four digits fix the low nibble.
    fn from_low_digits(s: &str) -> Self {
        let digits = s.trim_start_matches(['+', '-']);
        let low = digits[digits.len().saturating_sub(4)..]
            .bytes()
            .fold(0_i32, |acc, d| acc * 10 + i32::from(d - b'0'));
        Self::from(if s.starts_with('-') { -low } else { low })
    }

    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn from_whole_float(s: &str) -> Option<Self> {
        let value = s
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)?;
        // Whole floats at or above 2^63 in magnitude are multiples of 16.
        if value.abs() < 2_f64.powi(63) {
            Some(Self::from(value as i64))
        } else {
            Some(Self::default())
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns whether bit `n` (0 is least significant) is set.
    #[must_use]
    pub fn bit(self, n: u32) -> bool {
        n < 4 && (self.0 >> n) & 1 == 1
    }

    /// The two-qubit basis state selected by the low two bits, as an index with qubit 0 as the
    /// least significant position.
    #[must_use]
    pub fn marked_state(self) -> usize {
        usize::from(self.0 & 0b11)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Uint4 {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast
                )]
                fn from(value: $ty) -> Self {
                    Uint4((value as u8) & MASK)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Uint4> for u8 {
    fn from(value: Uint4) -> Self {
        value.0
    }
}

impl FromStr for Uint4 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Uint4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Masks `value` to its low 4 bits after truncating it to a byte.
#[must_use]
pub fn uint4(value: impl Into<Uint4>) -> u8 {
    value.into().value()
}
