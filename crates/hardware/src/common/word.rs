//! 12-bit machine word.
//!
//! Every register and memory cell holds a [`Word`]. The constructor masks its
//! input, so no value with bits above bit 11 can exist.

use std::fmt;

use super::constants::{IMMEDIATE_BIT, WORD_MASK};

/// A 12-bit machine word stored in the low bits of a `u16`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(u16);

impl Word {
    /// The all-zero word.
    pub const ZERO: Self = Self(0);

    /// The all-ones word (12-bit `-1`).
    pub const MAX: Self = Self(WORD_MASK);

    /// Creates a word from a raw value, discarding bits above bit 11.
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Self(raw & WORD_MASK)
    }

    /// Creates a word from a signed value, wrapping modulo 4096.
    ///
    /// `-1` becomes `0xFFF`, `4097` becomes `1`.
    #[inline]
    pub const fn from_signed(value: i64) -> Self {
        Self(value.rem_euclid(1 << 12) as u16)
    }

    /// Returns the raw 12-bit value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns `true` if bit 11 is set (negative in two's complement).
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.0 & IMMEDIATE_BIT != 0
    }

    /// Interprets the word as a 12-bit two's-complement integer.
    pub const fn as_signed(self) -> i16 {
        ((self.0 << 4) as i16) >> 4
    }

    /// Computes `self - rhs` modulo 4096.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self::new(self.0.wrapping_sub(rhs.0))
    }

    /// Computes `!(self & rhs)` truncated to 12 bits.
    #[inline]
    pub const fn nand(self, rhs: Self) -> Self {
        Self::new(!(self.0 & rhs.0))
    }
}

impl From<Word> for u16 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
