//! Memory address type.
//!
//! Addresses are 11 bits wide, one narrower than a word. An [`Addr`] is always
//! a valid index into memory, which is what lets the machine skip bounds
//! handling entirely. It provides:
//! 1. **Type Safety:** Keeps addresses and data words apart at compile time.
//! 2. **Wraparound:** Incrementing past the last cell returns to address 0.
//! 3. **Conversion:** Takes the low 11 bits of a word when a value is used as an address.

use std::fmt;

use super::constants::ADDR_MASK;
use super::word::Word;

/// An 11-bit memory address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(u16);

impl Addr {
    /// Creates an address from a raw value, discarding bits above bit 10.
    ///
    /// # Arguments
    ///
    /// * `raw` - Any 16-bit value; only the low 11 bits are kept.
    ///
    /// # Returns
    ///
    /// The masked address.
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Self(raw & ADDR_MASK)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a memory index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the following address, wrapping from 2047 to 0.
    #[inline(always)]
    pub const fn next(self) -> Self {
        Self::new(self.0.wrapping_add(1))
    }

    /// Widens the address into a word (bit 11 clear).
    #[inline]
    pub const fn to_word(self) -> Word {
        Word::new(self.0)
    }
}

impl From<Word> for Addr {
    fn from(word: Word) -> Self {
        Self::new(word.val())
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
