//! Main memory.
//!
//! A fixed array of 2048 words, zero-initialized and never resized. Indexing
//! is by [`Addr`], which is always in range.

use crate::common::{Addr, MEMORY_SIZE, Word};

/// The machine's word-addressed memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[Word; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a memory with every cell set to zero.
    pub fn new() -> Self {
        Self {
            cells: Box::new([Word::ZERO; MEMORY_SIZE]),
        }
    }

    /// Reads the word at `addr`.
    #[inline(always)]
    pub fn read(&self, addr: Addr) -> Word {
        self.cells[addr.index()]
    }

    /// Writes `value` to `addr`.
    #[inline(always)]
    pub fn write(&mut self, addr: Addr, value: Word) {
        self.cells[addr.index()] = value;
    }

    /// Copies `words` into memory starting at address 0.
    ///
    /// Cells past the end of `words` are cleared. Words beyond the memory
    /// size are ignored.
    ///
    /// # Returns
    ///
    /// The number of words copied.
    pub fn fill_from(&mut self, words: &[Word]) -> usize {
        let count = words.len().min(MEMORY_SIZE);
        self.cells[..count].copy_from_slice(&words[..count]);
        self.cells[count..].fill(Word::ZERO);
        count
    }

    /// Clears every cell to zero.
    pub fn clear(&mut self) {
        self.cells.fill(Word::ZERO);
    }

    /// Returns the full memory contents.
    pub fn as_slice(&self) -> &[Word] {
        self.cells.as_slice()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self
            .cells
            .iter()
            .rposition(|w| *w != Word::ZERO)
            .map_or(0, |last| last + 1);
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("used", &used)
            .finish()
    }
}
