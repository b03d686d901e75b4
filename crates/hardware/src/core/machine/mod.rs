//! Machine state.
//!
//! This module defines the [`Machine`], the single owner of all simulation
//! state. It coordinates the following:
//! 1. **State Management:** Holds the register file and memory.
//! 2. **Initialization:** Starts with every register and memory cell at zero.
//! 3. **Execution:** The fetch-decode-execute step lives in [`execution`].
//!
//! Memory is written only by the loader before a run and by the store
//! instruction during one.

/// Fetch-decode-execute step.
pub mod execution;

use crate::common::{Addr, Word};
use crate::core::arch::Registers;
use crate::core::memory::Memory;

pub use execution::Retired;

/// The complete state of one simulated machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Machine {
    /// Register file.
    pub regs: Registers,
    /// Main memory.
    pub mem: Memory,
}

impl Machine {
    /// Creates a machine with zeroed registers and memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every register and memory cell.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.mem.clear();
    }

    /// Loads `words` into memory from address 0 and sets `p` to `start`.
    ///
    /// Remaining cells are cleared and extra words are dropped.
    ///
    /// # Returns
    ///
    /// The number of words placed in memory.
    pub fn load(&mut self, words: &[Word], start: Addr) -> usize {
        let count = self.mem.fill_from(words);
        self.regs.p = start;
        count
    }

    /// Returns the current program counter.
    pub const fn pc(&self) -> Addr {
        self.regs.p
    }

    /// Prints the register file to stderr.
    pub fn dump_state(&self) {
        eprintln!("{}", self.regs);
    }
}
