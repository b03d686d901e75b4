//! Architectural register file.
//!
//! This module holds the four registers of the machine. It provides:
//! 1. **Storage:** Program counter `p`, accumulator `a`, secondary register `x`, and instruction register `i`.
//! 2. **Invariant Enforcement:** `p` is an [`Addr`] and the rest are [`Word`]s, so every value stays masked.
//! 3. **Debugging:** A single-line dump of the register state.

use std::fmt;

use crate::common::{Addr, Word};

/// The machine's registers.
///
/// Only `a` and `x` are visible to programs; `x` changes solely as a side
/// effect of an immediate load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    /// Program counter.
    pub p: Addr,
    /// Accumulator.
    pub a: Word,
    /// Secondary operand register.
    pub x: Word,
    /// Last fetched instruction word.
    pub i: Word,
}

impl Registers {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p={:<4} a={:#05x} ({:>5}) x={:#05x} ({:>5}) i={:#05x}",
            self.p,
            self.a,
            self.a.as_signed(),
            self.x,
            self.x.as_signed(),
            self.i
        )
    }
}
