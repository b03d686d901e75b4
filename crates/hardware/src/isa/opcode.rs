//! Opcode field values.
//!
//! Defines the six operations selected by bits 8-10 of a non-immediate word.
//! Field values 6 and 7 have no operation assigned.

use std::fmt;

/// Jump-and-link, or propagate `x` when `x` is negative.
pub const OP_JUMP: u8 = 0;

/// `a := x - a`.
pub const OP_SUBTRACT: u8 = 1;

/// `a := !(a & x)`.
pub const OP_NAND: u8 = 2;

/// `a := mem[a]`.
pub const OP_FETCH: u8 = 3;

/// `mem[a] := x`.
pub const OP_STORE: u8 = 4;

/// No operation.
pub const OP_NOP: u8 = 5;

/// A valid non-immediate operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Conditional jump-and-link.
    Jump,
    /// 12-bit wrapping subtraction.
    Subtract,
    /// Bitwise NAND.
    Nand,
    /// Memory load through the accumulator.
    Fetch,
    /// Memory store through the accumulator.
    Store,
    /// No operation.
    NoOp,
}

impl Opcode {
    /// Every valid opcode, in field order.
    pub const ALL: [Self; 6] = [
        Self::Jump,
        Self::Subtract,
        Self::Nand,
        Self::Fetch,
        Self::Store,
        Self::NoOp,
    ];

    /// Maps a 3-bit opcode field to an operation.
    ///
    /// # Returns
    ///
    /// `None` for the unassigned values 6 and 7 (and anything wider).
    pub const fn from_field(field: u8) -> Option<Self> {
        match field {
            OP_JUMP => Some(Self::Jump),
            OP_SUBTRACT => Some(Self::Subtract),
            OP_NAND => Some(Self::Nand),
            OP_FETCH => Some(Self::Fetch),
            OP_STORE => Some(Self::Store),
            OP_NOP => Some(Self::NoOp),
            _ => None,
        }
    }

    /// Returns the 3-bit field value of this opcode.
    pub const fn field(self) -> u8 {
        match self {
            Self::Jump => OP_JUMP,
            Self::Subtract => OP_SUBTRACT,
            Self::Nand => OP_NAND,
            Self::Fetch => OP_FETCH,
            Self::Store => OP_STORE,
            Self::NoOp => OP_NOP,
        }
    }

    /// Returns the program mnemonic, as shown in traces and logs.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Jump => ".",
            Self::Subtract => "-",
            Self::Nand => "|",
            Self::Fetch => "@",
            Self::Store => "!",
            Self::NoOp => "nop",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
