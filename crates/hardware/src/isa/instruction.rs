//! Instruction word field extraction.
//!
//! Provides the bit-field accessors used by the decoder, and the decoded
//! [`Instruction`] form.

use std::fmt;

use crate::common::Word;
use crate::common::constants::{
    IMMEDIATE_BIT, IMMEDIATE_SIGN_BIT, IMMEDIATE_VALUE_MASK, OPCODE_MASK, OPCODE_SHIFT,
};
use crate::isa::opcode::Opcode;

/// Trait for extracting instruction fields from a word.
pub trait InstructionBits {
    /// Returns `true` if bit 11 is set, marking an immediate load.
    fn is_immediate(&self) -> bool;

    /// Extracts the opcode field (bits 8-10).
    ///
    /// Only meaningful when [`is_immediate`](Self::is_immediate) is `false`.
    /// Bits 0-7 are padding and do not affect the result.
    fn opcode_field(&self) -> u8;

    /// Extracts the immediate payload (bits 0-10) sign-extended to 12 bits.
    ///
    /// Bit 10 is replicated into bit 11, so `0x401` becomes `0xC01`.
    fn immediate(&self) -> Word;
}

impl InstructionBits for Word {
    #[inline(always)]
    fn is_immediate(&self) -> bool {
        self.val() & IMMEDIATE_BIT != 0
    }

    #[inline(always)]
    fn opcode_field(&self) -> u8 {
        ((self.val() >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn immediate(&self) -> Word {
        let raw = self.val();
        Word::new(((raw & IMMEDIATE_SIGN_BIT) << 1) | (raw & IMMEDIATE_VALUE_MASK))
    }
}

/// A decoded instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Immediate load carrying its sign-extended value.
    Immediate(Word),
    /// A regular operation.
    Op(Opcode),
    /// An unassigned opcode field (6 or 7).
    Invalid(u8),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(value) => write!(f, "${}", value.as_signed()),
            Self::Op(op) => write!(f, "{op}"),
            Self::Invalid(field) => write!(f, "<invalid {field}>"),
        }
    }
}
