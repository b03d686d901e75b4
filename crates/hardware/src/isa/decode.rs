//! Instruction decoder and encoder helpers.
//!
//! Decoding is a pure function of the word. The encoders build words from
//! operations and values so programs can be assembled directly in code.

use crate::common::Word;
use crate::common::constants::{IMMEDIATE_BIT, IMMEDIATE_VALUE_MASK, OPCODE_SHIFT};
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcode::Opcode;

/// Decodes a word into an [`Instruction`].
///
/// # Arguments
///
/// * `word` - The fetched instruction word.
///
/// # Returns
///
/// `Immediate` when bit 11 is set, otherwise the operation selected by
/// bits 8-10, or `Invalid` for field values 6 and 7.
pub fn decode(word: Word) -> Instruction {
    if word.is_immediate() {
        return Instruction::Immediate(word.immediate());
    }
    let field = word.opcode_field();
    Opcode::from_field(field).map_or(Instruction::Invalid(field), Instruction::Op)
}

/// Encodes an immediate load of `value`.
///
/// Only the low 11 bits of `value` are kept, so values outside
/// `-1024..=1023` wrap.
pub const fn encode_immediate(value: i16) -> Word {
    Word::new(IMMEDIATE_BIT | (value as u16 & IMMEDIATE_VALUE_MASK))
}

/// Encodes a regular operation with zero padding bits.
pub const fn encode_op(op: Opcode) -> Word {
    Word::new((op.field() as u16) << OPCODE_SHIFT)
}
