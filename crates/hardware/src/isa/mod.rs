//! Instruction set definitions.
//!
//! Contains the opcode table, word field extraction, and the decoder.
//!
//! # Encoding
//!
//! * Bit 11 set: immediate load; bits 0-10 are a signed 11-bit value.
//! * Bit 11 clear: bits 8-10 select the operation, bits 0-7 are ignored.

/// Instruction decoding and encoding helpers.
pub mod decode;

/// Word field extraction and the decoded instruction type.
pub mod instruction;

/// Opcode field values.
pub mod opcode;

pub use decode::{decode, encode_immediate, encode_op};
pub use instruction::{Instruction, InstructionBits};
pub use opcode::Opcode;
