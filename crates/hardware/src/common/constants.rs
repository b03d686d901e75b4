//! Machine-wide constants.
//!
//! This module defines the widths and bit positions shared by the codec, the
//! machine state and the loader. It includes:
//! 1. **Word Constants:** Word width and the 12-bit value mask.
//! 2. **Memory Constants:** Memory size and the 11-bit address mask.
//! 3. **Instruction Constants:** Immediate flag, immediate sign bit, and opcode field layout.

/// Width of a machine word in bits.
pub const WORD_BITS: u32 = 12;

/// Mask selecting the significant bits of a word.
pub const WORD_MASK: u16 = (1 << WORD_BITS) - 1;

/// Width of a memory address in bits (one narrower than a word).
pub const ADDR_BITS: u32 = WORD_BITS - 1;

/// Number of words in memory (2048).
pub const MEMORY_SIZE: usize = 1 << ADDR_BITS;

/// Mask selecting the address bits of a value.
pub const ADDR_MASK: u16 = (1 << ADDR_BITS) - 1;

/// Bit 11: set when a word encodes an immediate load.
pub const IMMEDIATE_BIT: u16 = 1 << (WORD_BITS - 1);

/// Bit 10: sign bit of the 11-bit immediate payload.
pub const IMMEDIATE_SIGN_BIT: u16 = 1 << (WORD_BITS - 2);

/// Mask selecting the immediate payload (bits 0-10).
pub const IMMEDIATE_VALUE_MASK: u16 = (1 << (WORD_BITS - 1)) - 1;

/// Bit position of the opcode field (bits 8-10).
pub const OPCODE_SHIFT: u32 = WORD_BITS - 4;

/// Mask for the opcode field once shifted down.
pub const OPCODE_MASK: u16 = 0x7;
