//! Instruction Decode Properties.
//!
//! Verifies that `decode()` separates immediates from operations, ignores the
//! padding bits of operation words, and sign-extends the 11-bit immediate
//! payload into a 12-bit word.

use cavo_core::common::Word;
use cavo_core::isa::{
    Instruction, InstructionBits, Opcode, decode, encode_immediate, encode_op,
};
use proptest::prelude::*;
use rstest::rstest;

// ──────────────────────────────────────────────────────────
// Field extraction
// ──────────────────────────────────────────────────────────

#[test]
fn test_is_immediate_follows_bit_11() {
    assert!(Word::new(0x800).is_immediate());
    assert!(Word::new(0xFFF).is_immediate());
    assert!(!Word::new(0x7FF).is_immediate());
    assert!(!Word::ZERO.is_immediate());
}

#[rstest]
#[case(0x000, 0)]
#[case(0x100, 1)]
#[case(0x2FF, 2)]
#[case(0x3AB, 3)]
#[case(0x400, 4)]
#[case(0x501, 5)]
#[case(0x600, 6)]
#[case(0x7FF, 7)]
fn test_opcode_field(#[case] raw: u16, #[case] field: u8) {
    assert_eq!(Word::new(raw).opcode_field(), field);
}

#[rstest]
#[case(0x801, 0x001)]
#[case(0x800, 0x000)]
#[case(0xBFF, 0x3FF)]
#[case(0xC00, 0xC00)]
#[case(0xC02, 0xC02)]
#[case(0xFFF, 0xFFF)]
fn test_immediate_sign_extension(#[case] raw: u16, #[case] expected: u16) {
    assert_eq!(Word::new(raw).immediate().val(), expected);
}

#[test]
fn test_bit_10_set_immediate_is_negative() {
    // 0x802 + 0x400: payload 0x402, bit 10 set.
    let value = Word::new(0x802 + 0x400).immediate();
    assert!(value.is_negative());
    assert_eq!(value.val(), 0xC02);
    assert_eq!(value.as_signed(), -1022);
}

// ──────────────────────────────────────────────────────────
// decode()
// ──────────────────────────────────────────────────────────

#[test]
fn test_decode_immediate_one() {
    assert_eq!(decode(Word::new(0x801)), Instruction::Immediate(Word::new(1)));
}

#[test]
fn test_decode_ops() {
    for op in Opcode::ALL {
        assert_eq!(decode(encode_op(op)), Instruction::Op(op));
    }
}

#[test]
fn test_decode_invalid() {
    assert_eq!(decode(Word::new(0x600)), Instruction::Invalid(6));
    assert_eq!(decode(Word::new(0x7FF)), Instruction::Invalid(7));
}

#[test]
fn test_encode_immediate_wraps_to_11_bits() {
    assert_eq!(encode_immediate(-1).val(), 0xFFF);
    assert_eq!(encode_immediate(1023).val(), 0xBFF);
    assert_eq!(encode_immediate(-1024).val(), 0xC00);
    assert_eq!(encode_immediate(1024).val(), 0xC00);
}

#[test]
fn test_instruction_display() {
    assert_eq!(decode(encode_immediate(-5)).to_string(), "$-5");
    assert_eq!(decode(encode_op(Opcode::Store)).to_string(), "!");
    assert_eq!(decode(Word::new(0x700)).to_string(), "<invalid 7>");
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_padding_bits_are_ignored(field in 0u16..8, padding in 0u16..256) {
        let word = Word::new((field << 8) | padding);
        let bare = Word::new(field << 8);
        prop_assert_eq!(decode(word), decode(bare));
    }

    #[test]
    fn prop_immediate_matches_11_bit_sign_extension(payload in 0u16..0x800) {
        let decoded = decode(Word::new(0x800 | payload));
        let expected = ((payload << 5) as i16) >> 5;
        prop_assert_eq!(decoded, Instruction::Immediate(Word::from_signed(i64::from(expected))));
    }

    #[test]
    fn prop_immediate_roundtrips_in_range(value in -1024i16..=1023) {
        prop_assert_eq!(
            decode(encode_immediate(value)),
            Instruction::Immediate(Word::from_signed(i64::from(value)))
        );
    }

    #[test]
    fn prop_decode_is_total(raw in any::<u16>()) {
        let word = Word::new(raw);
        match decode(word) {
            Instruction::Immediate(v) => prop_assert!(word.is_immediate() && v.val() <= 0xFFF),
            Instruction::Op(op) => prop_assert!(op.field() < 6),
            Instruction::Invalid(f) => prop_assert!(f == 6 || f == 7),
        }
    }
}
