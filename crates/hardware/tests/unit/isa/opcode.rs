//! Opcode table tests.

use cavo_core::isa::Opcode;
use rstest::rstest;

#[rstest]
#[case(0, Opcode::Jump)]
#[case(1, Opcode::Subtract)]
#[case(2, Opcode::Nand)]
#[case(3, Opcode::Fetch)]
#[case(4, Opcode::Store)]
#[case(5, Opcode::NoOp)]
fn test_from_field_assigned(#[case] field: u8, #[case] expected: Opcode) {
    assert_eq!(Opcode::from_field(field), Some(expected));
    assert_eq!(expected.field(), field);
}

#[rstest]
#[case(6)]
#[case(7)]
#[case(8)]
#[case(255)]
fn test_from_field_unassigned(#[case] field: u8) {
    assert_eq!(Opcode::from_field(field), None);
}

#[test]
fn test_all_is_in_field_order() {
    for (i, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(usize::from(op.field()), i);
    }
}

#[test]
fn test_mnemonics() {
    let mnemonics: Vec<_> = Opcode::ALL.iter().map(|op| op.to_string()).collect();
    assert_eq!(mnemonics, [".", "-", "|", "@", "!", "nop"]);
}
