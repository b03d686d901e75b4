//! # Program Tests
//!
//! Short hand-assembled programs exercising the calling convention, the
//! conditional jump, and a store/fetch loop.

use cavo_core::common::{Addr, SimError, Word};
use cavo_core::isa::Opcode;

use crate::common::harness::{TestContext, imm, op};

fn fetch_trace(tc: &TestContext) -> Vec<u16> {
    tc.sink.fetches().iter().map(|a| a.val()).collect()
}

#[test]
fn test_call_and_return() {
    let mut tc = TestContext::new()
        .load_program(&[imm(10), op(Opcode::Jump), op(Opcode::NoOp)])
        .poke(10, op(Opcode::Jump).val());
    tc.run(4).unwrap();
    assert_eq!(fetch_trace(&tc), vec![0, 1, 10, 2]);
    // The return jump links the address after the subroutine's jump.
    assert_eq!(tc.a(), 11);
    assert_eq!(tc.p(), 3);
}

#[test]
fn test_negative_x_falls_through() {
    let program = [imm(-1), imm(20), op(Opcode::Jump), op(Opcode::NoOp)];
    let mut tc = TestContext::new().load_program(&program);
    tc.run(4).unwrap();
    assert_eq!(fetch_trace(&tc), vec![0, 1, 2, 3]);
    assert_eq!(tc.a(), 0xFFF);
}

#[test]
fn test_countdown_loop_stores_until_negative() {
    const COUNTER: i16 = 100;
    let program = [
        imm(COUNTER),
        op(Opcode::Fetch),
        imm(1),
        op(Opcode::Subtract),
        imm(COUNTER),
        op(Opcode::Store),
        op(Opcode::Fetch),
        imm(0),
        op(Opcode::Jump),
        Word::new(0x700),
    ];
    let mut tc = TestContext::new()
        .load_program(&program)
        .poke(COUNTER as u16, 3);

    let err = tc.run(1000).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidOpcode { pc, .. } if pc == Addr::new(9)
    ));

    let values: Vec<u16> = tc.sink.stores().iter().map(|(_, v)| v.val()).collect();
    assert_eq!(values, vec![2, 1, 0, 0xFFF]);
    assert!(
        tc.sink
            .stores()
            .iter()
            .all(|(addr, _)| *addr == Addr::new(COUNTER as u16))
    );
    assert_eq!(tc.mem(COUNTER as u16), 0xFFF);
    assert_eq!(tc.a(), 0xFFF);
}
