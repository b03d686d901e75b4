//! # Machine State Tests

use cavo_core::Machine;
use cavo_core::common::{Addr, Word};
use cavo_core::core::arch::Registers;
use pretty_assertions::assert_eq;

#[test]
fn test_new_machine_is_zeroed() {
    let m = Machine::new();
    assert_eq!(m.regs, Registers::default());
    assert_eq!(m.pc(), Addr::new(0));
    assert!(m.mem.as_slice().iter().all(|w| *w == Word::ZERO));
}

#[test]
fn test_load_sets_pc_and_fills_memory() {
    let mut m = Machine::new();
    let count = m.load(&[Word::new(5), Word::new(6)], Addr::new(1));
    assert_eq!(count, 2);
    assert_eq!(m.pc(), Addr::new(1));
    assert_eq!(m.mem.read(Addr::new(0)).val(), 5);
}

#[test]
fn test_reset_clears_everything() {
    let mut m = Machine::new();
    let _ = m.load(&[Word::new(9)], Addr::new(3));
    m.regs.a = Word::new(1);
    m.regs.x = Word::new(2);
    m.reset();
    assert_eq!(m, Machine::new());
}

#[test]
fn test_registers_display() {
    let regs = Registers {
        p: Addr::new(7),
        a: Word::MAX,
        x: Word::new(3),
        i: Word::new(0x801),
    };
    let text = regs.to_string();
    assert!(text.contains("p=7"));
    assert!(text.contains("a=0xfff"));
    assert!(text.contains("-1"));
    assert!(text.contains("i=0x801"));
}
