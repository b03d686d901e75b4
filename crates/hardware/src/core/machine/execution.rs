//! Fetch-decode-execute step.
//!
//! This module implements one iteration of the machine's execution loop. It performs:
//! 1. **Fetch:** Reads `i := mem[p]`, reports `p` to the trace sink, and advances `p` modulo 2048.
//! 2. **Decode:** Splits `i` into an immediate load or an opcode.
//! 3. **Execute:** Applies the register transfer for the decoded operation.
//!
//! There is no halt state. A run ends only when an invalid opcode is decoded.

use super::Machine;
use crate::common::{Addr, Result, SimError, Word};
use crate::isa::{Instruction, Opcode, decode};
use crate::trace::TraceSink;

/// Summary of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: Addr,
    /// Raw instruction word.
    pub word: Word,
    /// Decoded instruction; never `Instruction::Invalid`.
    pub instruction: Instruction,
    /// `true` if a jump transferred control.
    pub jump_taken: bool,
}

impl Machine {
    /// Executes exactly one instruction.
    ///
    /// # Arguments
    ///
    /// * `sink` - Receives the fetch event and any store event.
    ///
    /// # Returns
    ///
    /// The retired instruction, or `SimError::InvalidOpcode` if the opcode
    /// field is 6 or 7. The fetch (and the advance of `p`) has already
    /// happened when the error is returned.
    pub fn step(&mut self, sink: &mut dyn TraceSink) -> Result<Retired> {
        let pc = self.regs.p;
        sink.on_fetch(pc);
        let word = self.mem.read(pc);
        self.regs.i = word;
        self.regs.p = pc.next();

        let instruction = decode(word);
        let jump_taken = match instruction {
            Instruction::Immediate(value) => {
                self.regs.x = self.regs.a;
                self.regs.a = value;
                false
            }
            Instruction::Op(op) => self.execute(op, sink),
            Instruction::Invalid(opcode) => {
                tracing::error!(pc = pc.val(), word = word.val(), opcode, "invalid opcode");
                return Err(SimError::InvalidOpcode { pc, word, opcode });
            }
        };

        Ok(Retired {
            pc,
            word,
            instruction,
            jump_taken,
        })
    }

    /// Applies the register transfer for `op`.
    ///
    /// Returns `true` only when a jump changes `p`.
    fn execute(&mut self, op: Opcode, sink: &mut dyn TraceSink) -> bool {
        let regs = &mut self.regs;
        match op {
            Opcode::Jump => {
                if regs.x.is_negative() {
                    regs.a = regs.x;
                    return false;
                }
                let target = Addr::from(regs.a);
                regs.a = regs.p.to_word();
                regs.p = target;
                return true;
            }
            Opcode::Subtract => regs.a = regs.x.wrapping_sub(regs.a),
            Opcode::Nand => regs.a = regs.a.nand(regs.x),
            Opcode::Fetch => regs.a = self.mem.read(Addr::from(regs.a)),
            Opcode::Store => {
                let addr = Addr::from(regs.a);
                let value = regs.x;
                self.store(addr, value, sink);
            }
            Opcode::NoOp => {}
        }
        false
    }

    /// Writes `value` to `addr` and notifies the sink.
    fn store(&mut self, addr: Addr, value: Word, sink: &mut dyn TraceSink) {
        self.mem.write(addr, value);
        sink.on_store(addr, value);
    }
}
