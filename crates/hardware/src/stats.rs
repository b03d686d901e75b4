//! Simulation statistics collection and reporting.
//!
//! This module counts what a run executed. It provides:
//! 1. **Step count:** Total instructions retired.
//! 2. **Instruction mix:** Counts per operation, with jumps split into taken and suppressed.
//! 3. **Reporting:** A `Display` summary printed by the CLI when a run ends.

use std::fmt;
use std::time::{Duration, Instant};

use crate::core::machine::Retired;
use crate::isa::{Instruction, Opcode};

/// Counters for a single run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Instructions retired.
    pub steps: u64,
    /// Immediate loads.
    pub immediates: u64,
    /// Jumps that transferred control.
    pub jumps_taken: u64,
    /// Jumps suppressed because `x` was negative.
    pub jumps_suppressed: u64,
    /// Subtract instructions.
    pub subtracts: u64,
    /// Nand instructions.
    pub nands: u64,
    /// Fetch (memory load) instructions.
    pub fetches: u64,
    /// Store instructions.
    pub stores: u64,
    /// No-op instructions.
    pub noops: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            immediates: 0,
            jumps_taken: 0,
            jumps_suppressed: 0,
            subtracts: 0,
            nands: 0,
            fetches: 0,
            stores: 0,
            noops: 0,
        }
    }
}

impl SimStats {
    /// Creates zeroed counters and starts the wall clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one retired instruction.
    pub const fn record(&mut self, retired: &Retired) {
        self.steps += 1;
        match retired.instruction {
            Instruction::Immediate(_) => self.immediates += 1,
            Instruction::Op(Opcode::Jump) if retired.jump_taken => self.jumps_taken += 1,
            Instruction::Op(Opcode::Jump) => self.jumps_suppressed += 1,
            Instruction::Op(Opcode::Subtract) => self.subtracts += 1,
            Instruction::Op(Opcode::Nand) => self.nands += 1,
            Instruction::Op(Opcode::Fetch) => self.fetches += 1,
            Instruction::Op(Opcode::Store) => self.stores += 1,
            Instruction::Op(Opcode::NoOp) => self.noops += 1,
            Instruction::Invalid(_) => {}
        }
    }

    /// Wall-clock time since the counters were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints the summary to stderr.
    pub fn print(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed().as_secs_f64();
        writeln!(f, "==== Simulation statistics ====")?;
        writeln!(f, "  steps              {:>12}", self.steps)?;
        writeln!(f, "  wall time (s)      {secs:>12.3}")?;
        writeln!(f, "  immediate loads    {:>12}", self.immediates)?;
        writeln!(f, "  jumps taken        {:>12}", self.jumps_taken)?;
        writeln!(f, "  jumps suppressed   {:>12}", self.jumps_suppressed)?;
        writeln!(f, "  subtracts          {:>12}", self.subtracts)?;
        writeln!(f, "  nands              {:>12}", self.nands)?;
        writeln!(f, "  fetches            {:>12}", self.fetches)?;
        writeln!(f, "  stores             {:>12}", self.stores)?;
        write!(f, "  no-ops             {:>12}", self.noops)
    }
}
