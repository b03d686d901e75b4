//! Cavo instruction-set simulator library.
//!
//! This crate simulates a minimalist 12-bit single-accumulator machine with the following:
//! 1. **ISA:** Immediate loads plus five operations (jump, subtract, nand, fetch, store) and a no-op.
//! 2. **Core:** The register file (`p`, `a`, `x`, `i`), 2048 words of memory, and the fetch-decode-execute step.
//! 3. **Tracing:** Pluggable sinks for the per-fetch and per-store event stream.
//! 4. **Simulation:** Program image loader, run driver, configuration, and statistics.

/// Common types and constants (words, addresses, errors).
pub mod common;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// Machine state and execution (registers, memory, step).
pub mod core;
/// Instruction set (opcodes, field extraction, decode).
pub mod isa;
/// Program loading and the run driver.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// Trace sinks for fetch and store events.
pub mod trace;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Machine state; construct with `Machine::new`.
pub use crate::core::machine::Machine;
/// Run driver; construct with `Simulator::new`.
pub use crate::sim::simulator::{RunOutcome, Simulator};
