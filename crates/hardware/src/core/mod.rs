//! Machine implementation.
//!
//! This module contains the architectural state, memory, and the execution
//! step that ties them together.

/// Architectural registers.
pub mod arch;

/// Machine state and the fetch-decode-execute step.
pub mod machine;

/// Word-addressed main memory.
pub mod memory;

pub use self::machine::Machine;
