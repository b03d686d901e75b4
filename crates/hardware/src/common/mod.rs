//! Common types shared by every part of the simulator.
//!
//! This module provides the fundamental building blocks of the machine model:
//! 1. **Constants:** Word width, memory size, and instruction field layout.
//! 2. **Word Type:** The masked 12-bit value held by registers and memory.
//! 3. **Address Type:** The masked 11-bit memory index.
//! 4. **Error Handling:** The typed fatal outcomes of loading and execution.

/// Memory address type.
pub mod addr;

/// Machine-wide constants.
pub mod constants;

/// Error types for startup and execution failures.
pub mod error;

/// 12-bit word type.
pub mod word;

pub use addr::Addr;
pub use constants::{MEMORY_SIZE, WORD_MASK};
pub use error::{Result, SimError};
pub use word::Word;
