//! Architectural state of the machine.
//!
//! The machine exposes a single register file; memory lives in
//! [`crate::core::memory`].

/// Register file (`p`, `a`, `x`, `i`).
pub mod registers;

pub use registers::Registers;
