//! Simulation error definitions.
//!
//! This module defines the typed failure outcomes of the simulator. It provides:
//! 1. **Startup Failures:** The program image cannot be opened or read.
//! 2. **Execution Failures:** An instruction decodes to an opcode with no defined semantics.
//! 3. **Classification:** A helper distinguishing the two so the host can report them.
//!
//! None of these are recoverable; the host converts them into process
//! termination.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::Addr;
use super::word::Word;

/// Fatal simulator failures.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image file could not be opened.
    #[error("could not open program image '{}': {source}", .path.display())]
    ImageOpen {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying I/O cause.
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened image stream failed.
    #[error("could not read program image: {source}")]
    ImageRead {
        /// Underlying I/O cause.
        #[source]
        source: io::Error,
    },

    /// The fetched instruction carries opcode 6 or 7.
    #[error("invalid opcode {opcode} in word {word:#05x} at address {pc}")]
    InvalidOpcode {
        /// Address the instruction was fetched from.
        pc: Addr,
        /// The raw instruction word.
        word: Word,
        /// The 3-bit opcode field.
        opcode: u8,
    },
}

impl SimError {
    /// Returns `true` for failures raised before execution starts.
    pub const fn is_startup_failure(&self) -> bool {
        matches!(self, Self::ImageOpen { .. } | Self::ImageRead { .. })
    }
}

/// Result alias used throughout the simulator.
pub type Result<T> = std::result::Result<T, SimError>;
