//! Simulator: owns the machine, its trace sink, and the run statistics.
//!
//! The machine itself never decides when to stop. `Simulator::run` loops
//! until a step fails or the configured step limit is reached, and
//! `Simulator::step` lets a host drive the machine one instruction at a time.

use std::path::Path;

use crate::common::{Addr, Result, Word};
use crate::config::{Config, TraceConfig};
use crate::core::machine::{Machine, Retired};
use crate::sim::loader;
use crate::stats::SimStats;
use crate::trace::TraceSink;

/// How a bounded run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// `general.max_steps` instructions were executed.
    StepLimit {
        /// Steps executed by this call to `run`.
        steps: u64,
    },
}

/// Top-level simulator: machine state + trace sink + statistics.
#[derive(Debug)]
pub struct Simulator<S: TraceSink> {
    /// Machine state (registers and memory).
    pub machine: Machine,
    /// Statistics for the current run.
    pub stats: SimStats,
    config: Config,
    sink: S,
}

impl<S: TraceSink> Simulator<S> {
    /// Creates a simulator with a zeroed machine.
    pub fn new(config: Config, sink: S) -> Self {
        let mut machine = Machine::new();
        machine.regs.p = Addr::new(config.general.start_pc);
        Self {
            machine,
            stats: SimStats::new(),
            config,
            sink,
        }
    }

    /// Loads the image at `path` and resets `p` to the configured start.
    ///
    /// # Errors
    ///
    /// Any startup failure from [`loader::load_file`].
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let start = Addr::new(self.config.general.start_pc);
        loader::load_file(path, &mut self.machine, start)
    }

    /// Loads already parsed words and resets `p` to the configured start.
    pub fn load_words(&mut self, words: &[Word]) -> usize {
        let start = Addr::new(self.config.general.start_pc);
        loader::load_image(&mut self.machine, words, start)
    }

    /// Executes one instruction and updates statistics.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidOpcode` if the fetched word has opcode 6 or 7.
    pub fn step(&mut self) -> Result<Retired> {
        let mut sink = Filtered {
            inner: &mut self.sink,
            trace: &self.config.trace,
        };
        let retired = self.machine.step(&mut sink)?;
        self.stats.record(&retired);
        Ok(retired)
    }

    /// Runs until failure, or until `general.max_steps` steps when set.
    ///
    /// Without a step limit this only returns with an error.
    ///
    /// # Errors
    ///
    /// The first failing step's error.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let limit = self.config.general.max_steps;
        tracing::debug!(pc = self.machine.pc().val(), ?limit, "run start");
        let mut steps = 0u64;
        loop {
            if limit.is_some_and(|max| steps >= max) {
                tracing::debug!(steps, "step limit reached");
                return Ok(RunOutcome::StepLimit { steps });
            }
            let _ = self.step()?;
            steps += 1;
        }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the trace sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the trace sink mutably.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the simulator and returns the trace sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Forwards only the event kinds enabled in the trace configuration.
struct Filtered<'a, S: TraceSink> {
    inner: &'a mut S,
    trace: &'a TraceConfig,
}

impl<S: TraceSink> TraceSink for Filtered<'_, S> {
    fn on_fetch(&mut self, pc: Addr) {
        if self.trace.fetch {
            self.inner.on_fetch(pc);
        }
    }

    fn on_store(&mut self, addr: Addr, value: Word) {
        if self.trace.store {
            self.inner.on_store(addr, value);
        }
    }
}
