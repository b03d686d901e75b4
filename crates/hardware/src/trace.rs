//! Trace sinks.
//!
//! The execution engine reports two events: every fetch (with the program
//! counter before it advances) and every store. A [`TraceSink`] receives them.
//! Sinks are observers only and cannot influence execution. It provides:
//! 1. **Console Output:** The live `[p] ` / `mem[addr] ← value` trace.
//! 2. **Structured Logging:** Events forwarded to `tracing`.
//! 3. **Recording:** An in-memory event log for tests and embedders.

use std::io::{self, Write};

use crate::common::{Addr, Word};

/// Receiver for execution events.
pub trait TraceSink {
    /// Called after an instruction is fetched from `pc`, before `p` advances.
    fn on_fetch(&mut self, pc: Addr);

    /// Called after `value` has been written to `addr`.
    fn on_store(&mut self, addr: Addr, value: Word);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn on_fetch(&mut self, pc: Addr) {
        (**self).on_fetch(pc);
    }

    fn on_store(&mut self, addr: Addr, value: Word) {
        (**self).on_store(addr, value);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn on_fetch(&mut self, pc: Addr) {
        (**self).on_fetch(pc);
    }

    fn on_store(&mut self, addr: Addr, value: Word) {
        (**self).on_store(addr, value);
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn on_fetch(&mut self, _pc: Addr) {}

    fn on_store(&mut self, _addr: Addr, _value: Word) {}
}

/// Human-readable trace written to a stream.
///
/// Each fetch prints `[<p>] ` and flushes immediately, so a program stuck in
/// a loop still shows progress. Each store prints `mem[<addr>] ← <value>` on
/// its own line. Write errors are dropped.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for ConsoleSink<W> {
    fn on_fetch(&mut self, pc: Addr) {
        let _ = write!(self.out, "[{pc}] ");
        let _ = self.out.flush();
    }

    fn on_store(&mut self, addr: Addr, value: Word) {
        let _ = writeln!(self.out, "mem[{addr}] ← {value}");
    }
}

/// Sink that forwards events to `tracing`.
///
/// Fetches are emitted at `TRACE` level and stores at `DEBUG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_fetch(&mut self, pc: Addr) {
        tracing::trace!(pc = pc.val(), "fetch");
    }

    fn on_store(&mut self, addr: Addr, value: Word) {
        tracing::debug!(addr = addr.val(), value = value.val(), "store");
    }
}

/// A single recorded execution event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// An instruction was fetched from this address.
    Fetch(Addr),
    /// A word was stored.
    Store {
        /// Destination address.
        addr: Addr,
        /// Value written.
        value: Word,
    },
}

/// Sink that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<TraceEvent>,
}

impl RecordingSink {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded event, oldest first.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Returns the fetch addresses in order.
    pub fn fetches(&self) -> Vec<Addr> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Fetch(pc) => Some(*pc),
                TraceEvent::Store { .. } => None,
            })
            .collect()
    }

    /// Returns the `(addr, value)` pairs of every store in order.
    pub fn stores(&self) -> Vec<(Addr, Word)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Store { addr, value } => Some((*addr, *value)),
                TraceEvent::Fetch(_) => None,
            })
            .collect()
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecordingSink {
    fn on_fetch(&mut self, pc: Addr) {
        self.events.push(TraceEvent::Fetch(pc));
    }

    fn on_store(&mut self, addr: Addr, value: Word) {
        self.events.push(TraceEvent::Store { addr, value });
    }
}
