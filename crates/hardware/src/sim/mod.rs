//! Program loading and the simulation driver.
//!
//! Provides the image loader and the [`Simulator`](simulator::Simulator)
//! that runs a machine against a trace sink.

pub mod loader;

/// Run driver: machine, sink, configuration, and statistics.
pub mod simulator;
