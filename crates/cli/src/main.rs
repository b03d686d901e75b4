//! Cavo simulator CLI.
//!
//! Loads a program image (one decimal integer per line) into memory at
//! address 0 and runs it from `p = 0`, printing the live fetch/store trace on
//! stdout. The machine has no halt instruction: a run ends when the process
//! is terminated or when an invalid opcode is reached.
//!
//! Diagnostics go to stderr; set `RUST_LOG` (e.g. `RUST_LOG=debug`) to see
//! loader and engine logs.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cavo_core::trace::ConsoleSink;
use cavo_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "cavo",
    author,
    version,
    about = "Cavo 12-bit accumulator machine simulator",
    long_about = "Run a Cavo program image.\n\nThe image is a text file of decimal integers, one per line, at most 2048 of them.\n\nExample:\n  cavo program.txt"
)]
struct Cli {
    /// Program image to load at address 0.
    image: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let mut sim = Simulator::new(Config::default(), ConsoleSink::stdout());
    tracing::info!(image = %cli.image.display(), "starting");

    if let Err(e) = sim.load_file(&cli.image) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }

    // The default config has no step limit, so a run only ends in an error.
    if let Err(e) = sim.run() {
        eprintln!("\n[!] FATAL: {e}");
        sim.machine.dump_state();
        sim.stats.print();
        process::exit(1);
    }
}

/// Installs the stderr log subscriber, honouring `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
