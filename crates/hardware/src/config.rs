//! Configuration system for the simulator.
//!
//! This module defines the settings that parameterize a run. It provides:
//! 1. **Defaults:** Start address 0, unbounded execution, both trace channels enabled.
//! 2. **Structures:** General run settings and trace channel selection.
//! 3. **Parsing:** JSON deserialization for embedders; the CLI always uses `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Program counter value at the start of a run.
    pub const START_PC: u16 = 0;

    /// Fetch events are traced unless disabled.
    pub const TRACE_FETCH: bool = true;

    /// Store events are traced unless disabled.
    pub const TRACE_STORE: bool = true;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cavo_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.general.max_steps, None);
/// assert!(config.trace.fetch);
/// ```
///
/// Deserializing from JSON, with omitted fields taking their defaults:
///
/// ```
/// use cavo_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_steps": 10000 },
///     "trace": { "fetch": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, Some(10000));
/// assert_eq!(config.general.start_pc, 0);
/// assert!(!config.trace.fetch);
/// assert!(config.trace.store);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Trace channel selection
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or has
    /// fields of the wrong type.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Initial program counter (masked to 11 bits when applied)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u16,

    /// Stop `Simulator::run` after this many steps; `None` runs until failure
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u16 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            max_steps: None,
        }
    }
}

/// Which execution events reach the trace sink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Report every fetch
    #[serde(default = "TraceConfig::default_fetch")]
    pub fetch: bool,

    /// Report every store
    #[serde(default = "TraceConfig::default_store")]
    pub store: bool,
}

impl TraceConfig {
    const fn default_fetch() -> bool {
        defaults::TRACE_FETCH
    }

    const fn default_store() -> bool {
        defaults::TRACE_STORE
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            fetch: defaults::TRACE_FETCH,
            store: defaults::TRACE_STORE,
        }
    }
}
