//! Configuration system for the processor model.
//!
//! This module defines the configuration structure used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (memory sizes, reset address).
//! 2. **Structure:** A flat `Config` covering the core and the host harness.
//!
//! Configuration is supplied via JSON from the CLI (`--config file.json`) or
//! use `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden in a JSON configuration file.
mod defaults {
    /// Reset program-counter address.
    ///
    /// The PC is forced to this address every cycle reset is asserted.
    pub const RESET_PC: u32 = 0;

    /// Instruction memory size in 32-bit words (1 KiB of text).
    ///
    /// Fetches whose word index falls at or beyond this bound return NOP.
    pub const IMEM_WORDS: usize = 256;

    /// Data memory size in bytes (1 KiB).
    ///
    /// Loads at or beyond this bound read zero; stores are dropped.
    pub const DMEM_BYTES: usize = 1024;

    /// Number of cycles reset is asserted before stepping begins.
    ///
    /// Matches the reference testbench, which holds reset for three cycles.
    pub const RESET_CYCLES: u32 = 3;

    /// Maximum cycles the harness will run before giving up.
    ///
    /// Guards against non-terminating test programs; the core itself has
    /// no timeout concept.
    pub const MAX_CYCLES: u64 = 10_000;
}

/// Simulator configuration.
///
/// Covers the core parameters (reset address, memory sizes) and the
/// harness parameters (reset duration, cycle guard, tracing).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Program-counter value applied while reset is asserted.
    #[serde(default = "Config::default_reset_pc")]
    pub reset_pc: u32,

    /// Instruction memory capacity in 32-bit words.
    #[serde(default = "Config::default_imem_words")]
    pub imem_words: usize,

    /// Data memory capacity in bytes.
    #[serde(default = "Config::default_dmem_bytes")]
    pub dmem_bytes: usize,

    /// Cycles to hold reset before the first step.
    #[serde(default = "Config::default_reset_cycles")]
    pub reset_cycles: u32,

    /// Maximum number of cycles the harness will step.
    #[serde(default = "Config::default_max_cycles")]
    pub max_cycles: u64,

    /// Enable per-cycle trace events (pc, instruction, ALU result).
    #[serde(default)]
    pub trace: bool,
}

impl Config {
    /// Returns the default reset program-counter address.
    fn default_reset_pc() -> u32 {
        defaults::RESET_PC
    }

    /// Returns the default instruction memory size in words.
    fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    /// Returns the default data memory size in bytes.
    fn default_dmem_bytes() -> usize {
        defaults::DMEM_BYTES
    }

    /// Returns the default reset assertion length in cycles.
    fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }

    /// Returns the default harness cycle guard.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_pc: defaults::RESET_PC,
            imem_words: defaults::IMEM_WORDS,
            dmem_bytes: defaults::DMEM_BYTES,
            reset_cycles: defaults::RESET_CYCLES,
            max_cycles: defaults::MAX_CYCLES,
            trace: false,
        }
    }
}
