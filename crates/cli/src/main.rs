//! Single-cycle RV32I simulator CLI.
//!
//! This binary wraps the core in a minimal host harness. It performs:
//! 1. **Image loading:** Reads an ASCII-hex program image, or falls back to
//!    the built-in default program.
//! 2. **Run loop:** Asserts reset, then steps the processor up to the
//!    configured cycle bound.
//! 3. **Reporting:** Dumps the final PC and register file.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32sc_core::sim::loader;
use rv32sc_core::{Config, Processor};

#[derive(Parser, Debug)]
#[command(
    name = "rv32sc",
    author,
    version,
    about = "Single-cycle RV32I processor simulator",
    long_about = "Run an ASCII-hex program image (one 32-bit word per line, \
`//` comments, optional `@<hex>` word-index directives) on a behavioral \
single-cycle RV32I core, or run the built-in sample program when no image \
is given."
)]
struct Cli {
    /// Hex program image to load (default: built-in sample program).
    #[arg(short, long)]
    file: Option<String>,

    /// Number of cycles to run (capped by the config's max_cycles).
    #[arg(short, long)]
    cycles: Option<u64>,

    /// JSON configuration file (missing fields take defaults).
    #[arg(long)]
    config: Option<String>,

    /// Enable per-cycle trace output.
    #[arg(short, long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref().map(load_config) {
        Some(Ok(c)) => c,
        Some(Err(msg)) => {
            eprintln!("[!] {msg}");
            process::exit(1);
        }
        None => Config::default(),
    };
    config.trace |= cli.trace;

    init_tracing(config.trace);

    let mut processor = match cli.file.as_deref() {
        Some(path) => match loader::load_hex_file(path) {
            Ok(image) => Processor::with_program(&config, &image),
            Err(e) => {
                eprintln!("[!] {e}");
                process::exit(1);
            }
        },
        None => Processor::new(&config),
    };

    processor.reset(config.reset_cycles);

    let cycles = cli.cycles.unwrap_or(config.max_cycles).min(config.max_cycles);
    for _ in 0..cycles {
        let _ = processor.step();
    }

    processor.dump_state();
}

/// Reads and deserializes a JSON config file; missing fields take defaults.
fn load_config(path: &str) -> Result<Config, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{path}': {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config '{path}': {e}"))
}

/// Initializes the tracing subscriber; `--trace` forces per-cycle events.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
