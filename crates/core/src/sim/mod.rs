//! Simulation-side collaborators of the core.
//!
//! Hosts the pieces that sit between the outside world and the processor:
//! currently the ASCII-hex program-image loader.

/// Program-image parsing and file loading.
pub mod loader;

pub use loader::{load_hex_file, parse_hex};
