//! Common utilities and types used throughout the processor model.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Canonical encodings and instruction field masks.
//! 2. **Error Handling:** The program-image loader error type.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for program-image loading.
pub mod error;

pub use constants::NOP;
pub use error::LoadError;
