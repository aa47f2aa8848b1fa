//! Processor core.
//!
//! This module composes the single-cycle datapath. It contains:
//! 1. **Orchestrator:** The [`processor`] state-transition function.
//! 2. **Units:** Pure combinational logic (control, ALU, branch, immediate).
//! 3. **Memory:** Register file, instruction memory, and data memory.
//! 4. **Signals:** The decoded control bundle and operand selectors.

/// Register file and memories.
pub mod mem;
/// Program counter register.
pub mod pc;
/// Top-level single-cycle orchestrator.
pub mod processor;
/// Control signals and operation selectors.
pub mod signals;
/// Combinational functional units.
pub mod units;
