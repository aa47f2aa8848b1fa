//! Single-cycle RV32I processor model.
//!
//! This crate implements a behavioral model of a non-pipelined, single-cycle
//! RISC-V RV32I core with the following:
//! 1. **Core:** Processor state-transition function, program counter, and register file.
//! 2. **Units:** Control unit, ALU, branch unit, and immediate generator — all pure functions.
//! 3. **Memory:** Word-granular instruction memory and byte-addressable little-endian data memory.
//! 4. **ISA:** RV32I field extraction plus opcode and funct3 constant tables.
//! 5. **Simulation:** ASCII-hex program loader and per-cycle debug snapshots.
//!
//! Every clock cycle the processor fetches one instruction, decodes it,
//! executes it, accesses data memory, and writes back — all within the same
//! `step` call. There is no pipelining, hazard detection, or speculation:
//! the apparent hardware parallelism collapses to a pure function of the
//! prior architectural state, evaluated in dependency order.

/// Common types and constants (encodings, field masks, loader errors).
pub mod common;
/// Simulator configuration (defaults and the serde-backed `Config`).
pub mod config;
/// Processor core (orchestrator, PC, functional units, memories).
pub mod core;
/// Instruction set (field extraction, RV32I opcode and funct3 tables).
pub mod isa;
/// Program-image loader.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main processor type; owns the PC, register file, and both memories.
pub use crate::core::processor::{Processor, Snapshot};
