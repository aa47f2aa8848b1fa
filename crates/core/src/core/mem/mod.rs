//! Architectural storage.
//!
//! The stateful components of the core, each exclusively owned by one
//! [`Processor`](crate::core::processor::Processor):
//! 1. **Register File:** 32×32-bit with `x0` hardwired to zero.
//! 2. **Instruction Memory:** read-only word store, NOP beyond the image.
//! 3. **Data Memory:** byte-addressable little-endian store with
//!    width- and sign-aware access.

/// Byte-addressable data memory.
pub mod dmem;
/// Word-granular instruction memory.
pub mod imem;
/// General-purpose register file.
pub mod regfile;

pub use dmem::DataMemory;
pub use imem::InstructionMemory;
pub use regfile::RegisterFile;
