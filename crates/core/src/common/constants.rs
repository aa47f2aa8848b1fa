//! Global constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Instruction Constants:** The canonical NOP encoding and instruction size.
//! 2. **Shift Constants:** Masks for shift-amount extraction.

/// Canonical NOP encoding (`ADDI x0, x0, 0`).
///
/// Returned by instruction memory for any fetch outside the populated
/// image, so runaway programs execute no-ops instead of faulting.
pub const NOP: u32 = 0x0000_0013;

/// Size of a standard (32-bit) instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of low address bits discarded on instruction fetch (word alignment).
pub const WORD_ALIGN_SHIFT: u32 = 2;

/// Mask for the shift amount: RV32 shifts use only the low 5 bits of operand B.
pub const SHAMT_MASK: u32 = 0x1F;

/// Bit 5 of the funct7 field, selecting the alternate R-type operation
/// (SUB instead of ADD, SRA instead of SRL).
pub const FUNCT7_ALT_BIT: u32 = 0x20;
