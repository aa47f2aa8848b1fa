//! RISC-V RV32I instruction set definitions.
//!
//! This module contains everything needed to pick an instruction apart:
//! 1. **Field Extraction:** The [`InstructionBits`] trait over raw `u32` encodings.
//! 2. **Opcode Tables:** Named constants for RV32I major opcodes and funct3 codes.

/// Instruction field extraction (opcode, rd, rs1, rs2, funct3, funct7).
pub mod instruction;

/// RV32I opcode and function-code constant tables.
pub mod rv32i;

pub use instruction::InstructionBits;
