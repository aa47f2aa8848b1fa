//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Defines the constant tables for the 32-bit base integer instructions.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Base integer instruction set opcodes.
pub mod opcodes;
