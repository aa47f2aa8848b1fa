//! Combinational functional units.
//!
//! Each unit here is a pure function of its inputs, mirroring the
//! always-blocks of the hardware design evaluated once per cycle:
//! 1. **Control:** (opcode, funct3, funct7) → control bundle.
//! 2. **ALU:** (a, b, op) → result plus zero/negative/overflow flags.
//! 3. **Branch:** (rs1, rs2, funct3, branch, jump) → take-branch decision.
//! 4. **Immediate:** raw instruction bits → sign-extended immediate.

/// Arithmetic Logic Unit.
pub mod alu;
/// Branch/jump condition evaluator.
pub mod branch;
/// Opcode decode into control signals.
pub mod control;
/// Immediate extraction per instruction format.
pub mod imm;

pub use alu::{Alu, AluOutput};
pub use branch::BranchUnit;
pub use control::ControlUnit;
pub use imm::ImmediateGenerator;
