//! Control signals and operation types.
//!
//! This module defines the signals that control instruction execution:
//! 1. **Operation Classification:** The ALU operation selector.
//! 2. **Operand Selection:** Sources for the ALU inputs (registers, immediate, PC).
//! 3. **Write-back Selection:** Which computed value reaches the register file.
//!
//! The operand and write-back selectors model four-way hardware multiplexers
//! used for three-way selections: the fourth arm always yields zero and is
//! unreachable through [`ControlUnit`](crate::core::units::control::ControlUnit)
//! decode, but it is kept as an explicit variant so the mux semantics stay
//! complete.

/// ALU operation types for the RV32I integer instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (also the inert default).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,
}

/// Source selector for the ALU operand pair.
///
/// Operand A is rs1 for both [`Reg`](AluSrc::Reg) and [`Imm`](AluSrc::Imm);
/// only [`Pc`](AluSrc::Pc) substitutes the program counter. Operand B is rs2
/// for [`Reg`](AluSrc::Reg) and the immediate otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluSrc {
    /// A = rs1, B = rs2.
    #[default]
    Reg,

    /// A = rs1, B = immediate.
    Imm,

    /// A = PC, B = immediate (AUIPC).
    Pc,

    /// A = 0, B = 0. Unused mux arm; never emitted by the control unit.
    Zero,
}

/// Source selector for the register-file write-back value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritebackSrc {
    /// Write the ALU result.
    #[default]
    Alu,

    /// Write the data-memory load value.
    Mem,

    /// Write the link address PC + 4 (JAL/JALR).
    PcPlus4,

    /// Write zero. Unused mux arm; never emitted by the control unit.
    Zero,
}

/// Decoded micro-op for the current instruction.
///
/// A pure function of (opcode, funct3, funct7); an unknown opcode maps to
/// the all-false/Add default rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Commit a register-file write this cycle.
    pub reg_write: bool,

    /// Read data memory at the ALU result.
    pub mem_read: bool,

    /// Write data memory at the ALU result.
    pub mem_write: bool,

    /// The instruction is a conditional branch.
    pub branch: bool,

    /// The instruction is an unconditional jump (JAL/JALR).
    pub jump: bool,

    /// ALU operand selection.
    pub alu_src: AluSrc,

    /// ALU operation.
    pub alu_op: AluOp,

    /// Register write-back value selection.
    pub write_src: WritebackSrc,
}
