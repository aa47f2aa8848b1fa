//! Control Unit.
//!
//! Decodes (opcode, funct3, funct7) into the control-signal bundle driving
//! the datapath for one cycle. The decode is a pure function with no error
//! path: an unknown opcode produces the all-false/Add default bundle, so an
//! illegal instruction executes as a no-effect instruction rather than
//! trapping.

use crate::common::constants::FUNCT7_ALT_BIT;
use crate::core::signals::{AluOp, AluSrc, ControlSignals, WritebackSrc};
use crate::isa::rv32i::{funct3, opcodes};

/// Opcode decoder producing the per-instruction control bundle.
#[derive(Debug)]
pub struct ControlUnit;

impl ControlUnit {
    /// Decodes one instruction's control signals.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Major opcode (bits 6-0).
    /// * `funct3` - Minor opcode (bits 14-12).
    /// * `funct7` - R-type function code (bits 31-25); only bit 5 matters.
    pub fn decode(opcode: u32, funct3: u32, funct7: u32) -> ControlSignals {
        let mut c = ControlSignals::default();

        match opcode {
            opcodes::OP_REG => {
                c.reg_write = true;
                c.alu_src = AluSrc::Reg;
                c.alu_op = Self::alu_funct(funct3, funct7);
                c.write_src = WritebackSrc::Alu;
            }
            opcodes::OP_IMM => {
                c.reg_write = true;
                c.alu_src = AluSrc::Imm;
                // funct7 bit 5 only disambiguates SRLI/SRAI here; for every
                // other funct3 those bits belong to the immediate, so ADDI
                // must never turn into SUB.
                c.alu_op = if funct3 == funct3::SRL_SRA {
                    Self::alu_funct(funct3, funct7)
                } else {
                    Self::alu_funct(funct3, 0)
                };
                c.write_src = WritebackSrc::Alu;
            }
            opcodes::OP_LOAD => {
                c.reg_write = true;
                c.mem_read = true;
                c.alu_src = AluSrc::Imm;
                c.alu_op = AluOp::Add;
                c.write_src = WritebackSrc::Mem;
            }
            opcodes::OP_STORE => {
                c.mem_write = true;
                c.alu_src = AluSrc::Imm;
                c.alu_op = AluOp::Add;
            }
            opcodes::OP_BRANCH => {
                c.branch = true;
                c.alu_src = AluSrc::Reg;
                // BEQ/BNE route SUB through the ALU even though the branch
                // unit decides from raw register equality; the SUB result is
                // dead routing preserved from the datapath.
                c.alu_op = match funct3 {
                    funct3::BLT | funct3::BGE => AluOp::Slt,
                    funct3::BLTU | funct3::BGEU => AluOp::Sltu,
                    _ => AluOp::Sub,
                };
            }
            opcodes::OP_LUI => {
                // Pass the U immediate through the ALU adder (rs1 slot unused).
                c.reg_write = true;
                c.alu_src = AluSrc::Imm;
                c.alu_op = AluOp::Add;
                c.write_src = WritebackSrc::Alu;
            }
            opcodes::OP_AUIPC => {
                c.reg_write = true;
                c.alu_src = AluSrc::Pc;
                c.alu_op = AluOp::Add;
                c.write_src = WritebackSrc::Alu;
            }
            opcodes::OP_JAL => {
                // Target comes from the dedicated adder, not the ALU.
                c.reg_write = true;
                c.jump = true;
                c.write_src = WritebackSrc::PcPlus4;
            }
            opcodes::OP_JALR => {
                c.reg_write = true;
                c.jump = true;
                c.alu_src = AluSrc::Imm;
                c.alu_op = AluOp::Add;
                c.write_src = WritebackSrc::PcPlus4;
            }
            // Inert default: all flags false, Reg/Add/Alu. Not an error.
            _ => {}
        }

        c
    }

    /// Maps funct3/funct7 to the shared R-type and I-type ALU operation.
    ///
    /// funct3 000 selects SUB when funct7 bit 5 is set, else ADD;
    /// funct3 101 selects SRA when funct7 bit 5 is set, else SRL;
    /// the remaining codes map one-to-one.
    fn alu_funct(funct3: u32, funct7: u32) -> AluOp {
        match funct3 {
            funct3::ADD_SUB => {
                if funct7 & FUNCT7_ALT_BIT != 0 {
                    AluOp::Sub
                } else {
                    AluOp::Add
                }
            }
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA => {
                if funct7 & FUNCT7_ALT_BIT != 0 {
                    AluOp::Sra
                } else {
                    AluOp::Srl
                }
            }
            funct3::OR => AluOp::Or,
            _ => AluOp::And,
        }
    }
}
