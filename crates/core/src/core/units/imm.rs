//! Immediate Generator.
//!
//! Extracts and sign-extends the immediate encoded in an instruction word.
//! The format (I, S, B, U, J) is selected solely by opcode; an unrecognized
//! opcode yields immediate 0. Sign extension always replicates inst[31],
//! performed here with arithmetic shifts on the raw encoding.

use crate::isa::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Pure immediate decoder.
#[derive(Debug)]
pub struct ImmediateGenerator;

impl ImmediateGenerator {
    /// Generates the sign-extended 32-bit immediate for `inst`.
    ///
    /// Produced fresh each cycle and never stored. Bit assembly per format:
    ///
    /// | Format          | Assembly (MSB → LSB)                                    |
    /// |-----------------|---------------------------------------------------------|
    /// | I (OpImm/Load/JALR) | sext(inst[31]) ++ inst[31:20]                       |
    /// | S (Store)       | sext(inst[31]) ++ inst[31:25] ++ inst[11:7]             |
    /// | B (Branch)      | sext(inst[31]) ++ inst[7] ++ inst[30:25] ++ inst[11:8] ++ 0 |
    /// | U (LUI/AUIPC)   | inst[31:12] ++ 12 zero bits                             |
    /// | J (JAL)         | sext(inst[31]) ++ inst[19:12] ++ inst[20] ++ inst[30:21] ++ 0 |
    pub fn generate(inst: u32) -> u32 {
        match inst.opcode() {
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => {
                ((inst as i32) >> 20) as u32
            }
            opcodes::OP_STORE => {
                // imm[11:5] = inst[31:25], imm[4:0] = inst[11:7]
                ((((inst & 0xFE00_0000) as i32) >> 20) as u32) | ((inst >> 7) & 0x1F)
            }
            opcodes::OP_BRANCH => {
                // imm[12] = inst[31], imm[11] = inst[7],
                // imm[10:5] = inst[30:25], imm[4:1] = inst[11:8], imm[0] = 0
                ((((inst & 0x8000_0000) as i32) >> 19) as u32)
                    | ((inst & 0x80) << 4)
                    | ((inst >> 20) & 0x7E0)
                    | ((inst >> 7) & 0x1E)
            }
            opcodes::OP_LUI | opcodes::OP_AUIPC => inst & 0xFFFF_F000,
            opcodes::OP_JAL => {
                // imm[20] = inst[31], imm[19:12] = inst[19:12],
                // imm[11] = inst[20], imm[10:1] = inst[30:21], imm[0] = 0
                ((((inst & 0x8000_0000) as i32) >> 11) as u32)
                    | (inst & 0xF_F000)
                    | ((inst >> 9) & 0x800)
                    | ((inst >> 20) & 0x7FE)
            }
            _ => 0,
        }
    }
}
