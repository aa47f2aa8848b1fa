//! Branch Unit.
//!
//! Evaluates the take-branch decision directly from the raw rs1/rs2 register
//! values, not from ALU flags. The control unit still routes SUB through the
//! ALU for BEQ/BNE; that result is dead signal routing carried over from the
//! hardware datapath and nothing observable depends on it.

use crate::isa::rv32i::funct3;

/// Branch/jump condition evaluator.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Resolves whether the next PC is the branch/jump target.
    ///
    /// The jump flag wins unconditionally, regardless of the branch flag or
    /// funct3. Otherwise, a conditional branch compares rs1 against rs2 per
    /// funct3; an unrecognized funct3 never takes the branch.
    ///
    /// # Arguments
    ///
    /// * `rs1`    - First source register value.
    /// * `rs2`    - Second source register value.
    /// * `funct3` - Branch condition selector.
    /// * `branch` - Control-unit branch flag.
    /// * `jump`   - Control-unit jump flag (JAL/JALR).
    pub fn resolve(rs1: u32, rs2: u32, funct3: u32, branch: bool, jump: bool) -> bool {
        if jump {
            return true;
        }
        if !branch {
            return false;
        }
        match funct3 {
            funct3::BEQ => rs1 == rs2,
            funct3::BNE => rs1 != rs2,
            funct3::BLT => (rs1 as i32) < (rs2 as i32),
            funct3::BGE => (rs1 as i32) >= (rs2 as i32),
            funct3::BLTU => rs1 < rs2,
            funct3::BGEU => rs1 >= rs2,
            _ => false,
        }
    }
}
