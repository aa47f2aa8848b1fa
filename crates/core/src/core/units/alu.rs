//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the execute step. It
//! handles arithmetic, logical operations, comparisons, and shifts on 32-bit
//! two's-complement operands, and reports condition flags alongside the
//! result. Flags are recomputed on every operation, even when nothing
//! downstream consumes them, so identical inputs always produce bit-identical
//! outputs.

use crate::common::constants::SHAMT_MASK;
use crate::core::signals::AluOp;

/// Result bundle of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// The 32-bit operation result.
    pub result: u32,
    /// Set when the result is zero.
    pub zero: bool,
    /// Signed-overflow flag; meaningful for Add and Sub, false otherwise.
    pub overflow: bool,
    /// Sign bit (bit 31) of the result.
    pub negative: bool,
}

/// Arithmetic Logic Unit for RV32I integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (low 5 bits used as the shift amount).
    ///
    /// # Returns
    ///
    /// The result together with the zero, overflow, and negative flags.
    /// Overflow is detected with two's-complement rules: for Add, both
    /// operands share a sign bit and the result's sign differs; for Sub,
    /// the operands' signs differ and the result's sign differs from `a`.
    pub fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
        let (result, overflow) = match op {
            AluOp::Add => {
                let result = a.wrapping_add(b);
                let overflow = (!(a ^ b) & (a ^ result)) >> 31 == 1;
                (result, overflow)
            }
            AluOp::Sub => {
                let result = a.wrapping_sub(b);
                let overflow = ((a ^ b) & (a ^ result)) >> 31 == 1;
                (result, overflow)
            }
            AluOp::And => (a & b, false),
            AluOp::Or => (a | b, false),
            AluOp::Xor => (a ^ b, false),
            AluOp::Slt => (((a as i32) < (b as i32)) as u32, false),
            AluOp::Sltu => ((a < b) as u32, false),
            AluOp::Sll => (a << (b & SHAMT_MASK), false),
            AluOp::Srl => (a >> (b & SHAMT_MASK), false),
            AluOp::Sra => (((a as i32) >> (b & SHAMT_MASK)) as u32, false),
        };

        AluOutput {
            result,
            zero: result == 0,
            overflow,
            negative: result >> 31 == 1,
        }
    }
}
