//! ALU Operation Tests.
//!
//! Deterministic edge-case tests for every RV32I ALU operation, plus
//! property tests checking flag consistency for arbitrary operand pairs.
//! Every magic number in a test vector is traceable to an architectural
//! boundary condition.

use proptest::prelude::*;
use rv32sc_core::core::signals::AluOp;
use rv32sc_core::core::units::alu::{Alu, AluOutput};

const ZERO: u32 = 0;
const NEG1: u32 = u32::MAX; // -1 as two's complement
const I32_MAX: u32 = i32::MAX as u32; // 0x7FFF_FFFF
const I32_MIN: u32 = i32::MIN as u32; // 0x8000_0000

/// Thin wrapper to keep test lines short.
fn alu(op: AluOp, a: u32, b: u32) -> AluOutput {
    Alu::execute(op, a, b)
}

// ── ADD ──────────────────────────────────────────────────────────────────────

#[test]
fn add_zero_plus_zero_sets_zero_flag() {
    let out = alu(AluOp::Add, ZERO, ZERO);
    assert_eq!(out.result, 0);
    assert!(out.zero);
    assert!(!out.overflow);
    assert!(!out.negative);
}

#[test]
fn add_basic() {
    assert_eq!(alu(AluOp::Add, 100, 200).result, 300);
}

#[test]
fn add_wraps_without_error() {
    let out = alu(AluOp::Add, u32::MAX, 1);
    assert_eq!(out.result, 0);
    assert!(out.zero);
}

#[test]
fn add_positive_overflow() {
    // MAX + 1 flips the sign: overflow and negative both set.
    let out = alu(AluOp::Add, I32_MAX, 1);
    assert_eq!(out.result, I32_MIN);
    assert!(out.overflow);
    assert!(out.negative);
}

#[test]
fn add_negative_overflow() {
    // MIN + MIN wraps to 0 with overflow.
    let out = alu(AluOp::Add, I32_MIN, I32_MIN);
    assert_eq!(out.result, 0);
    assert!(out.overflow);
    assert!(out.zero);
}

#[test]
fn add_mixed_signs_never_overflows() {
    let out = alu(AluOp::Add, I32_MAX, NEG1);
    assert_eq!(out.result, I32_MAX - 1);
    assert!(!out.overflow);
}

// ── SUB ──────────────────────────────────────────────────────────────────────

#[test]
fn sub_basic() {
    assert_eq!(alu(AluOp::Sub, 300, 200).result, 100);
}

#[test]
fn sub_to_negative() {
    let out = alu(AluOp::Sub, 3, 5);
    assert_eq!(out.result, -2i32 as u32);
    assert!(out.negative);
    assert!(!out.overflow);
}

#[test]
fn sub_equal_operands_sets_zero_flag() {
    let out = alu(AluOp::Sub, 0xDEAD_BEEF, 0xDEAD_BEEF);
    assert_eq!(out.result, 0);
    assert!(out.zero);
}

#[test]
fn sub_overflow_min_minus_one() {
    // MIN - 1 wraps to MAX: signs differ, result sign differs from a.
    let out = alu(AluOp::Sub, I32_MIN, 1);
    assert_eq!(out.result, I32_MAX);
    assert!(out.overflow);
    assert!(!out.negative);
}

#[test]
fn sub_overflow_max_minus_neg1() {
    let out = alu(AluOp::Sub, I32_MAX, NEG1);
    assert_eq!(out.result, I32_MIN);
    assert!(out.overflow);
    assert!(out.negative);
}

#[test]
fn sub_same_sign_never_overflows() {
    assert!(!alu(AluOp::Sub, I32_MIN, I32_MIN).overflow);
    assert!(!alu(AluOp::Sub, I32_MAX, I32_MAX).overflow);
}

// ── Bitwise ──────────────────────────────────────────────────────────────────

#[test]
fn and_or_xor() {
    assert_eq!(alu(AluOp::And, 0b1100, 0b1010).result, 0b1000);
    assert_eq!(alu(AluOp::Or, 0b1100, 0b1010).result, 0b1110);
    assert_eq!(alu(AluOp::Xor, 0b1100, 0b1010).result, 0b0110);
}

#[test]
fn bitwise_never_overflows() {
    assert!(!alu(AluOp::And, u32::MAX, u32::MAX).overflow);
    assert!(!alu(AluOp::Or, I32_MIN, I32_MIN).overflow);
    assert!(!alu(AluOp::Xor, I32_MIN, I32_MAX).overflow);
}

// ── SLT / SLTU ───────────────────────────────────────────────────────────────

#[test]
fn slt_signed_comparison() {
    assert_eq!(alu(AluOp::Slt, NEG1, 1).result, 1); // -1 < 1
    assert_eq!(alu(AluOp::Slt, 1, NEG1).result, 0);
    assert_eq!(alu(AluOp::Slt, I32_MIN, I32_MAX).result, 1);
    assert_eq!(alu(AluOp::Slt, 5, 5).result, 0);
}

#[test]
fn sltu_unsigned_comparison() {
    assert_eq!(alu(AluOp::Sltu, NEG1, 1).result, 0); // 0xFFFF_FFFF > 1 unsigned
    assert_eq!(alu(AluOp::Sltu, 1, NEG1).result, 1);
    assert_eq!(alu(AluOp::Sltu, 0, 0).result, 0);
}

#[test]
fn slt_sltu_on_min_equal_operands() {
    // a = b = 0x80000000: neither signed nor unsigned strict-less holds.
    assert_eq!(alu(AluOp::Slt, I32_MIN, I32_MIN).result, 0);
    assert_eq!(alu(AluOp::Sltu, I32_MIN, I32_MIN).result, 0);
}

// ── Shifts ───────────────────────────────────────────────────────────────────

#[test]
fn sll_basic_and_masked_amount() {
    assert_eq!(alu(AluOp::Sll, 0x1, 4).result, 0x10);
    // Only the low 5 bits of b are the shift amount: 33 & 0x1F == 1.
    assert_eq!(alu(AluOp::Sll, 0x1, 33).result, 0x2);
}

#[test]
fn srl_is_logical() {
    assert_eq!(alu(AluOp::Srl, I32_MIN, 31).result, 1);
    assert_eq!(alu(AluOp::Srl, NEG1, 4).result, 0x0FFF_FFFF);
}

#[test]
fn sra_preserves_sign() {
    assert_eq!(alu(AluOp::Sra, I32_MIN, 31).result, NEG1);
    assert_eq!(alu(AluOp::Sra, -16i32 as u32, 2).result, -4i32 as u32);
    assert_eq!(alu(AluOp::Sra, 16, 2).result, 4);
}

#[test]
fn shift_by_zero_is_identity() {
    for op in [AluOp::Sll, AluOp::Srl, AluOp::Sra] {
        assert_eq!(alu(op, 0xCAFE_F00D, 0).result, 0xCAFE_F00D);
    }
}

// ── Flag properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn add_matches_wrapping_semantics(a: u32, b: u32) {
        prop_assert_eq!(alu(AluOp::Add, a, b).result, a.wrapping_add(b));
    }

    #[test]
    fn sub_matches_wrapping_semantics(a: u32, b: u32) {
        prop_assert_eq!(alu(AluOp::Sub, a, b).result, a.wrapping_sub(b));
    }

    #[test]
    fn slt_matches_signed_less_than(a: u32, b: u32) {
        let expected = ((a as i32) < (b as i32)) as u32;
        prop_assert_eq!(alu(AluOp::Slt, a, b).result, expected);
    }

    #[test]
    fn sltu_matches_unsigned_less_than(a: u32, b: u32) {
        prop_assert_eq!(alu(AluOp::Sltu, a, b).result, (a < b) as u32);
    }

    /// zero and negative are always derived from the result, for every op.
    #[test]
    fn flags_consistent_with_result(a: u32, b: u32, op_idx in 0usize..10) {
        let ops = [
            AluOp::Add, AluOp::Sub, AluOp::And, AluOp::Or, AluOp::Xor,
            AluOp::Slt, AluOp::Sltu, AluOp::Sll, AluOp::Srl, AluOp::Sra,
        ];
        let out = alu(ops[op_idx], a, b);
        prop_assert_eq!(out.zero, out.result == 0);
        prop_assert_eq!(out.negative, out.result >> 31 == 1);
    }

    /// Overflow is only ever reported by Add and Sub.
    #[test]
    fn only_add_sub_report_overflow(a: u32, b: u32, op_idx in 0usize..8) {
        let ops = [
            AluOp::And, AluOp::Or, AluOp::Xor, AluOp::Slt,
            AluOp::Sltu, AluOp::Sll, AluOp::Srl, AluOp::Sra,
        ];
        prop_assert!(!alu(ops[op_idx], a, b).overflow);
    }

    #[test]
    fn add_overflow_matches_checked_arithmetic(a: u32, b: u32) {
        let expected = (a as i32).checked_add(b as i32).is_none();
        prop_assert_eq!(alu(AluOp::Add, a, b).overflow, expected);
    }

    #[test]
    fn sub_overflow_matches_checked_arithmetic(a: u32, b: u32) {
        let expected = (a as i32).checked_sub(b as i32).is_none();
        prop_assert_eq!(alu(AluOp::Sub, a, b).overflow, expected);
    }
}
