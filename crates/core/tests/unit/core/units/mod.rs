//! Pure functional unit tests.

/// ALU operation and flag tests.
pub mod alu;



/// Immediate-generator format tests.
pub mod imm;
