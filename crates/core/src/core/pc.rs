//! Program Counter.
//!
//! A single 32-bit address register with next-value selection. Word-granular
//! in practice (advances by 4) though alignment is not enforced. The PC+4
//! tap is a pure read used for the link value and sequential target,
//! independent of the commit.

use crate::common::constants::INSTRUCTION_SIZE;

/// 32-bit program-counter register.
#[derive(Debug)]
pub struct ProgramCounter {
    value: u32,
    reset_addr: u32,
}

impl ProgramCounter {
    /// Creates a program counter initialized to the reset address.
    pub fn new(reset_addr: u32) -> Self {
        Self {
            value: reset_addr,
            reset_addr,
        }
    }

    /// Current PC value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Sequential successor PC + 4. Pure read; does not commit.
    pub fn plus_4(&self) -> u32 {
        self.value.wrapping_add(INSTRUCTION_SIZE)
    }

    /// Commits the next PC for this cycle.
    ///
    /// Next value is `branch_target` when `take_branch` is set, else PC + 4.
    /// A stalled cycle leaves the value unchanged.
    pub fn advance(&mut self, take_branch: bool, branch_target: u32, stall: bool) {
        if stall {
            return;
        }
        self.value = if take_branch {
            branch_target
        } else {
            self.plus_4()
        };
    }

    /// Synchronous reset: forces the PC to the reset address.
    ///
    /// Wins over any advance in the same cycle.
    pub fn reset(&mut self) {
        self.value = self.reset_addr;
    }
}
