//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs:
//! 1. **Storage:** Maintains registers `x0`-`x31`, zeroed at power-on.
//! 2. **Invariant Enforcement:** Register `x0` is hardwired to zero; writes
//!    directed at it are dropped.
//! 3. **Reset:** Synchronous clear of all slots, taking priority over any
//!    simultaneous write.

/// 32×32-bit register file with dual combinational read and a single
/// synchronous write per cycle.
#[derive(Debug)]
pub struct RegisterFile {
    regs: [u32; 32],
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value. Combinational; no side effect.
    ///
    /// Register `x0` always returns 0 regardless of any write directed at it.
    /// Indices outside `x0`-`x31` also read as 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Commits a register write for this cycle.
    ///
    /// Effective only when `enable` is set and `idx` names `x1`-`x31`;
    /// writes to `x0` or out-of-range indices are no-ops.
    pub fn write(&mut self, enable: bool, idx: usize, value: u32) {
        if enable && idx != 0 {
            if let Some(slot) = self.regs.get_mut(idx) {
                *slot = value;
            }
        }
    }

    /// Synchronous reset: clears all 32 slots to zero.
    ///
    /// Applied once per cycle reset is asserted, winning over any
    /// simultaneous write.
    pub fn reset(&mut self) {
        self.regs = [0; 32];
    }

    /// Returns a copy of all 32 registers for state dumps and harnesses.
    pub fn dump(&self) -> [u32; 32] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
