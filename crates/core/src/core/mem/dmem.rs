//! Data Memory.
//!
//! A fixed-size byte array with width- and sign-aware access. All multi-byte
//! accesses are little-endian. Addresses at or beyond the array bound read as
//! zero and silently ignore writes, matching the hardware's unconditional
//! "don't touch past the end" bound check. Bytes of a wide access that run
//! past the end read as zero and are not written.

use crate::isa::rv32i::funct3;

/// Byte-addressable little-endian data store.
#[derive(Debug)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    /// Creates a data memory of `bytes` zeroed bytes.
    pub fn new(bytes: usize) -> Self {
        Self {
            bytes: vec![0; bytes],
        }
    }

    /// Loads a value at a byte address, selected and extended by funct3.
    ///
    /// funct3 000 → sign-extended byte, 001 → sign-extended halfword,
    /// 010 → word, 100 → zero-extended byte, 101 → zero-extended halfword;
    /// any other value falls back to a full word. An out-of-bounds base
    /// address returns 0.
    pub fn load(&self, address: u32, funct3: u32) -> u32 {
        let base = address as usize;
        if base >= self.bytes.len() {
            return 0;
        }

        let byte = self.byte(base) as u32;
        let half = byte | (self.byte(base + 1) as u32) << 8;
        let word = half | (self.byte(base + 2) as u32) << 16 | (self.byte(base + 3) as u32) << 24;

        match funct3 {
            funct3::LB => byte as u8 as i8 as i32 as u32,
            funct3::LH => half as u16 as i16 as i32 as u32,
            funct3::LBU => byte,
            funct3::LHU => half,
            _ => word,
        }
    }

    /// Stores a value at a byte address, width selected by funct3.
    ///
    /// funct3 000 writes one byte, 001 two bytes, and any other value four
    /// bytes, little-endian. An out-of-bounds base address is a silent no-op.
    pub fn store(&mut self, address: u32, data: u32, funct3: u32) {
        let base = address as usize;
        if base >= self.bytes.len() {
            return;
        }

        let width = match funct3 {
            funct3::SB => 1,
            funct3::SH => 2,
            _ => 4,
        };

        for (i, byte) in data.to_le_bytes().iter().take(width).enumerate() {
            if let Some(slot) = self.bytes.get_mut(base + i) {
                *slot = *byte;
            }
        }
    }

    /// Synchronous reset: clears the entire array.
    ///
    /// Applied once per cycle reset is asserted, winning over any
    /// simultaneous store.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
    }

    /// Number of bytes of capacity.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the memory has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn byte(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(0)
    }
}
