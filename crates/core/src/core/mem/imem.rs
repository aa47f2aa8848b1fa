//! Instruction Memory.
//!
//! A fixed-size word array populated at construction and read-only during
//! execution. Every slot defaults to the canonical NOP; an optional program
//! image overwrites slots starting at word 0. Fetching an address whose word
//! index falls outside the populated range returns NOP rather than failing.

use crate::common::constants::{NOP, WORD_ALIGN_SHIFT};

/// Default sample program, used when no external image is supplied.
///
/// Occupies words 0-7; the remaining words stay NOP.
pub const DEFAULT_PROGRAM: [u32; 8] = [
    0x0050_0093, // ADDI x1, x0, 5
    0x0030_0113, // ADDI x2, x0, 3
    0x0020_81B3, // ADD  x3, x1, x2
    0x4020_8233, // SUB  x4, x1, x2
    0x0020_F2B3, // AND  x5, x1, x2
    0x0020_E333, // OR   x6, x1, x2
    0x0020_C3B3, // XOR  x7, x1, x2
    0x0020_A433, // SLT  x8, x1, x2
];

/// Read-only word store fetched by byte address.
#[derive(Debug)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates an instruction memory of `words` slots, all NOP.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![NOP; words],
        }
    }

    /// Creates an instruction memory preloaded with `image` at word 0.
    ///
    /// Image words beyond the configured capacity are discarded; slots the
    /// image does not cover remain NOP.
    pub fn with_image(words: usize, image: &[u32]) -> Self {
        let mut mem = Self::new(words);
        for (slot, word) in mem.words.iter_mut().zip(image) {
            *slot = *word;
        }
        mem
    }

    /// Fetches the instruction at a byte address.
    ///
    /// The low 2 bits of the address are discarded (word-aligned access).
    /// An index outside the populated range returns NOP.
    pub fn fetch(&self, address: u32) -> u32 {
        let index = (address >> WORD_ALIGN_SHIFT) as usize;
        self.words.get(index).copied().unwrap_or(NOP)
    }

    /// Number of word slots.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the memory has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
