//! Program-Image Loader.
//!
//! Parses the conventional memory-initialization hex format into a word
//! image for instruction memory:
//! 1. **Values:** One or more whitespace-separated hex words per line,
//!    up to 8 digits each, zero-padded as needed.
//! 2. **Directives:** `@<hex>` sets the next load index (a word index,
//!    not a byte address); skipped slots are filled with NOP.
//! 3. **Comments:** `//` to end of line; blank lines are ignored.
//!
//! This is the one place the system surfaces an explicit failure: a
//! malformed image is rejected before the processor begins stepping,
//! since loading corrupt instruction memory silently would be worse
//! than refusing to start.

use std::fs;
use std::path::Path;

use crate::common::constants::NOP;
use crate::common::error::LoadError;

/// Maximum hex digits in one 32-bit word value.
const MAX_WORD_DIGITS: usize = 8;

/// Parses an ASCII-hex program image into instruction words.
///
/// # Arguments
///
/// * `text` - The image text, in the format described at module level.
///
/// # Returns
///
/// The word image, index 0 first, with `@`-directive gaps filled with NOP.
///
/// # Errors
///
/// Returns a [`LoadError`] naming the 1-based line of the first token that
/// is not valid hex, does not fit in 32 bits, or is a malformed directive.
pub fn parse_hex(text: &str) -> Result<Vec<u32>, LoadError> {
    let mut image: Vec<u32> = Vec::new();
    let mut index = 0usize;

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = line_no + 1;
        let content = raw_line.split("//").next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        for token in content.split_whitespace() {
            if let Some(addr) = token.strip_prefix('@') {
                index = parse_word(addr).ok_or_else(|| LoadError::InvalidAddress {
                    line,
                    token: token.to_string(),
                })? as usize;
                continue;
            }

            if token.len() > MAX_WORD_DIGITS {
                return Err(LoadError::ValueTooWide {
                    line,
                    token: token.to_string(),
                });
            }
            let word = parse_word(token).ok_or_else(|| LoadError::InvalidHex {
                line,
                token: token.to_string(),
            })?;

            if index >= image.len() {
                image.resize(index + 1, NOP);
            }
            image[index] = word;
            index += 1;
        }
    }

    Ok(image)
}

/// Loads and parses a hex program image from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read, or any
/// [`parse_hex`] error for malformed content.
pub fn load_hex_file<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_hex(&text)
}

/// Parses one non-empty hex token; `None` when any digit is invalid
/// or the value overflows 32 bits.
fn parse_word(token: &str) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    u32::from_str_radix(token, 16).ok()
}
