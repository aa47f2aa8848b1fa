//! Loader error definitions.
//!
//! The execution core itself has no fault path: unknown opcodes decode to an
//! inert control bundle, out-of-range fetches return NOP, and out-of-bounds
//! data accesses read zero and drop writes. The one place an explicit failure
//! is surfaced is program-image loading, since silently corrupting instruction
//! memory would be worse than refusing to start.

use thiserror::Error;

/// Errors produced while parsing an ASCII-hex program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A token on the given (1-based) line was not valid hexadecimal.
    #[error("line {line}: invalid hex value `{token}`")]
    InvalidHex {
        /// 1-based line number of the offending token.
        line: usize,
        /// The token as it appeared in the image.
        token: String,
    },

    /// A token was valid hex but wider than one 32-bit word.
    #[error("line {line}: value `{token}` does not fit in 32 bits")]
    ValueTooWide {
        /// 1-based line number of the offending token.
        line: usize,
        /// The token as it appeared in the image.
        token: String,
    },

    /// An `@` directive did not carry a valid hexadecimal word index.
    #[error("line {line}: invalid address directive `{token}`")]
    InvalidAddress {
        /// 1-based line number of the offending directive.
        line: usize,
        /// The directive as it appeared in the image.
        token: String,
    },

    /// The image file could not be read.
    #[error("failed to read program image `{path}`")]
    Io {
        /// Path of the image file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
