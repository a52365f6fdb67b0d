//! Error type for the checked decoders.
//!
//! Only one operation in the crate validates its input at runtime:
//! decoding a byte sequence into 16-bit words. Every other precondition
//! (regions inside the buffer, partial lengths) is enforced by panicking,
//! see the `# Panics` section of each function.

use core::fmt;

/// Errors returned by checked decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// The byte count is not a multiple of 2, so it cannot hold 16-bit words.
    OddLength {
        /// Offending byte count.
        len: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::OddLength { len } => {
                write!(f, "length {len} must be a multiple of 2")
            }
        }
    }
}

impl std::error::Error for PackError {}
