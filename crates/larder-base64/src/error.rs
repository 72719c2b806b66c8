//! Error types for base64 encoding and decoding.

use std::fmt;
use std::io;

/// Errors that can occur while encoding or decoding.
#[derive(Debug)]
pub enum Base64Error {
    /// An I/O error occurred on the source or destination.
    Io(io::Error),
    /// A byte that is neither in the alphabet, padding, nor whitespace.
    InvalidByte {
        /// Position of the byte in the encoded input.
        offset: u64,
        /// The offending byte.
        byte: u8,
    },
    /// Padding in the wrong place: `=` too early in a quantum, an
    /// incomplete `==`, a symbol after padding, or a lone trailing symbol.
    MalformedPadding {
        /// Position in the encoded input where the problem was detected.
        offset: u64,
    },
}

impl fmt::Display for Base64Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidByte { offset, byte } => {
                write!(f, "invalid base64 byte {byte:#04x} at offset {offset}")
            }
            Self::MalformedPadding { offset } => {
                write!(f, "malformed base64 padding at offset {offset}")
            }
        }
    }
}

impl std::error::Error for Base64Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Base64Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
