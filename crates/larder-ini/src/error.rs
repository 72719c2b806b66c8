//! Error types for INI parsing.

use std::fmt;
use std::io;

/// Errors that stop an INI parse.
///
/// Malformed content never produces an error; the parser recovers and
/// moves on. Only the source failing, or a rejected configuration, does.
#[derive(Debug)]
pub enum IniError {
    /// Reading the source failed.
    Io(io::Error),
    /// [`IniLimits`](crate::IniLimits) failed validation.
    InvalidLimits {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidLimits { reason } => write!(f, "invalid limits: {reason}"),
        }
    }
}

impl std::error::Error for IniError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidLimits { .. } => None,
        }
    }
}

impl From<io::Error> for IniError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
