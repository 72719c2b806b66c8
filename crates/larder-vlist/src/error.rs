//! Error types for chunked array operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during chunked array operations.
///
/// Every variant is recoverable and reported to the immediate caller.
/// An operation that fails leaves the array exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VlistError {
    /// The allocator could not supply storage for a new chunk.
    AllocationFailure {
        /// Number of slots the chunk would have held.
        requested: usize,
    },
    /// `pop` was called on an array with no live elements.
    Underflow,
    /// An index at or past the logical end was used for `get` or `set`.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A [`VlistConfig`](crate::VlistConfig) failed validation.
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },
}

impl fmt::Display for VlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure { requested } => {
                write!(f, "chunk allocation failed: requested {requested} slots")
            }
            Self::Underflow => write!(f, "pop from empty array"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for VlistError {}
