//! Chunked, geometrically growing arrays that never move stored elements.
//!
//! A [`ChunkedArray`] grows by linking a new, larger chunk in front of the
//! ones it already has, instead of reallocating and copying. Elements keep
//! their address for as long as they are live, growth never costs more
//! than one allocation, and the trade-off is that indexed access walks one
//! link per chunk (`O(log n)`).
//!
//! # Architecture
//!
//! ```text
//! ChunkedArray (handle: len, offset, config, fill hook, allocator)
//! └── Chunk (newest, may be partially used)
//!     └── Chunk (full)
//!         └── Chunk (full, oldest)
//! ```
//!
//! - **Growth policy:** [`VlistConfig`] sets the growth factor, the first
//!   chunk's capacity and an optional per-chunk ceiling.
//! - **Allocation:** chunk storage and chunk nodes come from an
//!   [`Allocator`] (default [`Global`]); a refused request is reported as
//!   an error instead of aborting.
//! - **Fill hook:** slots reserved in bulk by
//!   [`ensure`](ChunkedArray::ensure) are filled by an optional
//!   `fn() -> T`, or stay vacant.
//!
//! # Example
//!
//! ```
//! use larder_vlist::{ChunkedArray, VlistError};
//!
//! let mut array = ChunkedArray::new();
//! for v in 1..=5 {
//!     array.push(v)?;
//! }
//! assert_eq!(array.len(), 5);
//! assert_eq!(array.get(0)?, Some(&1));
//! assert_eq!(array.pop()?, Some(5));
//! assert_eq!(array.get(9), Err(VlistError::IndexOutOfBounds { index: 9, len: 4 }));
//! # Ok::<(), VlistError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod array;
mod chunk;
pub mod config;
pub mod error;

// Public re-exports for the primary API surface.
pub use alloc::{AllocError, Allocator, Global};
pub use array::ChunkedArray;
pub use config::VlistConfig;
pub use error::VlistError;
