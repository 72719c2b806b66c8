//! Larder: a chunked, no-move array plus a few small text utilities.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Larder sub-crates. For most users, adding `larder` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use larder::prelude::*;
//!
//! let mut array = ChunkedArray::new();
//! for word in ["alpha", "beta", "gamma"] {
//!     array.push(word)?;
//! }
//! let first: *const &str = array.get(0)?.unwrap();
//! for _ in 0..1000 {
//!     array.push("filler")?;
//! }
//! // Growth links new chunks; it never moves old elements.
//! assert!(std::ptr::eq(first, array.get(0)?.unwrap()));
//!
//! let text = encode_to_string(b"larder", Alphabet::UrlSafe);
//! assert_eq!(decode_to_vec(text.as_bytes(), Alphabet::UrlSafe).unwrap(), b"larder");
//! # Ok::<(), VlistError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`vlist`] | `larder-vlist` | `ChunkedArray`, growth policy, allocator hook |
//! | [`base64`] | `larder-base64` | Streaming base64 and base64url codec |
//! | [`ini`] | `larder-ini` | Lenient INI parser and document view |
//! | [`io`] | `larder-io` | Draining non-seekable streams into memory |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Chunked arrays that never move stored elements (`larder-vlist`).
///
/// [`vlist::ChunkedArray`] is the container; [`vlist::VlistConfig`] and
/// [`vlist::Allocator`] customise how it grows.
pub use larder_vlist as vlist;

/// Base64 encoding and decoding (`larder-base64`).
pub use larder_base64 as base64;

/// Lenient INI parsing (`larder-ini`).
///
/// Stream entries with [`ini::parse_ini`] or collect them into an
/// [`ini::IniDocument`].
pub use larder_ini as ini;

/// Stream helpers (`larder-io`).
pub use larder_io as io;

/// Common imports for typical Larder usage.
///
/// ```rust
/// use larder::prelude::*;
/// ```
pub mod prelude {
    // Arrays
    pub use larder_vlist::{Allocator, ChunkedArray, Global, VlistConfig, VlistError};

    // Codecs
    pub use larder_base64::{
        decode_stream, decode_to_vec, encode_stream, encode_to_string, Alphabet, Base64Error,
    };
    pub use larder_ini::{parse_ini, IniDocument, IniError, IniLimits, IniSummary};

    // I/O
    pub use larder_io::read_all;
}
