//! Shared implementation of the `b64` and `ini-dump` binaries.
//!
//! Each binary is a thin `main` over a module here, so argument handling
//! and output formatting can be tested without spawning processes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod b64;
pub mod ini_dump;
pub mod logging;

pub use logging::init_logging;
