//! A lenient, error-correcting INI parser.
//!
//! [`parse_ini`] streams entries to a callback as `(section, key, value)`
//! and recovers from the usual hand-editing mistakes instead of failing:
//! unterminated section headers, keys without `=`, and over-long fields
//! (truncated to [`IniLimits`]). Only I/O failures abort a parse.
//!
//! [`IniDocument`] collects a whole document for keyed lookup.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use larder_ini::{parse_ini, IniLimits};
//!
//! let text = "top = 1\n[server]\nport = 8080\n";
//! let mut seen = Vec::new();
//! let summary = parse_ini(text.as_bytes(), &IniLimits::default(), |section, key, value| {
//!     let name = match section {
//!         Some(section) => format!("{section}.{key}"),
//!         None => key.to_owned(),
//!     };
//!     seen.push(format!("{name}={value}"));
//!     ControlFlow::Continue(())
//! })?;
//! assert_eq!(seen, ["top=1", "server.port=8080"].map(String::from));
//! assert_eq!(summary.entries, 2);
//! # Ok::<(), larder_ini::IniError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod limits;
pub mod parser;

pub use document::IniDocument;
pub use error::IniError;
pub use limits::IniLimits;
pub use parser::{parse_ini, IniSummary};
