//! Streaming base64 encoding and decoding (RFC 4648).
//!
//! Both the standard alphabet and the URL- and filename-safe variant are
//! supported, selected by [`Alphabet`]. Encoders always pad; decoders
//! accept padded or unpadded input and skip ASCII whitespace.
//!
//! Stream functions read until end of input and report how many source
//! bytes they consumed. Decode errors carry the offset of the offending
//! byte; whatever decoded cleanly before it has already been written.
//!
//! # Example
//!
//! ```
//! use larder_base64::{decode_to_vec, encode_to_string, Alphabet};
//!
//! let text = encode_to_string(b"larder", Alphabet::Standard);
//! assert_eq!(text, "bGFyZGVy");
//! assert_eq!(decode_to_vec(text.as_bytes(), Alphabet::Standard)?, b"larder");
//! # Ok::<(), larder_base64::Base64Error>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;

pub use alphabet::Alphabet;
pub use decode::{decode_buffer, decode_stream, decode_to_vec, Decoder};
pub use encode::{encode_buffer, encode_stream, encode_to_string, encoded_len, EncoderWriter};
pub use error::Base64Error;
