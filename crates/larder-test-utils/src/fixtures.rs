//! Shared text fixtures.
//!
//! - [`RFC4648_VECTORS`]: the base64 test vectors from RFC 4648 §10.
//! - [`SAMPLE_INI`]: an INI document exercising sections, comments and the
//!   parser's recovery rules, with [`SAMPLE_INI_ENTRIES`] as its expected
//!   callback sequence.

/// `(plain, standard-alphabet encoding)` pairs from RFC 4648 §10.
pub const RFC4648_VECTORS: &[(&str, &str)] = &[
    ("", ""),
    ("f", "Zg=="),
    ("fo", "Zm8="),
    ("foo", "Zm9v"),
    ("foob", "Zm9vYg=="),
    ("fooba", "Zm9vYmE="),
    ("foobar", "Zm9vYmFy"),
];

/// An INI document covering every construct the parser recognises.
pub const SAMPLE_INI: &str = "\
; leading comment
name = larder
   version=0.1.0

[server]
host = example.org
# a hash comment
port= 8080
[paths
root = /srv/larder
bare key
=orphan value
[empty]
";

/// Entries [`SAMPLE_INI`] produces, as `(section, key, value)`.
pub const SAMPLE_INI_ENTRIES: &[(Option<&str>, &str, &str)] = &[
    (None, "name", "larder"),
    (None, "version", "0.1.0"),
    (Some("server"), "host", "example.org"),
    (Some("server"), "port", "8080"),
    (Some("paths"), "root", "/srv/larder"),
    (Some("paths"), "bare key", "=orphan value"),
];
