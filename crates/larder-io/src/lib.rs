//! Reading a whole stream into memory.
//!
//! [`read_all`] never seeks or asks for the stream's length, so it works
//! on pipes, sockets and terminals as well as files.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::io::{self, ErrorKind, Read};

/// Block size used by [`read_all`].
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Read `src` to end of stream in [`DEFAULT_BLOCK_SIZE`] blocks.
///
/// # Example
///
/// ```
/// let data = larder_io::read_all(&b"piped input"[..])?;
/// assert_eq!(data, b"piped input");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn read_all<R: Read>(src: R) -> io::Result<Vec<u8>> {
    read_all_with_block_size(src, DEFAULT_BLOCK_SIZE)
}

/// Read `src` to end of stream, growing the buffer `block_size` bytes at a
/// time.
///
/// Reads interrupted by a signal are retried. Any other error is returned
/// and the bytes read so far are discarded.
///
/// # Panics
///
/// Panics if `block_size` is zero.
pub fn read_all_with_block_size<R: Read>(mut src: R, block_size: usize) -> io::Result<Vec<u8>> {
    assert!(block_size > 0, "block_size must be non-zero");
    let mut buf = Vec::new();
    let mut filled = 0;
    loop {
        if buf.len() - filled < block_size {
            buf.resize(filled + block_size, 0);
        }
        match src.read(&mut buf[filled..filled + block_size]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    buf.truncate(filled);
    Ok(buf)
}
