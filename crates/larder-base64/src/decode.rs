//! Decoding: base64 text back to bytes.
//!
//! [`Decoder`] is an incremental state machine that can be fed input in
//! arbitrary slices; the free functions drive it from a stream or buffer.
//!
//! Accepted input:
//! - ASCII whitespace (space, tab, CR, LF) anywhere is ignored.
//! - The final quantum may be padded (`xx==`, `xxx=`) or unpadded (`xx`,
//!   `xxx`). A lone trailing symbol is rejected.
//! - Nothing but whitespace may follow padding.

use std::io::{self, Read, Write};

use crate::alphabet::{Alphabet, PAD};
use crate::error::Base64Error;

/// Bytes read from the source per decode batch.
const READ_BLOCK: usize = 4096;

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Incremental base64 decoder.
#[derive(Clone, Debug)]
pub struct Decoder {
    alphabet: Alphabet,
    /// Sextets of the quantum being assembled.
    quantum: [u8; 4],
    filled: usize,
    /// `=` symbols seen in the current quantum.
    padding: usize,
    /// A padded quantum was completed; only whitespace may follow.
    closed: bool,
    /// Input bytes fed so far.
    consumed: u64,
}

impl Decoder {
    /// Create a decoder for `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            quantum: [0; 4],
            filled: 0,
            padding: 0,
            closed: false,
            consumed: 0,
        }
    }

    /// Number of input bytes fed so far, whitespace included.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Decode `input`, appending complete bytes to `out`.
    ///
    /// On error, `out` holds everything decoded before the offending byte.
    pub fn feed(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), Base64Error> {
        for &byte in input {
            let offset = self.consumed;
            self.consumed += 1;

            if is_whitespace(byte) {
                continue;
            }
            if byte == PAD {
                self.pad(offset, out)?;
                continue;
            }
            let Some(sextet) = self.alphabet.decode(byte) else {
                return Err(Base64Error::InvalidByte { offset, byte });
            };
            if self.closed || self.padding > 0 {
                return Err(Base64Error::MalformedPadding { offset });
            }
            self.quantum[self.filled] = sextet;
            self.filled += 1;
            if self.filled == 4 {
                self.emit(3, out);
            }
        }
        Ok(())
    }

    fn pad(&mut self, offset: u64, out: &mut Vec<u8>) -> Result<(), Base64Error> {
        if self.closed || self.filled < 2 {
            return Err(Base64Error::MalformedPadding { offset });
        }
        self.padding += 1;
        if self.filled + self.padding == 4 {
            self.emit(self.filled - 1, out);
            self.closed = true;
        }
        Ok(())
    }

    /// Write the first `bytes` bytes of the current quantum and reset it.
    fn emit(&mut self, bytes: usize, out: &mut Vec<u8>) {
        let q = &self.quantum;
        let n = (u32::from(q[0]) << 18)
            | (u32::from(q[1]) << 12)
            | (u32::from(q[2]) << 6)
            | u32::from(q[3]);
        let decoded = [(n >> 16) as u8, (n >> 8) as u8, n as u8];
        out.extend_from_slice(&decoded[..bytes]);
        self.quantum = [0; 4];
        self.filled = 0;
        self.padding = 0;
    }

    /// Flush an unpadded final quantum and check the input ended cleanly.
    pub fn finish(mut self, out: &mut Vec<u8>) -> Result<(), Base64Error> {
        let offset = self.consumed;
        if self.padding > 0 {
            return Err(Base64Error::MalformedPadding { offset });
        }
        match self.filled {
            0 => Ok(()),
            1 => Err(Base64Error::MalformedPadding { offset }),
            filled => {
                self.emit(filled - 1, out);
                Ok(())
            }
        }
    }
}

/// Decode everything `src` yields into `dst`.
///
/// Returns the number of source bytes consumed. On a decode error, the
/// bytes decoded before the offending input have already been written.
pub fn decode_stream<W: Write, R: Read>(
    mut dst: W,
    mut src: R,
    alphabet: Alphabet,
) -> Result<u64, Base64Error> {
    let mut decoder = Decoder::new(alphabet);
    let mut block = [0u8; READ_BLOCK];
    let mut out = Vec::with_capacity(READ_BLOCK / 4 * 3);
    loop {
        let read = match src.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        let fed = decoder.feed(&block[..read], &mut out);
        dst.write_all(&out)?;
        out.clear();
        fed?;
    }
    let consumed = decoder.consumed();
    decoder.finish(&mut out)?;
    dst.write_all(&out)?;
    dst.flush()?;
    Ok(consumed)
}

/// Decode `src` into `dst`.
///
/// Returns the number of source bytes consumed.
pub fn decode_buffer<W: Write>(
    mut dst: W,
    src: &[u8],
    alphabet: Alphabet,
) -> Result<usize, Base64Error> {
    let out = decode_to_vec(src, alphabet)?;
    dst.write_all(&out)?;
    dst.flush()?;
    Ok(src.len())
}

/// Decode `src` into a new vector.
pub fn decode_to_vec(src: &[u8], alphabet: Alphabet) -> Result<Vec<u8>, Base64Error> {
    let mut decoder = Decoder::new(alphabet);
    let mut out = Vec::with_capacity(src.len() / 4 * 3 + 2);
    decoder.feed(src, &mut out)?;
    decoder.finish(&mut out)?;
    Ok(out)
}
