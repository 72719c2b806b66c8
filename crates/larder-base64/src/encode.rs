//! Encoding: bytes to base64 text.
//!
//! [`EncoderWriter`] is the streaming primitive; the free functions wrap it
//! for the common stream-to-stream and buffer-to-stream cases. Output is
//! always padded to a multiple of four symbols.

use std::io::{self, Read, Write};

use crate::alphabet::{Alphabet, PAD};
use crate::error::Base64Error;

/// Input bytes encoded per batch; a multiple of 3 so only the final batch
/// can leave a partial quantum behind.
const BATCH: usize = 3 * 256;

/// Number of symbols `len` input bytes encode to, padding included.
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encode one quantum of 1 to 3 bytes into 4 symbols.
fn encode_quantum(alphabet: Alphabet, input: &[u8], out: &mut [u8]) {
    let b0 = u32::from(input[0]);
    let b1 = input.get(1).copied().map_or(0, u32::from);
    let b2 = input.get(2).copied().map_or(0, u32::from);
    let n = (b0 << 16) | (b1 << 8) | b2;
    out[0] = alphabet.encode(n >> 18);
    out[1] = alphabet.encode(n >> 12);
    out[2] = if input.len() > 1 {
        alphabet.encode(n >> 6)
    } else {
        PAD
    };
    out[3] = if input.len() > 2 { alphabet.encode(n) } else { PAD };
}

/// A [`Write`] adapter that base64-encodes everything written to it.
///
/// Up to two trailing bytes are held back between writes until a full
/// quantum is available. Call [`finish`](EncoderWriter::finish) to emit
/// the final, padded quantum; dropping the writer without finishing loses
/// those bytes.
pub struct EncoderWriter<W: Write> {
    inner: W,
    alphabet: Alphabet,
    pending: [u8; 3],
    pending_len: usize,
}

impl<W: Write> EncoderWriter<W> {
    /// Wrap `inner`, encoding with `alphabet`.
    pub fn new(inner: W, alphabet: Alphabet) -> Self {
        Self {
            inner,
            alphabet,
            pending: [0; 3],
            pending_len: 0,
        }
    }

    /// Emit the final quantum and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.pending_len > 0 {
            let mut quantum = [0u8; 4];
            encode_quantum(
                self.alphabet,
                &self.pending[..self.pending_len],
                &mut quantum,
            );
            self.inner.write_all(&quantum)?;
            self.pending_len = 0;
        }
        Ok(self.inner)
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for EncoderWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut input = data;

        // Complete a quantum left over from the previous write first.
        if self.pending_len > 0 {
            let take = (3 - self.pending_len).min(input.len());
            self.pending[self.pending_len..self.pending_len + take]
                .copy_from_slice(&input[..take]);
            self.pending_len += take;
            input = &input[take..];
            if self.pending_len < 3 {
                return Ok(data.len());
            }
            let mut quantum = [0u8; 4];
            encode_quantum(self.alphabet, &self.pending, &mut quantum);
            self.inner.write_all(&quantum)?;
            self.pending_len = 0;
        }

        let mut out = [0u8; BATCH / 3 * 4];
        for batch in input.chunks(BATCH) {
            let whole = batch.len() / 3 * 3;
            let mut written = 0;
            for triple in batch[..whole].chunks_exact(3) {
                encode_quantum(self.alphabet, triple, &mut out[written..written + 4]);
                written += 4;
            }
            self.inner.write_all(&out[..written])?;

            let rest = &batch[whole..];
            self.pending[..rest.len()].copy_from_slice(rest);
            self.pending_len = rest.len();
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Encode everything `src` yields into `dst`.
///
/// Returns the number of source bytes consumed.
pub fn encode_stream<W: Write, R: Read>(
    dst: W,
    mut src: R,
    alphabet: Alphabet,
) -> Result<u64, Base64Error> {
    let mut encoder = EncoderWriter::new(dst, alphabet);
    let consumed = io::copy(&mut src, &mut encoder)?;
    encoder.finish()?.flush()?;
    Ok(consumed)
}

/// Encode `src` into `dst`.
///
/// Returns the number of source bytes consumed, which is all of them.
pub fn encode_buffer<W: Write>(
    dst: W,
    src: &[u8],
    alphabet: Alphabet,
) -> Result<usize, Base64Error> {
    let mut encoder = EncoderWriter::new(dst, alphabet);
    encoder.write_all(src)?;
    encoder.finish()?.flush()?;
    Ok(src.len())
}

/// Encode `src` into a new string.
pub fn encode_to_string(src: &[u8], alphabet: Alphabet) -> String {
    let mut out = String::with_capacity(encoded_len(src.len()));
    let mut quantum = [0u8; 4];
    for chunk in src.chunks(3) {
        encode_quantum(alphabet, chunk, &mut quantum);
        out.extend(quantum.iter().map(|&b| char::from(b)));
    }
    out
}
