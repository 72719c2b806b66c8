//! `b64`: base64-encode or decode a file or stdin.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use larder::base64::{decode_stream, encode_stream, Alphabet};
use tracing::{debug, info};

/// Command-line arguments of `b64`.
#[derive(Parser, Debug)]
#[command(name = "b64", version)]
#[command(about = "Encode or decode base64", long_about = None)]
pub struct B64Args {
    /// Decode the input
    #[arg(short = 'd', long, short_alias = 'D', overrides_with = "encode")]
    pub decode: bool,

    /// Encode the input (the default)
    #[arg(short = 'e', long, short_alias = 'E', overrides_with = "decode")]
    pub encode: bool,

    /// Use the URL- and filename-safe alphabet (`-` and `_`)
    #[arg(short = 'u', long)]
    pub url_safe: bool,

    /// Input file (default: stdin)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Direction of a `b64` run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Bytes to base64 text.
    Encode,
    /// Base64 text to bytes.
    Decode,
}

impl B64Args {
    /// Direction selected by the last of `-d`/`-e` given.
    pub fn mode(&self) -> Mode {
        if self.decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }

    /// Alphabet selected by `-u`.
    pub fn alphabet(&self) -> Alphabet {
        if self.url_safe {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        }
    }
}

/// Open the requested streams and transcode between them.
///
/// Returns the number of input bytes consumed.
pub fn run(args: &B64Args) -> anyhow::Result<u64> {
    let src: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let dst: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    transcode(args.mode(), args.alphabet(), src, dst)
}

/// Encode or decode everything from `src` into `dst`.
pub fn transcode<R: Read, W: Write>(
    mode: Mode,
    alphabet: Alphabet,
    src: R,
    dst: W,
) -> anyhow::Result<u64> {
    debug!(?mode, ?alphabet, "starting");
    let consumed = match mode {
        Mode::Encode => encode_stream(dst, src, alphabet).context("encoding failed")?,
        Mode::Decode => decode_stream(dst, src, alphabet).context("decoding failed")?,
    };
    info!(consumed, "done");
    Ok(consumed)
}
