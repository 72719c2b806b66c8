//! `ini-dump`: print every entry of an INI file.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use larder::ini::{parse_ini, IniLimits, IniSummary};
use larder::io::read_all;
use tracing::debug;

/// Command-line arguments of `ini-dump`.
#[derive(Parser, Debug)]
#[command(name = "ini-dump", version)]
#[command(about = "Print the entries of an INI file", long_about = None)]
pub struct IniDumpArgs {
    /// INI file to read
    #[arg(value_name = "PATH", default_value = "test.ini")]
    pub path: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Why a run of `ini-dump` failed.
///
/// The split decides the exit status: a file that cannot be opened exits
/// with 1, a failure once it is open exits with 2, the same status as a
/// file with nothing to parse.
#[derive(Debug)]
pub enum RunError {
    /// The input could not be opened.
    Open(anyhow::Error),
    /// The input opened but could not be read, parsed or written out.
    Dump(anyhow::Error),
}

impl RunError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Open(_) => 1,
            Self::Dump(_) => 2,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(e) | Self::Dump(e) => write!(f, "{e:#}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Read the file named by `args` and dump it to stdout.
pub fn run(args: &IniDumpArgs) -> Result<IniSummary, RunError> {
    let file = File::open(&args.path)
        .with_context(|| format!("cannot open {}", args.path.display()))
        .map_err(RunError::Open)?;
    dump_file(file, args, io::stdout().lock()).map_err(RunError::Dump)
}

fn dump_file<W: Write>(file: File, args: &IniDumpArgs, out: W) -> anyhow::Result<IniSummary> {
    let text = read_all(file).with_context(|| format!("cannot read {}", args.path.display()))?;
    debug!(bytes = text.len(), path = %args.path.display(), "read input");
    dump(&text, out)
}

/// Write one `«section».«key» = «value»` line per entry of `text`.
///
/// Entries outside any section print an empty section name.
pub fn dump<W: Write>(text: &[u8], mut out: W) -> anyhow::Result<IniSummary> {
    let mut write_error = None;
    let summary = parse_ini(text, &IniLimits::default(), |section, key, value| {
        let section = section.unwrap_or_default();
        match writeln!(out, "«{section}».«{key}» = «{value}»") {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e).context("cannot write output");
    }
    out.flush().context("cannot write output")?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use larder_test_utils::fixtures::{SAMPLE_INI, SAMPLE_INI_ENTRIES};

    #[test]
    fn command_definition_is_valid() {
        IniDumpArgs::command().debug_assert();
    }

    #[test]
    fn path_defaults_to_test_ini() {
        let args = IniDumpArgs::try_parse_from(["ini-dump"]).unwrap();
        assert_eq!(args.path, PathBuf::from("test.ini"));
        let args = IniDumpArgs::try_parse_from(["ini-dump", "conf/app.ini"]).unwrap();
        assert_eq!(args.path, PathBuf::from("conf/app.ini"));
    }

    #[test]
    fn dump_formats_every_entry() {
        let mut out = Vec::new();
        let summary = dump(SAMPLE_INI.as_bytes(), &mut out).unwrap();
        let expected: String = SAMPLE_INI_ENTRIES
            .iter()
            .map(|(s, k, v)| format!("«{}».«{k}» = «{v}»\n", s.unwrap_or_default()))
            .collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(summary.entries, SAMPLE_INI_ENTRIES.len());
        assert!(summary.bytes > 0);
    }

    #[test]
    fn blank_input_parses_nothing() {
        let mut out = Vec::new();
        let summary = dump(b"\n  \n\t\n", &mut out).unwrap();
        assert_eq!(summary.bytes, 0);
        assert!(out.is_empty());
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let args = IniDumpArgs::try_parse_from(["ini-dump", "/nonexistent/larder/test.ini"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, RunError::Open(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("cannot open /nonexistent/larder/test.ini"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_open_file_is_a_dump_error() {
        // A directory opens on Unix but every read fails.
        let dir = std::env::temp_dir();
        let args = IniDumpArgs {
            path: dir.clone(),
            verbose: 0,
        };
        let file = File::open(&dir).unwrap();
        let err = dump_file(file, &args, Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("cannot read"));
        assert_eq!(RunError::Dump(err).exit_code(), 2);
    }

    #[test]
    fn write_failure_stops_the_parse() {
        let err = dump(SAMPLE_INI.as_bytes(), FullDisk).unwrap_err();
        assert_eq!(err.to_string(), "cannot write output");
    }
}
