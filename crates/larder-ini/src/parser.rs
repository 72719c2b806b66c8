//! The line-oriented parser.
//!
//! Recognised lines, after surrounding whitespace is stripped:
//!
//! ```text
//! [section]        sets the current section; text after `]` is ignored
//! key = value      one entry; the value runs to the end of the line
//! ; comment        skipped, as is `# comment`
//! ```
//!
//! Recovery rules:
//! - a section header without `]` ends at the end of the line;
//! - a key without `=` takes the next non-blank line, whole, as its
//!   value; a key left without one at end of input is dropped;
//! - an entry with an empty key is skipped;
//! - over-long sections, keys and values are truncated to [`IniLimits`].

use std::io::{self, BufRead};
use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::error::IniError;
use crate::limits::IniLimits;

/// Outcome of a completed parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IniSummary {
    /// Bytes of recognised content, including text later truncated but
    /// excluding whitespace stripped from line and field edges.
    pub bytes: u64,
    /// Entries delivered to the callback.
    pub entries: usize,
    /// The callback returned [`ControlFlow::Break`].
    pub stopped: bool,
}

fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a
/// character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Parse INI text from `src`, calling `callback(section, key, value)` for
/// each entry in document order.
///
/// `section` is `None` for entries before the first section header.
/// Parsing stops early when the callback returns [`ControlFlow::Break`].
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// If reading fails partway through a line, the bytes read so far are
/// parsed as that line before the error is returned.
pub fn parse_ini<R, F>(mut src: R, limits: &IniLimits, mut callback: F) -> Result<IniSummary, IniError>
where
    R: BufRead,
    F: FnMut(Option<&str>, &str, &str) -> ControlFlow<()>,
{
    limits.validate()?;

    let mut summary = IniSummary::default();
    let mut section: Option<String> = None;
    let mut raw = Vec::new();
    let mut line_no = 0usize;
    // A key whose line ended before any `=`.
    let mut pending_key: Option<String> = None;
    let mut failure: Option<io::Error> = None;

    loop {
        if let Some(err) = failure.take() {
            return Err(err.into());
        }
        raw.clear();
        match src.read_until(b'\n', &mut raw) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) if raw.is_empty() => return Err(err.into()),
            Err(err) => {
                debug!(line = line_no + 1, "read failed mid-line, parsing partial line");
                failure = Some(err);
            }
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&raw);
        let line = text.trim_matches(is_ws);

        if line.is_empty() {
            continue;
        }

        let carried = pending_key.take();
        let (key, value) = match carried.as_deref() {
            Some(key) => (key, line),
            None => {
                if line.starts_with(';') || line.starts_with('#') {
                    summary.bytes += line.len() as u64;
                    continue;
                }

                if let Some(header) = line.strip_prefix('[') {
                    let name = match header.find(']') {
                        Some(end) => &header[..end],
                        None => {
                            trace!(line = line_no, "section header missing ']'");
                            header
                        }
                    };
                    summary.bytes += 1 + name.len() as u64;
                    let name = name.trim_matches(is_ws);
                    let kept = truncate(name, limits.max_section);
                    if kept.len() < name.len() {
                        debug!(line = line_no, len = name.len(), "section name truncated");
                    }
                    section = (!kept.is_empty()).then(|| kept.to_owned());
                    continue;
                }

                match line.split_once('=') {
                    Some((key, value)) => {
                        summary.bytes += 1;
                        (key.trim_end_matches(is_ws), value.trim_start_matches(is_ws))
                    }
                    None => {
                        trace!(line = line_no, "key without '=', value on next line");
                        pending_key = Some(line.to_owned());
                        continue;
                    }
                }
            }
        };
        // A limit narrower than the key's first character also empties it.
        let kept_key = truncate(key, limits.max_key);
        if kept_key.is_empty() {
            debug!(line = line_no, "entry with empty key skipped");
            continue;
        }
        summary.bytes += (key.len() + value.len()) as u64;

        let kept_value = truncate(value, limits.max_value);
        if kept_key.len() < key.len() || kept_value.len() < value.len() {
            debug!(line = line_no, "entry truncated to limits");
        }

        summary.entries += 1;
        if callback(section.as_deref(), kept_key, kept_value).is_break() {
            summary.stopped = true;
            break;
        }
    }

    if let Some(key) = pending_key {
        debug!(key = %key, "key without value at end of input skipped");
    }
    Ok(summary)
}
