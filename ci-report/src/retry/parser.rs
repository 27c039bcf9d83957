//! Retry summary parsing.
//!
//! The summary is written by the CI retry wrapper, one test per line:
//! `result<TAB>attempts<TAB>test_name`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

/// Result string the retry wrapper writes for a test that eventually passed.
pub const PASSED: &str = "passed";

/// Outcome of one test after automatic retries.
///
/// Field order defines the sort order: test name first, then result, then
/// attempts, all compared as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RetryEntry {
    pub test_name: String,
    pub result: String,
    pub attempts: String,
}

impl RetryEntry {
    pub fn new(
        test_name: impl Into<String>,
        result: impl Into<String>,
        attempts: impl Into<String>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            result: result.into(),
            attempts: attempts.into(),
        }
    }

    pub fn is_passed(&self) -> bool {
        self.result == PASSED
    }

    /// Parse one `result<TAB>attempts<TAB>test_name` line.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split('\t');
        let (Some(result), Some(attempts), Some(test_name), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return None;
        };
        Some(Self::new(test_name, result, attempts))
    }
}

/// Read the summary file. A missing or unreadable file yields `None`.
pub fn read_summary(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Retry summary not found");
            None
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Failed to read retry summary");
            None
        }
    }
}

/// Parse summary content into entries, in file order.
///
/// Lines that do not have exactly three tab-separated fields are discarded.
pub fn parse_summary(content: &str) -> Vec<RetryEntry> {
    split_lines(content.trim())
        .filter_map(|line| {
            let entry = RetryEntry::from_line(line);
            if entry.is_none() {
                debug!(line, "Discarding malformed retry summary line");
            }
            entry
        })
        .collect()
}

/// Line terminators recognised in summary files. The retry wrapper may run on
/// hosts that end lines with a lone `\r`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line terminator, treating `\r\n` as a single break. A
/// trailing terminator does not produce a final empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(is_line_break) {
            Some(idx) => {
                let line = &rest[..idx];
                let tail = &rest[idx..];
                let sep_len = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[sep_len..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
