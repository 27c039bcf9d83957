//! Retry summary formatting.
//!
//! Turns the retry wrapper's tab-separated summary into a per-job status
//! table. Missing files and malformed lines contribute nothing.

pub mod parser;
pub mod render;

use std::path::Path;

use tracing::debug;

pub use parser::{parse_summary, read_summary, RetryEntry, PASSED};
pub use render::format_retry_table;

/// Read, parse and render a retry summary file.
///
/// Returns `None` when the file is absent or holds no valid entries.
pub fn render_retry_comment(path: impl AsRef<Path>, job_title: &str) -> Option<String> {
    let content = read_summary(path)?;
    let entries = parse_summary(&content);
    debug!(entries = entries.len(), "Parsed retry summary");
    format_retry_table(&entries, job_title)
}
