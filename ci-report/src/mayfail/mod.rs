//! Mayfail failure aggregation.
//!
//! Pipeline:
//! ```text
//! report files → load_failures → deduplicate → format_markdown → fragment
//! ```
//!
//! Each shard of a test run writes its own report, so one test case can
//! appear in several files. Records are merged by test name before
//! rendering, keeping assertion order stable across shards.

pub mod loader;
pub mod merge;
pub mod render;
pub mod types;

use std::path::Path;

use tracing::debug;

use crate::config::CommentConfig;

pub use loader::{load_failures, load_report};
pub use merge::deduplicate;
pub use render::{format_markdown, format_markdown_with_limit};
pub use types::{Assertion, FailureRecord, PLACEHOLDER, UNKNOWN_TEST};

/// Load, merge and render a set of mayfail reports.
///
/// Returns an empty string when there is nothing to report.
pub fn render_mayfail_comment<P: AsRef<Path>>(paths: &[P], job_title: &str) -> String {
    let config = CommentConfig::builtin().with_job_title(job_title);
    render_mayfail_comment_with(paths, &config)
}

/// [`render_mayfail_comment`] driven by a full [`CommentConfig`].
pub fn render_mayfail_comment_with<P: AsRef<Path>>(paths: &[P], config: &CommentConfig) -> String {
    let failures = load_failures(paths);
    let loaded = failures.len();
    let merged = deduplicate(failures);
    debug!(
        files = paths.len(),
        loaded,
        tests = merged.len(),
        "Merged mayfail failures"
    );
    format_markdown_with_limit(&merged, &config.job_title, config.max_cell_len)
}
