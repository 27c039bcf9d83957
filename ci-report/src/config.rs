//! Formatter configuration, resolved from the environment with built-in defaults.

use std::path::PathBuf;

/// Job title used when neither a flag nor `PR_COMMENT_JOB_TITLE` is set.
pub const DEFAULT_JOB_TITLE: &str = "Unknown Build";

/// Retry summary path used when neither a flag nor `PR_COMMENT_RETRY_SUMMARY` is set.
pub const DEFAULT_SUMMARY_PATH: &str = "retry_summary.txt";

/// Maximum characters kept in a table cell or inline code span.
pub const DEFAULT_MAX_CELL_LEN: usize = 200;

/// Settings shared by both formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentConfig {
    /// CI job label shown in every rendered fragment.
    pub job_title: String,
    /// Retry summary file consumed by the retry formatter.
    pub summary_path: PathBuf,
    /// Cell truncation limit for sanitized values.
    pub max_cell_len: usize,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            job_title: std::env::var("PR_COMMENT_JOB_TITLE")
                .unwrap_or_else(|_| DEFAULT_JOB_TITLE.into()),
            summary_path: std::env::var_os("PR_COMMENT_RETRY_SUMMARY")
                .map(PathBuf::from)
                .unwrap_or_else(|| DEFAULT_SUMMARY_PATH.into()),
            max_cell_len: std::env::var("PR_COMMENT_MAX_CELL_LEN")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_CELL_LEN),
        }
    }
}

impl CommentConfig {
    /// Configuration with built-in defaults only, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            job_title: DEFAULT_JOB_TITLE.to_string(),
            summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
            max_cell_len: DEFAULT_MAX_CELL_LEN,
        }
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    pub fn with_summary_path(mut self, summary_path: impl Into<PathBuf>) -> Self {
        self.summary_path = summary_path.into();
        self
    }
}
