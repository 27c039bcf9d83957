//! Format a retry summary into a markdown PR comment fragment.
//!
//! Reads the tab-separated summary written by the CI retry wrapper and
//! writes a status table suitable for aggregation into a pull-request comment.
//!
//! ```bash
//! format-retry-comment --job-title "Linux clang" --summary retry_summary.txt
//! ```

use std::path::PathBuf;

use anyhow::Result;
use ci_report::{render_retry_comment, CommentConfig, DEFAULT_JOB_TITLE, DEFAULT_SUMMARY_PATH};
use clap::Parser;
use tracing::debug;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CI job title for this report
    #[arg(long, env = "PR_COMMENT_JOB_TITLE", default_value = DEFAULT_JOB_TITLE)]
    job_title: String,

    /// Path to the retry summary file
    #[arg(long, env = "PR_COMMENT_RETRY_SUMMARY", default_value = DEFAULT_SUMMARY_PATH)]
    summary: PathBuf,
}

fn main() -> Result<()> {
    pr_comment::init_tracing();
    let args = Args::parse();

    let config = CommentConfig::default()
        .with_job_title(args.job_title)
        .with_summary_path(args.summary);

    match render_retry_comment(&config.summary_path, &config.job_title) {
        Some(table) => pr_comment::emit(&mut std::io::stdout().lock(), &table),
        None => {
            debug!(summary = %config.summary_path.display(), "No retry entries to report");
            Ok(())
        }
    }
}
