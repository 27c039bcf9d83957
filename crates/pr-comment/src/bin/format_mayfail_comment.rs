//! Format mayfail test failure JSON reports into a markdown PR comment fragment.
//!
//! Reads one or more JSON files produced by `--mayfail-report` test runs and
//! writes a fragment suitable for aggregation into a pull-request comment.
//!
//! ```bash
//! format-mayfail-comment --job-title "Linux clang" shard-*.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use ci_report::{mayfail::render_mayfail_comment_with, CommentConfig, DEFAULT_JOB_TITLE};
use clap::Parser;
use tracing::debug;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON report files, merged in the order given
    files: Vec<PathBuf>,

    /// CI job title for this report
    #[arg(long, env = "PR_COMMENT_JOB_TITLE", default_value = DEFAULT_JOB_TITLE)]
    job_title: String,
}

fn main() -> Result<()> {
    pr_comment::init_tracing();
    let args = Args::parse();

    if args.files.is_empty() {
        debug!("No report files given");
        return Ok(());
    }

    let config = CommentConfig::default().with_job_title(args.job_title);
    let output = render_mayfail_comment_with(&args.files, &config);
    if output.is_empty() {
        debug!(files = args.files.len(), "Nothing to report");
        return Ok(());
    }

    pr_comment::emit(&mut std::io::stdout().lock(), &output)
}
