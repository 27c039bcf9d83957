//! CI Report Library
//!
//! Turns CI test artifacts into markdown fragments for pull-request comments:
//! - `mayfail`: merges JSON assertion-failure reports from one or more shards
//!   and renders one collapsible block per failing test
//! - `retry`: renders the tab-separated retry summary as a status table
//!
//! Both pipelines are pure and never fail: missing or malformed inputs simply
//! contribute nothing to the output.
//!
//! # Usage
//!
//! ```no_run
//! use ci_report::{render_mayfail_comment, render_retry_comment};
//!
//! let fragment = render_mayfail_comment(&["shard-1.json", "shard-2.json"], "Linux");
//! if !fragment.is_empty() {
//!     print!("{fragment}");
//! }
//!
//! if let Some(table) = render_retry_comment("retry_summary.txt", "Linux") {
//!     print!("{table}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod mayfail;
pub mod retry;
pub mod sanitize;

pub use config::{CommentConfig, DEFAULT_JOB_TITLE, DEFAULT_MAX_CELL_LEN, DEFAULT_SUMMARY_PATH};
pub use error::LoadError;
pub use mayfail::{
    deduplicate, format_markdown, format_markdown_with_limit, load_failures, load_report,
    render_mayfail_comment, render_mayfail_comment_with, Assertion, FailureRecord,
};
pub use retry::{format_retry_table, parse_summary, read_summary, render_retry_comment, RetryEntry};
pub use sanitize::sanitize_cell;
