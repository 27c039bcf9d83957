//! Markdown rendering for merged mayfail failures.

use super::types::FailureRecord;
use crate::config::DEFAULT_MAX_CELL_LEN;
use crate::sanitize::sanitize_cell;

/// Render merged failures into a markdown fragment for one CI job.
///
/// Returns an empty string when no record has assertions.
pub fn format_markdown(failures: &[FailureRecord], job_title: &str) -> String {
    format_markdown_with_limit(failures, job_title, DEFAULT_MAX_CELL_LEN)
}

/// [`format_markdown`] with an explicit cell truncation limit.
pub fn format_markdown_with_limit(
    failures: &[FailureRecord],
    job_title: &str,
    max_cell_len: usize,
) -> String {
    let cell = |text: &str| sanitize_cell(text, max_cell_len);
    let mut lines: Vec<String> = Vec::new();

    for failure in failures {
        let Some(first) = failure.assertions.first() else {
            continue;
        };

        lines.push(format!("**`{}`** | _{}_", cell(&failure.test), job_title));
        lines.push(String::new());
        lines.push(format!(
            "`{}`: `{}` -- expanded to `{}`",
            cell(&first.location()),
            cell(first.expression_or_placeholder()),
            cell(first.expanded_or_placeholder()),
        ));
        lines.push(String::new());

        lines.push("<details>".to_string());
        lines.push(format!(
            "<summary>All failed assertions ({})</summary>",
            failure.assertions.len()
        ));
        lines.push(String::new());
        lines.push("| Location | Assertion | Got |".to_string());
        lines.push("|----------|-----------|-----|".to_string());
        for assertion in &failure.assertions {
            lines.push(format!(
                "| `{}` | `{}` | `{}` |",
                cell(&assertion.location()),
                cell(assertion.expression_or_placeholder()),
                cell(assertion.expanded_or_placeholder()),
            ));
        }

        let mut messages = failure.messages().peekable();
        if messages.peek().is_some() {
            lines.push(String::new());
            lines.push("INFO messages:".to_string());
            lines.extend(messages.map(|msg| format!("- {msg}")));
        }

        lines.push(String::new());
        lines.push("</details>".to_string());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}
