//! Markdown table rendering for retry summaries.

use super::parser::RetryEntry;

const ICON_PASSED: &str = ":white_check_mark:";
const ICON_FAILED: &str = ":x:";

/// Render retry entries as a markdown table headed by the job title.
///
/// Rows are sorted by the full entry tuple. Returns `None` for no entries.
pub fn format_retry_table(entries: &[RetryEntry], job_title: &str) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut sorted: Vec<&RetryEntry> = entries.iter().collect();
    sorted.sort();

    let mut out = String::new();
    out.push_str(&format!("**{job_title}**\n\n"));
    out.push_str("| Test | Result | Attempts |\n");
    out.push_str("|------|--------|----------|\n");
    for entry in sorted {
        let icon = if entry.is_passed() {
            ICON_PASSED
        } else {
            ICON_FAILED
        };
        out.push_str(&format!(
            "| `{}` | {} {} | {} |\n",
            entry.test_name, icon, entry.result, entry.attempts
        ));
    }
    out.push('\n');

    Some(out)
}
