//! Markdown cell sanitization.

/// Sanitize text for use in a markdown table cell or an inline code span.
///
/// Line breaks become spaces and `|` is escaped so the value cannot break the
/// table row. Values longer than `max_len` characters are cut to `max_len`
/// characters followed by `...`.
pub fn sanitize_cell(text: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | '\r' => out.push(' '),
            '|' => out.push_str("\\|"),
            other => out.push(other),
        }
    }

    match out.char_indices().nth(max_len) {
        Some((cut, _)) => {
            out.truncate(cut);
            out.push_str("...");
            out
        }
        None => out,
    }
}
