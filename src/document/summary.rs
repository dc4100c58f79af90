//! Version summaries
//!
//! A summary is the content with every whitespace run collapsed to a single
//! space, trimmed, and cut to at most [`SUMMARY_LEN`] characters. A cut
//! summary ends with an ellipsis that counts toward the limit.

/// Maximum summary length in characters
pub const SUMMARY_LEN: usize = 80;

use super::text::collapse_space;

const ELLIPSIS: char = '…';

/// Derive the summary stored alongside a version
pub fn summarize(content: &str) -> String {
    truncate(content, SUMMARY_LEN)
}

/// Collapse whitespace and cut `text` to `limit` characters
pub fn truncate(text: &str, limit: usize) -> String {
    let collapsed = collapse_space(text);

    if collapsed.chars().count() <= limit {
        return collapsed;
    }

    let mut cut: String = collapsed.chars().take(limit.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}
