//! Whitespace rules shared by summaries and version names
//!
//! Whitespace is Unicode White_Space plus the byte order mark U+FEFF.

/// Whether `c` counts as whitespace for trimming and collapsing
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim leading and trailing whitespace as defined by [`is_space`]
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_space(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
