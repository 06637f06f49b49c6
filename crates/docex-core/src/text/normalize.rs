//! Whitespace and line cleanup applied to any extracted text.

/// Trim every line, drop blank lines, and rejoin with `\n`.
///
/// Total over any input and idempotent.
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of non-whitespace characters in `text`.
pub fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
