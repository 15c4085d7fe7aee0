//! Comment delimiter stripping.

use crate::extractor::{BLOCK_CLOSE, BLOCK_OPEN};

/// Leading marker character of a comment continuation line.
const LINE_MARKER: char = '*';

/// Turns a raw `/** ... */` block into its content lines.
///
/// The opener and at most one following whitespace character are removed,
/// as is the closer together with the whitespace before it. Every remaining
/// line loses its indentation and an optional leading `*` (plus at most one
/// whitespace character after it). Empty lines are kept.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut inner = raw.strip_prefix(BLOCK_OPEN).unwrap_or(raw);
    inner = strip_one_whitespace(inner);

    if let Some(body) = inner.trim_end().strip_suffix(BLOCK_CLOSE) {
        inner = body.trim_end();
    }

    inner
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line).trim_start();
            match line.strip_prefix(LINE_MARKER) {
                Some(rest) => strip_one_whitespace(rest).to_string(),
                None => line.to_string(),
            }
        })
        .collect()
}

/// Removes a single leading whitespace character, if present.
fn strip_one_whitespace(s: &str) -> &str {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_single_line() {
        assert_eq!(normalize("/** @error Foo */"), vec!["@error Foo"]);
    }

    #[test]
    fn test_normalize_multi_line() {
        let raw = "/**\n   * Something failed.\n   *\n   * @error Foo\n   */";
        assert_eq!(normalize(raw), vec!["Something failed.", "", "@error Foo"]);
    }

    #[test]
    fn test_normalize_keeps_extra_indentation_after_marker() {
        let raw = "/**\n * @example\n *     indented();\n */";
        assert_eq!(normalize(raw), vec!["@example", "    indented();"]);
    }

    #[test]
    fn test_normalize_lines_without_marker() {
        let raw = "/**\n    no star here\n    * star\n*/";
        assert_eq!(normalize(raw), vec!["no star here", "star"]);
    }

    #[test]
    fn test_normalize_opener_consumes_one_whitespace_only() {
        let raw = "/**\n\n * after blank\n */";
        assert_eq!(normalize(raw), vec!["", "after blank"]);
    }

    #[test]
    fn test_normalize_crlf() {
        let raw = "/**\r\n * Windows\r\n * @error Win\r\n */";
        assert_eq!(normalize(raw), vec!["", "Windows", "@error Win"]);
    }

    #[test]
    fn test_normalize_strips_only_one_star() {
        assert_eq!(normalize("/***/"), vec![""]);
        assert_eq!(normalize("/**\n ** bold\n */"), vec!["* bold"]);
    }
}
