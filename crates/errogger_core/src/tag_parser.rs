//! Tag-aware parsing of normalized comment lines.
//!
//! Lines are consumed by a two-state machine. Everything before the first
//! tag line is description; from then on each tag line opens a new tag and
//! every other line continues the value of the open tag.
//!
//! A tag line starts (after indentation) with `@` immediately followed by an
//! identifier made of ASCII letters, digits, `_` or `-`:
//!
//! ```text
//! Raised when the connection pool is exhausted.   <- description
//! @error PoolExhausted                            <- tag "error"
//! @param {number} size the pool size,             <- tag "param", annotation dropped
//!   measured in connections                       <- continuation of "param"
//! ```

use crate::types::Tag;

/// Character that introduces a tag.
pub const TAG_MARKER: char = '@';

/// Description text and tags of one comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock {
    pub description: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Description,
    InTags,
}

/// Incremental parser over normalized content lines.
#[derive(Debug, Default)]
pub struct TagParser {
    state: State,
    description: Vec<String>,
    tags: Vec<Tag>,
    current: Option<Tag>,
}

impl TagParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next content line.
    pub fn feed(&mut self, line: &str) {
        if is_tag_line(line) {
            self.state = State::InTags;
            self.close_current();

            match split_tag_line(line) {
                Some((name, value)) => self.current = Some(Tag::new(name, value)),
                None => {
                    self.description.push(line.to_string());
                    self.state = State::Description;
                }
            }
            return;
        }

        match (self.state, self.current.as_mut()) {
            (State::InTags, Some(tag)) => {
                tag.raw.push('\n');
                tag.raw.push_str(line);
            }
            _ => self.description.push(line.to_string()),
        }
    }

    /// Closes the open tag and assembles the final block.
    pub fn finish(mut self) -> ParsedBlock {
        self.close_current();

        let description = self
            .description
            .iter()
            .map(|line| line.trim_end_matches([' ', '\t']))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        ParsedBlock {
            description,
            tags: self.tags,
        }
    }

    fn close_current(&mut self) {
        if let Some(mut tag) = self.current.take() {
            tag.raw = strip_annotation(tag.raw.trim_end()).to_string();
            self.tags.push(tag);
        }
    }
}

/// Parses a block's content lines into description and tags.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> ParsedBlock {
    let mut parser = TagParser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Returns true if `line` opens a new tag.
pub fn is_tag_line(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(TAG_MARKER)
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_identifier_char)
}

/// Splits a tag line into its name and the rest of the line.
///
/// Must accept exactly the lines [`is_tag_line`] accepts.
pub fn split_tag_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix(TAG_MARKER)?;
    let name_len = rest
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }

    let (name, value) = rest.split_at(name_len);
    Some((name, value.trim_start()))
}

/// Drops a leading `{...}` annotation and the whitespace after it.
fn strip_annotation(value: &str) -> &str {
    if let Some(body) = value.trim_start().strip_prefix('{')
        && let Some(close) = body.find('}')
        && close > 0
    {
        return body[close + 1..].trim_start();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tag(name: &str, raw: &str) -> Tag {
        Tag::new(name, raw)
    }

    #[test]
    fn test_description_and_tags() {
        let parsed = parse_lines(&["Connection failed.", "@tagA v1", "@tagB v2"]);

        assert_eq!(parsed.description, "Connection failed.");
        assert_eq!(parsed.tags, vec![tag("tagA", "v1"), tag("tagB", "v2")]);
    }

    #[test]
    fn test_description_only() {
        let parsed = parse_lines(&["", "First line.   ", "", "Second line.\t", ""]);

        assert_eq!(parsed.description, "First line.\n\nSecond line.");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_lines::<&str>(&[]);
        assert_eq!(parsed, ParsedBlock::default());
    }

    #[test]
    fn test_tag_without_value() {
        let parsed = parse_lines(&["@error"]);
        assert_eq!(parsed.tags, vec![tag("error", "")]);
    }

    #[test]
    fn test_continuation_lines_keep_internal_whitespace() {
        let parsed = parse_lines(&[
            "@example",
            "  connect({",
            "",
            "    retries: 3 ",
            "  });   ",
            "",
        ]);

        assert_eq!(
            parsed.tags,
            vec![tag("example", "\n  connect({\n\n    retries: 3 \n  });")]
        );
    }

    #[rstest]
    #[case::annotation("@param {string} a name", "a name")]
    #[case::annotation_only("@returns {Promise<void>}", "")]
    #[case::empty_braces_kept("@param {} value", "{} value")]
    #[case::unclosed_brace_kept("@param {string value", "{string value")]
    #[case::brace_later_kept("@param name {string}", "name {string}")]
    fn test_annotation_stripping(#[case] line: &str, #[case] expected: &str) {
        let parsed = parse_lines(&[line]);
        assert_eq!(parsed.tags[0].raw, expected);
    }

    #[test]
    fn test_annotation_on_multi_line_value() {
        let parsed = parse_lines(&["@throws {DbError} when the", "pool is empty"]);
        assert_eq!(parsed.tags, vec![tag("throws", "when the\npool is empty")]);
    }

    #[test]
    fn test_repeated_tags_keep_order() {
        let parsed = parse_lines(&["@error First", "@see docs", "@error Second"]);

        let names: Vec<_> = parsed.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["error", "see", "error"]);
        assert_eq!(parsed.tags[0].raw, "First");
        assert_eq!(parsed.tags[2].raw, "Second");
    }

    #[test]
    fn test_tag_name_stops_at_non_identifier() {
        let parsed = parse_lines(&["@error:Custom thing", "@my_tag-2 value"]);
        assert_eq!(
            parsed.tags,
            vec![tag("error", ":Custom thing"), tag("my_tag-2", "value")]
        );
    }

    #[test]
    fn test_marker_without_identifier_is_continuation() {
        let parsed = parse_lines(&["Intro", "@ not a tag", "@error Foo", "@ still foo"]);

        assert_eq!(parsed.description, "Intro\n@ not a tag");
        assert_eq!(parsed.tags, vec![tag("error", "Foo\n@ still foo")]);
    }

    #[test]
    fn test_marker_mid_line_is_not_a_tag() {
        let parsed = parse_lines(&["Mail admin@example.com for help."]);
        assert_eq!(parsed.description, "Mail admin@example.com for help.");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_description_lines_after_tags_are_continuations() {
        let parsed = parse_lines(&["@error Foo", "", "More about Foo."]);
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.tags, vec![tag("error", "Foo\n\nMore about Foo.")]);
    }

    #[rstest]
    #[case("@error", true)]
    #[case("   @error Foo", true)]
    #[case("@_private", true)]
    #[case("@-dash", true)]
    #[case("@", false)]
    #[case("@ error", false)]
    #[case("@{x}", false)]
    #[case("text @error", false)]
    #[case("@über", false)]
    fn test_classification_and_split_agree(#[case] line: &str, #[case] is_tag: bool) {
        assert_eq!(is_tag_line(line), is_tag);
        assert_eq!(split_tag_line(line).is_some(), is_tag);
    }

    #[test]
    fn test_split_tag_line() {
        assert_eq!(split_tag_line("  @error   Foo bar "), Some(("error", "Foo bar ")));
        assert_eq!(split_tag_line("@see"), Some(("see", "")));
    }
}
