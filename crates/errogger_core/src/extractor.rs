//! Documentation comment block discovery.

/// Opening delimiter of a documentation comment.
pub const BLOCK_OPEN: &str = "/**";

/// Closing delimiter of a documentation comment.
pub const BLOCK_CLOSE: &str = "*/";

/// A comment block located in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// Verbatim block text including both delimiters.
    pub raw: &'a str,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
}

/// Finds every `/** ... */` block in `text`, in order of appearance.
///
/// A block ends at the first `*/` after its opener; blocks never nest.
/// An opener without a matching close produces no block.
pub fn find_blocks(text: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(rel_open) = text[cursor..].find(BLOCK_OPEN) {
        let open = cursor + rel_open;
        let body_start = open + BLOCK_OPEN.len();

        let Some(rel_close) = text[body_start..].find(BLOCK_CLOSE) else {
            // No close marker follows this opener, so none follows any later one either.
            break;
        };
        let end = body_start + rel_close + BLOCK_CLOSE.len();

        blocks.push(RawBlock {
            raw: &text[open..end],
            offset: open,
        });
        cursor = end;
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_blocks_empty() {
        assert!(find_blocks("").is_empty());
        assert!(find_blocks("const x = 1;").is_empty());
    }

    #[test]
    fn test_find_blocks_multiple_in_order() {
        let text = "/** one */\ncode();\n/**\n * two\n */";
        let blocks = find_blocks(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].raw, "/** one */");
        assert_eq!(blocks[0].offset, 0);
        assert_eq!(blocks[1].raw, "/**\n * two\n */");
        assert_eq!(blocks[1].offset, 19);
    }

    #[test]
    fn test_find_blocks_first_close_wins() {
        let text = "/** outer /** inner */ tail */";
        let blocks = find_blocks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw, "/** outer /** inner */");
    }

    #[test]
    fn test_find_blocks_ignores_unterminated_opener() {
        let text = "/** closed */ x /** never closed";
        let blocks = find_blocks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw, "/** closed */");
        assert!(find_blocks("/** dangling\n * @error Foo").is_empty());
    }

    #[test]
    fn test_find_blocks_ignores_plain_comments() {
        let text = "/* not docs */ // nor this\n/** docs */";
        let blocks = find_blocks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].raw, "/** docs */");
    }

    #[test]
    fn test_find_blocks_close_must_follow_opener() {
        assert!(find_blocks("/**/").is_empty());
        assert_eq!(find_blocks("/***/")[0].raw, "/***/");
    }

    #[test]
    fn test_find_blocks_multibyte_text() {
        let text = "// ü\n/** ✓ */";
        let blocks = find_blocks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(&text[blocks[0].offset..], "/** ✓ */");
    }
}
