//! Byte offset to line number mapping.

/// Sorted positions of every `\n` in a text.
///
/// Built once per file so that each block lookup is a binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    breaks: Vec<usize>,
}

impl LineIndex {
    /// Collects the line break positions of `text`.
    pub fn new(text: &str) -> Self {
        let breaks = text
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();

        Self { breaks }
    }

    /// Returns the 1-indexed line containing byte `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        offset_to_line(offset, &self.breaks)
    }

    /// Returns the line break positions.
    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }
}

/// Converts a byte offset to a 1-indexed line number.
///
/// The result is the number of break positions strictly before `offset`,
/// plus one. `breaks` must be sorted ascending.
pub fn offset_to_line(offset: usize, breaks: &[usize]) -> usize {
    breaks.partition_point(|&pos| pos < offset) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_line_index_collects_breaks() {
        let index = LineIndex::new("a\nbc\n\nd");
        assert_eq!(index.breaks(), &[1, 4, 5]);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)] // the newline itself belongs to the line it ends
    #[case(2, 2)]
    #[case(5, 3)]
    #[case(6, 4)]
    #[case(100, 4)]
    fn test_line_of(#[case] offset: usize, #[case] expected: usize) {
        let index = LineIndex::new("a\nbc\n\nd");
        assert_eq!(index.line_of(offset), expected);
    }

    #[test]
    fn test_offset_zero_is_line_one() {
        for text in ["x", "\n", "\n\n\nabc", "no breaks at all"] {
            assert_eq!(LineIndex::new(text).line_of(0), 1);
        }
    }

    #[test]
    fn test_line_of_is_monotonic() {
        let text = "first\r\nsecond\n\nfourth\nfifth";
        let index = LineIndex::new(text);

        let mut previous = 0;
        for offset in 0..=text.len() {
            let line = index.line_of(offset);
            assert!(line >= previous, "line decreased at offset {}", offset);
            previous = line;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_empty_text() {
        let index = LineIndex::new("");
        assert!(index.breaks().is_empty());
        assert_eq!(index.line_of(0), 1);
    }
}
