//! Mapping from byte offsets to line/column positions.

use text_size::TextSize;

/// A line/column position (0-indexed, columns in bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Precomputed newline table for a single text.
///
/// Built once per document; `line_col` is then a binary search over the
/// newline offsets. Columns are byte offsets within the line, not display
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset one past each `\n` in the text, i.e. the start of every line
    /// after the first.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let line_starts = text
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| TextSize::new(i as u32 + 1))
            .collect();
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end of the text clamp to the final position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = if line == 0 {
            TextSize::new(0)
        } else {
            self.line_starts[line - 1]
        };
        LineCol {
            line: line as u32,
            col: (offset - line_start).into(),
        }
    }

    /// Number of lines in the indexed text (at least 1, even when empty).
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
    }

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello");
        assert_eq!(index.line_col(TextSize::new(3)), LineCol { line: 0, col: 3 });
    }

    #[test]
    fn test_multi_line() {
        let index = LineIndex::new("ab\ncd\nef");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(TextSize::new(2)), LineCol { line: 0, col: 2 });
        assert_eq!(index.line_col(TextSize::new(3)), LineCol { line: 1, col: 0 });
        assert_eq!(index.line_col(TextSize::new(7)), LineCol { line: 2, col: 1 });
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let index = LineIndex::new("ab\nc");
        assert_eq!(index.line_col(TextSize::new(99)), LineCol { line: 1, col: 1 });
    }

    #[test]
    fn test_trailing_newline_starts_new_line() {
        let index = LineIndex::new("ab\n");
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_col(TextSize::new(3)), LineCol { line: 1, col: 0 });
    }
}
