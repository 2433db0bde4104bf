use super::{Position, Span, TextRange, TextSize};

/// Maps byte offsets of one source text to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line; always starts with 0
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::from(idx as u32 + 1)),
        );
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Number of lines, counting a trailing empty line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line/column of `offset`. Offsets past the end clamp to the end.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = offset - self.line_starts[line];
        Position::new(line, u32::from(column) as usize)
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.position(range.start()), self.position(range.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 0, 3)]
    #[case(4, 1, 0)]
    #[case(6, 1, 2)]
    #[case(7, 2, 0)]
    #[case(99, 2, 0)]
    fn offsets_map_to_positions(#[case] offset: u32, #[case] line: usize, #[case] column: usize) {
        let index = LineIndex::new("abc\nde\n");
        assert_eq!(
            index.position(TextSize::from(offset)),
            Position::new(line, column)
        );
    }

    #[test]
    fn span_and_display() {
        let index = LineIndex::new("const a = 1;\nexport default a;");
        let span = index.span(TextRange::new(13.into(), 19.into()));
        assert_eq!(span, Span::new(Position::new(1, 0), Position::new(1, 6)));
        assert!(span.contains(Position::new(1, 3)));
        assert!(!span.contains(Position::new(0, 3)));
        assert_eq!(span.start.to_string(), "2:1");
        assert_eq!(index.line_count(), 2);
    }
}
