//! Source location utilities for converting byte offsets to line/column positions
//!
//! Token and node ranges are byte offsets. Diagnostics are reported to people as lines and
//! columns, which is what this module converts to.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Represents a position in source code (zero-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Represents a span in source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Line table for one source text
pub struct SourceLocation {
    /// Offset of the first byte of every line
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { line_starts }
    }

    /// Zero-based line and column of a byte offset. Columns are byte counts.
    pub fn byte_to_position(&self, offset: usize) -> Position {
        // line_starts[0] is 0, so at least one start is <= offset
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    pub fn range_to_span(&self, range: &Range<usize>) -> Span {
        Span::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("Bundle-Name: x");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(11), Position::new(0, 11));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("A: 1\nB: 2\n\nC: 3");

        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(4), Position::new(0, 4));
        assert_eq!(loc.byte_to_position(5), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(10), Position::new(2, 0));
        assert_eq!(loc.byte_to_position(11), Position::new(3, 0));
        assert_eq!(loc.byte_to_position(14), Position::new(3, 3));
    }

    #[test]
    fn test_range_to_span_multiline() {
        let loc = SourceLocation::new("A: 1\n 2\nB: 3");
        let span = loc.range_to_span(&(3..7));

        assert_eq!(span.start, Position::new(0, 3));
        assert_eq!(span.end, Position::new(1, 2));
        assert_eq!(span.to_string(), "0:3..1:2");
    }

    #[test]
    fn test_offset_past_trailing_newline() {
        let loc = SourceLocation::new("a\nb\n");
        assert_eq!(loc.byte_to_position(4), Position::new(2, 0));
        assert_eq!(loc.byte_to_position(3), Position::new(1, 1));
    }
}
