//! Plain text header values

use crate::manifest::ast::{HeaderValue, ValueText};
use crate::manifest::parsing::headers::{HeaderParser, ValueInput};

/// Reads the whole value as one logical string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHeaderParser;

impl HeaderParser for StandardHeaderParser {
    fn name(&self) -> &str {
        "standard"
    }

    fn parse(&self, input: &ValueInput<'_>) -> HeaderValue {
        HeaderValue::Standard(ValueText::new(input.logical_text(), input.range()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::lexing::TokenKind;

    #[test]
    fn test_standard_value_keeps_punctuation() {
        let source = "A: a;b=c, d\n";
        let tokens = vec![
            (TokenKind::SignificantSpace, 2..3),
            (TokenKind::HeaderValuePart, 3..4),
            (TokenKind::Semicolon, 4..5),
            (TokenKind::HeaderValuePart, 5..6),
            (TokenKind::Equals, 6..7),
            (TokenKind::HeaderValuePart, 7..8),
            (TokenKind::Comma, 8..9),
            (TokenKind::HeaderValuePart, 9..11),
            (TokenKind::Newline, 11..12),
        ];
        let value = StandardHeaderParser.parse(&ValueInput::new(source, &tokens, 2));

        assert_eq!(
            value,
            HeaderValue::Standard(ValueText::new("a;b=c, d", 2..12))
        );
    }
}
