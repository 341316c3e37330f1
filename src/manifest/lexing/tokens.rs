//! Token definitions for the manifest format
//!
//! Tokens carry no text of their own. A token is a kind plus a byte range into the buffer that was
//! lexed, and every byte of the lexed window belongs to exactly one token.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A token kind paired with its byte range in the source
pub type TokenSpan = (TokenKind, Range<usize>);

/// All possible tokens in the manifest format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    HeaderName,
    Colon,
    SignificantSpace,
    HeaderValuePart,
    Newline,
    SectionEnd,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    Equals,
    OpenBracket,
    CloseBracket,
    Quote,
}

impl TokenKind {
    /// Map a value-context special character to its token kind.
    ///
    /// A tab maps to a value part: tabs only mean something at a line start.
    pub fn from_special_char(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            ';' => Some(TokenKind::Semicolon),
            '=' => Some(TokenKind::Equals),
            '[' => Some(TokenKind::OpenBracket),
            '"' => Some(TokenKind::Quote),
            '\t' => Some(TokenKind::HeaderValuePart),
            ']' => Some(TokenKind::CloseBracket),
            _ => None,
        }
    }

    /// Tokens that terminate a header's value
    pub fn is_header_end(&self) -> bool {
        matches!(self, TokenKind::SectionEnd | TokenKind::HeaderName)
    }

    /// Check if this token is one of the single-character punctuation kinds
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Colon
                | TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Equals
                | TokenKind::OpenBracket
                | TokenKind::CloseBracket
                | TokenKind::Quote
        )
    }

    /// Check if this token is a line break of either flavour
    pub fn is_line_break(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::SectionEnd)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::HeaderName => "HEADER_NAME",
            TokenKind::Colon => "COLON",
            TokenKind::SignificantSpace => "SIGNIFICANT_SPACE",
            TokenKind::HeaderValuePart => "HEADER_VALUE_PART",
            TokenKind::Newline => "NEWLINE",
            TokenKind::SectionEnd => "SECTION_END",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Equals => "EQUALS",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::Quote => "QUOTE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
