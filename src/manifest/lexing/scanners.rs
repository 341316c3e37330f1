//! Logos scanners for the runs the state machine delegates
//!
//! Each scanner is run over `buffer[cursor..end]` and only its first token is used, so a run can
//! never cross the end of the lexing window.

use crate::manifest::lexing::tokens::TokenKind;
use logos::Logos;

/// Header name at a line start: the first character plus everything up to a colon or newline.
///
/// The first character is taken as-is (even a colon), matching the line-start rule that only
/// space, newline and tab are special there.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum HeaderNameScan {
    #[regex(r"[^ \t\n][^:\n]*")]
    Name,
}

/// Tokens of a header value outside of the colon context
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum ValueScan {
    #[token("\n")]
    Newline,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("\"")]
    Quote,
    #[token("\t")]
    Tab,
    // Everything that is neither a newline nor a special character
    #[regex(r#"[^\n\t(),:;=\[\]"]+"#)]
    Text,
}

impl ValueScan {
    pub fn kind(self) -> TokenKind {
        match self {
            ValueScan::Newline => TokenKind::Newline,
            ValueScan::OpenParen => TokenKind::OpenParen,
            ValueScan::CloseParen => TokenKind::CloseParen,
            ValueScan::Comma => TokenKind::Comma,
            ValueScan::Colon => TokenKind::Colon,
            ValueScan::Semicolon => TokenKind::Semicolon,
            ValueScan::Equals => TokenKind::Equals,
            ValueScan::OpenBracket => TokenKind::OpenBracket,
            ValueScan::CloseBracket => TokenKind::CloseBracket,
            ValueScan::Quote => TokenKind::Quote,
            ValueScan::Tab | ValueScan::Text => TokenKind::HeaderValuePart,
        }
    }
}

/// Length in bytes of the header name starting at the beginning of `window`.
pub fn scan_header_name(window: &str) -> usize {
    let mut lexer = HeaderNameScan::lexer(window);
    match lexer.next() {
        Some(Ok(HeaderNameScan::Name)) => lexer.span().end,
        _ => first_char_len(window),
    }
}

/// Kind and length in bytes of the value token starting at the beginning of `window`.
pub fn scan_value(window: &str) -> (TokenKind, usize) {
    let mut lexer = ValueScan::lexer(window);
    match lexer.next() {
        Some(Ok(scan)) => (scan.kind(), lexer.span().end),
        _ => (TokenKind::HeaderValuePart, first_char_len(window)),
    }
}

fn first_char_len(window: &str) -> usize {
    window.chars().next().map(char::len_utf8).unwrap_or(0)
}
