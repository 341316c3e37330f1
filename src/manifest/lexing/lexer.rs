//! Resumable manifest lexer
//!
//! The lexer exposes a cursor-style interface: [ManifestLexer::start] positions it on the first
//! token of a window, [ManifestLexer::advance] moves to the next one, and the `token_*` accessors
//! describe the current token. [ManifestLexer::state] is the value to hand back to `start` when
//! lexing is resumed at the end of the current token.

use crate::manifest::lexing::scanners::{scan_header_name, scan_value};
use crate::manifest::lexing::state::LexerState;
use crate::manifest::lexing::tokens::{TokenKind, TokenSpan};
use thiserror::Error;

/// Errors for lexing windows that do not fit the buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("start offset {start} is after end offset {end}")]
    StartAfterEnd { start: usize, end: usize },
    #[error("end offset {end} is out of bounds for a buffer of {len} bytes")]
    EndOutOfBounds { end: usize, len: usize },
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

#[derive(Debug, Clone)]
pub struct ManifestLexer<'a> {
    buffer: &'a str,
    end: usize,
    token_start: usize,
    token_end: usize,
    token: Option<TokenKind>,
    state: LexerState,
}

impl<'a> ManifestLexer<'a> {
    /// An idle lexer over an empty buffer; call [Self::start] to use it.
    pub fn new() -> Self {
        ManifestLexer {
            buffer: "",
            end: 0,
            token_start: 0,
            token_end: 0,
            token: None,
            state: LexerState::Default,
        }
    }

    /// A lexer positioned on the first token of the whole buffer.
    pub fn over(buffer: &'a str) -> Self {
        let mut lexer = ManifestLexer::new();
        lexer.buffer = buffer;
        lexer.end = buffer.len();
        lexer.scan_token();
        lexer
    }

    /// Position the lexer on the first token of `buffer[start..end]`.
    ///
    /// `initial_state` is a value previously returned by [Self::state] (0 for a fresh scan).
    pub fn start(
        &mut self,
        buffer: &'a str,
        start: usize,
        end: usize,
        initial_state: u32,
    ) -> Result<(), LexError> {
        if start > end {
            return Err(LexError::StartAfterEnd { start, end });
        }
        if end > buffer.len() {
            return Err(LexError::EndOutOfBounds {
                end,
                len: buffer.len(),
            });
        }
        for offset in [start, end] {
            if !buffer.is_char_boundary(offset) {
                return Err(LexError::NotCharBoundary(offset));
            }
        }

        tracing::trace!(start, end, initial_state, "starting manifest lexer");

        self.buffer = buffer;
        self.end = end;
        self.token_start = start;
        self.token_end = start;
        self.state = LexerState::from(initial_state);
        self.scan_token();
        Ok(())
    }

    pub fn advance(&mut self) {
        self.token_start = self.token_end;
        self.scan_token();
    }

    /// Kind of the current token, `None` at the end of the window
    pub fn token_type(&self) -> Option<TokenKind> {
        self.token
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn token_end(&self) -> usize {
        self.token_end
    }

    pub fn token_text(&self) -> &'a str {
        &self.buffer[self.token_start..self.token_end]
    }

    /// Raw state after the current token: 0 for the default context, 1 while awaiting a colon.
    pub fn state(&self) -> u32 {
        self.state.as_raw()
    }

    pub fn lexer_state(&self) -> LexerState {
        self.state
    }

    pub fn buffer(&self) -> &'a str {
        self.buffer
    }

    pub fn buffer_end(&self) -> usize {
        self.end
    }

    fn at_line_start(&self) -> bool {
        self.token_start == 0 || self.buffer.as_bytes()[self.token_start - 1] == b'\n'
    }

    fn single(&mut self, kind: TokenKind) {
        self.token = Some(kind);
        self.token_end = self.token_start + 1;
    }

    fn scan_token(&mut self) {
        if self.token_start >= self.end {
            self.token = None;
            self.token_end = self.token_start;
            return;
        }

        let window = &self.buffer[self.token_start..self.end];
        let c = match window.chars().next() {
            Some(c) => c,
            None => {
                self.token = None;
                self.token_end = self.token_start;
                return;
            }
        };

        if self.at_line_start() {
            self.state = LexerState::Default;

            match c {
                ' ' => self.single(TokenKind::SignificantSpace),
                '\n' => self.single(TokenKind::SectionEnd),
                '\t' => self.single(TokenKind::HeaderValuePart),
                _ => {
                    let name_end = self.token_start + scan_header_name(window);
                    if self.buffer.as_bytes().get(name_end) == Some(&b':') && name_end < self.end {
                        self.state = LexerState::AwaitingColon;
                    }
                    self.token = Some(TokenKind::HeaderName);
                    self.token_end = name_end;
                }
            }
        } else if !self.state.is_default() && c == ':' {
            self.single(TokenKind::Colon);
        } else if !self.state.is_default() && c == ' ' {
            self.single(TokenKind::SignificantSpace);
            self.state = LexerState::Default;
        } else {
            self.state = LexerState::Default;
            let (kind, len) = scan_value(window);
            self.token = Some(kind);
            self.token_end = self.token_start + len;
        }
    }
}

impl Default for ManifestLexer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields the current token, then advances.
impl Iterator for ManifestLexer<'_> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.token?;
        let span = self.token_start..self.token_end;
        self.advance();
        Some((kind, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::lexing::tokenize;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_cursor_interface() {
        let mut lexer = ManifestLexer::new();
        lexer.start("A: 1", 0, 4, 0).unwrap();
        assert_eq!(lexer.buffer(), "A: 1");
        assert_eq!(lexer.buffer_end(), 4);

        assert_eq!(lexer.token_type(), Some(TokenKind::HeaderName));
        assert_eq!((lexer.token_start(), lexer.token_end()), (0, 1));
        assert_eq!(lexer.state(), 1);
        assert_eq!(lexer.lexer_state(), LexerState::AwaitingColon);

        lexer.advance();
        assert_eq!(lexer.token_type(), Some(TokenKind::Colon));
        assert_eq!(lexer.state(), 1);

        lexer.advance();
        assert_eq!(lexer.token_type(), Some(TokenKind::SignificantSpace));
        assert_eq!(lexer.state(), 0);
        assert_eq!(lexer.lexer_state(), LexerState::Default);

        lexer.advance();
        assert_eq!(lexer.token_type(), Some(TokenKind::HeaderValuePart));
        assert_eq!(lexer.token_text(), "1");

        lexer.advance();
        assert_eq!(lexer.token_type(), None);
        assert_eq!((lexer.token_start(), lexer.token_end()), (4, 4));
    }

    #[test]
    fn test_empty_window_yields_nothing() {
        let mut lexer = ManifestLexer::new();
        lexer.start("A: 1\n", 3, 3, 0).unwrap();
        assert_eq!(lexer.token_type(), None);
        assert_eq!(lexer.count(), 0);
    }

    #[test]
    fn test_missing_colon_keeps_default_state() {
        let mut lexer = ManifestLexer::over("Foo Bar\n");
        assert_eq!(lexer.token_type(), Some(TokenKind::HeaderName));
        assert_eq!(lexer.token_text(), "Foo Bar");
        assert_eq!(lexer.state(), 0);

        lexer.advance();
        assert_eq!(lexer.token_type(), Some(TokenKind::Newline));
    }

    #[test]
    fn test_header_after_missing_colon_line() {
        assert_eq!(
            kinds("Foo Bar\nB: 2\n"),
            vec![
                TokenKind::HeaderName,
                TokenKind::Newline,
                TokenKind::HeaderName,
                TokenKind::Colon,
                TokenKind::SignificantSpace,
                TokenKind::HeaderValuePart,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_tab_continuation() {
        let tokens = tokenize("A: 1\n\tmore\n");
        assert_eq!(tokens[5], (TokenKind::HeaderValuePart, 5..6));
        assert_eq!(tokens[6], (TokenKind::HeaderValuePart, 6..10));
        assert_eq!(
            tokens
                .iter()
                .filter(|(kind, _)| *kind == TokenKind::HeaderName)
                .count(),
            1
        );
    }

    #[test]
    fn test_space_continuation() {
        assert_eq!(
            kinds("A: 1\n 2\n"),
            vec![
                TokenKind::HeaderName,
                TokenKind::Colon,
                TokenKind::SignificantSpace,
                TokenKind::HeaderValuePart,
                TokenKind::Newline,
                TokenKind::SignificantSpace,
                TokenKind::HeaderValuePart,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_colon_without_space() {
        // No space after the colon: the value run starts right away
        assert_eq!(
            kinds("A:1"),
            vec![
                TokenKind::HeaderName,
                TokenKind::Colon,
                TokenKind::HeaderValuePart
            ]
        );
    }

    #[test]
    fn test_second_space_after_colon_is_value() {
        let tokens = tokenize("A:  x");
        assert_eq!(tokens[2], (TokenKind::SignificantSpace, 2..3));
        assert_eq!(tokens[3], (TokenKind::HeaderValuePart, 3..5));
    }

    #[test]
    fn test_colon_in_value_is_punctuation() {
        assert_eq!(
            kinds("A: uses:=x"),
            vec![
                TokenKind::HeaderName,
                TokenKind::Colon,
                TokenKind::SignificantSpace,
                TokenKind::HeaderValuePart,
                TokenKind::Colon,
                TokenKind::Equals,
                TokenKind::HeaderValuePart,
            ]
        );
    }

    #[test]
    fn test_tab_inside_value_is_value_part() {
        let tokens = tokenize("A: x\ty");
        assert_eq!(tokens[3], (TokenKind::HeaderValuePart, 3..4));
        assert_eq!(tokens[4], (TokenKind::HeaderValuePart, 4..5));
        assert_eq!(tokens[5], (TokenKind::HeaderValuePart, 5..6));
    }

    #[test]
    fn test_special_characters_in_value_context() {
        let table = [
            ("(", TokenKind::OpenParen),
            (")", TokenKind::CloseParen),
            (",", TokenKind::Comma),
            (":", TokenKind::Colon),
            (";", TokenKind::Semicolon),
            ("=", TokenKind::Equals),
            ("[", TokenKind::OpenBracket),
            ("]", TokenKind::CloseBracket),
            ("\"", TokenKind::Quote),
        ];

        for (text, kind) in table {
            // Start one byte in so the character is not at a line start
            let buffer = format!("x{}", text);
            let mut lexer = ManifestLexer::new();
            lexer.start(&buffer, 1, buffer.len(), 0).unwrap();
            let tokens: Vec<_> = lexer.collect();
            assert_eq!(tokens, vec![(kind, 1..2)], "for {:?}", text);
        }
    }

    #[test]
    fn test_blank_lines_are_section_ends() {
        assert_eq!(
            kinds("\n\n"),
            vec![TokenKind::SectionEnd, TokenKind::SectionEnd]
        );
    }

    #[test]
    fn test_window_end_limits_header_name() {
        let mut lexer = ManifestLexer::new();
        lexer.start("Header: value", 0, 3, 0).unwrap();
        assert_eq!(lexer.token_type(), Some(TokenKind::HeaderName));
        assert_eq!(lexer.token_end(), 3);
        assert_eq!(lexer.state(), 0);
    }

    #[test]
    fn test_restart_with_saved_state() {
        let source = "Bundle-Name: Foo\nExport-Package: a;b:=c\n";
        let full = tokenize(source);

        let mut lexer = ManifestLexer::over(source);
        let mut consumed = Vec::new();
        while let Some(kind) = lexer.token_type() {
            consumed.push((kind, lexer.token_start()..lexer.token_end()));
            let offset = lexer.token_end();
            let state = lexer.state();

            let mut resumed = ManifestLexer::new();
            resumed.start(source, offset, source.len(), state).unwrap();
            let mut combined = consumed.clone();
            combined.extend(resumed);
            assert_eq!(combined, full, "restart at {}", offset);

            lexer.advance();
        }
    }

    #[test]
    fn test_multibyte_header_and_value() {
        let tokens = tokenize("N\u{e4}me: \u{fc}ber\n");
        assert_eq!(tokens[0], (TokenKind::HeaderName, 0..5));
        assert_eq!(tokens[3], (TokenKind::HeaderValuePart, 7..12));
    }

    #[test]
    fn test_invalid_windows() {
        let mut lexer = ManifestLexer::new();
        assert_eq!(
            lexer.start("abc", 2, 1, 0),
            Err(LexError::StartAfterEnd { start: 2, end: 1 })
        );
        assert_eq!(
            lexer.start("abc", 0, 9, 0),
            Err(LexError::EndOutOfBounds { end: 9, len: 3 })
        );
        assert_eq!(
            lexer.start("\u{e4}", 1, 2, 0),
            Err(LexError::NotCharBoundary(1))
        );
    }
}
