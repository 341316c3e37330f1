//! Token cursor used by the parser
//!
//! One token of lookahead, no backtracking. The cursor also remembers where the last consumed
//! token ended so that nodes can be closed with exact ranges.

use crate::manifest::lexing::{TokenKind, TokenSpan};
use std::ops::Range;

pub struct TokenCursor<'s> {
    source: &'s str,
    tokens: Vec<TokenSpan>,
    pos: usize,
}

impl<'s> TokenCursor<'s> {
    pub fn new(source: &'s str, tokens: Vec<TokenSpan>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn token_type(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|(kind, _)| *kind)
    }

    pub fn token_range(&self) -> Option<Range<usize>> {
        self.tokens.get(self.pos).map(|(_, range)| range.clone())
    }

    pub fn token_text(&self) -> Option<&'s str> {
        self.token_range().and_then(|range| self.source.get(range))
    }

    pub fn advance(&mut self) {
        if !self.eof() {
            self.pos += 1;
        }
    }

    /// Byte offset of the current token, or of the end of input
    pub fn current_offset(&self) -> usize {
        match self.tokens.get(self.pos) {
            Some((_, range)) => range.start,
            None => self.last_end(),
        }
    }

    /// End offset of the most recently consumed token
    pub fn last_end(&self) -> usize {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some((_, range)) => range.end,
            None => self
                .tokens
                .first()
                .map(|(_, range)| range.start)
                .unwrap_or(0),
        }
    }

    /// Consume tokens until a header end token or end of input; returns what was consumed.
    pub fn consume_header_value(&mut self) -> &[TokenSpan] {
        let start = self.pos;
        while let Some(kind) = self.token_type() {
            if kind.is_header_end() {
                break;
            }
            self.advance();
        }
        &self.tokens[start..self.pos]
    }

    pub fn source(&self) -> &'s str {
        self.source
    }
}
