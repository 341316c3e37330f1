//! Factories for expected token streams

use crate::manifest::lexing::{TokenKind, TokenSpan};

pub fn mk_token(kind: TokenKind, start: usize, end: usize) -> TokenSpan {
    (kind, start..end)
}

/// `mk_tokens(&[(TokenKind::Colon, 1, 2)])` is `vec![(TokenKind::Colon, 1..2)]`
pub fn mk_tokens(specs: &[(TokenKind, usize, usize)]) -> Vec<TokenSpan> {
    specs
        .iter()
        .map(|(kind, start, end)| mk_token(*kind, *start, *end))
        .collect()
}
