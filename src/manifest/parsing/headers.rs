//! Header value parsers
//!
//! The section parser hands every header value to a [HeaderParser]. Which parser runs is decided
//! by the [HeaderParserRepository] from the header name; headers without a registered parser use
//! the repository's default, normally [StandardHeaderParser].
//!
//! Value parsers work on a [ValueInput]: the value tokens plus the source they point into. Value
//! grammar never produces diagnostics; a parser that cannot make sense of a value falls back to
//! the plain text form.

pub mod clauses;
pub mod known_headers;
pub mod repository;
pub mod standard;

pub use clauses::ClauseHeaderParser;
pub use repository::HeaderParserRepository;
pub use standard::StandardHeaderParser;

use crate::manifest::ast::HeaderValue;
use crate::manifest::lexing::{TokenKind, TokenSpan};
use std::ops::Range;

/// Parses the value of a header into a [HeaderValue]
pub trait HeaderParser: Send + Sync {
    /// Short name, used in logs
    fn name(&self) -> &str;

    fn parse(&self, input: &ValueInput<'_>) -> HeaderValue;
}

/// The tokens of one header value, everything after the colon up to the next header or section
/// end.
#[derive(Debug, Clone)]
pub struct ValueInput<'a> {
    source: &'a str,
    tokens: &'a [TokenSpan],
    range: Range<usize>,
}

impl<'a> ValueInput<'a> {
    /// `colon_end` positions the empty range of a value with no tokens.
    pub fn new(source: &'a str, tokens: &'a [TokenSpan], colon_end: usize) -> Self {
        let range = match (tokens.first(), tokens.last()) {
            (Some((_, first)), Some((_, last))) => first.start..last.end,
            _ => colon_end..colon_end,
        };
        Self {
            source,
            tokens,
            range,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &'a [TokenSpan] {
        self.tokens
    }

    /// Byte range covered by the value tokens
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn text(&self, range: &Range<usize>) -> &'a str {
        self.source.get(range.clone()).unwrap_or("")
    }

    /// Value tokens with continuation noise removed.
    ///
    /// Dropped: line breaks, significant spaces (after the colon and at the start of a
    /// continuation line) and a tab opening a continuation line. A `\` right before a line break
    /// is cut from the end of its token, and the token is dropped if nothing is left.
    pub fn logical_tokens(&self) -> Vec<TokenSpan> {
        let mut logical = Vec::with_capacity(self.tokens.len());

        for (index, (kind, range)) in self.tokens.iter().enumerate() {
            match kind {
                TokenKind::Newline | TokenKind::SectionEnd | TokenKind::SignificantSpace => {
                    continue
                }
                TokenKind::HeaderValuePart
                    if self.is_line_start(range.start) && self.text(range) == "\t" =>
                {
                    continue
                }
                _ => {}
            }

            let mut range = range.clone();
            let before_break = matches!(
                self.tokens.get(index + 1),
                Some((TokenKind::Newline | TokenKind::SectionEnd, _))
            );
            if before_break && self.text(&range).ends_with('\\') {
                range.end -= 1;
                if range.is_empty() {
                    continue;
                }
            }
            logical.push((*kind, range));
        }

        logical
    }

    /// The value as one string: logical tokens joined, then trimmed
    pub fn logical_text(&self) -> String {
        let joined: String = self
            .logical_tokens()
            .iter()
            .map(|(_, range)| self.text(range))
            .collect();
        joined.trim().to_string()
    }

    fn is_line_start(&self, offset: usize) -> bool {
        offset > 0 && self.source.as_bytes().get(offset - 1) == Some(&b'\n')
    }
}
