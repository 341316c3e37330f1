//! Section and header parser
//!
//! Grammar, one token of lookahead:
//!
//! ```text
//! document := section*
//! section  := (header | <error: header expected>)* SECTION_END?
//! header   := HEADER_NAME (COLON value | <error: ':' expected>)
//! value    := <tokens up to the next HEADER_NAME or SECTION_END>, handed to a HeaderParser
//! ```
//!
//! Error recovery always skips to the next HEADER_NAME or SECTION_END, so every token ends up in
//! exactly one node and parsing always reaches the end of input.

use crate::manifest::ast::{
    DiagnosticKind, Document, ErrorNode, Header, HeaderValue, Section, SectionItem,
};
use crate::manifest::lexing::{tokenize, TokenKind, TokenSpan};
use crate::manifest::parsing::cursor::TokenCursor;
use crate::manifest::parsing::headers::{HeaderParserRepository, ValueInput};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Clone)]
pub struct ManifestParser {
    repository: Arc<HeaderParserRepository>,
}

impl ManifestParser {
    pub fn new(repository: Arc<HeaderParserRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &HeaderParserRepository {
        &self.repository
    }

    /// Lex and parse a whole buffer.
    pub fn parse(&self, source: &str) -> Document {
        self.parse_tokens(source, tokenize(source))
    }

    /// Parse an already lexed token stream over `source`.
    pub fn parse_tokens(&self, source: &str, tokens: Vec<TokenSpan>) -> Document {
        trace!(tokens = tokens.len(), "parsing manifest");

        let mut cursor = TokenCursor::new(source, tokens);
        let mut sections = Vec::new();

        while !cursor.eof() {
            sections.push(self.parse_section(&mut cursor));
        }

        Document::new(source, sections)
    }

    fn parse_section(&self, cursor: &mut TokenCursor<'_>) -> Section {
        let start = cursor.current_offset();
        let mut items = Vec::new();
        let mut end = None;

        while let Some(kind) = cursor.token_type() {
            match kind {
                TokenKind::HeaderName => {
                    items.push(SectionItem::Header(self.parse_header(cursor)));
                }
                TokenKind::SectionEnd => {
                    end = cursor.token_range();
                    cursor.advance();
                    break;
                }
                _ => {
                    let error_start = cursor.current_offset();
                    cursor.consume_header_value();
                    let range = error_start..cursor.last_end();
                    debug!(?range, "header expected");
                    items.push(SectionItem::Error(ErrorNode::new(
                        DiagnosticKind::HeaderExpected,
                        range,
                    )));
                }
            }
        }

        trace!(items = items.len(), "closed section");
        Section {
            items,
            end,
            range: start..cursor.last_end(),
        }
    }

    fn parse_header(&self, cursor: &mut TokenCursor<'_>) -> Header {
        let start = cursor.current_offset();
        let name_range = cursor.token_range().unwrap_or(start..start);
        let name = cursor.token_text().unwrap_or_default().to_string();
        cursor.advance();

        let value = if cursor.token_type() == Some(TokenKind::Colon) {
            let colon_end = cursor.token_range().map(|range| range.end).unwrap_or(start);
            cursor.advance();
            let tokens = cursor.consume_header_value().to_vec();
            let input = ValueInput::new(cursor.source(), &tokens, colon_end);
            let parser = self.repository.resolve(&name);
            trace!(header = %name, parser = parser.name(), "parsing header value");
            parser.parse(&input)
        } else {
            let error_start = cursor.current_offset();
            cursor.consume_header_value();
            let range = error_start..cursor.last_end().max(error_start);
            debug!(header = %name, ?range, "':' expected");
            HeaderValue::Missing(ErrorNode::new(DiagnosticKind::ColonExpected, range))
        };

        Header {
            name,
            name_range,
            value,
            range: start..cursor.last_end(),
        }
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new(Arc::new(HeaderParserRepository::with_defaults()))
    }
}
