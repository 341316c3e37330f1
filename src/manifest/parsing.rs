//! Parsing module for the manifest format
//!
//! This module provides the processing pipeline from source text to document tree:
//! 1. **Lexing**: [crate::manifest::lexing] turns the buffer into tokens
//! 2. **Parsing**: [parser::ManifestParser] groups tokens into sections and headers
//! 3. **Value parsing**: each header's value tokens go to the [headers::HeaderParser] that the
//!    [headers::HeaderParserRepository] resolves for the header name
//!
//! Parsing never fails. Tokens that do not fit the grammar become error nodes with a diagnostic,
//! and parsing continues with the next header or section.

pub mod cursor;
pub mod headers;
pub mod parser;

pub use cursor::TokenCursor;
pub use headers::{
    ClauseHeaderParser, HeaderParser, HeaderParserRepository, StandardHeaderParser, ValueInput,
};
pub use parser::ManifestParser;

use crate::manifest::ast::Document;

/// Parse a manifest with the default header parsers.
pub fn parse_document(source: &str) -> Document {
    ManifestParser::default().parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_uses_clause_parser_for_exports() {
        let doc = parse_document("Export-Package: a;version=1,b\n");
        let header = doc.header("Export-Package").unwrap();
        assert_eq!(header.value.clauses().len(), 2);
    }
}
