//! # bnd-manifest
//!
//! A lexer and parser for bnd instruction files and `MANIFEST.MF` headers.
//!
//! The lexer is resumable: it can be restarted at any token boundary with a
//! previously saved state, which is what an editor needs for incremental
//! highlighting. The parser never fails; malformed input becomes error nodes
//! inside an otherwise complete tree.
//!
//! ## Testing
//!
//! Shared factories live in the [testing module](manifest::testing).

pub mod manifest;

pub use manifest::ast::{Diagnostic, DiagnosticKind, Document};
pub use manifest::lexing::{tokenize, LexerState, ManifestLexer, TokenKind};
pub use manifest::parsing::{parse_document, HeaderParserRepository, ManifestParser};
