//! Lexer
//!
//! This module turns a manifest buffer into a flat stream of typed tokens.
//!
//! Structure:
//!     The lexer is a small hand-written state machine ([lexer::ManifestLexer]) with exactly one
//! bit of context: whether the current line produced a header name that is still waiting for its
//! colon. The decisions that depend on that context (line start, colon, the space after the colon)
//! are made by the state machine; the runs in between (header names and value parts) are matched by
//! logos scanners, see [scanners].
//!
//! Line Start Handling
//!
//!     Whether a token begins at a line start is recomputed for every token from the previous
//!     character of the buffer. This is what makes the lexer resumable: restarting at a token
//!     boundary with the saved [LexerState] reproduces the same tokens as a full scan would.
//!
//!     At a line start:
//!     - a space is a significant space (continuation line),
//!     - a newline is a section end (blank line),
//!     - a tab is a value part (tab continuation),
//!     - anything else starts a header name, which runs up to the next colon or newline.
//!
//!     Joining continuation lines into one logical value is left to the value parsers.

pub mod lexer;
pub mod scanners;
pub mod state;
pub mod tokens;

pub use lexer::{LexError, ManifestLexer};
pub use state::LexerState;
pub use tokens::{TokenKind, TokenSpan};

/// Tokenize a whole buffer, starting in the default context.
pub fn tokenize(source: &str) -> Vec<TokenSpan> {
    ManifestLexer::over(source).collect()
}
