//! Parse diagnostics
//!
//! Diagnostics never stop a parse. Each one sits on an [ErrorNode] that covers the tokens the
//! parser could not place, so the tree still accounts for every byte of input.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Tokens inside a section that do not start with a header name
    HeaderExpected,
    /// A header name that is not followed by a colon
    ColonExpected,
}

impl DiagnosticKind {
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticKind::HeaderExpected => "Header expected",
            DiagnosticKind::ColonExpected => "':' expected",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: Range<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.kind, self.range)
    }
}

/// A run of tokens the parser could not fit into the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNode {
    pub diagnostic: Diagnostic,
    pub range: Range<usize>,
}

impl ErrorNode {
    pub fn new(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self {
            diagnostic: Diagnostic::new(kind, range.clone()),
            range,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.diagnostic.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DiagnosticKind::HeaderExpected.to_string(), "Header expected");
        assert_eq!(DiagnosticKind::ColonExpected.to_string(), "':' expected");
    }

    #[test]
    fn test_error_node_shares_range() {
        let node = ErrorNode::new(DiagnosticKind::ColonExpected, 7..8);
        assert_eq!(node.diagnostic.range, 7..8);
        assert_eq!(node.kind(), DiagnosticKind::ColonExpected);
        assert_eq!(node.diagnostic.to_string(), "':' expected at 7..8");
    }
}
