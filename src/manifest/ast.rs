//! Document tree for manifest files
//!
//! The tree mirrors the shape of the source: a [Document] is an ordered list of sections, a
//! [Section] an ordered list of headers and error nodes, and a [Header] a name plus a parsed value.
//!
//! Every node records the byte range it covers. Malformed input never aborts parsing; it shows up
//! as an [ErrorNode] carrying a [Diagnostic], placed exactly where the malformed text was.

pub mod diagnostic;
pub mod document;
pub mod position;
pub mod value;

pub use diagnostic::{Diagnostic, DiagnosticKind, ErrorNode};
pub use document::{Document, Header, NodeKind, Section, SectionItem};
pub use position::{Position, SourceLocation, Span};
pub use value::{Clause, HeaderValue, Parameter, ParameterKind, ValueText};
