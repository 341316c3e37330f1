//! Header value nodes

use crate::manifest::ast::diagnostic::ErrorNode;
use serde::Serialize;
use std::ops::Range;

/// A piece of value text and the byte range it was read from.
///
/// The text is logical: continuation markers are removed, so it may be shorter than the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueText {
    pub text: String,
    pub range: Range<usize>,
}

impl ValueText {
    pub fn new(text: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HeaderValue {
    /// The whole value as one logical string
    Standard(ValueText),
    /// A comma separated list of OSGi clauses
    Clauses { clauses: Vec<Clause>, range: Range<usize> },
    /// The colon is missing; the rest of the header is an error span
    Missing(ErrorNode),
}

impl HeaderValue {
    pub fn range(&self) -> Range<usize> {
        match self {
            HeaderValue::Standard(text) => text.range.clone(),
            HeaderValue::Clauses { range, .. } => range.clone(),
            HeaderValue::Missing(error) => error.range.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Standard(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        match self {
            HeaderValue::Clauses { clauses, .. } => clauses,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ErrorNode> {
        match self {
            HeaderValue::Missing(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    /// `name=value`
    Attribute,
    /// `name:=value`
    Directive,
}

impl ParameterKind {
    pub fn operator(&self) -> &'static str {
        match self {
            ParameterKind::Attribute => "=",
            ParameterKind::Directive => ":=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub name: ValueText,
    pub value: ValueText,
    pub range: Range<usize>,
}

/// One clause: paths followed by attributes and directives, separated by semicolons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub paths: Vec<ValueText>,
    pub parameters: Vec<Parameter>,
    pub range: Range<usize>,
}

impl Clause {
    pub fn attributes(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.kind == ParameterKind::Attribute)
    }

    pub fn directives(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.kind == ParameterKind::Directive)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .find(|p| p.name.text == name)
            .map(|p| p.value.as_str())
    }

    pub fn directive(&self, name: &str) -> Option<&str> {
        self.directives()
            .find(|p| p.name.text == name)
            .map(|p| p.value.as_str())
    }
}
