//! Document, section and header nodes

use crate::manifest::ast::diagnostic::{Diagnostic, ErrorNode};
use crate::manifest::ast::value::HeaderValue;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Node kinds, as seen by the formatting rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Section,
    Header,
    Error,
    SectionEnd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub name_range: Range<usize>,
    pub value: HeaderValue,
    pub range: Range<usize>,
}

impl Header {
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.value.error().map(|error| &error.diagnostic)
    }

    /// Whether this header is named `name`, ignoring ASCII case
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionItem {
    Header(Header),
    Error(ErrorNode),
}

impl SectionItem {
    pub fn range(&self) -> Range<usize> {
        match self {
            SectionItem::Header(header) => header.range.clone(),
            SectionItem::Error(error) => error.range.clone(),
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            SectionItem::Header(_) => NodeKind::Header,
            SectionItem::Error(_) => NodeKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub items: Vec<SectionItem>,
    /// The blank line that closed this section, if any
    pub end: Option<Range<usize>>,
    pub range: Range<usize>,
}

impl Section {
    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.items.iter().filter_map(|item| match item {
            SectionItem::Header(header) => Some(header),
            SectionItem::Error(_) => None,
        })
    }

    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers().find(|header| header.is_named(name))
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter_map(|item| match item {
            SectionItem::Header(header) => header.diagnostic(),
            SectionItem::Error(error) => Some(&error.diagnostic),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(skip)]
    pub source: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(source: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            source: source.into(),
            sections,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.sections.iter().flat_map(|section| section.headers())
    }

    /// First header named `name` in document order
    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers().find(|header| header.is_named(name))
    }

    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        self.sections
            .iter()
            .flat_map(|section| section.diagnostics())
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.sections
            .iter()
            .any(|section| section.diagnostics().next().is_some())
    }

    /// Source text covered by `range`
    pub fn text(&self, range: &Range<usize>) -> &str {
        self.source.get(range.clone()).unwrap_or("")
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.headers().count();
        write!(
            f,
            "Document({} sections, {} headers)",
            self.sections.len(),
            headers
        )
    }
}
