//! XML-like tag serialization
//!
//! Serializes the document tree to nested tags that directly reflect its structure.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Header name, parameter name → `name` attribute
//! - Value text, diagnostic message → text content
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <section>
//!     <header name="Bundle-Name"><value>Acme</value></header>
//!     <header name="Import-Package"><clauses>
//!       <clause><path>org.acme</path><attribute name="version">1.0</attribute></clause>
//!     </clauses></header>
//!   </section>
//! </document>
//! ```

use crate::manifest::ast::{
    Clause, Document, ErrorNode, Header, HeaderValue, ParameterKind, SectionItem,
};
use crate::manifest::formats::registry::{FormatError, Formatter};

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like tags mirroring the document tree"
    }
}

pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for section in &doc.sections {
        if section.items.is_empty() {
            result.push_str("  <section></section>\n");
            continue;
        }
        result.push_str("  <section>\n");
        for item in &section.items {
            match item {
                SectionItem::Header(header) => serialize_header(header, 2, &mut result),
                SectionItem::Error(error) => {
                    result.push_str("    ");
                    serialize_error(error, &mut result);
                    result.push('\n');
                }
            }
        }
        result.push_str("  </section>\n");
    }
    result.push_str("</document>");
    result
}

fn serialize_header(header: &Header, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    output.push_str(&format!(
        "{}<header name=\"{}\">",
        indent,
        escape_xml(&header.name)
    ));

    match &header.value {
        HeaderValue::Standard(text) => {
            output.push_str(&format!("<value>{}</value>", escape_xml(text.as_str())));
        }
        HeaderValue::Clauses { clauses, .. } if clauses.is_empty() => {
            output.push_str("<clauses></clauses>");
        }
        HeaderValue::Clauses { clauses, .. } => {
            output.push_str("<clauses>\n");
            for clause in clauses {
                output.push_str(&"  ".repeat(indent_level + 1));
                serialize_clause(clause, output);
                output.push('\n');
            }
            output.push_str(&format!("{}</clauses>", indent));
        }
        HeaderValue::Missing(error) => serialize_error(error, output),
    }

    output.push_str("</header>\n");
}

fn serialize_clause(clause: &Clause, output: &mut String) {
    output.push_str("<clause>");
    for path in &clause.paths {
        output.push_str(&format!("<path>{}</path>", escape_xml(path.as_str())));
    }
    for parameter in &clause.parameters {
        let tag = match parameter.kind {
            ParameterKind::Attribute => "attribute",
            ParameterKind::Directive => "directive",
        };
        output.push_str(&format!(
            "<{tag} name=\"{}\">{}</{tag}>",
            escape_xml(parameter.name.as_str()),
            escape_xml(parameter.value.as_str()),
        ));
    }
    output.push_str("</clause>");
}

fn serialize_error(error: &ErrorNode, output: &mut String) {
    output.push_str(&format!(
        "<error>{}</error>",
        escape_xml(error.diagnostic.message())
    ));
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
