//! Treeviz formatter for document trees
//!
//! One line per node, nesting drawn with box characters:
//!
//! ```text
//! └─ section: 2 headers
//!   ├─ header: Bundle-Name = Acme Portlet
//!   └─ header: Import-Package (2 clauses)
//!     ├─ clause: org.acme.api;version=1.0
//!     └─ clause: org.acme.util
//! ```
//!
//! Values and clauses are truncated to 30 characters.

use crate::manifest::ast::{Clause, Document, Header, HeaderValue, Section, SectionItem};
use crate::manifest::formats::registry::{FormatError, Formatter};

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "One line per node tree view"
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    for (i, section) in doc.sections.iter().enumerate() {
        let is_last = i == doc.sections.len() - 1;
        append_section(&mut result, section, is_last);
    }
    result
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn append_section(result: &mut String, section: &Section, is_last: bool) {
    result.push_str(&format!(
        "{} section: {}\n",
        connector(is_last),
        plural(section.headers().count(), "header")
    ));

    let prefix = child_prefix("", is_last);
    for (i, item) in section.items.iter().enumerate() {
        let item_is_last = i == section.items.len() - 1;
        match item {
            SectionItem::Header(header) => append_header(result, header, &prefix, item_is_last),
            SectionItem::Error(error) => result.push_str(&format!(
                "{}{} error: {}\n",
                prefix,
                connector(item_is_last),
                error.diagnostic.message()
            )),
        }
    }
}

fn append_header(result: &mut String, header: &Header, prefix: &str, is_last: bool) {
    let label = match &header.value {
        HeaderValue::Standard(text) => {
            format!("{} = {}", header.name, truncate(text.as_str(), 30))
        }
        HeaderValue::Clauses { clauses, .. } => {
            format!("{} ({})", header.name, plural(clauses.len(), "clause"))
        }
        HeaderValue::Missing(error) => {
            format!("{} ! {}", header.name, error.diagnostic.message())
        }
    };
    result.push_str(&format!(
        "{}{} header: {}\n",
        prefix,
        connector(is_last),
        label
    ));

    let clauses = header.value.clauses();
    let prefix = child_prefix(prefix, is_last);
    for (i, clause) in clauses.iter().enumerate() {
        result.push_str(&format!(
            "{}{} clause: {}\n",
            prefix,
            connector(i == clauses.len() - 1),
            truncate(&clause_label(clause), 30)
        ));
    }
}

fn clause_label(clause: &Clause) -> String {
    let mut parts: Vec<String> = clause.paths.iter().map(|p| p.text.clone()).collect();
    for parameter in &clause.parameters {
        parts.push(format!(
            "{}{}{}",
            parameter.name.as_str(),
            parameter.kind.operator(),
            parameter.value.as_str()
        ));
    }
    parts.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parsing::parse_document;

    #[test]
    fn test_treeviz_layout() {
        let doc = parse_document(
            "Bundle-Name: Acme Portlet\nImport-Package: org.acme.api;version=1.0,org.acme.util\n\nName: x\n",
        );

        assert_eq!(
            to_treeviz_str(&doc),
            "├─ section: 2 headers\n\
             │ ├─ header: Bundle-Name = Acme Portlet\n\
             │ └─ header: Import-Package (2 clauses)\n\
             │   ├─ clause: org.acme.api;version=1.0\n\
             │   └─ clause: org.acme.util\n\
             └─ section: 1 header\n\
             \x20 └─ header: Name = x\n"
        );
    }

    #[test]
    fn test_treeviz_truncates_and_shows_errors() {
        let doc = parse_document(
            " stray\nBundle-Description: a rather long description of the bundle\n",
        );
        let result = to_treeviz_str(&doc);

        assert!(result.contains("├─ error: Header expected\n"));
        assert!(result.contains("└─ header: Bundle-Description = a rather long description of t...\n"));
    }

    #[test]
    fn test_treeviz_empty_document() {
        assert_eq!(to_treeviz_str(&parse_document("")), "");
    }
}
