//! Formatting contract for manifest text
//!
//! Headers always sit on their own lines: whatever comes before or after a header must be
//! separated from it by a line break. Nothing else constrains spacing.

use crate::manifest::ast::{Document, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceRequirement {
    MustLineBreak,
    MustNot,
}

pub fn space_between(left: NodeKind, right: NodeKind) -> SpaceRequirement {
    if left == NodeKind::Header || right == NodeKind::Header {
        SpaceRequirement::MustLineBreak
    } else {
        SpaceRequirement::MustNot
    }
}

/// Concatenate node texts, adding a line break wherever one is required and missing.
pub fn join_nodes<S: AsRef<str>>(nodes: &[(NodeKind, S)]) -> String {
    let mut out = String::new();
    let mut previous: Option<NodeKind> = None;

    for (kind, text) in nodes {
        if let Some(left) = previous {
            if space_between(left, *kind) == SpaceRequirement::MustLineBreak
                && !out.is_empty()
                && !out.ends_with('\n')
            {
                out.push('\n');
            }
        }
        out.push_str(text.as_ref());
        previous = Some(*kind);
    }

    out
}

/// Render a document back to manifest text.
///
/// Parsed documents render to exactly their source.
pub fn render_document(doc: &Document) -> String {
    let mut nodes = Vec::new();
    for section in &doc.sections {
        for item in &section.items {
            nodes.push((item.node_kind(), doc.text(&item.range())));
        }
        if let Some(end) = &section.end {
            nodes.push((NodeKind::SectionEnd, doc.text(end)));
        }
    }
    join_nodes(&nodes)
}
