//! Manifest text output

use crate::manifest::ast::Document;
use crate::manifest::formats::registry::{FormatError, Formatter};
use crate::manifest::formats::render::render_document;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_document(doc))
    }

    fn description(&self) -> &str {
        "Manifest text"
    }
}
