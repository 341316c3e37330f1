//! JSON serialization of the document tree

use crate::manifest::ast::Document;
use crate::manifest::formats::registry::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parsing::parse_document;
    use serde_json::Value;

    #[test]
    fn test_json_shape() {
        let doc = parse_document("Bundle-Name: Acme\nExport-Package: a;version=1\nFoo\n");
        let json = JsonFormatter.serialize(&doc).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("source").is_none());
        let items = &value["sections"][0]["items"];
        assert_eq!(items[0]["type"], "header");
        assert_eq!(items[0]["name"], "Bundle-Name");
        assert_eq!(items[0]["value"]["type"], "standard");
        assert_eq!(items[0]["value"]["text"], "Acme");

        let clause = &items[1]["value"]["clauses"][0];
        assert_eq!(clause["paths"][0]["text"], "a");
        assert_eq!(clause["parameters"][0]["kind"], "attribute");

        assert_eq!(items[2]["value"]["type"], "missing");
        assert_eq!(items[2]["value"]["diagnostic"]["kind"], "colon-expected");
    }
}
