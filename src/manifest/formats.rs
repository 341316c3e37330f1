//! Output formats for parsed manifests
//!
//! This module contains the serializers for document trees:
//! - `tag`: XML-like tags that mirror the tree structure
//! - `treeviz`: one line per node, for quick scanning
//! - `json`: the serde representation of the tree
//! - `text`: the document rendered back to manifest text
//!
//! The `render` module holds the formatting contract shared by anything that writes manifest
//! text: which neighbouring nodes must be separated by a line break.

pub mod json;
pub mod registry;
pub mod render;
pub mod tag;
pub mod text;
pub mod treeviz;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use render::{join_nodes, render_document, space_between, SpaceRequirement};
pub use tag::{serialize_document as serialize_ast_tag, TagFormatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
