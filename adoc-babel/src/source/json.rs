//! JSON serialized source trees.
//!
//! AsciiDoc processors can dump their block tree as JSON; this module reads that dump back
//! into a [`SourceDocument`]. Nodes are tagged with the processor's `context`:
//!
//! ```json
//! { "attributes": { "doctitle": "Guide" },
//!   "blocks": [
//!     { "context": "section", "level": 1, "id": "_intro", "title": "Intro",
//!       "blocks": [ { "context": "paragraph", "content": "Some <em>text</em>" } ] },
//!     { "context": "ulist", "blocks": [
//!       { "context": "list_item", "text": "one" } ] } ] }
//! ```
//!
//! | context                     | node                    |
//! |-----------------------------|-------------------------|
//! | `section`                   | Section (needs `level`) |
//! | `olist`, `ulist`, `colist`  | List                    |
//! | `list_item`                 | ListItem                |
//! | `paragraph`                 | Paragraph               |
//! | anything else               | Other                   |

use super::{MarkupParser, NodeKind, Section, SourceDocument, SourceNode};
use crate::error::MarkupParseError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

const LIST_CONTEXTS: &[&str] = &["olist", "ulist", "colist"];

/// Reads source trees from their JSON serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSourceParser;

impl MarkupParser for JsonSourceParser {
    fn parse(&self, source: &str) -> Result<SourceDocument, MarkupParseError> {
        let raw: RawDocument = serde_json::from_str(source)?;
        let attributes = raw
            .attributes
            .into_iter()
            .map(|(key, value)| (key, attribute_to_string(value)))
            .collect();
        let blocks = raw
            .blocks
            .into_iter()
            .map(RawNode::into_node)
            .collect::<Result<_, _>>()?;
        Ok(SourceDocument { attributes, blocks })
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    attributes: BTreeMap<String, Value>,
    #[serde(default)]
    blocks: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    context: String,
    level: Option<usize>,
    id: Option<String>,
    title: Option<String>,
    text: Option<String>,
    content: Option<String>,
    #[serde(default)]
    blocks: Vec<RawNode>,
}

impl RawNode {
    fn into_node(self) -> Result<SourceNode, MarkupParseError> {
        let kind = match self.context.as_str() {
            "section" => {
                let level = self.level.ok_or_else(|| MarkupParseError::InvalidNode {
                    context: self.context.clone(),
                    reason: "missing `level`".to_string(),
                })?;
                NodeKind::Section(Section {
                    level,
                    id: self.id,
                    title: self.title.unwrap_or_default(),
                })
            }
            context if LIST_CONTEXTS.contains(&context) => NodeKind::List {
                context: self.context.clone(),
            },
            "list_item" => NodeKind::ListItem {
                text: self.text.unwrap_or_default(),
            },
            "paragraph" => NodeKind::Paragraph {
                content: self.content.unwrap_or_default(),
            },
            _ => NodeKind::Other {
                context: self.context.clone(),
            },
        };
        let blocks = self
            .blocks
            .into_iter()
            .map(RawNode::into_node)
            .collect::<Result<_, _>>()?;
        Ok(SourceNode::new(kind, blocks))
    }
}

fn attribute_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
