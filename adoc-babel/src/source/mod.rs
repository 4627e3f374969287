//! The AsciiDoc block tree consumed by the translator.
//!
//! The tree is produced by an AsciiDoc processor (through [`MarkupParser`]) and is read-only
//! here. Every node has an ordered list of child blocks; inline content (titles, list item
//! text, paragraph content) is kept as raw markup and re-parsed by a fragment parser later.

pub mod json;

use crate::error::MarkupParseError;
use std::collections::BTreeMap;

/// Produces a source tree from raw document text.
///
/// Implementations never return partial trees.
pub trait MarkupParser {
    fn parse(&self, source: &str) -> Result<SourceDocument, MarkupParseError>;
}

/// Root of a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    /// Document attributes (`doctitle`, `author`, ...)
    pub attributes: BTreeMap<String, String>,
    /// Top level blocks, in document order
    pub blocks: Vec<SourceNode>,
}

impl SourceDocument {
    pub fn new(blocks: Vec<SourceNode>) -> Self {
        Self {
            attributes: BTreeMap::new(),
            blocks,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes.get("doctitle").map(String::as_str)
    }
}

/// A section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Outline depth, 1 for `==` sections
    pub level: usize,
    pub id: Option<String>,
    /// Converted title markup
    pub title: String,
}

/// Kind specific payload of a [`SourceNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Section(Section),
    /// `context` is the processor's list context (`olist`, `ulist`, `colist`)
    List { context: String },
    ListItem { text: String },
    Paragraph { content: String },
    /// Anything the translator has no mapping for; only its children are translated
    Other { context: String },
}

/// One block of the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    pub kind: NodeKind,
    pub blocks: Vec<SourceNode>,
}

impl SourceNode {
    pub fn new(kind: NodeKind, blocks: Vec<SourceNode>) -> Self {
        Self { kind, blocks }
    }

    pub fn section(
        level: usize,
        id: Option<&str>,
        title: impl Into<String>,
        blocks: Vec<SourceNode>,
    ) -> Self {
        Self::new(
            NodeKind::Section(Section {
                level,
                id: id.map(str::to_string),
                title: title.into(),
            }),
            blocks,
        )
    }

    pub fn list(context: impl Into<String>, items: Vec<SourceNode>) -> Self {
        Self::new(
            NodeKind::List {
                context: context.into(),
            },
            items,
        )
    }

    pub fn list_item(text: impl Into<String>, blocks: Vec<SourceNode>) -> Self {
        Self::new(NodeKind::ListItem { text: text.into() }, blocks)
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(
            NodeKind::Paragraph {
                content: content.into(),
            },
            Vec::new(),
        )
    }

    pub fn other(context: impl Into<String>, blocks: Vec<SourceNode>) -> Self {
        Self::new(
            NodeKind::Other {
                context: context.into(),
            },
            blocks,
        )
    }

    /// The processor context this node was built from
    pub fn context(&self) -> &str {
        match &self.kind {
            NodeKind::Section(_) => "section",
            NodeKind::List { context } | NodeKind::Other { context } => context,
            NodeKind::ListItem { .. } => "list_item",
            NodeKind::Paragraph { .. } => "paragraph",
        }
    }
}
