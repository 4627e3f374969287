//! Inline fragment trees and the parsers producing them.
//!
//! AsciiDoc processors do not expose an inline AST: paragraph content, section titles and list
//! item text arrive as converted markup. A [`FragmentParser`] re-parses such a fragment into a
//! small tree rooted at a synthetic [`Fragment`] node.
//!
//! Two flavours are bundled:
//!
//! - [`HtmlFragmentParser`]: paragraphs, formats, links and line breaks (paragraphs, list items)
//! - [`PlainFragmentParser`]: raw text and line breaks only (section titles)

pub mod html;
pub mod plain;

pub use html::HtmlFragmentParser;
pub use plain::PlainFragmentParser;

use crate::error::FragmentParseError;
use crate::ir::events::Format;
use crate::ir::reference::Reference;

/// Parses a raw inline fragment into a [`Fragment`] tree.
///
/// Implementations must be usable through a shared reference. The bundled parsers keep no
/// state between calls.
pub trait FragmentParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Fragment, FragmentParseError>;
}

/// Synthetic root of a parsed fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub children: Vec<FragmentNode>,
}

/// A link and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub reference: Reference,
    /// Written as a bare URL rather than with a label
    pub free_standing: bool,
    pub children: Vec<FragmentNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentNode {
    Paragraph(Vec<FragmentNode>),
    Format {
        format: Format,
        children: Vec<FragmentNode>,
    },
    Link(Link),
    Text(String),
    NewLine,
}

impl FragmentNode {
    pub fn text(text: impl Into<String>) -> Self {
        FragmentNode::Text(text.into())
    }

    pub fn children(&self) -> &[FragmentNode] {
        match self {
            FragmentNode::Paragraph(children)
            | FragmentNode::Format { children, .. }
            | FragmentNode::Link(Link { children, .. }) => children,
            FragmentNode::Text(_) | FragmentNode::NewLine => &[],
        }
    }

    /// Consumes the node, returning its children. Leaves have none.
    pub fn into_children(self) -> Vec<FragmentNode> {
        match self {
            FragmentNode::Paragraph(children)
            | FragmentNode::Format { children, .. }
            | FragmentNode::Link(Link { children, .. }) => children,
            FragmentNode::Text(_) | FragmentNode::NewLine => Vec::new(),
        }
    }
}

impl Fragment {
    pub fn new(children: Vec<FragmentNode>) -> Self {
        Self { children }
    }

    /// Replaces the first top level node with its own children.
    ///
    /// Collapses the wrapper a fragment parser introduces around inline text (typically a
    /// paragraph) when the caller only wants the inline content. Only one level is removed and
    /// only the first node is touched.
    pub fn strip_outer_wrapper(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let wrapper = self.children.remove(0);
        let inner = wrapper.into_children();
        self.children.splice(0..0, inner);
    }

    /// Rebuilds every link of the tree, depth first in document order.
    ///
    /// `rewrite` receives each link without its label and returns the link that takes its
    /// place; the original label is then rewritten and reattached.
    pub fn map_links<F>(self, rewrite: &mut F) -> Fragment
    where
        F: FnMut(Link) -> Link,
    {
        Fragment {
            children: map_nodes(self.children, rewrite),
        }
    }

    /// Visits every link reference in document order
    #[cfg(test)]
    pub fn references(&self) -> Vec<&Reference> {
        let mut found = Vec::new();
        collect_references(&self.children, &mut found);
        found
    }
}

fn map_nodes<F>(nodes: Vec<FragmentNode>, rewrite: &mut F) -> Vec<FragmentNode>
where
    F: FnMut(Link) -> Link,
{
    nodes
        .into_iter()
        .map(|node| match node {
            FragmentNode::Paragraph(children) => {
                FragmentNode::Paragraph(map_nodes(children, rewrite))
            }
            FragmentNode::Format { format, children } => FragmentNode::Format {
                format,
                children: map_nodes(children, rewrite),
            },
            FragmentNode::Link(link) => {
                let Link {
                    reference,
                    free_standing,
                    children,
                } = link;
                // The link itself comes before anything nested in its label.
                let rewritten = rewrite(Link {
                    reference,
                    free_standing,
                    children: Vec::new(),
                });
                FragmentNode::Link(Link {
                    children: map_nodes(children, rewrite),
                    ..rewritten
                })
            }
            leaf => leaf,
        })
        .collect()
}

#[cfg(test)]
fn collect_references<'a>(nodes: &'a [FragmentNode], found: &mut Vec<&'a Reference>) {
    for node in nodes {
        if let FragmentNode::Link(link) = node {
            found.push(&link.reference);
        }
        collect_references(node.children(), found);
    }
}
