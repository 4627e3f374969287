//! Html fragment parsing
//!
//! AsciiDoc processors convert inline markup to html, so paragraph content and list item text
//! reach us as html snippets without the enclosing `<p>`. This parser reads such a snippet
//! with html5ever into an rcdom tree and folds it into a [`Fragment`].
//!
//! # Data Model
//!
//! | Html                               | Fragment node                  |
//! |------------------------------------|--------------------------------|
//! | `<p>`                              | Paragraph                      |
//! | inline run outside any `<p>`       | Paragraph (implicit)           |
//! | `<strong>`, `<b>`                  | Format(Bold)                   |
//! | `<em>`, `<i>`                      | Format(Italic)                 |
//! | `<code>`, `<tt>`, `<kbd>`          | Format(Monospace)              |
//! | `<sup>` / `<sub>`                  | Format(Superscript/Subscript)  |
//! | `<u>`, `<ins>`                     | Format(Underlined)             |
//! | `<del>`, `<s>`, `<strike>`         | Format(Strikedout)             |
//! | `<a href>`                         | Link                           |
//! | `<br>`                             | NewLine                        |
//! | `<div>`, `<ul>`, `<table>`, ...    | transparent block container    |
//! | `<span>`, `<mark>`, `<a>` w/o href | transparent inline container   |
//! | `<script>`, `<style>`              | dropped                        |
//!
//! # Links
//!
//! An `href` with a scheme followed by `//` is a [`ResourceKind::Url`]. Everything else,
//! `mailto:` addresses included, is reported as a [`ResourceKind::Path`], typed only when it
//! carries a scheme; telling those apart is left to link reclassification. Every attribute
//! besides `href` ends up in the reference parameters, and `class="bare"` (the processor's
//! marker for autolinked URLs) makes the link free-standing.
//!
//! # Whitespace
//!
//! Whitespace runs collapse to a single space, and the edges of each paragraph are trimmed.

use super::{Fragment, FragmentNode, FragmentParser, Link};
use crate::error::FragmentParseError;
use crate::ir::events::Format;
use crate::ir::reference::{Reference, ResourceKind};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());
static ANY_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const BLOCK_CONTAINERS: &[&str] = &[
    "div",
    "section",
    "article",
    "aside",
    "header",
    "footer",
    "blockquote",
    "pre",
    "ul",
    "ol",
    "li",
    "dl",
    "dt",
    "dd",
    "table",
    "thead",
    "tbody",
    "tfoot",
    "tr",
    "td",
    "th",
];

const DROPPED: &[&str] = &["script", "style", "template", "head"];

/// Rich fragment parser backed by html5ever.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFragmentParser {
    strict: bool,
}

impl HtmlFragmentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// In strict mode, any html parse error reported by html5ever fails the fragment instead
    /// of being recovered from.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl FragmentParser for HtmlFragmentParser {
    fn parse(&self, text: &str) -> Result<Fragment, FragmentParseError> {
        let document = format!(
            "<!DOCTYPE html><html><head></head><body>{}</body></html>",
            text
        );
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(document);

        if self.strict {
            if let Some(error) = dom.errors.borrow().first() {
                return Err(FragmentParseError::new(text, error.to_string()));
            }
        }

        let body = find_element(&dom.document, "body")
            .ok_or_else(|| FragmentParseError::new(text, "parsed html has no body"))?;

        let mut children = Vec::new();
        convert_blocks(&body, &mut children);
        Ok(Fragment::new(children))
    }
}

fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if &*name.local == tag {
            return Some(node.clone());
        }
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Converts the children of a block level node, grouping inline runs into paragraphs.
fn convert_blocks(node: &Handle, out: &mut Vec<FragmentNode>) {
    let mut run = Vec::new();

    for child in node.children.borrow().iter() {
        match element_name(child).as_deref() {
            Some("p") => {
                flush_run(&mut run, out);
                let mut content = Vec::new();
                convert_inline_children(child, &mut content);
                out.push(FragmentNode::Paragraph(trim_run(content)));
            }
            Some(tag) if BLOCK_CONTAINERS.contains(&tag) => {
                flush_run(&mut run, out);
                convert_blocks(child, out);
            }
            _ => convert_inline(child, &mut run),
        }
    }

    flush_run(&mut run, out);
}

fn flush_run(run: &mut Vec<FragmentNode>, out: &mut Vec<FragmentNode>) {
    let content = trim_run(std::mem::take(run));
    if !content.is_empty() {
        out.push(FragmentNode::Paragraph(content));
    }
}

/// Trims leading whitespace off the first text nodes and trailing whitespace off the last ones.
fn trim_run(mut nodes: Vec<FragmentNode>) -> Vec<FragmentNode> {
    while let Some(FragmentNode::Text(text)) = nodes.first_mut() {
        let trimmed = text.trim_start().to_string();
        if trimmed.is_empty() {
            nodes.remove(0);
        } else {
            *text = trimmed;
            break;
        }
    }
    while let Some(FragmentNode::Text(text)) = nodes.last_mut() {
        let trimmed = text.trim_end().to_string();
        if trimmed.is_empty() {
            nodes.pop();
        } else {
            *text = trimmed;
            break;
        }
    }
    nodes
}

fn convert_inline_children(node: &Handle, out: &mut Vec<FragmentNode>) {
    for child in node.children.borrow().iter() {
        convert_inline(child, out);
    }
}

fn inline_children(node: &Handle) -> Vec<FragmentNode> {
    let mut children = Vec::new();
    convert_inline_children(node, &mut children);
    children
}

fn convert_inline(node: &Handle, out: &mut Vec<FragmentNode>) {
    match &node.data {
        NodeData::Text { contents } => {
            let text = WHITESPACE.replace_all(&contents.borrow(), " ").into_owned();
            if !text.is_empty() {
                out.push(FragmentNode::Text(text));
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = &*name.local;
            if let Some(format) = format_for(tag) {
                out.push(FragmentNode::Format {
                    format,
                    children: inline_children(node),
                });
            } else if tag == "br" {
                out.push(FragmentNode::NewLine);
            } else if tag == "a" {
                match link_for(&attrs.borrow()) {
                    Some((reference, free_standing)) => out.push(FragmentNode::Link(Link {
                        reference,
                        free_standing,
                        children: inline_children(node),
                    })),
                    None => convert_inline_children(node, out),
                }
            } else if !DROPPED.contains(&tag) {
                convert_inline_children(node, out);
            }
        }
        _ => {}
    }
}

fn format_for(tag: &str) -> Option<Format> {
    let format = match tag {
        "strong" | "b" => Format::Bold,
        "em" | "i" => Format::Italic,
        "code" | "tt" | "kbd" => Format::Monospace,
        "sup" => Format::Superscript,
        "sub" => Format::Subscript,
        "u" | "ins" => Format::Underlined,
        "del" | "s" | "strike" => Format::Strikedout,
        _ => return None,
    };
    Some(format)
}

fn link_for(attrs: &[Attribute]) -> Option<(Reference, bool)> {
    let href = attrs.iter().find(|attr| &*attr.name.local == "href")?;
    let target = href.value.to_string();

    let mut reference = if URL_SCHEME.is_match(&target) {
        Reference::new(ResourceKind::Url, target)
    } else if ANY_SCHEME.is_match(&target) {
        Reference::new(ResourceKind::Path, target)
    } else {
        Reference::new(ResourceKind::Path, target).untyped()
    };

    let mut free_standing = false;
    for attr in attrs.iter().filter(|attr| &*attr.name.local != "href") {
        let key = attr.name.local.to_string();
        let value = attr.value.to_string();
        if key == "class" && value.split_whitespace().any(|class| class == "bare") {
            free_standing = true;
        }
        reference.parameters.insert(key, value);
    }

    Some((reference, free_standing))
}
