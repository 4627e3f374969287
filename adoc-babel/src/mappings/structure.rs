//! Converts the nested source block tree into a flat event stream.
//!
//! # The High-Level Concept
//!
//! The source tree is walked depth first. Each block emits its own begin-side events, then its
//! children are walked, then its end-side events are emitted. Inline content (titles, item
//! text, paragraph content) is handed to the fragment translator in place.
//!
//! # Blocks
//!
//! - **Section:** sections only carry a flat level, while the event stream nests them. A level
//!   `L` section opens `L` sections, emits its header (title through the plain parser, outer
//!   paragraph stripped), walks its blocks, then closes the `L` sections.
//! - **List:** `BeginList(kind)`, then every list item as `BeginListItem`, its text through the
//!   rich parser (outer paragraph stripped), its nested blocks, `EndListItem`. Children that
//!   are not list items are walked in place. `EndList(kind)`.
//! - **Paragraph:** content through the rich parser, unstripped. The parser's paragraph node is
//!   the paragraph boundary; no wrapper is added here.
//! - **Other:** nothing of its own, only its children.
//!
//! Every block's children are walked after its own content, in document order.

use super::inline::translate_fragment;
use crate::error::TranslateError;
use crate::fragment::FragmentParser;
use crate::ir::events::{Event, ListKind};
use crate::sink::EventSink;
use crate::source::{NodeKind, Section, SourceNode};

/// Walks source blocks, emitting events into a sink.
pub struct StructureWalker<'a> {
    /// Rich parser for paragraphs and list items
    pub inline: &'a dyn FragmentParser,
    /// Reduced parser for section titles
    pub plain: &'a dyn FragmentParser,
    pub wiki_mode: bool,
    /// Deepest block nesting accepted, top level blocks being at depth 1
    pub max_depth: usize,
}

impl StructureWalker<'_> {
    /// Walks a sequence of top level blocks.
    pub fn walk(&self, nodes: &[SourceNode], sink: &mut dyn EventSink) -> Result<(), TranslateError> {
        self.walk_blocks(nodes, 1, sink)
    }

    fn walk_blocks(
        &self,
        nodes: &[SourceNode],
        depth: usize,
        sink: &mut dyn EventSink,
    ) -> Result<(), TranslateError> {
        for node in nodes {
            self.walk_node(node, depth, sink)?;
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<(), TranslateError> {
        if depth > self.max_depth {
            return Err(TranslateError::NestingTooDeep {
                depth,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn walk_node(
        &self,
        node: &SourceNode,
        depth: usize,
        sink: &mut dyn EventSink,
    ) -> Result<(), TranslateError> {
        self.enter(depth)?;
        tracing::trace!(context = node.context(), depth, "walking block");

        match &node.kind {
            NodeKind::Section(section) => self.walk_section(section, &node.blocks, depth, sink),
            NodeKind::List { context } => {
                self.walk_list(ListKind::from_context(context), &node.blocks, depth, sink)
            }
            NodeKind::Paragraph { content } => {
                translate_fragment(content, self.inline, false, self.wiki_mode, sink)?;
                self.walk_blocks(&node.blocks, depth + 1, sink)
            }
            NodeKind::ListItem { .. } => {
                tracing::debug!(depth, "skipping list item outside of a list");
                self.walk_blocks(&node.blocks, depth + 1, sink)
            }
            NodeKind::Other { context } => {
                tracing::debug!(context = context.as_str(), depth, "skipping unsupported block");
                self.walk_blocks(&node.blocks, depth + 1, sink)
            }
        }
    }

    fn walk_section(
        &self,
        section: &Section,
        blocks: &[SourceNode],
        depth: usize,
        sink: &mut dyn EventSink,
    ) -> Result<(), TranslateError> {
        for _ in 0..section.level {
            sink.emit(Event::BeginSection);
        }
        sink.emit(Event::BeginHeader {
            level: section.level,
            id: section.id.clone(),
        });
        translate_fragment(&section.title, self.plain, true, self.wiki_mode, sink)?;
        sink.emit(Event::EndHeader {
            level: section.level,
            id: section.id.clone(),
        });

        self.walk_blocks(blocks, depth + 1, sink)?;

        for _ in 0..section.level {
            sink.emit(Event::EndSection);
        }
        Ok(())
    }

    fn walk_list(
        &self,
        kind: ListKind,
        children: &[SourceNode],
        depth: usize,
        sink: &mut dyn EventSink,
    ) -> Result<(), TranslateError> {
        sink.emit(Event::BeginList(kind));

        for child in children {
            match &child.kind {
                NodeKind::ListItem { text } => {
                    self.enter(depth + 1)?;
                    sink.emit(Event::BeginListItem);
                    translate_fragment(text, self.inline, true, self.wiki_mode, sink)?;
                    self.walk_blocks(&child.blocks, depth + 2, sink)?;
                    sink.emit(Event::EndListItem);
                }
                _ => self.walk_node(child, depth + 1, sink)?,
            }
        }

        sink.emit(Event::EndList(kind));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FragmentParseError;
    use crate::fragment::{Fragment, HtmlFragmentParser, PlainFragmentParser};

    fn walk_with(nodes: &[SourceNode], max_depth: usize) -> Result<Vec<Event>, TranslateError> {
        let walker = StructureWalker {
            inline: &HtmlFragmentParser::new(),
            plain: &PlainFragmentParser,
            wiki_mode: false,
            max_depth,
        };
        let mut events = Vec::new();
        walker.walk(nodes, &mut events)?;
        Ok(events)
    }

    fn walk(nodes: &[SourceNode]) -> Vec<Event> {
        walk_with(nodes, 64).unwrap()
    }

    fn text(s: &str) -> Event {
        Event::RawText(s.to_string())
    }

    #[test]
    fn test_section_closes_after_its_blocks() {
        let events = walk(&[SourceNode::section(
            1,
            Some("_a"),
            "A",
            vec![SourceNode::paragraph("body")],
        )]);
        let header = |begin: bool| {
            let (level, id) = (1, Some("_a".to_string()));
            if begin {
                Event::BeginHeader { level, id }
            } else {
                Event::EndHeader { level, id }
            }
        };
        assert_eq!(
            events,
            vec![
                Event::BeginSection,
                header(true),
                text("A"),
                header(false),
                Event::BeginParagraph,
                text("body"),
                Event::EndParagraph,
                Event::EndSection,
            ]
        );
    }

    #[test]
    fn test_section_level_opens_as_many_sections() {
        let events = walk(&[SourceNode::section(3, None, "Deep", vec![])]);
        let begins = events.iter().filter(|e| **e == Event::BeginSection).count();
        let ends = events.iter().filter(|e| **e == Event::EndSection).count();
        assert_eq!((begins, ends), (3, 3));
        assert_eq!(&events[..3], &[Event::BeginSection, Event::BeginSection, Event::BeginSection]);
        assert_eq!(events[3], Event::BeginHeader { level: 3, id: None });
    }

    #[test]
    fn test_zero_level_section_has_header_only() {
        assert_eq!(
            walk(&[SourceNode::section(0, None, "Title", vec![])]),
            vec![
                Event::BeginHeader { level: 0, id: None },
                text("Title"),
                Event::EndHeader { level: 0, id: None },
            ]
        );
    }

    #[test]
    fn test_list_items_with_nested_blocks() {
        let events = walk(&[SourceNode::list(
            "olist",
            vec![
                SourceNode::list_item(
                    "first <em>one</em>",
                    vec![SourceNode::list("ulist", vec![SourceNode::list_item("inner", vec![])])],
                ),
                SourceNode::list_item("second", vec![]),
            ],
        )]);
        assert_eq!(
            events,
            vec![
                Event::BeginList(ListKind::Ordered),
                Event::BeginListItem,
                text("first "),
                Event::BeginFormat(crate::ir::events::Format::Italic),
                text("one"),
                Event::EndFormat(crate::ir::events::Format::Italic),
                Event::BeginList(ListKind::Unordered),
                Event::BeginListItem,
                text("inner"),
                Event::EndListItem,
                Event::EndList(ListKind::Unordered),
                Event::EndListItem,
                Event::BeginListItem,
                text("second"),
                Event::EndListItem,
                Event::EndList(ListKind::Ordered),
            ]
        );
    }

    #[test]
    fn test_empty_list_is_balanced() {
        assert_eq!(
            walk(&[SourceNode::list("dlist", vec![])]),
            vec![
                Event::BeginList(ListKind::Unordered),
                Event::EndList(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn test_non_item_list_children_are_walked_in_place() {
        assert_eq!(
            walk(&[SourceNode::list(
                "ulist",
                vec![SourceNode::other("comment", vec![SourceNode::paragraph("p")])]
            )]),
            vec![
                Event::BeginList(ListKind::Unordered),
                Event::BeginParagraph,
                text("p"),
                Event::EndParagraph,
                Event::EndList(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn test_unsupported_blocks_only_contribute_children() {
        let events = walk(&[
            SourceNode::other(
                "example",
                vec![
                    SourceNode::paragraph("inside"),
                    SourceNode::other("listing", vec![]),
                ],
            ),
            SourceNode::list_item("stray", vec![SourceNode::paragraph("kept")]),
        ]);
        assert_eq!(
            events,
            vec![
                Event::BeginParagraph,
                text("inside"),
                Event::EndParagraph,
                Event::BeginParagraph,
                text("kept"),
                Event::EndParagraph,
            ]
        );
    }

    #[test]
    fn test_nesting_limit() {
        let mut node = SourceNode::paragraph("leaf");
        for _ in 0..4 {
            node = SourceNode::other("open", vec![node]);
        }
        let nodes = vec![node];

        assert!(walk_with(&nodes, 5).is_ok());
        match walk_with(&nodes, 4) {
            Err(TranslateError::NestingTooDeep { depth, limit }) => {
                assert_eq!((depth, limit), (5, 4));
            }
            other => panic!("Expected NestingTooDeep, got {:?}", other),
        }
    }

    #[test]
    fn test_fragment_failure_stops_the_walk() {
        struct Failing;
        impl FragmentParser for Failing {
            fn parse(&self, text: &str) -> Result<Fragment, FragmentParseError> {
                Err(FragmentParseError::new(text, "unparseable"))
            }
        }

        let walker = StructureWalker {
            inline: &Failing,
            plain: &PlainFragmentParser,
            wiki_mode: false,
            max_depth: 8,
        };
        let mut events = Vec::new();
        let result = walker.walk(
            &[SourceNode::paragraph("bad"), SourceNode::paragraph("never")],
            &mut events,
        );

        match result {
            Err(TranslateError::FragmentParse(err)) => assert_eq!(err.text, "bad"),
            other => panic!("Expected FragmentParse, got {:?}", other),
        }
        assert!(events.is_empty());
    }
}
