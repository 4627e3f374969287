//! Converts a nested fragment tree into a flat event stream.
//!
//! # The High-Level Concept
//!
//! Traversing the fragment tree in pre-order lets us emit a sequence of begin/content/end
//! events that can later be reassembled into the original tree. Each container node produces
//! its own begin/end markers and recurses into its children in between, so the flat stream
//! keeps the original nesting.
//!
//! # The Algorithm
//!
//! 1. **Entering Containers:** paragraphs, formats and links emit their `Begin*` event
//! 2. **Children:** recurse into child nodes in document order
//! 3. **Leaves:** text and line breaks become a single event in place
//! 4. **Exiting Containers:** emit the matching `End*` event once children are processed
//!
//! `flat_to_nested` performs the reverse walk.

use crate::fragment::{FragmentNode, Link};
use crate::ir::events::Event;
use crate::sink::EventSink;

/// Emits the events for a sequence of sibling nodes.
pub fn fragment_to_events(nodes: &[FragmentNode], sink: &mut dyn EventSink) {
    for node in nodes {
        walk_node(node, sink);
    }
}

fn walk_node(node: &FragmentNode, sink: &mut dyn EventSink) {
    match node {
        FragmentNode::Paragraph(children) => {
            sink.emit(Event::BeginParagraph);
            fragment_to_events(children, sink);
            sink.emit(Event::EndParagraph);
        }
        FragmentNode::Format { format, children } => {
            sink.emit(Event::BeginFormat(*format));
            fragment_to_events(children, sink);
            sink.emit(Event::EndFormat(*format));
        }
        FragmentNode::Link(Link {
            reference,
            free_standing,
            children,
        }) => {
            sink.emit(Event::BeginLink {
                reference: reference.clone(),
                free_standing: *free_standing,
            });
            fragment_to_events(children, sink);
            sink.emit(Event::EndLink {
                reference: reference.clone(),
                free_standing: *free_standing,
            });
        }
        FragmentNode::Text(text) => sink.emit(Event::RawText(text.clone())),
        FragmentNode::NewLine => sink.emit(Event::NewLine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::events::Format;
    use crate::ir::reference::{Reference, ResourceKind};

    #[test]
    fn flattens_nested_fragment() {
        let reference = Reference::new(ResourceKind::Url, "https://x.org");
        let nodes = vec![
            FragmentNode::Paragraph(vec![
                FragmentNode::text("a "),
                FragmentNode::Format {
                    format: Format::Italic,
                    children: vec![FragmentNode::Link(Link {
                        reference: reference.clone(),
                        free_standing: false,
                        children: vec![FragmentNode::text("b")],
                    })],
                },
                FragmentNode::NewLine,
            ]),
            FragmentNode::text("tail"),
        ];

        let mut events = Vec::new();
        fragment_to_events(&nodes, &mut events);

        let link = |begin: bool| {
            if begin {
                Event::BeginLink {
                    reference: reference.clone(),
                    free_standing: false,
                }
            } else {
                Event::EndLink {
                    reference: reference.clone(),
                    free_standing: false,
                }
            }
        };
        assert_eq!(
            events,
            vec![
                Event::BeginParagraph,
                Event::RawText("a ".to_string()),
                Event::BeginFormat(Format::Italic),
                link(true),
                Event::RawText("b".to_string()),
                link(false),
                Event::EndFormat(Format::Italic),
                Event::NewLine,
                Event::EndParagraph,
                Event::RawText("tail".to_string()),
            ]
        );
    }
}
