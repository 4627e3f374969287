//! Plain text fragment parsing, used for section titles.
//!
//! No markup is recognized: the whole text becomes one paragraph of raw text, with line
//! breaks turned into `NewLine` nodes.

use super::{Fragment, FragmentNode, FragmentParser};
use crate::error::FragmentParseError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFragmentParser;

impl FragmentParser for PlainFragmentParser {
    fn parse(&self, text: &str) -> Result<Fragment, FragmentParseError> {
        if text.is_empty() {
            return Ok(Fragment::default());
        }

        let mut content = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if index > 0 {
                content.push(FragmentNode::NewLine);
            }
            if !line.is_empty() {
                content.push(FragmentNode::text(line));
            }
        }
        Ok(Fragment::new(vec![FragmentNode::Paragraph(content)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_is_one_paragraph() {
        let fragment = PlainFragmentParser.parse("Intro <em>not parsed</em>").unwrap();
        assert_eq!(
            fragment.children,
            vec![FragmentNode::Paragraph(vec![FragmentNode::text(
                "Intro <em>not parsed</em>"
            )])]
        );
    }

    #[test]
    fn test_lines_are_separated_by_newlines() {
        let fragment = PlainFragmentParser.parse("one\r\n\ntwo").unwrap();
        assert_eq!(
            fragment.children,
            vec![FragmentNode::Paragraph(vec![
                FragmentNode::text("one"),
                FragmentNode::NewLine,
                FragmentNode::NewLine,
                FragmentNode::text("two"),
            ])]
        );
    }

    #[test]
    fn test_empty_text_has_no_children() {
        assert!(PlainFragmentParser.parse("").unwrap().children.is_empty());
    }
}
