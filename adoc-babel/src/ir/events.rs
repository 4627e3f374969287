//! Defines the flat event stream representation of a document.

use crate::ir::reference::Reference;
use crate::ir::syntax::Syntax;
use serde::Serialize;
use std::fmt;

/// Metadata attached to the document begin/end events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaData {
    pub syntax: Syntax,
}

impl MetaData {
    pub fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }
}

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// Maps an AsciiDoc list context (`olist`, `ulist`, ...) to a list kind.
    ///
    /// Anything that is not `olist` renders as a bulleted list.
    pub fn from_context(context: &str) -> Self {
        match context {
            "olist" => ListKind::Ordered,
            _ => ListKind::Unordered,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Ordered => "ordered",
            ListKind::Unordered => "unordered",
        }
    }
}

/// Inline text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Bold,
    Italic,
    Monospace,
    Superscript,
    Subscript,
    Underlined,
    Strikedout,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Bold => "bold",
            Format::Italic => "italic",
            Format::Monospace => "monospace",
            Format::Superscript => "superscript",
            Format::Subscript => "subscript",
            Format::Underlined => "underlined",
            Format::Strikedout => "strikedout",
        }
    }
}

/// Represents a single event in the document stream.
///
/// Every `Begin*` event is closed by the `End*` event of the same kind carrying the same
/// parameters, and pairs never interleave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    BeginDocument(MetaData),
    EndDocument(MetaData),
    BeginSection,
    EndSection,
    BeginHeader {
        level: usize,
        id: Option<String>,
    },
    EndHeader {
        level: usize,
        id: Option<String>,
    },
    BeginList(ListKind),
    EndList(ListKind),
    BeginListItem,
    EndListItem,
    BeginParagraph,
    EndParagraph,
    BeginFormat(Format),
    EndFormat(Format),
    BeginLink {
        reference: Reference,
        free_standing: bool,
    },
    EndLink {
        reference: Reference,
        free_standing: bool,
    },
    RawText(String),
    NewLine,
}

impl Event {
    pub fn is_begin(&self) -> bool {
        matches!(
            self,
            Event::BeginDocument(_)
                | Event::BeginSection
                | Event::BeginHeader { .. }
                | Event::BeginList(_)
                | Event::BeginListItem
                | Event::BeginParagraph
                | Event::BeginFormat(_)
                | Event::BeginLink { .. }
        )
    }

    pub fn is_end(&self) -> bool {
        matches!(
            self,
            Event::EndDocument(_)
                | Event::EndSection
                | Event::EndHeader { .. }
                | Event::EndList(_)
                | Event::EndListItem
                | Event::EndParagraph
                | Event::EndFormat(_)
                | Event::EndLink { .. }
        )
    }

    /// Whether `self` is the end event matching the `begin` event, discriminator included.
    pub fn closes(&self, begin: &Event) -> bool {
        match (begin, self) {
            (Event::BeginDocument(a), Event::EndDocument(b)) => a == b,
            (Event::BeginSection, Event::EndSection) => true,
            (
                Event::BeginHeader { level, id },
                Event::EndHeader {
                    level: end_level,
                    id: end_id,
                },
            ) => level == end_level && id == end_id,
            (Event::BeginList(a), Event::EndList(b)) => a == b,
            (Event::BeginListItem, Event::EndListItem) => true,
            (Event::BeginParagraph, Event::EndParagraph) => true,
            (Event::BeginFormat(a), Event::EndFormat(b)) => a == b,
            (
                Event::BeginLink {
                    reference,
                    free_standing,
                },
                Event::EndLink {
                    reference: end_reference,
                    free_standing: end_free_standing,
                },
            ) => reference == end_reference && free_standing == end_free_standing,
            _ => false,
        }
    }

    /// The variant name, without parameters
    pub fn name(&self) -> &'static str {
        match self {
            Event::BeginDocument(_) => "BeginDocument",
            Event::EndDocument(_) => "EndDocument",
            Event::BeginSection => "BeginSection",
            Event::EndSection => "EndSection",
            Event::BeginHeader { .. } => "BeginHeader",
            Event::EndHeader { .. } => "EndHeader",
            Event::BeginList(_) => "BeginList",
            Event::EndList(_) => "EndList",
            Event::BeginListItem => "BeginListItem",
            Event::EndListItem => "EndListItem",
            Event::BeginParagraph => "BeginParagraph",
            Event::EndParagraph => "EndParagraph",
            Event::BeginFormat(_) => "BeginFormat",
            Event::EndFormat(_) => "EndFormat",
            Event::BeginLink { .. } => "BeginLink",
            Event::EndLink { .. } => "EndLink",
            Event::RawText(_) => "RawText",
            Event::NewLine => "NewLine",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            Event::BeginDocument(meta) | Event::EndDocument(meta) => {
                write!(f, " [syntax={}]", meta.syntax)
            }
            Event::BeginHeader { level, id } | Event::EndHeader { level, id } => match id {
                Some(id) => write!(f, " [level={}, id={}]", level, id),
                None => write!(f, " [level={}]", level),
            },
            Event::BeginList(kind) | Event::EndList(kind) => write!(f, " [{}]", kind.as_str()),
            Event::BeginFormat(format) | Event::EndFormat(format) => {
                write!(f, " [{}]", format.as_str())
            }
            Event::BeginLink {
                reference,
                free_standing,
            }
            | Event::EndLink {
                reference,
                free_standing,
            } => {
                write!(f, " [{}]", reference)?;
                if *free_standing {
                    f.write_str(" free-standing")?;
                }
                Ok(())
            }
            Event::RawText(text) => write!(f, " {:?}", text),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::reference::ResourceKind;

    #[test]
    fn test_end_events_close_their_begin_only() {
        let begin = Event::BeginHeader {
            level: 2,
            id: Some("_intro".to_string()),
        };
        assert!(Event::EndHeader {
            level: 2,
            id: Some("_intro".to_string())
        }
        .closes(&begin));
        assert!(!Event::EndHeader { level: 2, id: None }.closes(&begin));
        assert!(!Event::EndHeader {
            level: 3,
            id: Some("_intro".to_string())
        }
        .closes(&begin));
        assert!(!Event::EndList(ListKind::Ordered).closes(&Event::BeginList(ListKind::Unordered)));
        assert!(!Event::EndSection.closes(&Event::BeginParagraph));
    }

    #[test]
    fn test_begin_end_classification() {
        assert!(Event::BeginSection.is_begin());
        assert!(!Event::BeginSection.is_end());
        assert!(Event::EndParagraph.is_end());
        assert!(!Event::RawText("x".into()).is_begin());
        assert!(!Event::NewLine.is_end());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Event::BeginDocument(MetaData::new(Syntax::AsciiDoc10)).to_string(),
            "BeginDocument [syntax=asciidoc/1.0]"
        );
        assert_eq!(
            Event::EndHeader { level: 1, id: None }.to_string(),
            "EndHeader [level=1]"
        );
        assert_eq!(Event::RawText("a \"b\"".into()).to_string(), r#"RawText "a \"b\"""#);
        let link = Event::BeginLink {
            reference: Reference::new(ResourceKind::Url, "https://x.org")
                .with_parameter("class", "bare"),
            free_standing: true,
        };
        assert_eq!(
            link.to_string(),
            r#"BeginLink [url:https://x.org class="bare"] free-standing"#
        );
    }

    #[test]
    fn test_list_kind_from_context() {
        assert_eq!(ListKind::from_context("olist"), ListKind::Ordered);
        assert_eq!(ListKind::from_context("ulist"), ListKind::Unordered);
        assert_eq!(ListKind::from_context("colist"), ListKind::Unordered);
    }
}
