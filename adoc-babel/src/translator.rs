//! Document translation entry point.

use crate::error::TranslateError;
use crate::fragment::FragmentParser;
use crate::ir::events::{Event, MetaData};
use crate::ir::syntax::Syntax;
use crate::mappings::structure::StructureWalker;
use crate::sink::EventSink;
use crate::source::{MarkupParser, SourceDocument};

/// Default limit on block nesting, see [`Translator::with_max_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Decides whether untyped links point at wiki documents or at URLs.
///
/// Queried once at the start of each translation call.
pub trait WikiMode {
    fn wiki_mode_active(&self) -> bool;
}

impl WikiMode for bool {
    fn wiki_mode_active(&self) -> bool {
        *self
    }
}

impl<F> WikiMode for F
where
    F: Fn() -> bool,
{
    fn wiki_mode_active(&self) -> bool {
        self()
    }
}

/// Translates source documents into event streams.
///
/// The translator only borrows its fragment parsers and keeps no state between calls, so one
/// instance can serve concurrent translations as long as the parsers allow it (the bundled
/// ones do).
///
/// Block nesting is capped at [`DEFAULT_MAX_DEPTH`] unless changed with
/// [`Translator::with_max_depth`]. A source tree nested deeper than the cap fails with
/// [`TranslateError::NestingTooDeep`] even though it is otherwise valid, so callers accepting
/// arbitrarily deep trees must raise the limit.
///
/// # Examples
///
/// ```ignore
/// let html = HtmlFragmentParser::new();
/// let translator = Translator::new(&html, &PlainFragmentParser);
/// let events = translator.translate(&document, false)?;
/// ```
pub struct Translator<'p> {
    inline: &'p dyn FragmentParser,
    plain: &'p dyn FragmentParser,
    syntax: Syntax,
    max_depth: usize,
}

impl<'p> Translator<'p> {
    /// `inline` parses paragraphs and list items, `plain` parses section titles.
    pub fn new(inline: &'p dyn FragmentParser, plain: &'p dyn FragmentParser) -> Self {
        Self {
            inline,
            plain,
            syntax: Syntax::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Syntax identity reported in the document metadata
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Source trees nested deeper than `max_depth` blocks fail with
    /// [`TranslateError::NestingTooDeep`] instead of recursing further.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Translates a document, collecting the events.
    pub fn translate(
        &self,
        document: &SourceDocument,
        mode: impl WikiMode,
    ) -> Result<Vec<Event>, TranslateError> {
        let mut events = Vec::new();
        self.translate_into(document, mode, &mut events)?;
        Ok(events)
    }

    /// Translates a document, pushing the events into `sink` as they are produced.
    ///
    /// On error the sink may have received a partial, unbalanced stream.
    pub fn translate_into(
        &self,
        document: &SourceDocument,
        mode: impl WikiMode,
        sink: &mut dyn EventSink,
    ) -> Result<(), TranslateError> {
        let wiki_mode = mode.wiki_mode_active();
        tracing::debug!(
            syntax = %self.syntax,
            wiki_mode,
            blocks = document.blocks.len(),
            "translating document"
        );

        let walker = StructureWalker {
            inline: self.inline,
            plain: self.plain,
            wiki_mode,
            max_depth: self.max_depth,
        };

        let metadata = MetaData::new(self.syntax);
        sink.emit(Event::BeginDocument(metadata.clone()));
        walker.walk(&document.blocks, sink)?;
        sink.emit(Event::EndDocument(metadata));
        Ok(())
    }

    /// Parses raw document text with `markup`, then translates the result.
    pub fn parse(
        &self,
        source: &str,
        markup: &dyn MarkupParser,
        mode: impl WikiMode,
    ) -> Result<Vec<Event>, TranslateError> {
        let document = markup.parse(source)?;
        self.translate(&document, mode)
    }
}
