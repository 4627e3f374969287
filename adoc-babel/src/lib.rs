//! AsciiDoc source trees to rendering event streams
//!
//!     This crate turns the block tree produced by an AsciiDoc processor into the flat, balanced
//!     event stream a rendering backend consumes (begin/end pairs plus leaf events).
//!
//!     This is a pure lib: it does not read files, install loggers or look at the environment.
//!     Parsing AsciiDoc itself is someone else's job, the crate only consumes the resulting tree
//!     through the [`MarkupParser`] trait.
//!
//! Architecture
//!
//!     - Source model: the AsciiDoc block tree (sections, lists, list items, paragraphs, other)
//!     - Fragment parsers: re-parse the inline markup carried by paragraphs, titles and list
//!       items into a small [`fragment::Fragment`] tree (html and plain flavours)
//!     - Mappings: reference reclassification, the structural walker and the generic
//!       fragment-to-events traversal
//!     - Translator: the entry point wrapping a walk in begin/end document events
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── sink.rs                 # EventSink trait
//!     ├── translator.rs           # Translator, WikiMode
//!     ├── ir
//!     │   ├── events.rs           # Event, Format, ListKind, MetaData
//!     │   ├── reference.rs        # Reference, ResourceKind
//!     │   └── syntax.rs           # Syntax identities
//!     ├── source
//!     │   ├── mod.rs              # SourceDocument, SourceNode
//!     │   └── json.rs             # JSON serialized source trees
//!     ├── fragment
//!     │   ├── mod.rs              # Fragment tree, FragmentParser trait
//!     │   ├── html.rs             # html5ever backed parser
//!     │   └── plain.rs            # plain text parser (titles)
//!     ├── mappings
//!     │   ├── references.rs       # link reclassification
//!     │   ├── inline.rs           # fragment translation
//!     │   ├── structure.rs        # structural tree walker
//!     │   ├── nested_to_flat.rs   # fragment tree -> events
//!     │   └── flat_to_nested.rs   # events -> tree, balance checks
//!     ├── lib.rs
//!
//! Testing
//!     tests
//!     ├── translate.rs
//!     ├── properties.rs
//!     └── fixtures
//!         └── <docname>.json
//!
//! Paragraph Boundaries
//!
//!     AsciiDoc processors hand paragraph content over as converted html without the enclosing
//!     `<p>`. The html fragment parser wraps such inline runs in a paragraph node, and that node
//!     is what produces the `BeginParagraph`/`EndParagraph` pair. The structural walker never
//!     adds a paragraph wrapper of its own.
//!
//! Concurrency
//!
//!     A translation call is synchronous and single threaded. The bundled parsers hold no
//!     mutable state, so independent calls can run on separate threads sharing one
//!     [`Translator`]. Callers plugging in a stateful parser must serialize access to it.
//!
pub mod error;
pub mod fragment;
pub mod ir;
pub mod mappings;
pub mod sink;
pub mod source;
pub mod translator;

pub use error::{FragmentParseError, MarkupParseError, TranslateError};
pub use fragment::{FragmentParser, HtmlFragmentParser, PlainFragmentParser};
pub use ir::events::{Event, Format, ListKind, MetaData};
pub use ir::reference::{Reference, ResourceKind};
pub use ir::syntax::Syntax;
pub use mappings::flat_to_nested::{events_to_tree, validate_balance, BalanceError, EventNode};
pub use sink::EventSink;
pub use source::{json::JsonSourceParser, MarkupParser, SourceDocument, SourceNode};
pub use translator::{Translator, WikiMode};
