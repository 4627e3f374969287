//! Inline fragment translation.
//!
//! Parse, optionally unwrap, reclassify links, then flatten into events.

use super::nested_to_flat::fragment_to_events;
use super::references::reclassify_link;
use crate::error::FragmentParseError;
use crate::fragment::{FragmentParser, Link};
use crate::sink::EventSink;

/// Translates one raw inline fragment into events.
///
/// With `strip_outer_wrapper` the first top level node the parser produced (usually the
/// paragraph it wraps inline text in) is replaced by its children. Parse failures are returned
/// as is; nothing has been emitted in that case.
pub fn translate_fragment(
    text: &str,
    parser: &dyn FragmentParser,
    strip_outer_wrapper: bool,
    wiki_mode: bool,
    sink: &mut dyn EventSink,
) -> Result<(), FragmentParseError> {
    let mut fragment = parser.parse(text)?;
    tracing::trace!(
        nodes = fragment.children.len(),
        strip_outer_wrapper,
        "parsed inline fragment"
    );

    if strip_outer_wrapper {
        fragment.strip_outer_wrapper();
    }

    let fragment = fragment.map_links(&mut |link: Link| reclassify_link(link, wiki_mode));
    fragment_to_events(&fragment.children, sink);
    Ok(())
}
