//! Link reclassification.
//!
//! The html fragment parser only knows about URLs and paths, while AsciiDoc links are either
//! URLs, email addresses or references to other documents. Rules, first match wins:
//!
//! 1. URL: keep it, drop every parameter. AsciiDoc has no syntax for link parameters, so
//!    anything found (e.g. `class="bare"`) was added by the processor.
//! 2. Path starting with `mailto:`: the fragment parser does not recognize email links, turn
//!    it into a mailto reference without the scheme prefix.
//! 3. Anything else: AsciiDoc has no typed references, so the reference becomes untyped and
//!    points at a document in wiki mode, at a URL otherwise. Its parameters are dropped and
//!    the link stops being free-standing.

use crate::fragment::Link;
use crate::ir::reference::{Reference, ResourceKind};

const MAILTO_SCHEME_PREFIX: &str = "mailto:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Url,
    MailtoPath,
    Untyped,
}

fn rule_for(reference: &Reference) -> Rule {
    match reference.kind {
        ResourceKind::Url => Rule::Url,
        ResourceKind::Path if reference.target.starts_with(MAILTO_SCHEME_PREFIX) => {
            Rule::MailtoPath
        }
        _ => Rule::Untyped,
    }
}

/// Returns the reclassified reference.
pub fn reclassify(reference: Reference, wiki_mode: bool) -> Reference {
    match rule_for(&reference) {
        Rule::Url => Reference {
            parameters: Default::default(),
            ..reference
        },
        Rule::MailtoPath => Reference {
            kind: ResourceKind::Mailto,
            target: reference.target[MAILTO_SCHEME_PREFIX.len()..].to_string(),
            ..reference
        },
        Rule::Untyped => Reference {
            kind: if wiki_mode {
                ResourceKind::Document
            } else {
                ResourceKind::Url
            },
            typed: false,
            parameters: Default::default(),
            ..reference
        },
    }
}

/// Reclassifies the reference of a link, keeping its label.
pub fn reclassify_link(link: Link, wiki_mode: bool) -> Link {
    let free_standing = match rule_for(&link.reference) {
        Rule::Untyped => false,
        _ => link.free_standing,
    };
    Link {
        reference: reclassify(link.reference, wiki_mode),
        free_standing,
        children: link.children,
    }
}
