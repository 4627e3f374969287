//! Syntax identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The source syntax a document was translated from.
///
/// This is an identity label only: every syntax runs the same translation, and the value is
/// only carried in the `BeginDocument`/`EndDocument` metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Syntax {
    #[default]
    #[serde(rename = "asciidoc/1.0")]
    AsciiDoc10,
    #[serde(rename = "asciidoctor/1.0")]
    Asciidoctor10,
}

impl Syntax {
    /// Every known syntax, in declaration order
    pub const ALL: [Syntax; 2] = [Syntax::AsciiDoc10, Syntax::Asciidoctor10];

    /// Syntax type identifier, e.g. `asciidoc`
    pub fn kind(&self) -> &'static str {
        match self {
            Syntax::AsciiDoc10 => "asciidoc",
            Syntax::Asciidoctor10 => "asciidoctor",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Syntax::AsciiDoc10 => "AsciiDoc",
            Syntax::Asciidoctor10 => "Asciidoctor",
        }
    }

    pub fn version(&self) -> &'static str {
        "1.0"
    }

    /// Full identifier, e.g. `asciidoc/1.0`
    pub fn id(&self) -> &'static str {
        match self {
            Syntax::AsciiDoc10 => "asciidoc/1.0",
            Syntax::Asciidoctor10 => "asciidoctor/1.0",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Syntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Syntax::ALL
            .into_iter()
            .find(|syntax| syntax.id() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Syntax::ALL.iter().map(Syntax::id).collect();
                format!("unknown syntax '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
