//! Link references.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// What a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// An absolute URL
    Url,
    /// A relative path, as reported by the fragment parser for anything without a scheme
    Path,
    /// An email address, without the `mailto:` prefix
    Mailto,
    /// Another document of the wiki
    Document,
    Unspecified,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Url => "url",
            ResourceKind::Path => "path",
            ResourceKind::Mailto => "mailto",
            ResourceKind::Document => "doc",
            ResourceKind::Unspecified => "unspecified",
        }
    }
}

/// Classification and target of a link.
///
/// `parameters` holds whatever decoration attributes the fragment parser found on the link
/// (e.g. `class="bare"` on autolinked URLs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub kind: ResourceKind,
    pub target: String,
    pub typed: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

impl Reference {
    pub fn new(kind: ResourceKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            typed: true,
            parameters: BTreeMap::new(),
        }
    }

    pub fn untyped(mut self) -> Self {
        self.typed = false;
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.target)?;
        if !self.typed {
            f.write_str(" untyped")?;
        }
        for (key, value) in &self.parameters {
            write!(f, " {}={:?}", key, value)?;
        }
        Ok(())
    }
}
