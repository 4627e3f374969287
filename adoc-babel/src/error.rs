//! Error types for translation
//!
//! Unknown node kinds are not errors: the walker skips their own events and keeps going into
//! their children (see [`crate::mappings::structure`]).

use thiserror::Error;

/// The top level document could not be turned into a source tree.
#[derive(Debug, Error)]
pub enum MarkupParseError {
    #[error("invalid source tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid `{context}` node: {reason}")]
    InvalidNode { context: String, reason: String },
}

/// A fragment of inline markup (paragraph content, title, list item text) could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse fragment {text:?}: {cause}")]
pub struct FragmentParseError {
    /// The offending fragment text
    pub text: String,
    /// What the fragment parser reported
    pub cause: String,
}

impl FragmentParseError {
    pub fn new(text: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cause: cause.into(),
        }
    }
}

/// Any failure of a translation call. None of them are recovered from locally.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    MarkupParse(#[from] MarkupParseError),

    #[error(transparent)]
    FragmentParse(#[from] FragmentParseError),

    #[error("source tree nested {depth} levels deep, the limit is {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}
