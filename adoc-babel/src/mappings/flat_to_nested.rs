//! Converts a flat event stream back into a nested tree.
//!
//! # The High-Level Concept
//!
//! The core challenge is to reconstruct a tree from a linear sequence of events. A stack keeps
//! track of the open containers: a `Begin*` event pushes a new container, leaf events are
//! added to the container on top, and an `End*` event pops the top container after checking
//! that it closes it (same kind, same discriminator).
//!
//! A stream rebuilds without error exactly when it is balanced, which is what
//! [`validate_balance`] checks. Renderers that need a DOM instead of a stream can use
//! [`events_to_tree`] directly.

use crate::ir::events::Event;
use thiserror::Error;

/// Error type for flat-to-nested conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// An end event arrived while nothing was open
    #[error("unexpected {found} at position {position}: no open event")]
    UnexpectedEnd { found: String, position: usize },

    /// An end event does not close the innermost open event
    #[error("mismatched events at position {position}: {found} does not close {open}")]
    Mismatched {
        open: String,
        found: String,
        position: usize,
    },

    /// Containers still open at the end of the stream
    #[error("unclosed events: {0} still open at the end of the stream")]
    Unclosed(usize),
}

/// A node of a rebuilt event tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventNode {
    Container {
        begin: Event,
        end: Event,
        children: Vec<EventNode>,
    },
    Leaf(Event),
}

impl EventNode {
    pub fn children(&self) -> &[EventNode] {
        match self {
            EventNode::Container { children, .. } => children,
            EventNode::Leaf(_) => &[],
        }
    }
}

/// Rebuilds the forest of top level nodes described by `events`.
pub fn events_to_tree(events: &[Event]) -> Result<Vec<EventNode>, BalanceError> {
    let mut roots = Vec::new();
    let mut stack: Vec<(Event, Vec<EventNode>)> = Vec::new();

    for (position, event) in events.iter().enumerate() {
        if event.is_begin() {
            stack.push((event.clone(), Vec::new()));
        } else if event.is_end() {
            let (begin, children) = stack.pop().ok_or_else(|| BalanceError::UnexpectedEnd {
                found: event.to_string(),
                position,
            })?;
            if !event.closes(&begin) {
                return Err(BalanceError::Mismatched {
                    open: begin.to_string(),
                    found: event.to_string(),
                    position,
                });
            }
            let node = EventNode::Container {
                begin,
                end: event.clone(),
                children,
            };
            match stack.last_mut() {
                Some((_, siblings)) => siblings.push(node),
                None => roots.push(node),
            }
        } else {
            let leaf = EventNode::Leaf(event.clone());
            match stack.last_mut() {
                Some((_, siblings)) => siblings.push(leaf),
                None => roots.push(leaf),
            }
        }
    }

    if !stack.is_empty() {
        return Err(BalanceError::Unclosed(stack.len()));
    }
    Ok(roots)
}

/// Checks that every begin event is closed by its matching end event, without interleaving.
pub fn validate_balance(events: &[Event]) -> Result<(), BalanceError> {
    events_to_tree(events).map(|_| ())
}
