//! Contains logic for mapping between the source tree, fragment trees and event streams.

pub mod flat_to_nested;
pub mod inline;
pub mod nested_to_flat;
pub mod references;
pub mod structure;
