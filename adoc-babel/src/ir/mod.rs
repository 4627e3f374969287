//! Output vocabulary of the translation.
//!
//! - [`events`]: the flat event stream handed to a rendering backend
//! - [`reference`]: link targets and their classification
//! - [`syntax`]: identities of the source syntaxes, carried as document metadata

pub mod events;
pub mod reference;
pub mod syntax;
