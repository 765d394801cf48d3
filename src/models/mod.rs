//! Data models and types for the interpreter.
//!
//! Contains domain types for:
//! - [`FsNode`], [`NodeKind`], [`DirEntry`] - Virtual filesystem representation
//! - [`Suggestion`], [`SuggestionKind`] - Autocomplete candidates

mod filesystem;
mod terminal;

pub use filesystem::{DirEntry, FsNode, NodeKind};
pub use terminal::{Suggestion, SuggestionKind};
