//! In-memory shell interpreter.
//!
//! A line typed at the prompt is tokenized, dispatched to a registered
//! command, and run against a [`VirtualFileSystem`] owned by the caller.
//! The same registry and filesystem drive prompt autocomplete.
//!
//! ```no_run
//! use webterm::{Dispatcher, VirtualFileSystem, suggest};
//!
//! # async fn demo() {
//! let dispatcher = Dispatcher::default();
//! let mut fs = VirtualFileSystem::new();
//!
//! let result = dispatcher.execute("ls -l", &mut fs, &mut || {}).await;
//! let hints = suggest("cat re", &fs, dispatcher.registry());
//! # }
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{
    CommandRegistry, Dispatcher, ExecutionResult, ExitCode, VirtualFileSystem, apply_suggestion,
    inline_help, suggest, tokenize,
};
pub use crate::models::{FsNode, Suggestion, SuggestionKind};
