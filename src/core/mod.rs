//! Core interpreter logic.
//!
//! This module provides:
//! - [`tokenize`] for splitting a command line into words
//! - [`VirtualFileSystem`] in-memory filesystem and path resolution
//! - [`CommandRegistry`] and [`Dispatcher`] for running commands
//! - [`suggest`], [`apply_suggestion`] and [`inline_help`] for the prompt

mod autocomplete;
pub mod commands;
pub mod error;
mod filesystem;
pub mod parser;

pub use autocomplete::{apply_suggestion, inline_help, suggest};
pub use commands::{
    CommandArg, CommandContext, CommandDef, CommandOption, CommandOutput, CommandRegistry,
    Dispatcher, ExecutionResult, ExitCode, Handler, HandlerResult,
};
pub use filesystem::VirtualFileSystem;
pub use parser::tokenize;
