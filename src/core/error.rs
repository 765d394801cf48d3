//! Custom error types for the interpreter.
//!
//! Provides structured error handling for each domain:
//!
//! - [`FsError`] - path resolution and node-type mismatches
//! - [`CommandError`] - failures raised out of a command handler
//! - [`RegistryError`] - invalid command tables

use thiserror::Error;

/// Virtual filesystem lookup errors.
///
/// Handlers translate these into their own command-specific messages;
/// they never reach the dispatcher as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Path does not resolve to any node.
    #[error("{0}: No such file or directory")]
    NotFound(String),
    /// Path resolves to a file where a directory was required.
    #[error("{0}: Not a directory")]
    NotADirectory(String),
    /// Path resolves to a directory where a file was required.
    #[error("{0}: Is a directory")]
    NotAFile(String),
}

/// Failure raised by a command handler.
///
/// The dispatcher renders these as `Error: <message>` with exit code 1.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A pattern argument is not a valid regular expression.
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// A filesystem lookup the handler did not translate itself.
    #[error(transparent)]
    Filesystem(#[from] FsError),
    /// Any other handler failure.
    #[error("{0}")]
    Failed(String),
}

/// Errors building a [`CommandRegistry`](crate::core::CommandRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two definitions share a name.
    #[error("duplicate command name: {0}")]
    DuplicateName(String),
}
