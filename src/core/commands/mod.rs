//! Command definitions, registry and dispatch.
//!
//! This module provides:
//! - `CommandDef` describing a command and its handler
//! - `CommandRegistry`, the immutable lookup table of commands
//! - `Dispatcher`, which turns a raw line into an `ExecutionResult`
//!
//! # Architecture
//!
//! A line is tokenized, `argv[0]` is looked up in the registry, and the
//! matching `Handler` runs against a `CommandContext` holding the caller's
//! filesystem. Handlers report expected problems (missing files, unknown
//! topics) as `CommandOutput::failure`; anything they return as `Err`
//! is rendered once, at the dispatcher boundary.

mod builtins;
mod execute;
mod help;
mod registry;
mod result;

pub use execute::Dispatcher;
pub use help::{format_help, format_listing, format_man};
pub use registry::CommandRegistry;
pub use result::{CommandOutput, ExecutionResult, ExitCode};

use std::fmt;

use futures::future::LocalBoxFuture;

use crate::core::VirtualFileSystem;
use crate::core::error::CommandError;

// =============================================================================
// Declarations
// =============================================================================

/// A declared option flag (e.g., `-l`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandOption {
    pub flag: &'static str,
    pub desc: &'static str,
}

/// A declared positional argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandArg {
    pub name: &'static str,
    pub optional: bool,
    pub variadic: bool,
}

impl CommandArg {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            optional: false,
            variadic: false,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
            variadic: false,
        }
    }

    /// Optional argument that may repeat.
    pub const fn variadic(name: &'static str) -> Self {
        Self {
            name,
            optional: true,
            variadic: true,
        }
    }
}

impl fmt::Display for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variadic {
            write!(f, "{}...", self.name)
        } else if self.optional {
            write!(f, "[{}]", self.name)
        } else {
            write!(f, "<{}>", self.name)
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Result of a handler invocation.
pub type HandlerResult = Result<CommandOutput, CommandError>;

/// Handler that completes before returning.
pub type SyncHandler = fn(&mut CommandContext<'_>) -> HandlerResult;

/// Handler that may suspend before producing its output.
pub type AsyncHandler = for<'a> fn(CommandContext<'a>) -> LocalBoxFuture<'a, HandlerResult>;

/// Command implementation.
#[derive(Clone, Copy)]
pub enum Handler {
    Sync(SyncHandler),
    Async(AsyncHandler),
}

impl Handler {
    /// Run the handler to completion.
    pub async fn invoke(self, mut ctx: CommandContext<'_>) -> HandlerResult {
        match self {
            Self::Sync(handler) => handler(&mut ctx),
            Self::Async(handler) => handler(ctx).await,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("Handler::Sync"),
            Self::Async(_) => f.write_str("Handler::Async"),
        }
    }
}

/// Everything a handler may read or mutate.
pub struct CommandContext<'a> {
    pub fs: &'a mut VirtualFileSystem,
    /// Full argument vector, command name included
    pub argv: &'a [String],
    pub registry: &'a CommandRegistry,
    clear_screen: &'a mut dyn FnMut(),
}

impl<'a> CommandContext<'a> {
    pub fn new(
        fs: &'a mut VirtualFileSystem,
        argv: &'a [String],
        registry: &'a CommandRegistry,
        clear_screen: &'a mut dyn FnMut(),
    ) -> Self {
        Self {
            fs,
            argv,
            registry,
            clear_screen,
        }
    }

    /// Arguments after the command name.
    pub fn args(&self) -> &'a [String] {
        self.argv.get(1..).unwrap_or_default()
    }

    /// Whether `flag` appears anywhere among the arguments.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args().iter().any(|arg| arg == flag)
    }

    /// Ask the host to clear its display.
    pub fn clear_screen(&mut self) {
        (self.clear_screen)();
    }
}

// =============================================================================
// Command Definition
// =============================================================================

/// Immutable description of a command.
#[derive(Clone, Debug)]
pub struct CommandDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Usage line; synthesized from `args` when absent
    pub usage: Option<&'static str>,
    pub options: &'static [CommandOption],
    pub args: &'static [CommandArg],
    pub handler: Handler,
}

impl CommandDef {
    /// Usage line, falling back to the name followed by the declared args.
    pub fn synopsis(&self) -> String {
        if let Some(usage) = self.usage {
            return usage.to_string();
        }

        let mut synopsis = self.name.to_string();
        for arg in self.args {
            synopsis.push(' ');
            synopsis.push_str(&arg.to_string());
        }
        synopsis
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut CommandContext<'_>) -> HandlerResult {
        Ok(CommandOutput::empty())
    }

    const CP_ARGS: &[CommandArg] = &[
        CommandArg::required("src"),
        CommandArg::optional("dest"),
        CommandArg::variadic("more"),
    ];

    fn def(usage: Option<&'static str>) -> CommandDef {
        CommandDef {
            name: "cp",
            description: "Copy files",
            usage,
            options: &[],
            args: CP_ARGS,
            handler: Handler::Sync(noop),
        }
    }

    #[test]
    fn test_synopsis_prefers_usage() {
        assert_eq!(def(Some("cp SRC DEST")).synopsis(), "cp SRC DEST");
    }

    #[test]
    fn test_synopsis_from_args() {
        assert_eq!(def(None).synopsis(), "cp <src> [dest] more...");
    }

    #[test]
    fn test_context_args_and_flags() {
        let mut fs = VirtualFileSystem::new();
        let registry = CommandRegistry::builtin();
        let argv: Vec<String> = ["ls", "-l", "projects"].map(String::from).to_vec();
        let mut cleared = false;
        let mut clear = || cleared = true;

        let mut ctx = CommandContext::new(&mut fs, &argv, &registry, &mut clear);
        assert_eq!(ctx.args(), ["-l", "projects"]);
        assert!(ctx.has_flag("-l"));
        assert!(!ctx.has_flag("ls"));
        ctx.clear_screen();
        drop(ctx);
        assert!(cleared);
    }
}
