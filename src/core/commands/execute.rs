//! Command dispatch.
//!
//! Contains the `Dispatcher` that runs a raw line against the caller's
//! virtual filesystem and returns an `ExecutionResult`.

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::VirtualFileSystem;
use crate::core::parser::tokenize;

use super::{CommandContext, CommandOutput, CommandRegistry, ExecutionResult};

/// Maps command lines onto registered handlers.
///
/// The dispatcher owns the registry; the filesystem stays with the caller
/// and is lent mutably for the whole call, so one filesystem never has two
/// commands in flight.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Execute one command line.
    ///
    /// Returns `None` for a blank line. Otherwise exactly one result is
    /// produced whatever the handler does:
    ///
    /// * unknown command: `<name>: command not found`, exit 1
    /// * handler output: its text and exit code
    /// * handler error: `Error: <message>`, exit 1
    ///
    /// # Arguments
    ///
    /// * `line` - Raw input line
    /// * `fs` - Filesystem the handler reads and mutates
    /// * `clear_screen` - Host callback for the `clear` command
    pub async fn execute(
        &self,
        line: &str,
        fs: &mut VirtualFileSystem,
        clear_screen: &mut dyn FnMut(),
    ) -> Option<ExecutionResult> {
        let argv = tokenize(line);
        let name = argv.first()?.as_str();
        let start = Instant::now();

        let outcome = match self.registry.by_name(name) {
            None => CommandOutput::failure(format!("{name}: command not found")),
            Some(def) => {
                let ctx = CommandContext::new(fs, &argv, &self.registry, clear_screen);
                match def.handler.invoke(ctx).await {
                    Ok(output) => output,
                    Err(err) => {
                        warn!(command = name, error = %err, "command failed");
                        CommandOutput::failure(format!("Error: {err}"))
                    }
                }
            }
        };

        let duration = start.elapsed();
        debug!(
            command = name,
            exit_code = outcome.exit_code.code(),
            elapsed = ?duration,
            "dispatched"
        );

        Some(ExecutionResult {
            output: outcome.text,
            exit_code: outcome.exit_code,
            duration,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
