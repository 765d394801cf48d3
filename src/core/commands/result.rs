//! Command execution result types.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::config::EXIT_INTERRUPTED;
use crate::utils::format::serialize_duration_ms;

/// Exit status of an executed line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExitCode {
    #[default]
    Success,
    Failure,
    /// Assigned by callers for a cancelled line, never by dispatch.
    Interrupted,
}

impl ExitCode {
    /// Numeric shell exit code.
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

impl Serialize for ExitCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Text and status produced by a command handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: ExitCode,
}

impl CommandOutput {
    /// Successful output.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: ExitCode::Success,
        }
    }

    /// Output reporting a handled failure (exit code 1).
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: ExitCode::Failure,
        }
    }

    /// Successful, silent output.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Result of dispatching one command line.
///
/// Owned by the caller once returned; the interpreter keeps no history.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub output: String,
    pub exit_code: ExitCode,
    /// Time from dispatch start to handler completion
    #[serde(rename = "durationMs", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
}

impl ExecutionResult {
    /// Marker result for a line the user interrupted before running it.
    pub fn interrupted() -> Self {
        Self {
            output: String::new(),
            exit_code: ExitCode::Interrupted,
            duration: Duration::ZERO,
        }
    }
}
