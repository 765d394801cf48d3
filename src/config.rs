//! Interpreter configuration.
//!
//! Centralizes all configuration constants used throughout the crate:
//! the seeded filesystem, display identity, suggestion limits, and the
//! fixed texts shown by inline help.

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Home directory of the session user; initial cwd and `cd` default.
pub const HOME_DIR: &str = "/home/dev";

/// Content of `~/readme.txt` in a freshly seeded filesystem.
pub const README_CONTENT: &str = "Welcome to the Web Terminal. Type 'help' to start.";

/// Content of `~/notes.md` in a freshly seeded filesystem.
pub const NOTES_CONTENT: &str = "# Notes\n- Tailwind UI\n- Autocomplete\n- Improve FS later";

// =============================================================================
// Display Configuration
// =============================================================================

/// Owner shown in `ls -l` output.
pub const DISPLAY_USER: &str = "dev";

/// Group shown in `ls -l` output.
pub const DISPLAY_GROUP: &str = "dev";

/// Permission bits shown in `ls -l` output (after the type character).
pub const DISPLAY_PERMISSIONS: &str = "rwxr-xr-x";

/// Column layout for `help`, `man` and `ls -l`.
pub mod layout {
    /// Width the command name is padded to in the `help` listing.
    pub const HELP_NAME_WIDTH: usize = 12;

    /// Width an option flag is padded to in option listings.
    pub const OPTION_FLAG_WIDTH: usize = 6;

    /// Width the size column is right-aligned to in `ls -l`.
    pub const LS_SIZE_WIDTH: usize = 5;

    /// Indentation of `man` section bodies.
    pub const MAN_INDENT: &str = "    ";
}

// =============================================================================
// Autocomplete Configuration
// =============================================================================

/// Suggestion limits and fixed hint texts.
pub mod suggestions {
    /// Maximum command-name suggestions.
    pub const COMMAND_LIMIT: usize = 8;

    /// Maximum flag + path suggestions in argument mode.
    pub const ARGUMENT_LIMIT: usize = 10;

    /// Hint attached to flag suggestions.
    pub const FLAG_HINT: &str = "option";

    /// Inline help for an empty prompt.
    pub const EMPTY_INPUT_HELP: &str = "Type a command. Try 'help' or 'ls -l'.";

    /// Inline help when the first token names no command.
    pub const UNKNOWN_COMMAND_HELP: &str = "Unknown command. Type 'help'.";
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit code recorded by callers for an interrupted command line.
pub const EXIT_INTERRUPTED: u8 = 130;

// =============================================================================
// Session
// =============================================================================

/// Maximum history entries a session keeps before dropping the oldest.
pub const MAX_SESSION_HISTORY: usize = 1000;

/// Prompt symbol printed after the working directory.
pub const PROMPT_SYMBOL: &str = "$";
