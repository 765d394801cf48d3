//! Autocomplete suggestions for the command prompt.
//!
//! This module provides ranked completion candidates for:
//! - Command names (e.g., "gr" → "grep")
//! - Option flags declared by the command being typed
//! - Directory and file paths relative to the cwd or the typed prefix
//!
//! Suggestions are recomputed from scratch on every call; nothing is
//! cached between keystrokes.

use std::collections::HashSet;

use tracing::trace;

use crate::config::suggestions::{
    ARGUMENT_LIMIT, COMMAND_LIMIT, EMPTY_INPUT_HELP, FLAG_HINT, UNKNOWN_COMMAND_HELP,
};
use crate::core::parser::{ends_with_separator, tokenize};
use crate::core::{CommandDef, CommandRegistry, VirtualFileSystem};
use crate::models::{Suggestion, SuggestionKind};

// ============================================================================
// Completion Context
// ============================================================================

/// True while the caret is still inside (or before) the first token.
fn completing_command(tokens: &[String], entering_new_token: bool) -> bool {
    tokens.is_empty() || (tokens.len() == 1 && !entering_new_token)
}

/// Parsed path components for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Filename/directory name being completed.
    name_part: &'a str,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str) -> Self {
        match partial.rfind('/') {
            Some(idx) => Self {
                dir_part: &partial[..=idx],
                name_part: &partial[idx + 1..],
            },
            None => Self {
                dir_part: "",
                name_part: partial,
            },
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Suggestions for partial input.
///
/// In command position, command names matching the typed prefix
/// (case-insensitive). After the first token, the command's flags followed
/// by matching path entries, deduplicated.
pub fn suggest(input: &str, fs: &VirtualFileSystem, registry: &CommandRegistry) -> Vec<Suggestion> {
    let tokens = tokenize(input);
    let entering_new_token = ends_with_separator(input);

    if completing_command(&tokens, entering_new_token) {
        let partial = tokens.first().map_or("", String::as_str);
        return complete_command(partial, registry);
    }

    let Some(def) = registry.by_name(&tokens[0]) else {
        return Vec::new();
    };

    let partial = match tokens.last() {
        Some(last) if !entering_new_token => last.as_str(),
        _ => "",
    };

    let mut candidates = complete_flags(def, partial);
    if !partial.starts_with('-') {
        candidates.extend(complete_path(partial, fs));
    }

    let mut seen = HashSet::new();
    let suggestions: Vec<Suggestion> = candidates
        .into_iter()
        .filter(|s| seen.insert((s.kind, s.label.clone())))
        .take(ARGUMENT_LIMIT)
        .collect();

    trace!(input, count = suggestions.len(), "argument suggestions");
    suggestions
}

/// Replace the in-progress token with an accepted suggestion.
///
/// A completed command name gets a trailing space so argument completion
/// starts right away.
pub fn apply_suggestion(input: &str, label: &str) -> String {
    let tokens = tokenize(input);
    if completing_command(&tokens, ends_with_separator(input)) {
        return format!("{label} ");
    }

    let kept = input.trim_end_matches(|c: char| !c.is_whitespace());
    format!("{kept}{label}")
}

/// One-line usage hint for the current input.
pub fn inline_help(input: &str, registry: &CommandRegistry) -> String {
    let tokens = tokenize(input);
    let Some(name) = tokens.first() else {
        return EMPTY_INPUT_HELP.to_string();
    };

    match registry.by_name(name) {
        Some(def) => def.usage.unwrap_or(def.name).to_string(),
        None => UNKNOWN_COMMAND_HELP.to_string(),
    }
}

// ============================================================================
// Candidates
// ============================================================================

fn complete_command(partial: &str, registry: &CommandRegistry) -> Vec<Suggestion> {
    let partial_lower = partial.to_lowercase();
    registry
        .all()
        .iter()
        .filter(|def| def.name.to_lowercase().starts_with(&partial_lower))
        .take(COMMAND_LIMIT)
        .map(|def| Suggestion::new(SuggestionKind::Command, def.name).with_hint(def.description))
        .collect()
}

fn complete_flags(def: &CommandDef, partial: &str) -> Vec<Suggestion> {
    def.options
        .iter()
        .filter(|opt| opt.flag.starts_with(partial))
        .map(|opt| Suggestion::new(SuggestionKind::Flag, opt.flag).with_hint(FLAG_HINT))
        .collect()
}

fn complete_path(partial: &str, fs: &VirtualFileSystem) -> Vec<Suggestion> {
    let parsed = ParsedPath::parse(partial);
    let Ok(entries) = fs.list_dir(Some(parsed.dir_part)) else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter(|entry| entry.name.starts_with(parsed.name_part))
        .map(|entry| {
            let suffix = if entry.is_dir() { "/" } else { "" };
            let label = format!("{}{}{suffix}", parsed.dir_part, entry.name);
            Suggestion::new(entry.kind.into(), label).with_hint(entry.kind.as_str())
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
