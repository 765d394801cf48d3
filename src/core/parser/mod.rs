//! Command line parsing.
//!
//! Supports:
//! - Quote handling: `"string with spaces"`, `'literal string'`
//! - Backslash escapes: `file\ name`
//!
//! Pipes, redirection and expansion are not part of the grammar.

mod lexer;

pub use lexer::Lexer;

/// Split a raw line into argument tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    Lexer::new(input).tokenize()
}

/// Whether the caret sits after a completed token (input ends in whitespace).
pub fn ends_with_separator(input: &str) -> bool {
    input.ends_with(char::is_whitespace)
}
