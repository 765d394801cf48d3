//! Lexer for tokenizing shell input.
//!
//! Handles:
//! - Whitespace-separated words
//! - Single and double quotes (whitespace inside is literal)
//! - Backslash escapes, inside or outside quotes
//!
//! There are no other metacharacters: `|`, `$`, `>` and friends are
//! ordinary word characters. Malformed input never fails; an unterminated
//! quote runs to end of input and a trailing backslash is kept literally.

use std::iter::Peekable;
use std::str::Chars;

// =============================================================================
// Lexer
// =============================================================================

/// Lexer producing one `String` per shell word.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Tokenize the entire input into a vector
    ///
    /// This is a convenience method that collects all tokens.
    /// For lazy evaluation, use the `Iterator` implementation directly.
    pub fn tokenize(self) -> Vec<String> {
        self.collect()
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    /// Push the character following a backslash, or the backslash itself
    /// when the input ends right after it.
    fn push_escaped(&mut self, buf: &mut String) {
        match self.chars.next() {
            Some(escaped) => buf.push(escaped),
            None => buf.push('\\'),
        }
    }

    fn parse_quoted(&mut self, quote: char) -> String {
        let mut buf = String::new();

        while let Some(c) = self.chars.next() {
            match c {
                '\\' => self.push_escaped(&mut buf),
                c if c == quote => break,
                c => buf.push(c),
            }
        }

        buf
    }

    fn parse_word(&mut self) -> String {
        let mut buf = String::new();

        while let Some(c) = self.chars.next_if(|c| !c.is_whitespace()) {
            if c == '\\' {
                self.push_escaped(&mut buf);
            } else {
                buf.push(c);
            }
        }

        buf
    }
}

impl Iterator for Lexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        match self.chars.peek().copied()? {
            quote @ ('"' | '\'') => {
                self.chars.next();
                Some(self.parse_quoted(quote))
            }
            _ => Some(self.parse_word()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
