//! Cursor position management for the lexer.
//!
//! This module provides methods for tracking and advancing the lexer's
//! position within the input source code.

use super::Lexer;

impl Lexer<'_> {
    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    /// Consumes and returns the current character.
    ///
    /// Handles multi-byte UTF-8 characters correctly and increments the
    /// line counter on newlines. Returns `None` at end of input.
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Returns the current character without consuming it.
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    /// Returns the character after the current one without consuming.
    pub(super) fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes the current character if it equals `expected`.
    pub(super) fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
