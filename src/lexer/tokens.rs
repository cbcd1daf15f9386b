//! Token recognition and reading for the lexer.
//!
//! This module provides methods for reading the various token types from
//! the input: punctuation, one- and two-character operators, string and
//! number literals, identifiers, and keywords.

use super::Lexer;
use super::error::LexError;
use crate::token::{Literal, TokenKind};

impl Lexer<'_> {
    /// Scans a single token starting at `self.start`.
    ///
    /// Whitespace and comments produce no token; an unrecognized
    /// character records an error and scanning continues.
    pub(super) fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            '"' => self.read_string(),
            ' ' | '\t' | '\r' | '\n' => {}
            _ if c.is_ascii_digit() => self.read_number(),
            _ if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(),
            _ => self.error(LexError::unexpected_character(c, self.line)),
        }
    }

    /// Consumes a `//` comment through the end of the line.
    ///
    /// The trailing newline is left for the main loop so line counting
    /// stays in one place.
    fn skip_comment(&mut self) {
        while !self.is_at_end() && self.peek() != Some('\n') {
            self.advance();
        }
    }

    /// Reads a string literal.
    ///
    /// The opening double quote has already been consumed. Newlines
    /// inside the string are legal and increment the line counter. An
    /// unterminated string is reported at the line where it opened.
    fn read_string(&mut self) {
        let opening_line = self.line;

        while !self.is_at_end() && self.peek() != Some('"') {
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexError::unterminated_string(opening_line));
            return;
        }
        self.advance(); // closing "

        let value = self.input[self.start + 1..self.current - 1].to_string();
        self.add_literal_token(TokenKind::String, Some(Literal::Str(value)));
    }

    /// Reads a number literal.
    ///
    /// A fractional part is consumed only when a dot is followed by at
    /// least one digit, so `123.` lexes as a number and a dot token.
    fn read_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = &self.input[self.start..self.current];
        // The lexeme is digits with at most one interior dot, which
        // always parses as f64.
        let value: f64 = lexeme.parse().unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Some(Literal::Num(value)));
    }

    /// Reads an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter or underscore and continue
    /// with ASCII letters, digits, and underscores. A lexeme matching a
    /// reserved word produces that keyword's kind instead.
    fn read_identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = &self.input[self.start..self.current];
        let kind = TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
