//! Parse error types.

use crate::token::{Token, TokenKind};

/// An error that occurred during parsing.
///
/// `ParseError` captures the offending token and a human-readable
/// message. Its `Display` implementation produces the diagnostic form
/// reported on standard error:
///
/// ```text
/// [line 1] Error at ')': Expect expression.
/// [line 3] Error at end: Expect '}' after block.
/// ```
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// A human-readable description of the error.
    message: String,
    /// The lexeme of the offending token, or `None` at end of file.
    lexeme: Option<String>,
    /// The 1-based line of the offending token.
    line: usize,
}

impl ParseError {
    /// Creates an error located at the given token.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            lexeme: (token.kind != TokenKind::Eof).then(|| token.lexeme.clone()),
            line: token.line,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-based line of the offending token.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(
                f,
                "[line {}] Error at '{}': {}",
                self.line, lexeme, self.message
            ),
            None => write!(f, "[line {}] Error at end: {}", self.line, self.message),
        }
    }
}

impl std::error::Error for ParseError {}
