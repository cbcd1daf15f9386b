//! Resolution error types.

use crate::token::{Token, TokenKind};

/// An error that occurred during static name resolution.
///
/// `ResolveError` captures the offending token and a human-readable
/// message, rendered in the same diagnostic form as parse errors:
///
/// ```text
/// [line 2] Error at 'a': Can't read local variable in its own initializer.
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveError {
    /// A human-readable description of the error.
    message: String,
    /// The lexeme of the offending token, or `None` at end of file.
    lexeme: Option<String>,
    /// The 1-based line of the offending token.
    line: usize,
}

impl ResolveError {
    /// Creates an error located at the given token.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        ResolveError {
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

impl std::fmt::Display for ResolveError {
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

impl std::error::Error for ResolveError {}
