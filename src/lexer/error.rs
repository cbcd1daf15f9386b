//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors collected
//! during tokenization.

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the line where the
/// error occurred. Its `Display` implementation produces the diagnostic
/// form reported on standard error:
///
/// ```text
/// [line 1] Error: Unexpected character: $
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// A human-readable description of the error.
    message: String,
    /// The 1-based line where the error occurred.
    line: usize,
}

impl LexError {
    /// Creates an "unexpected character" error.
    pub fn unexpected_character(c: char, line: usize) -> Self {
        LexError {
            message: format!("Unexpected character: {}", c),
            line,
        }
    }

    /// Creates an "unterminated string" error.
    ///
    /// `line` is the line where the string opened, not where the input
    /// ended.
    pub fn unterminated_string(line: usize) -> Self {
        LexError {
            message: "Unterminated string.".to_string(),
            line,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-based line where the error occurred.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for LexError {}
