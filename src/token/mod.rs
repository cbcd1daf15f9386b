//! Token definitions for the Skal lexer.
//!
//! This module provides the fundamental token types used throughout the
//! interpreter. It defines [`TokenKind`] for token types, [`Literal`] for
//! literal payloads, and [`Token`] for representing lexical units together
//! with the line they appeared on.
//!
//! # Overview
//!
//! The lexer produces a vector of [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - The lexeme, the exact slice of source text the token was read from
//! - An optional [`Literal`] payload (string and number tokens only)
//! - The 1-based source line the token starts on
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes the token stream

mod kind;

pub use kind::TokenKind;

/// The literal payload carried by a token.
///
/// Only string and number tokens carry a payload; every other kind
/// renders as `null` in the `tokenize` output.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The unquoted contents of a string literal.
    Str(String),
    /// The parsed value of a number literal.
    Num(f64),
}

/// A token with its kind, lexeme, literal payload, and source line.
///
/// `Token` is immutable once constructed. The parser and the runtime both
/// hold on to tokens so that errors can be reported with the line number
/// of the offending source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source text this token was read from.
    pub lexeme: String,
    /// The literal payload, if this token carries one.
    pub literal: Option<Literal>,
    /// The 1-based line this token starts on.
    pub line: usize,
}

impl Token {
    /// Creates a new `Token`.
    ///
    /// This is a simple constructor that performs no validation. The
    /// caller is responsible for ensuring the lexeme and literal match
    /// the kind.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }
}

impl std::fmt::Display for Token {
    /// Renders the token in the `tokenize` command format:
    /// `<KIND> <lexeme> <literal-or-"null">`.
    ///
    /// Number literals always keep a fractional form: an integral value
    /// prints as `N.0`, a non-integral value prints its shortest
    /// round-trip decimal. String literals print unquoted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(Literal::Str(s)) => write!(f, "{}", s),
            Some(Literal::Num(n)) => write!(f, "{:?}", n),
            None => write!(f, "null"),
        }
    }
}
