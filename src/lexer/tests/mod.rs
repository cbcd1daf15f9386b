//! Unit tests for the lexer module.

use super::*;
use crate::token::{Literal, Token, TokenKind};

/// Helper function to tokenize input and return only the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize();
    assert!(
        !lexer.has_errors(),
        "Tokenization failed for input {:?}: {:?}",
        input,
        lexer.errors()
    );
    tokens.into_iter().map(|t| t.kind).collect()
}

/// Helper function to tokenize input and return tokens with errors.
pub(super) fn tokenize_with_errors(input: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize();
    let errors = lexer.errors().to_vec();
    (tokens, errors)
}

/// Helper function to tokenize input that must fail and return the errors.
pub(super) fn tokenize_errors(input: &str) -> Vec<LexError> {
    let (_, errors) = tokenize_with_errors(input);
    assert!(
        !errors.is_empty(),
        "Expected tokenization to fail for input {:?}, but it succeeded",
        input
    );
    errors
}

mod basic_tokens;
mod comments;
mod keywords;
