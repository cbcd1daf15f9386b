//! Unit tests for the parser module.

use super::*;
use crate::ast::{ExprKind, LiteralValue, Stmt};
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Helper function to parse input as a single expression.
pub(super) fn parse_expr(input: &str) -> Expr {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize();
    assert!(!lexer.has_errors(), "Lex failed for input {:?}", input);
    Parser::new(tokens)
        .parse_expression()
        .unwrap_or_else(|e| panic!("Parse failed for input {:?}: {}", input, e))
}

/// Helper function to parse input as a statement list.
pub(super) fn parse_program(input: &str) -> Vec<Stmt> {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize();
    assert!(!lexer.has_errors(), "Lex failed for input {:?}", input);
    Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for input {:?}: {}", input, e))
}

/// Helper function to parse input as a statement list and return the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.tokenize();
    match Parser::new(tokens).parse() {
        Ok(_) => panic!("Expected parse to fail for input {:?}", input),
        Err(e) => e,
    }
}

mod errors;
