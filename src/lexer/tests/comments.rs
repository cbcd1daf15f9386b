//! Tests for line comments.

use super::*;

#[test]
fn test_comment_only() {
    let kinds = tokenize_kinds("// nothing here");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_comment_to_end_of_line() {
    let kinds = tokenize_kinds("var x // = 1;\n;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comment_does_not_swallow_newline() {
    let mut lexer = Lexer::new("// first line\nx");
    let tokens = lexer.tokenize();
    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_comment_at_end_of_input() {
    let kinds = tokenize_kinds("1 //");
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Eof]);
}
