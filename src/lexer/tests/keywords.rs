//! Tests for reserved words.

use super::*;

#[test]
fn test_all_keywords() {
    let kinds = tokenize_kinds(
        "and class else false for fun if nil or print return super this true var while",
    );
    assert_eq!(
        kinds,
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_have_no_literal() {
    let mut lexer = Lexer::new("true false nil");
    let tokens = lexer.tokenize();
    assert!(tokens.iter().all(|t| t.literal.is_none()));
}

#[test]
fn test_keywords_are_case_sensitive() {
    let kinds = tokenize_kinds("True CLASS While");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}
