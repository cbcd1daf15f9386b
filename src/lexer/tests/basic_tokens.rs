//! Tests for single-character punctuation and the EOF invariant.

use super::*;

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_all_punctuation() {
    let kinds = tokenize_kinds("(){},.-+;*/");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation_lexemes() {
    let mut lexer = Lexer::new("(;");
    let tokens = lexer.tokenize();
    assert_eq!(tokens[0].lexeme, "(");
    assert_eq!(tokens[1].lexeme, ";");
    assert_eq!(tokens[2].lexeme, "");
}

#[test]
fn test_exactly_one_eof() {
    let kinds = tokenize_kinds("var x = 1;");
    let eof_count = kinds.iter().filter(|k| **k == TokenKind::Eof).count();
    assert_eq!(eof_count, 1);
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
}

#[test]
fn test_whitespace_is_discarded() {
    let kinds = tokenize_kinds("  \t \r  ( \t ) ");
    assert_eq!(
        kinds,
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
    );
}

#[test]
fn test_newline_increments_line() {
    let mut lexer = Lexer::new("(\n)\n.");
    let tokens = lexer.tokenize();
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
    assert_eq!(tokens[3].line, 3); // EOF on the final line
}
