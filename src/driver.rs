//! Command orchestration for the Skal CLI.
//!
//! Each command runs a prefix of the pipeline and maps its outcome to an
//! exit code:
//!
//! | Outcome | Exit code |
//! |---|---|
//! | success | 0 |
//! | lexical, parse, or resolve error | 65 |
//! | runtime error | 70 |
//! | unreadable file | 1 |
//!
//! Program output (tokens, s-expressions, values, `print`) goes to
//! standard output; every diagnostic goes to standard error.

use skal::ast::{Expr, Stmt};
use skal::interpreter::Interpreter;
use skal::lexer::Lexer;
use skal::parser::Parser;
use skal::printer;
use skal::resolver::Resolver;
use skal::token::Token;

/// Exit code for lexical, parse, and resolve errors.
const EXIT_STATIC_ERROR: i32 = 65;
/// Exit code for runtime errors.
const EXIT_RUNTIME_ERROR: i32 = 70;
/// Exit code for usage and I/O errors.
const EXIT_USAGE: i32 = 1;

/// Runs the `tokenize` command: print every token, then report.
///
/// Tokens are printed even when lexical errors were collected; the
/// errors go to standard error first and turn the exit code to 65.
pub(crate) fn tokenize(file: &str) -> i32 {
    let Some(source) = read_source(file) else {
        return EXIT_USAGE;
    };

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();
    for error in lexer.errors() {
        eprintln!("{}", error);
    }
    for token in &tokens {
        println!("{}", token);
    }

    if lexer.has_errors() { EXIT_STATIC_ERROR } else { 0 }
}

/// Runs the `parse` command: parse one expression, print its
/// s-expression form.
pub(crate) fn parse(file: &str) -> i32 {
    let Some(source) = read_source(file) else {
        return EXIT_USAGE;
    };
    let Some(expr) = lex_and_parse_expression(&source) else {
        return EXIT_STATIC_ERROR;
    };

    println!("{}", printer::print(&expr));
    0
}

/// Runs the `evaluate` command: parse one expression, evaluate it,
/// print the stringified result.
pub(crate) fn evaluate(file: &str) -> i32 {
    let Some(source) = read_source(file) else {
        return EXIT_USAGE;
    };
    let Some(expr) = lex_and_parse_expression(&source) else {
        return EXIT_STATIC_ERROR;
    };

    match Interpreter::new().evaluate_expression(&expr) {
        Ok(value) => {
            println!("{}", value);
            0
        }
        Err(error) => {
            eprintln!("{}", error);
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Runs the `run` command: the full pipeline over a statement list.
pub(crate) fn run(file: &str) -> i32 {
    let Some(source) = read_source(file) else {
        return EXIT_USAGE;
    };
    let Some(program) = lex_and_parse_program(&source) else {
        return EXIT_STATIC_ERROR;
    };

    let locals = match Resolver::new().resolve(&program) {
        Ok(locals) => locals,
        Err(error) => {
            eprintln!("{}", error);
            return EXIT_STATIC_ERROR;
        }
    };

    let mut interpreter = Interpreter::new();
    interpreter.set_locals(locals);
    match interpreter.interpret(&program) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error);
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Reads a source file, reporting I/O failures to standard error.
fn read_source(file: &str) -> Option<String> {
    match std::fs::read_to_string(file) {
        Ok(source) => Some(source),
        Err(error) => {
            eprintln!("Error reading file '{}': {}", file, error);
            None
        }
    }
}

/// Lexes a source string, reporting lexical errors to standard error.
fn lex(source: &str) -> Option<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    if lexer.has_errors() {
        for error in lexer.errors() {
            eprintln!("{}", error);
        }
        return None;
    }
    Some(tokens)
}

/// Lexes and parses a single expression, reporting errors.
fn lex_and_parse_expression(source: &str) -> Option<Expr> {
    let tokens = lex(source)?;
    match Parser::new(tokens).parse_expression() {
        Ok(expr) => Some(expr),
        Err(error) => {
            eprintln!("{}", error);
            None
        }
    }
}

/// Lexes and parses a statement list, reporting errors.
fn lex_and_parse_program(source: &str) -> Option<Vec<Stmt>> {
    let tokens = lex(source)?;
    match Parser::new(tokens).parse() {
        Ok(program) => Some(program),
        Err(error) => {
            eprintln!("{}", error);
            None
        }
    }
}
