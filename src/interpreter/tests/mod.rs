//! Unit tests for the interpreter module.

use super::output::CollectSink;
use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::resolver::Resolver;

/// Helper function to run a program through the full pipeline.
///
/// Lexes, parses, resolves, and interprets `source`, returning the
/// collected `print` output or the runtime error.
pub(super) fn run_result(source: &str) -> Result<String, RuntimeError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    assert!(
        !lexer.has_errors(),
        "Lex failed for {:?}: {:?}",
        source,
        lexer.errors()
    );

    let program = Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", source, e));

    let locals = Resolver::new()
        .resolve(&program)
        .unwrap_or_else(|e| panic!("Resolve failed for {:?}: {}", source, e));

    let sink = CollectSink::new();
    let mut interpreter = Interpreter::with_output(Box::new(sink.clone()));
    interpreter.set_locals(locals);
    interpreter.interpret(&program)?;
    Ok(sink.output())
}

/// Helper function to run a program and return its `print` output.
pub(super) fn run_program(source: &str) -> String {
    run_result(source).unwrap_or_else(|e| panic!("Runtime error for {:?}: {}", source, e))
}

/// Helper function to run a program that must raise a runtime error.
pub(super) fn run_error(source: &str) -> RuntimeError {
    match run_result(source) {
        Ok(output) => panic!(
            "Expected runtime error for {:?}, got output {:?}",
            source, output
        ),
        Err(e) => e,
    }
}

/// Helper function to evaluate a single expression, as the `evaluate`
/// command does (no resolver pass).
pub(super) fn eval(source: &str) -> Value {
    eval_result(source)
        .unwrap_or_else(|e| panic!("Runtime error for expression {:?}: {}", source, e))
}

/// Helper function to evaluate a single expression and return the
/// outcome.
pub(super) fn eval_result(source: &str) -> Result<Value, RuntimeError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    assert!(!lexer.has_errors(), "Lex failed for {:?}", source);
    let expr = Parser::new(tokens)
        .parse_expression()
        .unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", source, e));
    Interpreter::new().evaluate_expression(&expr)
}

/// Helper function to evaluate an expression that must raise.
pub(super) fn eval_error(source: &str) -> RuntimeError {
    match eval_result(source) {
        Ok(value) => panic!(
            "Expected runtime error for {:?}, got value {}",
            source, value
        ),
        Err(e) => e,
    }
}
