//! End-to-end tests for error reporting and exit codes under `run`.

mod common;

use common::run_skal;

// ===================
// Parse errors (exit 65)
// ===================

#[test]
fn test_missing_semicolon() {
    let output = run_skal("run", "print 1");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at end: Expect ';' after value.\n"
    );
}

#[test]
fn test_invalid_assignment_target() {
    let output = run_skal("run", "1 = 2;");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at '=': Invalid assignment target.\n"
    );
}

// ===================
// Resolve errors (exit 65)
// ===================

#[test]
fn test_self_referential_initializer() {
    let output = run_skal("run", "{ var a = a; }");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at 'a': Can't read local variable in its own initializer.\n"
    );
}

#[test]
fn test_top_level_return() {
    let output = run_skal("run", "return 1;");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at 'return': Can't return from top-level code.\n"
    );
}

#[test]
fn test_class_inherits_from_itself() {
    let output = run_skal("run", "class Oops < Oops {}");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at 'Oops': A class can't inherit from itself.\n"
    );
}

#[test]
fn test_this_outside_class() {
    let output = run_skal("run", "print this;");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at 'this': Can't use 'this' outside of a class.\n"
    );
}

#[test]
fn test_return_value_from_initializer() {
    let output = run_skal("run", "class C { init() { return 1; } }");
    assert_eq!(output.code, Some(65));
    assert_eq!(
        output.stderr,
        "[line 1] Error at 'return': Can't return a value from an initializer.\n"
    );
}

// ===================
// Runtime errors (exit 70)
// ===================

#[test]
fn test_type_error_in_addition() {
    let output = run_skal("run", "print \"abc\" + 1;");
    assert_eq!(output.code, Some(70));
    assert_eq!(
        output.stderr,
        "Operands must be two numbers or two strings.\n[line 1]\n"
    );
}

#[test]
fn test_undefined_variable() {
    let output = run_skal("run", "print ghost;");
    assert_eq!(output.code, Some(70));
    assert_eq!(output.stderr, "Undefined variable 'ghost'.\n[line 1]\n");
}

#[test]
fn test_runtime_error_line_number() {
    let output = run_skal("run", "var a = 1;\nvar b = true;\nprint a < b;");
    assert_eq!(output.code, Some(70));
    assert_eq!(output.stderr, "Operands must be numbers.\n[line 3]\n");
}

#[test]
fn test_output_before_error_is_kept() {
    let output = run_skal("run", "print \"first\";\nprint nil - 1;");
    assert_eq!(output.code, Some(70));
    assert_eq!(output.stdout, "first\n");
    assert_eq!(output.stderr, "Operands must be numbers.\n[line 2]\n");
}

#[test]
fn test_superclass_must_be_class() {
    let output = run_skal("run", "var NotAClass = 42;\nclass C < NotAClass {}");
    assert_eq!(output.code, Some(70));
    assert_eq!(output.stderr, "Superclass must be a class.\n[line 2]\n");
}

#[test]
fn test_arity_mismatch() {
    let output = run_skal("run", "fun f(a) {}\nf();");
    assert_eq!(output.code, Some(70));
    assert_eq!(output.stderr, "Expected 1 arguments but got 0.\n[line 2]\n");
}

#[test]
fn test_calling_non_callable() {
    let output = run_skal("run", "\"text\"();");
    assert_eq!(output.code, Some(70));
    assert_eq!(
        output.stderr,
        "Can only call functions and classes.\n[line 1]\n"
    );
}

#[test]
fn test_undefined_property() {
    let output = run_skal("run", "class C {}\nprint C().missing;");
    assert_eq!(output.code, Some(70));
    assert_eq!(output.stderr, "Undefined property 'missing'.\n[line 2]\n");
}
