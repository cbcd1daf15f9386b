//! Parse error tests.

use super::*;

#[test]
fn test_missing_semicolon() {
    let error = parse_error("print 1");
    assert_eq!(error.message(), "Expect ';' after value.");
    assert_eq!(error.to_string(), "[line 1] Error at end: Expect ';' after value.");
}

#[test]
fn test_missing_closing_paren() {
    let error = parse_error("(1 + 2;");
    assert_eq!(error.message(), "Expect ')' after expression.");
}

#[test]
fn test_expect_expression() {
    let error = parse_error("print +;");
    assert_eq!(error.message(), "Expect expression.");
    assert_eq!(error.to_string(), "[line 1] Error at '+': Expect expression.");
}

#[test]
fn test_invalid_assignment_target() {
    let error = parse_error("1 = 2;");
    assert_eq!(error.message(), "Invalid assignment target.");
    assert_eq!(
        error.to_string(),
        "[line 1] Error at '=': Invalid assignment target."
    );
}

#[test]
fn test_grouping_is_not_an_assignment_target() {
    let error = parse_error("(a) = 2;");
    assert_eq!(error.message(), "Invalid assignment target.");
}

#[test]
fn test_error_at_end_on_unterminated_block() {
    let error = parse_error("{ print 1;");
    assert_eq!(error.message(), "Expect '}' after block.");
    assert!(error.to_string().contains("Error at end"));
}

#[test]
fn test_error_reports_line_of_offending_token() {
    let error = parse_error("var x = 1;\nvar = 2;");
    assert_eq!(error.line(), 2);
    assert_eq!(error.message(), "Expect variable name.");
}

#[test]
fn test_var_requires_name() {
    let error = parse_error("var 1 = 2;");
    assert_eq!(error.message(), "Expect variable name.");
}

#[test]
fn test_super_requires_dot_and_method() {
    let error = parse_error("print super;");
    assert_eq!(error.message(), "Expect '.' after 'super'.");

    let error = parse_error("print super.;");
    assert_eq!(error.message(), "Expect superclass method name.");
}

#[test]
fn test_too_many_arguments() {
    let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
    let source = format!("f({});", args.join(", "));
    let error = parse_error(&source);
    assert_eq!(error.message(), "Can't have more than 255 arguments.");
}

#[test]
fn test_too_many_parameters() {
    let params: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
    let source = format!("fun f({}) {{}}", params.join(", "));
    let error = parse_error(&source);
    assert_eq!(error.message(), "Can't have more than 255 parameters.");
}
