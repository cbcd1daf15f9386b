//! End-to-end tests for the `run` command: statements, functions,
//! closures.

mod common;

use common::{run_ok, run_skal};

#[test]
fn test_hello_world() {
    assert_eq!(run_ok("print \"Hello, \" + \"world!\";"), "Hello, world!\n");
}

#[test]
fn test_variables() {
    assert_eq!(run_ok("var a = 1; var b = 2; print a + b;"), "3\n");
}

#[test]
fn test_multiple_prints() {
    assert_eq!(run_ok("print 1; print 2; print 3;"), "1\n2\n3\n");
}

#[test]
fn test_block_scoping() {
    let output = run_ok(
        r#"var a = "outer";
{
    var a = "inner";
    print a;
}
print a;"#,
    );
    assert_eq!(output, "inner\nouter\n");
}

#[test]
fn test_control_flow() {
    let output = run_ok(
        r#"var i = 0;
while (i < 3) {
    if (i == 1) print "one"; else print i;
    i = i + 1;
}"#,
    );
    assert_eq!(output, "0\none\n2\n");
}

#[test]
fn test_for_loop() {
    assert_eq!(
        run_ok("for (var i = 0; i < 3; i = i + 1) print i;"),
        "0\n1\n2\n"
    );
}

#[test]
fn test_functions_and_closures() {
    let output = run_ok(
        r#"fun make(n) {
    fun add(x) { return n + x; }
    return add;
}
var a = make(10);
print a(5);
print a(7);"#,
    );
    assert_eq!(output, "15\n17\n");
}

#[test]
fn test_recursion() {
    let output = run_ok(
        r#"fun fib(n) {
    if (n < 2) return n;
    return fib(n - 1) + fib(n - 2);
}
print fib(15);"#,
    );
    assert_eq!(output, "610\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(run_ok(""), "");
}

#[test]
fn test_comments_only() {
    assert_eq!(run_ok("// nothing to do\n// still nothing"), "");
}

#[test]
fn test_clock_is_bound() {
    let output = run_ok("print clock() > 0;");
    assert_eq!(output, "true\n");
}

#[test]
fn test_unknown_command_exits_1() {
    let output = run_skal("interpret", "print 1;");
    assert_eq!(output.code, Some(1));
}

#[test]
fn test_missing_file_exits_1() {
    let output = std::process::Command::new(common::skal_binary())
        .args(["run", "does_not_exist.skal"])
        .output()
        .expect("failed to run skal");
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}
