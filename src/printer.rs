//! S-expression rendering of expressions.
//!
//! This module renders an expression tree in a parenthesized prefix form
//! used by the `parse` command:
//!
//! ```text
//! (1 + 2) * -3   →   (* (group (+ 1.0 2.0)) (- 3.0))
//! ```
//!
//! Number literals keep their token-literal form (an integral value
//! renders as `N.0`), so the printed tree reads back through the lexer
//! and parser to the same rendering.

use crate::ast::{Expr, ExprKind, LiteralValue};

/// Renders an expression as an s-expression string.
pub fn print(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(value) => literal(value),
        ExprKind::Grouping(inner) => format!("(group {})", print(inner)),
        ExprKind::Unary { operator, right } => {
            format!("({} {})", operator.lexeme, print(right))
        }
        ExprKind::Binary { left, operator, right }
        | ExprKind::Logical { left, operator, right } => {
            format!("({} {} {})", operator.lexeme, print(left), print(right))
        }
        ExprKind::Variable { name } => name.lexeme.clone(),
        ExprKind::Assign { name, value } => {
            format!("(= {} {})", name.lexeme, print(value))
        }
        ExprKind::Call { callee, arguments, .. } => {
            let arguments: Vec<String> = arguments.iter().map(print).collect();
            format!("(call {} [{}])", print(callee), arguments.join(", "))
        }
        ExprKind::Get { object, name } => {
            format!("(. {} {})", print(object), name.lexeme)
        }
        ExprKind::Set { object, name, value } => {
            format!("(= (. {} {}) {})", print(object), name.lexeme, print(value))
        }
        ExprKind::This { keyword } => keyword.lexeme.clone(),
        ExprKind::Super { keyword, method } => {
            format!("(. {} {})", keyword.lexeme, method.lexeme)
        }
    }
}

fn literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Nil => "nil".to_string(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Number(n) => format!("{:?}", n),
        LiteralValue::Str(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn print_source(input: &str) -> String {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize();
        assert!(!lexer.has_errors());
        let expr = Parser::new(tokens)
            .parse_expression()
            .unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", input, e));
        print(&expr)
    }

    #[test]
    fn test_literals() {
        assert_eq!(print_source("nil"), "nil");
        assert_eq!(print_source("true"), "true");
        assert_eq!(print_source("false"), "false");
        assert_eq!(print_source("\"hello\""), "hello");
    }

    #[test]
    fn test_number_literals_keep_fraction() {
        assert_eq!(print_source("42"), "42.0");
        assert_eq!(print_source("3.14"), "3.14");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(print_source("(\"foo\")"), "(group foo)");
    }

    #[test]
    fn test_unary_and_binary() {
        assert_eq!(print_source("-1"), "(- 1.0)");
        assert_eq!(print_source("!true"), "(! true)");
        assert_eq!(print_source("1 + 2"), "(+ 1.0 2.0)");
    }

    #[test]
    fn test_precedence_shapes_tree() {
        assert_eq!(print_source("(1 + 2) * 3"), "(* (group (+ 1.0 2.0)) 3.0)");
        assert_eq!(print_source("1 + 2 * 3"), "(+ 1.0 (* 2.0 3.0))");
    }

    #[test]
    fn test_logical() {
        assert_eq!(print_source("a or b"), "(or a b)");
        assert_eq!(print_source("a and b"), "(and a b)");
    }

    #[test]
    fn test_variable_and_assignment() {
        assert_eq!(print_source("x"), "x");
        assert_eq!(print_source("x = 1"), "(= x 1.0)");
    }

    #[test]
    fn test_call() {
        assert_eq!(print_source("f()"), "(call f [])");
        assert_eq!(print_source("f(1, x)"), "(call f [1.0, x])");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut lexer = Lexer::new("-(4 / 2) == 2.0");
        let tokens = lexer.tokenize();
        let expr = Parser::new(tokens).parse_expression().unwrap();
        assert_eq!(print(&expr), print(&expr));
        assert_eq!(print(&expr), "(== (- (group (/ 4.0 2.0))) 2.0)");
    }
}
