//! Statement execution.
//!
//! This module walks statement nodes for their side effects. Block and
//! class bodies swap the interpreter's current environment and restore
//! the previous one on every exit path, including `return` unwinding and
//! error propagation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::class::Class;
use super::environment::Environment;
use super::error::RuntimeError;
use super::function::Function;
use super::value::Value;
use super::{Flow, Interpreter};
use crate::ast::{Expr, ExprKind, Stmt};
use crate::token::Token;

impl Interpreter {
    /// Executes a statement.
    pub(super) fn execute(&mut self, statement: &Stmt) -> Result<Flow, RuntimeError> {
        match statement {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.output.write_line(&value.to_string());
                Ok(Flow::Normal)
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(initializer) => self.evaluate(initializer)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(Flow::Normal)
            }
            Stmt::Block(statements) => {
                let frame = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(frame)))
            }
            Stmt::If { condition, then_branch, else_branch } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Function(declaration) => {
                let function = Function::new(
                    Rc::clone(declaration),
                    Rc::clone(&self.environment),
                    false,
                );
                self.environment
                    .borrow_mut()
                    .define(&declaration.name.lexeme, Value::Function(Rc::new(function)));
                Ok(Flow::Normal)
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(value) => self.evaluate(value)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }
            Stmt::Class { name, superclass, methods } => {
                self.execute_class(name, superclass.as_ref(), methods)
            }
        }
    }

    /// Executes statements in the given environment, restoring the
    /// previous environment on every exit path.
    pub(super) fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<Flow, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut flow = Ok(Flow::Normal);
        for statement in statements {
            flow = self.execute(statement);
            if !matches!(flow, Ok(Flow::Normal)) {
                break;
            }
        }

        self.environment = previous;
        flow
    }

    /// Executes a class declaration.
    ///
    /// The name is defined as `nil` first so methods can refer to the
    /// class; when a superclass is present, methods close over an extra
    /// frame binding `super` to it. The finished class value is then
    /// assigned over the placeholder.
    fn execute_class(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[Rc<crate::ast::FunctionDecl>],
    ) -> Result<Flow, RuntimeError> {
        let superclass = match superclass {
            Some(expr) => {
                let line = superclass_line(expr, name);
                match self.evaluate(expr)? {
                    Value::Class(class) => Some(class),
                    _ => return Err(RuntimeError::superclass_must_be_class(line)),
                }
            }
            None => None,
        };

        self.environment
            .borrow_mut()
            .define(&name.lexeme, Value::Nil);

        let method_closure = match &superclass {
            Some(class) => {
                let mut frame = Environment::with_enclosing(Rc::clone(&self.environment));
                frame.define("super", Value::Class(Rc::clone(class)));
                Rc::new(RefCell::new(frame))
            }
            None => Rc::clone(&self.environment),
        };

        let mut method_table = HashMap::new();
        for method in methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(
                Rc::clone(method),
                Rc::clone(&method_closure),
                is_initializer,
            );
            method_table.insert(method.name.lexeme.clone(), Rc::new(function));
        }

        let class = Class::new(name.lexeme.clone(), superclass, method_table);
        self.environment
            .borrow_mut()
            .assign(name, Value::Class(Rc::new(class)))?;
        Ok(Flow::Normal)
    }
}

/// Returns the line of the superclass name for error reporting.
fn superclass_line(superclass: &Expr, class_name: &Token) -> usize {
    match &superclass.kind {
        ExprKind::Variable { name } => name.line,
        _ => class_name.line,
    }
}
