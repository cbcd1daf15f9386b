//! Tree-walking evaluator for the Skal programming language.
//!
//! This module provides the [`Interpreter`] which executes a parsed and
//! resolved program directly over its AST, together with the runtime
//! value model: [`Value`], [`Environment`], user and native callables,
//! and classes with instances.
//!
//! # Overview
//!
//! The interpreter holds a mutable *current environment* pointer into a
//! chain of lexical scopes rooted at the globals, plus the resolver's
//! scope-distance table. Blocks and calls swap the current environment
//! in and restore it on every exit path. Closures capture the exact
//! environment that was current at function-definition time.
//!
//! `return` is modeled as a value-level control-flow discriminant, not
//! an error: statement execution yields [`Flow::Normal`] or
//! [`Flow::Return`], and the function-call machinery converts the latter
//! into the call's produced value.
//!
//! # Memory model
//!
//! Environments, functions, classes, and instances are reference-counted
//! (`Rc`/`RefCell`); the interpreter is single-threaded. Cycles created
//! through closures and instance fields are not collected and leak for
//! the process lifetime.
//!
//! # Module Structure
//!
//! - [`value`] - Runtime values, truthiness, equality, stringification
//! - [`environment`] - The lexical scope chain
//! - [`function`] - User functions and native functions
//! - [`class`] - Classes and instances
//! - [`output`] - The `print` output sink
//! - [`error`] - Runtime error type
//! - `expr` / `stmt` - The expression and statement walkers
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::resolver`] - Produces the scope-distance table
//! * [`crate::ast`] - The tree being executed

pub mod class;
pub mod environment;
pub mod error;
pub mod function;
pub mod output;
pub mod value;

mod expr;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::RuntimeError;
pub use value::Value;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ast::{Expr, Stmt};
use crate::resolver::Locals;
use environment::Environment;
use function::NativeFunction;
use output::{PrintSink, StdoutSink};

/// The outcome of executing a statement.
///
/// `Return` unwinds to the nearest enclosing call frame, which converts
/// it into the call's value. It never escapes a call frame: the resolver
/// rejects top-level `return` before execution starts.
pub(crate) enum Flow {
    /// Execution fell through; continue with the next statement.
    Normal,
    /// A `return` statement fired, carrying the returned value.
    Return(Value),
}

/// A tree-walking interpreter for Skal programs.
///
/// One interpreter executes one program: construct it, hand it the
/// resolver's table with [`set_locals`](Self::set_locals), and call
/// [`interpret`](Self::interpret) (statements) or
/// [`evaluate_expression`](Self::evaluate_expression) (a single
/// expression).
pub struct Interpreter {
    /// The globals environment, root of every scope chain.
    globals: Rc<RefCell<Environment>>,
    /// The current environment.
    environment: Rc<RefCell<Environment>>,
    /// Scope distances recorded by the resolver.
    locals: Locals,
    /// Where `print` output goes.
    output: Box<dyn PrintSink>,
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    pub fn new() -> Self {
        Self::with_output(Box::new(StdoutSink))
    }

    /// Creates an interpreter with a custom `print` sink.
    pub fn with_output(output: Box<dyn PrintSink>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        globals.borrow_mut().define(
            "clock",
            Value::Native(Rc::new(NativeFunction::new("clock", 0, clock))),
        );

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: Locals::new(),
            output,
        }
    }

    /// Installs the resolver's scope-distance table.
    ///
    /// Must be called before [`interpret`](Self::interpret) for any
    /// program with local variables; without the table every variable
    /// reference falls back to the globals.
    pub fn set_locals(&mut self, locals: Locals) {
        self.locals = locals;
    }

    /// Executes a program for its side effects.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuntimeError`] raised; execution stops there.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Flow::Return(_) = self.execute(statement)? {
                // The resolver rejects top-level `return`; nothing to
                // unwind into.
                break;
            }
        }
        Ok(())
    }

    /// Evaluates a single expression and returns its value.
    ///
    /// Used by the `evaluate` command, which runs without a resolver
    /// pass; variable references resolve against the globals.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuntimeError`] raised.
    pub fn evaluate_expression(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        self.evaluate(expr)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// The `clock()` builtin: seconds since the Unix epoch, with a
/// fractional part.
fn clock(_arguments: &[Value]) -> Value {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0);
    Value::Number(seconds)
}
