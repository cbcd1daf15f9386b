//! User-declared and native callables.

use std::cell::RefCell;
use std::rc::Rc;

use super::class::Instance;
use super::environment::Environment;
use super::value::Value;
use crate::ast::FunctionDecl;

/// A user-declared function or method.
///
/// Pairs a shared declaration with the environment that was current at
/// declaration time (the closure). Method values additionally record
/// whether they are an `init` initializer, which changes what a call
/// yields.
#[derive(Debug)]
pub struct Function {
    /// The shared declaration: name, parameters, body.
    declaration: Rc<FunctionDecl>,
    /// The environment captured at declaration time.
    closure: Rc<RefCell<Environment>>,
    /// Whether this function is a class initializer.
    is_initializer: bool,
}

impl Function {
    /// Creates a function value closing over the given environment.
    pub fn new(
        declaration: Rc<FunctionDecl>,
        closure: Rc<RefCell<Environment>>,
        is_initializer: bool,
    ) -> Self {
        Function {
            declaration,
            closure,
            is_initializer,
        }
    }

    /// Returns the declared name.
    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    /// Returns the number of declared parameters.
    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    pub(crate) fn declaration(&self) -> &Rc<FunctionDecl> {
        &self.declaration
    }

    pub(crate) fn closure(&self) -> &Rc<RefCell<Environment>> {
        &self.closure
    }

    pub(crate) fn is_initializer(&self) -> bool {
        self.is_initializer
    }

    /// Returns a copy of this function bound to an instance.
    ///
    /// Binding inserts a one-entry frame mapping `this` to the instance
    /// in front of the original closure; the body then sees `this` at
    /// the distance the resolver recorded.
    pub fn bind(&self, instance: &Rc<RefCell<Instance>>) -> Function {
        let mut environment = Environment::with_enclosing(Rc::clone(&self.closure));
        environment.define("this", Value::Instance(Rc::clone(instance)));
        Function {
            declaration: Rc::clone(&self.declaration),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }
}

/// A function implemented by the interpreter itself.
pub struct NativeFunction {
    /// The name the function is bound to in the globals.
    name: &'static str,
    /// The number of arguments the function expects.
    arity: usize,
    /// The implementation.
    call: fn(&[Value]) -> Value,
}

impl NativeFunction {
    /// Creates a native function.
    pub fn new(name: &'static str, arity: usize, call: fn(&[Value]) -> Value) -> Self {
        NativeFunction { name, arity, call }
    }

    /// Returns the bound name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the number of expected arguments.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the implementation.
    pub(crate) fn invoke(&self, arguments: &[Value]) -> Value {
        (self.call)(arguments)
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}
