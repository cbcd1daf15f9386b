//! The lexical scope chain.
//!
//! An [`Environment`] maps names to values and optionally points at an
//! enclosing environment, forming a chain rooted at the globals. Each
//! block, function call, and class body introduces a child; closures
//! hold the environment that was current when the function was
//! declared.
//!
//! Lookup comes in two forms: [`get`](Environment::get) and
//! [`assign`](Environment::assign) search the chain outward, while
//! [`get_at`](Environment::get_at) and [`assign_at`](Environment::assign_at)
//! jump exactly the number of ancestors the resolver computed and touch
//! only that frame, with no fallback.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::RuntimeError;
use super::value::Value;
use crate::token::Token;

/// One frame of the scope chain.
#[derive(Debug, Default)]
pub struct Environment {
    /// The enclosing frame, or `None` for the globals.
    enclosing: Option<Rc<RefCell<Environment>>>,
    /// The bindings of this frame.
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates a root environment with no enclosing frame.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Creates a child of the given environment.
    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            enclosing: Some(enclosing),
            values: HashMap::new(),
        }
    }

    /// Binds a name in this frame, unconditionally.
    ///
    /// Redefinition overwrites the previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Reads a name, searching this frame and then the chain outward.
    ///
    /// # Errors
    ///
    /// Returns an "Undefined variable" error when no frame binds the
    /// name.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow().get(name),
            None => Err(RuntimeError::undefined_variable(&name.lexeme, name.line)),
        }
    }

    /// Writes a name, searching this frame and then the chain outward.
    ///
    /// # Errors
    ///
    /// Returns an "Undefined variable" error when no frame binds the
    /// name; assignment never creates bindings.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(RuntimeError::undefined_variable(&name.lexeme, name.line)),
        }
    }

    /// Reads a name from the frame exactly `distance` ancestors up.
    ///
    /// Returns `None` when that frame does not bind the name; there is
    /// no fallback to other frames. The resolver guarantees the binding
    /// exists for every distance it records.
    pub fn get_at(env: &Rc<RefCell<Environment>>, distance: usize, name: &str) -> Option<Value> {
        let frame = Self::ancestor(env, distance)?;
        let value = frame.borrow().values.get(name).cloned();
        value
    }

    /// Writes a name in the frame exactly `distance` ancestors up.
    ///
    /// Returns `false` when that frame does not bind the name.
    pub fn assign_at(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &str,
        value: Value,
    ) -> bool {
        let Some(frame) = Self::ancestor(env, distance) else {
            return false;
        };
        let mut frame = frame.borrow_mut();
        match frame.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Walks `distance` enclosing links up the chain.
    fn ancestor(
        env: &Rc<RefCell<Environment>>,
        distance: usize,
    ) -> Option<Rc<RefCell<Environment>>> {
        let mut current = Rc::clone(env);
        for _ in 0..distance {
            let parent = current.borrow().enclosing.clone()?;
            current = parent;
        }
        Some(current)
    }
}
