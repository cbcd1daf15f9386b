//! Classes and instances.

use std::collections::HashMap;
use std::rc::Rc;

use super::function::Function;
use super::value::Value;

/// A class value.
///
/// Holds the method table and an optional superclass. Method lookup
/// walks the superclass chain; a subclass method shadows a superclass
/// method of the same name.
#[derive(Debug)]
pub struct Class {
    /// The declared class name.
    name: String,
    /// The superclass, if the declaration named one.
    superclass: Option<Rc<Class>>,
    /// Methods declared directly on this class.
    methods: HashMap<String, Rc<Function>>,
}

impl Class {
    /// Creates a class value.
    pub fn new(
        name: String,
        superclass: Option<Rc<Class>>,
        methods: HashMap<String, Rc<Function>>,
    ) -> Self {
        Class {
            name,
            superclass,
            methods,
        }
    }

    /// Returns the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks a method up on this class, then up the superclass chain.
    pub fn find_method(&self, name: &str) -> Option<Rc<Function>> {
        if let Some(method) = self.methods.get(name) {
            return Some(Rc::clone(method));
        }
        self.superclass
            .as_ref()
            .and_then(|superclass| superclass.find_method(name))
    }

    /// Returns the arity of calling this class as a constructor.
    ///
    /// Equals the arity of the `init` method, or 0 when the chain
    /// declares none.
    pub fn arity(&self) -> usize {
        self.find_method("init")
            .map(|initializer| initializer.arity())
            .unwrap_or(0)
    }
}

/// An instance of a class.
///
/// Holds a mutable field map. Fields are created on first assignment;
/// on property reads a field shadows a method of the same name.
/// Instance identity is the `Rc<RefCell<Instance>>` handle.
#[derive(Debug)]
pub struct Instance {
    /// The instance's class.
    class: Rc<Class>,
    /// The instance's fields.
    fields: HashMap<String, Value>,
}

impl Instance {
    /// Creates an instance with no fields.
    pub fn new(class: Rc<Class>) -> Self {
        Instance {
            class,
            fields: HashMap::new(),
        }
    }

    /// Returns the instance's class.
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Reads a field, if set.
    pub(crate) fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    /// Writes a field, creating it if absent.
    pub(crate) fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}
