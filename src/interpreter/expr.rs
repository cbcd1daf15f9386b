//! Expression evaluation.
//!
//! This module walks expression nodes and produces values, enforcing
//! the runtime type discipline: `-` and the comparison operators demand
//! numbers, `+` is overloaded over two numbers or two strings, calls
//! demand callables with matching arity, and property access demands
//! instances.

use std::cell::RefCell;
use std::rc::Rc;

use super::class::{Class, Instance};
use super::environment::Environment;
use super::error::RuntimeError;
use super::function::Function;
use super::value::Value;
use super::{Flow, Interpreter};
use crate::ast::{Expr, ExprId, ExprKind, LiteralValue};
use crate::token::{Token, TokenKind};

impl Interpreter {
    /// Evaluates an expression to a value.
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(literal_value(literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                self.unary(operator, right)
            }
            ExprKind::Binary { left, operator, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.binary(left, operator, right)
            }
            ExprKind::Logical { left, operator, right } => {
                let left = self.evaluate(left)?;
                // Short circuit: hand back the deciding operand itself,
                // not a coerced boolean.
                let short_circuits = match operator.kind {
                    TokenKind::Or => left.is_truthy(),
                    _ => !left.is_truthy(),
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            ExprKind::Variable { name } => self.lookup_variable(name, expr.id),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.assign_variable(name, expr.id, value.clone())?;
                Ok(value)
            }
            ExprKind::Call { callee, paren, arguments } => {
                let callee = self.evaluate(callee)?;
                let mut evaluated = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    evaluated.push(self.evaluate(argument)?);
                }
                self.call_value(callee, evaluated, paren)
            }
            ExprKind::Get { object, name } => {
                let object = self.evaluate(object)?;
                match object {
                    Value::Instance(instance) => self.get_property(&instance, name),
                    _ => Err(RuntimeError::only_instances_have_properties(name.line)),
                }
            }
            ExprKind::Set { object, name, value } => {
                let object = self.evaluate(object)?;
                let Value::Instance(instance) = object else {
                    return Err(RuntimeError::only_instances_have_fields(name.line));
                };
                let value = self.evaluate(value)?;
                instance.borrow_mut().set_field(&name.lexeme, value.clone());
                Ok(value)
            }
            ExprKind::This { keyword } => self.lookup_variable(keyword, expr.id),
            ExprKind::Super { keyword, method } => self.super_method(keyword, method, expr.id),
        }
    }

    fn unary(&mut self, operator: &Token, right: Value) -> Result<Value, RuntimeError> {
        match operator.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::operand_must_be_number(operator.line)),
            },
            _ => Ok(Value::Bool(!right.is_truthy())),
        }
    }

    fn binary(&mut self, left: Value, operator: &Token, right: Value) -> Result<Value, RuntimeError> {
        match operator.kind {
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => Err(RuntimeError::operands_numbers_or_strings(operator.line)),
            },
            TokenKind::Minus => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Number(a - b))
            }
            TokenKind::Star => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Number(a * b))
            }
            TokenKind::Slash => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Number(a / b))
            }
            TokenKind::Less => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a < b))
            }
            TokenKind::LessEqual => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a <= b))
            }
            TokenKind::Greater => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a > b))
            }
            TokenKind::GreaterEqual => {
                let (a, b) = number_operands(left, right, operator)?;
                Ok(Value::Bool(a >= b))
            }
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            _ => Ok(Value::Bool(left != right)),
        }
    }

    /// Reads a variable through the resolved distance, or the globals
    /// when the resolver recorded none.
    fn lookup_variable(&self, name: &Token, id: ExprId) -> Result<Value, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, &name.lexeme)
                .ok_or_else(|| RuntimeError::undefined_variable(&name.lexeme, name.line)),
            None => self.globals.borrow().get(name),
        }
    }

    /// Writes a variable through the resolved distance, or the globals
    /// when the resolver recorded none.
    fn assign_variable(
        &mut self,
        name: &Token,
        id: ExprId,
        value: Value,
    ) -> Result<(), RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => {
                if Environment::assign_at(&self.environment, distance, &name.lexeme, value) {
                    Ok(())
                } else {
                    Err(RuntimeError::undefined_variable(&name.lexeme, name.line))
                }
            }
            None => self.globals.borrow_mut().assign(name, value),
        }
    }

    /// Invokes a callee value with evaluated arguments.
    fn call_value(
        &mut self,
        callee: Value,
        arguments: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        let arity = match &callee {
            Value::Native(native) => native.arity(),
            Value::Function(function) => function.arity(),
            Value::Class(class) => class.arity(),
            _ => return Err(RuntimeError::not_callable(paren.line)),
        };
        if arguments.len() != arity {
            return Err(RuntimeError::arity_mismatch(
                arity,
                arguments.len(),
                paren.line,
            ));
        }

        match callee {
            Value::Native(native) => Ok(native.invoke(&arguments)),
            Value::Function(function) => self.call_function(&function, arguments),
            Value::Class(class) => self.instantiate(&class, arguments),
            // The arity match above already rejected everything else.
            _ => Err(RuntimeError::not_callable(paren.line)),
        }
    }

    /// Calls a user function or bound method.
    ///
    /// A fresh frame is created as a child of the function's closure and
    /// the parameters are bound into it, so concurrent activations of
    /// the same function never share locals. An initializer yields the
    /// bound `this` regardless of how its body returned.
    pub(super) fn call_function(
        &mut self,
        function: &Function,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let declaration = function.declaration();
        let mut frame = Environment::with_enclosing(Rc::clone(function.closure()));
        for (param, argument) in declaration.params.iter().zip(arguments) {
            frame.define(&param.lexeme, argument);
        }

        let flow = self.execute_block(&declaration.body, Rc::new(RefCell::new(frame)))?;
        let result = match flow {
            Flow::Return(value) => value,
            Flow::Normal => Value::Nil,
        };

        if function.is_initializer() {
            return Environment::get_at(function.closure(), 0, "this").ok_or_else(|| {
                RuntimeError::undefined_variable("this", declaration.name.line)
            });
        }
        Ok(result)
    }

    /// Calls a class: constructs an instance and runs `init` if the
    /// class chain declares one. Arity was checked by the caller, so the
    /// instance is never exposed with a half-applied initializer.
    fn instantiate(
        &mut self,
        class: &Rc<Class>,
        arguments: Vec<Value>,
    ) -> Result<Value, RuntimeError> {
        let instance = Rc::new(RefCell::new(Instance::new(Rc::clone(class))));

        if let Some(initializer) = class.find_method("init") {
            let bound = initializer.bind(&instance);
            self.call_function(&bound, arguments)?;
        }

        Ok(Value::Instance(instance))
    }

    /// Reads a property off an instance: a field wins over a method; a
    /// method is returned bound to the instance.
    fn get_property(
        &self,
        instance: &Rc<RefCell<Instance>>,
        name: &Token,
    ) -> Result<Value, RuntimeError> {
        if let Some(value) = instance.borrow().field(&name.lexeme) {
            return Ok(value);
        }

        if let Some(method) = instance.borrow().class().find_method(&name.lexeme) {
            return Ok(Value::Function(Rc::new(method.bind(instance))));
        }

        Err(RuntimeError::undefined_property(&name.lexeme, name.line))
    }

    /// Evaluates `super.method`: the superclass sits in the `super`
    /// frame at the resolved distance, the receiver one frame nearer.
    fn super_method(
        &mut self,
        keyword: &Token,
        method: &Token,
        id: ExprId,
    ) -> Result<Value, RuntimeError> {
        let Some(&distance) = self.locals.get(&id) else {
            return Err(RuntimeError::undefined_variable(&keyword.lexeme, keyword.line));
        };

        let superclass = Environment::get_at(&self.environment, distance, "super")
            .ok_or_else(|| RuntimeError::undefined_variable("super", keyword.line))?;
        let Value::Class(superclass) = superclass else {
            return Err(RuntimeError::superclass_must_be_class(keyword.line));
        };

        let receiver = Environment::get_at(&self.environment, distance - 1, "this")
            .ok_or_else(|| RuntimeError::undefined_variable("this", keyword.line))?;
        let Value::Instance(receiver) = receiver else {
            return Err(RuntimeError::undefined_property(&method.lexeme, method.line));
        };

        let method_value = superclass
            .find_method(&method.lexeme)
            .ok_or_else(|| RuntimeError::undefined_property(&method.lexeme, method.line))?;

        Ok(Value::Function(Rc::new(method_value.bind(&receiver))))
    }
}

/// Converts an AST literal into a runtime value.
fn literal_value(literal: &LiteralValue) -> Value {
    match literal {
        LiteralValue::Nil => Value::Nil,
        LiteralValue::Bool(b) => Value::Bool(*b),
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::Str(s) => Value::Str(s.clone()),
    }
}

/// Demands two number operands for a binary operator.
fn number_operands(
    left: Value,
    right: Value,
    operator: &Token,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        _ => Err(RuntimeError::operands_must_be_numbers(operator.line)),
    }
}
