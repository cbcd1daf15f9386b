//! Static name resolution for the Skal programming language.
//!
//! This module provides the [`Resolver`], a single pre-execution pass
//! over the AST that computes, for every variable use, how many scopes
//! lie between the use and the declaration it refers to. The interpreter
//! uses these distances to read and write variables without searching
//! the environment chain, which keeps closures correct in the presence
//! of shadowing.
//!
//! # Responsibilities
//!
//! - **Scope distances**: records a depth for every `Variable`,
//!   `Assign`, `this`, and `super` expression that resolves to a local;
//!   absence from the table means the name is global.
//! - **Static rules**: rejects programs that are syntactically valid but
//!   semantically ill-formed, such as reading a local variable in its
//!   own initializer, `return` at top level, `this` outside a class, or
//!   a class inheriting from itself.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lexer → Parser → Resolver → Interpreter
//! ```
//!
//! The resolver runs between parsing and execution for the `run`
//! command. It does not modify the AST; its output is a side table keyed
//! by expression identity.
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree being resolved
//! * [`crate::interpreter`] - Consumes the scope-distance table

mod error;


pub use error::ResolveError;

use std::collections::HashMap;

use crate::ast::{Expr, ExprId, ExprKind, FunctionDecl, Stmt};
use crate::token::Token;

/// The kind of function body currently being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionKind {
    None,
    Function,
    Method,
    Initializer,
}

/// The kind of class body currently being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassKind {
    None,
    Class,
    Subclass,
}

/// Scope distances for variable uses, keyed by expression identity.
pub type Locals = HashMap<ExprId, usize>;

/// Static name resolver for Skal programs.
///
/// Walks the AST once, maintaining a stack of lexical scopes. Each scope
/// maps names to a flag distinguishing *declared* (initializer not yet
/// resolved) from *defined*. The global scope is implicit and never on
/// the stack.
pub struct Resolver {
    /// Lexical scope stack, innermost last. `false` = declared,
    /// `true` = defined.
    scopes: Vec<HashMap<String, bool>>,
    /// Scope distances recorded so far.
    locals: Locals,
    /// The function context of the code being resolved.
    current_function: FunctionKind,
    /// The class context of the code being resolved.
    current_class: ClassKind,
}

impl Resolver {
    /// Creates a new resolver.
    pub fn new() -> Self {
        Resolver {
            scopes: Vec::new(),
            locals: HashMap::new(),
            current_function: FunctionKind::None,
            current_class: ClassKind::None,
        }
    }

    /// Resolves a program and returns the scope-distance table.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] describing the first static-rule
    /// violation.
    pub fn resolve(mut self, statements: &[Stmt]) -> Result<Locals, ResolveError> {
        self.resolve_stmts(statements)?;
        Ok(self.locals)
    }

    fn resolve_stmts(&mut self, statements: &[Stmt]) -> Result<(), ResolveError> {
        for statement in statements {
            self.resolve_stmt(statement)?;
        }
        Ok(())
    }

    fn resolve_stmt(&mut self, statement: &Stmt) -> Result<(), ResolveError> {
        match statement {
            Stmt::Expression(expr) | Stmt::Print(expr) => self.resolve_expr(expr),
            Stmt::Var { name, initializer } => {
                self.declare(name)?;
                if let Some(initializer) = initializer {
                    self.resolve_expr(initializer)?;
                }
                self.define(name);
                Ok(())
            }
            Stmt::Block(statements) => {
                self.begin_scope();
                let result = self.resolve_stmts(statements);
                self.end_scope();
                result
            }
            Stmt::If { condition, then_branch, else_branch } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(body)
            }
            Stmt::Function(declaration) => {
                self.declare(&declaration.name)?;
                self.define(&declaration.name);
                self.resolve_function(declaration, FunctionKind::Function)
            }
            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionKind::None {
                    return Err(ResolveError::at_token(
                        keyword,
                        "Can't return from top-level code.",
                    ));
                }
                if let Some(value) = value {
                    if self.current_function == FunctionKind::Initializer {
                        return Err(ResolveError::at_token(
                            keyword,
                            "Can't return a value from an initializer.",
                        ));
                    }
                    self.resolve_expr(value)?;
                }
                Ok(())
            }
            Stmt::Class { name, superclass, methods } => {
                self.resolve_class(name, superclass.as_ref(), methods)
            }
        }
    }

    fn resolve_class(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[std::rc::Rc<FunctionDecl>],
    ) -> Result<(), ResolveError> {
        let enclosing_class = self.current_class;
        self.current_class = ClassKind::Class;
        let result = self.resolve_class_body(name, superclass, methods);
        self.current_class = enclosing_class;
        result
    }

    fn resolve_class_body(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[std::rc::Rc<FunctionDecl>],
    ) -> Result<(), ResolveError> {
        self.declare(name)?;
        self.define(name);

        if let Some(superclass) = superclass {
            if let ExprKind::Variable { name: superclass_name } = &superclass.kind
                && superclass_name.lexeme == name.lexeme
            {
                return Err(ResolveError::at_token(
                    superclass_name,
                    "A class can't inherit from itself.",
                ));
            }
            self.current_class = ClassKind::Subclass;
            self.resolve_expr(superclass)?;

            // Methods of a subclass close over a scope holding `super`.
            self.begin_scope();
            self.scope_insert("super");
        }

        self.begin_scope();
        self.scope_insert("this");

        let mut result = Ok(());
        for method in methods {
            let kind = if method.name.lexeme == "init" {
                FunctionKind::Initializer
            } else {
                FunctionKind::Method
            };
            result = self.resolve_function(method, kind);
            if result.is_err() {
                break;
            }
        }

        self.end_scope();
        if superclass.is_some() {
            self.end_scope();
        }
        result
    }

    fn resolve_function(
        &mut self,
        declaration: &FunctionDecl,
        kind: FunctionKind,
    ) -> Result<(), ResolveError> {
        let enclosing_function = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        let result = self.resolve_params_and_body(declaration);
        self.end_scope();

        self.current_function = enclosing_function;
        result
    }

    fn resolve_params_and_body(&mut self, declaration: &FunctionDecl) -> Result<(), ResolveError> {
        for param in &declaration.params {
            self.declare(param)?;
            self.define(param);
        }
        self.resolve_stmts(&declaration.body)
    }

    fn resolve_expr(&mut self, expr: &Expr) -> Result<(), ResolveError> {
        match &expr.kind {
            ExprKind::Literal(_) => Ok(()),
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
            ExprKind::Unary { right, .. } => self.resolve_expr(right),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)
            }
            ExprKind::Variable { name } => {
                if self
                    .scopes
                    .last()
                    .is_some_and(|scope| scope.get(&name.lexeme) == Some(&false))
                {
                    return Err(ResolveError::at_token(
                        name,
                        "Can't read local variable in its own initializer.",
                    ));
                }
                self.resolve_local(expr.id, name);
                Ok(())
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(value)?;
                self.resolve_local(expr.id, name);
                Ok(())
            }
            ExprKind::Call { callee, arguments, .. } => {
                self.resolve_expr(callee)?;
                for argument in arguments {
                    self.resolve_expr(argument)?;
                }
                Ok(())
            }
            ExprKind::Get { object, .. } => self.resolve_expr(object),
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(value)?;
                self.resolve_expr(object)
            }
            ExprKind::This { keyword } => {
                if self.current_class == ClassKind::None {
                    return Err(ResolveError::at_token(
                        keyword,
                        "Can't use 'this' outside of a class.",
                    ));
                }
                self.resolve_local(expr.id, keyword);
                Ok(())
            }
            ExprKind::Super { keyword, .. } => {
                match self.current_class {
                    ClassKind::None => {
                        return Err(ResolveError::at_token(
                            keyword,
                            "Can't use 'super' outside of a class.",
                        ));
                    }
                    ClassKind::Class => {
                        return Err(ResolveError::at_token(
                            keyword,
                            "Can't use 'super' in a class with no superclass.",
                        ));
                    }
                    ClassKind::Subclass => {}
                }
                self.resolve_local(expr.id, keyword);
                Ok(())
            }
        }
    }

    /// Records the scope distance for a variable use.
    ///
    /// Walks the scope stack from innermost outward; the index of the
    /// first scope containing the name is its distance. Names found in
    /// no scope are globals and stay out of the table.
    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        for (distance, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.locals.insert(id, distance);
                return;
            }
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks a name as declared but not yet defined in the current scope.
    ///
    /// Declaring the same name twice in one local scope is an error; the
    /// implicit global scope allows redeclaration.
    fn declare(&mut self, name: &Token) -> Result<(), ResolveError> {
        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        if scope.contains_key(&name.lexeme) {
            return Err(ResolveError::at_token(
                name,
                "Already a variable with this name in this scope.",
            ));
        }
        scope.insert(name.lexeme.clone(), false);
        Ok(())
    }

    /// Marks a name as fully defined in the current scope.
    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    /// Inserts an implicitly defined name (`this`, `super`) into the
    /// current scope.
    fn scope_insert(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), true);
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
