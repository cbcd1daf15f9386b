//! The Skal programming language interpreter library.
//!
//! Skal is a small dynamically-typed scripting language with first-class
//! functions, closures, and classes with single inheritance. This library
//! provides the full language pipeline:
//!
//! - [`token`] - Token types and source line tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`printer`] - S-expression rendering of expressions
//! - [`resolver`] - Static name resolution (scope distances)
//! - [`interpreter`] - Tree-walking evaluator and runtime value model
//!
//! # Example
//!
//! ```
//! use skal::interpreter::Interpreter;
//! use skal::lexer::Lexer;
//! use skal::parser::Parser;
//! use skal::resolver::Resolver;
//!
//! let source = r#"
//!     fun greet(name) {
//!         print "Hello, " + name + "!";
//!     }
//!     greet("world");
//! "#;
//!
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize();
//! assert!(!lexer.has_errors());
//!
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("parse error");
//!
//! let locals = Resolver::new().resolve(&program).expect("resolve error");
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.set_locals(locals);
//! interpreter.interpret(&program).expect("runtime error");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod resolver;
pub mod token;
