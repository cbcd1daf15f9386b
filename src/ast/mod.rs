//! Abstract Syntax Tree definitions for the Skal programming language.
//!
//! This module defines the data structures that represent parsed Skal
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::resolver`], the [`crate::printer`], and the
//! [`crate::interpreter`].
//!
//! # Structure
//!
//! - [`Expr`] / [`ExprKind`] - Expression nodes
//! - [`Stmt`] - Statement nodes
//! - [`FunctionDecl`] - A function or method declaration, shared between
//!   its declaration site and any runtime function values created from it
//!
//! # Node identity
//!
//! Every expression carries an [`ExprId`] assigned by the parser at
//! construction. The resolver keys its scope-distance table on this id,
//! so structurally identical sub-expressions at different positions
//! resolve independently. Ids are never derived from structure.

mod expr;
mod stmt;

pub use expr::{Expr, ExprId, ExprKind, LiteralValue};
pub use stmt::{FunctionDecl, Stmt};
