//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprId, ExprKind};
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time: past the end it returns the last token,
    /// which is always `Eof`.
    pub(super) fn peek(&self) -> &Token {
        let idx = self.current.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the most recently consumed token.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Returns `true` if the current token has the given kind.
    ///
    /// Never matches at end of file.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token and returns it.
    ///
    /// Does not advance past `Eof`.
    pub(super) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// Consumes the current token if it has one of the given kinds.
    pub(super) fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Expects the current token to have the given kind and consumes it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying `message` and the offending
    /// token when the kinds do not match.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(ParseError::at_token(self.peek(), message))
    }

    /// Allocates the next expression identity.
    pub(super) fn next_id(&mut self) -> ExprId {
        let id = ExprId(self.next_expr_id);
        self.next_expr_id += 1;
        id
    }

    /// Builds an expression node with a fresh identity.
    pub(super) fn make_expr(&mut self, kind: ExprKind) -> Expr {
        let id = self.next_id();
        Expr::new(id, kind)
    }
}
