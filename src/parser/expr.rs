//! Expression parsing.
//!
//! One method per precedence level, lowest to highest: assignment,
//! `or`, `and`, equality, comparison, term, factor, unary, call,
//! primary. Binary rules loop on their operators, so they associate
//! left; assignment recurses on itself, so it associates right.

use super::error::ParseError;
use super::{MAX_ARITY, Parser};
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::token::{Literal, TokenKind};

impl Parser {
    /// Parses an expression at the lowest precedence level.
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// Parses an assignment, reinterpreting the parsed left-hand side.
    ///
    /// The left-hand side is parsed as an ordinary expression first; when
    /// an `=` follows, a `Variable` becomes an `Assign` and a `Get`
    /// becomes a `Set`. Any other left-hand side is an invalid
    /// assignment target, reported at the `=` token.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if self.match_kinds(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = Box::new(self.assignment()?);

            return match expr.kind {
                ExprKind::Variable { name } => Ok(self.make_expr(ExprKind::Assign { name, value })),
                ExprKind::Get { object, name } => {
                    Ok(self.make_expr(ExprKind::Set { object, name, value }))
                }
                _ => Err(ParseError::at_token(&equals, "Invalid assignment target.")),
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;
        while self.match_kinds(&[TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = Box::new(self.and()?);
            expr = self.make_expr(ExprKind::Logical {
                left: Box::new(expr),
                operator,
                right,
            });
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_kinds(&[TokenKind::And]) {
            let operator = self.previous().clone();
            let right = Box::new(self.equality()?);
            expr = self.make_expr(ExprKind::Logical {
                left: Box::new(expr),
                operator,
                right,
            });
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = Box::new(self.comparison()?);
            expr = self.make_expr(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right,
            });
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.match_kinds(&[
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
        ]) {
            let operator = self.previous().clone();
            let right = Box::new(self.term()?);
            expr = self.make_expr(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right,
            });
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = Box::new(self.factor()?);
            expr = self.make_expr(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right,
            });
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = Box::new(self.unary()?);
            expr = self.make_expr(ExprKind::Binary {
                left: Box::new(expr),
                operator,
                right,
            });
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = Box::new(self.unary()?);
            return Ok(self.make_expr(ExprKind::Unary { operator, right }));
        }
        self.call()
    }

    /// Parses a primary expression followed by any number of call and
    /// property-access suffixes.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_kinds(&[TokenKind::LeftParen]) {
                expr = self.finish_call(expr)?;
            } else if self.match_kinds(&[TokenKind::Dot]) {
                let name = self.consume(TokenKind::Identifier, "Expect property name after '.'.")?;
                expr = self.make_expr(ExprKind::Get {
                    object: Box::new(expr),
                    name,
                });
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parses the argument list of a call. The opening parenthesis has
    /// already been consumed.
    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= MAX_ARITY {
                    return Err(ParseError::at_token(
                        self.peek(),
                        "Can't have more than 255 arguments.",
                    ));
                }
                arguments.push(self.expression()?);
                if !self.match_kinds(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(self.make_expr(ExprKind::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        }))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(&[TokenKind::False]) {
            return Ok(self.make_expr(ExprKind::Literal(LiteralValue::Bool(false))));
        }
        if self.match_kinds(&[TokenKind::True]) {
            return Ok(self.make_expr(ExprKind::Literal(LiteralValue::Bool(true))));
        }
        if self.match_kinds(&[TokenKind::Nil]) {
            return Ok(self.make_expr(ExprKind::Literal(LiteralValue::Nil)));
        }

        if self.match_kinds(&[TokenKind::Number, TokenKind::String]) {
            let literal = match self.previous().literal.clone() {
                Some(Literal::Num(n)) => LiteralValue::Number(n),
                Some(Literal::Str(s)) => LiteralValue::Str(s),
                // The lexer attaches a payload to every number and
                // string token.
                None => LiteralValue::Nil,
            };
            return Ok(self.make_expr(ExprKind::Literal(literal)));
        }

        if self.match_kinds(&[TokenKind::Super]) {
            let keyword = self.previous().clone();
            self.consume(TokenKind::Dot, "Expect '.' after 'super'.")?;
            let method = self.consume(TokenKind::Identifier, "Expect superclass method name.")?;
            return Ok(self.make_expr(ExprKind::Super { keyword, method }));
        }

        if self.match_kinds(&[TokenKind::This]) {
            let keyword = self.previous().clone();
            return Ok(self.make_expr(ExprKind::This { keyword }));
        }

        if self.match_kinds(&[TokenKind::Identifier]) {
            let name = self.previous().clone();
            return Ok(self.make_expr(ExprKind::Variable { name }));
        }

        if self.match_kinds(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(self.make_expr(ExprKind::Grouping(Box::new(expr))));
        }

        Err(ParseError::at_token(self.peek(), "Expect expression."))
    }
}
