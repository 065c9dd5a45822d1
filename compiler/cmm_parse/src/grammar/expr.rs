//! Expression parsing (Pratt / precedence climbing).
//!
//! Prefix positions accept an identifier, an integer literal, or a
//! parenthesised expression. Infix operators bind by
//! [`BinaryOp::precedence`] and associate to the left.

use super::ExprContext;
use crate::{ParseError, Parser};
use cmm_ir::{BinaryOp, Expr, Identifier, InfixExpr, IntegerLiteral, Precedence, TokenKind};
use cmm_stack::ensure_sufficient_stack;

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `min`.
    ///
    /// Starts with `current` on the first token and leaves it on the last.
    pub(crate) fn parse_expression(&mut self, min: Precedence, ctx: ExprContext) -> Option<Expr> {
        ensure_sufficient_stack(|| self.parse_expression_inner(min, ctx))
    }

    fn parse_expression_inner(&mut self, min: Precedence, ctx: ExprContext) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        if ctx == ExprContext::Normal
            && matches!(self.next.kind, TokenKind::Integer | TokenKind::Identifier)
        {
            self.unexpected_next();
            return None;
        }

        while let Some(op) = self.next.kind.binary_op() {
            if op.precedence() <= min {
                break;
            }
            self.advance();
            left = self.parse_infix(left, op, ctx)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Identifier => Some(Expr::Identifier(Identifier {
                name: self.current.text.clone(),
                span: self.current.span,
            })),
            TokenKind::Integer => self.parse_integer(),
            TokenKind::LParen => self.parse_grouped(),
            _ => {
                self.unexpected_current();
                None
            }
        }
    }

    /// Base-10 `i64` literal. Out-of-range text is an error.
    fn parse_integer(&mut self) -> Option<Expr> {
        match self.current.text.parse::<i64>() {
            Ok(value) => Some(Expr::Integer(IntegerLiteral {
                value,
                span: self.current.span,
            })),
            Err(_) => {
                self.error(ParseError::InvalidInteger {
                    literal: self.current.text.clone(),
                    span: self.current.span,
                });
                None
            }
        }
    }

    /// `( expr )`. The inner expression is a fresh, non-print context.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance();
        let inner = self.parse_expression(Precedence::LOWEST, ExprContext::Normal)?;
        self.expect_next(TokenKind::RParen)?;
        Some(inner)
    }

    /// `current` is the operator; parse its right operand.
    fn parse_infix(&mut self, left: Expr, op: BinaryOp, ctx: ExprContext) -> Option<Expr> {
        self.advance();
        let right = self.parse_expression(op.precedence(), ctx)?;
        Some(Expr::Infix(InfixExpr::new(op, left, right)))
    }
}
