//! Statement parsing.

use super::{ExprContext, StmtMode};
use crate::Parser;
use cmm_ir::{
    ExpressionStmt, Expr, Identifier, IfStmt, Precedence, PrintStmt, Stmt, TokenKind,
    VariableStmt, WhileStmt,
};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self, mode: StmtMode) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Identifier if mode == StmtMode::TopLevel => self.parse_variable(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Print => self.parse_print(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `name = expr`
    pub(crate) fn parse_variable(&mut self) -> Option<Stmt> {
        let name = Identifier {
            name: self.current.text.clone(),
            span: self.current.span,
        };
        self.expect_next(TokenKind::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::LOWEST, ExprContext::Normal)?;
        let span = name.span.merge(value.span());
        Some(Stmt::Variable(VariableStmt { name, value, span }))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::LOWEST, ExprContext::Normal)?;
        let span = expr.span();
        Some(Stmt::Expression(ExpressionStmt { expr, span }))
    }

    /// `if (cond) { ... }` with an optional `else { ... }`.
    fn parse_if(&mut self) -> Option<Stmt> {
        let start = self.current.span;
        let outermost = self.brace_depth == 0;
        let condition = self.parse_condition()?;
        let then_branch = self.parse_body()?;

        // An outermost block leaves its `}` in place; step over it to reach `else`.
        if outermost && self.check(TokenKind::RBrace) && self.check_next(TokenKind::Else) {
            self.advance();
            self.brace_depth = self.brace_depth.saturating_sub(1);
        }

        let else_branch = if self.check(TokenKind::Else) {
            self.advance();
            let body = self.parse_body()?;
            self.reject_stray_else()?;
            Some(body)
        } else {
            None
        };

        let end = else_branch.as_ref().map_or(then_branch.span, |b| b.span);
        Some(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: start.merge(end),
        }))
    }

    /// `while (cond) { ... }`
    fn parse_while(&mut self) -> Option<Stmt> {
        let start = self.current.span;
        let condition = self.parse_condition()?;
        let body = self.parse_body()?;
        self.reject_stray_else()?;
        let span = start.merge(body.span);
        Some(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    /// `print a, b, ...`
    fn parse_print(&mut self) -> Option<Stmt> {
        let start = self.current.span;
        let mut values = Vec::new();

        loop {
            self.advance();
            values.push(self.parse_expression(Precedence::LOWEST, ExprContext::Print)?);
            if !self.check_next(TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Some(Stmt::Print(PrintStmt {
            values,
            span: start.merge(self.current.span),
        }))
    }

    /// A body that stopped at `else` without belonging to an `if` then-branch.
    fn reject_stray_else(&mut self) -> Option<()> {
        if self.check(TokenKind::Else) {
            self.unexpected_current();
            return None;
        }
        Some(())
    }

    /// `( expr )` following `if` or `while`. Leaves `current` on the `{`
    /// that should open the body.
    fn parse_condition(&mut self) -> Option<Expr> {
        self.expect_next(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::LOWEST, ExprContext::Normal)?;
        self.expect_next(TokenKind::RParen)?;
        self.advance();
        Some(condition)
    }
}
