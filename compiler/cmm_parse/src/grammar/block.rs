//! Braced statement blocks.

use super::StmtMode;
use crate::{ParseError, Parser};
use cmm_ir::{Block, Stmt, TokenKind};
use cmm_stack::ensure_sufficient_stack;

impl Parser<'_> {
    /// Parse a branch or loop body, which must start at `{`.
    pub(crate) fn parse_body(&mut self) -> Option<Block> {
        if !self.check(TokenKind::LBrace) {
            self.unexpected_current();
            return None;
        }
        ensure_sufficient_stack(|| self.parse_block())
    }

    /// Parse `{ stmt* }` with `current` on the `{`.
    ///
    /// A nested block (depth above one) consumes its closing `}`. The
    /// outermost block of a top-level statement leaves `}` as `current`.
    /// `else` ends a block early without being consumed and closes it for
    /// depth purposes. Only an `if` then-branch may end that way; the
    /// callers of other bodies reject a leftover `else`.
    fn parse_block(&mut self) -> Option<Block> {
        let start = self.current.span;
        self.advance();
        self.brace_depth += 1;

        let mut statements = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::RBrace => break,
                TokenKind::Else => {
                    let span = start.merge(self.current.span);
                    self.brace_depth = self.brace_depth.saturating_sub(1);
                    return Some(Block { statements, span });
                }
                TokenKind::End => {
                    self.error(ParseError::unexpected(&self.current));
                    return None;
                }
                _ => {}
            }

            let stmt = if self.check(TokenKind::Identifier) && self.check_next(TokenKind::Assign) {
                self.parse_variable()?
            } else {
                self.parse_statement(StmtMode::Block)?
            };

            let compound = matches!(stmt, Stmt::If(_) | Stmt::While(_));
            statements.push(stmt);
            if !compound {
                self.advance();
            }
        }

        let span = start.merge(self.current.span);
        if self.brace_depth > 1 {
            self.advance();
            self.brace_depth -= 1;
        }
        Some(Block { statements, span })
    }
}
