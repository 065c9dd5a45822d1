//! Pratt parser for C--.
//!
//! The parser pulls tokens from a [`Lexer`] with two tokens of lookahead
//! (`current` and `next`). Failures never abort the parse: each one is
//! recorded as a [`ParseError`], the statement being parsed is dropped,
//! and parsing resumes at the next top-level statement. Callers must check
//! [`ParseOutput::has_errors`] before evaluating.

mod error;
mod grammar;
mod recovery;

pub use error::ParseError;

use cmm_ir::{Program, Token, TokenKind};
use cmm_lexer::{Lexer, SourceBuffer};

/// Result of parsing a whole source text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    next: Token,
    /// Number of `{` consumed and not yet closed within the current
    /// top-level statement. Decides which block consumes a `}`.
    brace_depth: u32,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let next = lexer.next_token();
        Parser {
            lexer,
            current,
            next,
            brace_depth: 0,
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.current.is(TokenKind::End) {
            let start = self.current.span.start;
            match self.parse_statement(grammar::StmtMode::TopLevel) {
                Some(stmt) => {
                    tracing::trace!(span = %stmt.span(), "parsed statement");
                    statements.push(stmt);
                    self.advance();
                }
                None => self.recover(start),
            }
            self.brace_depth = 0;
        }

        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parse finished"
        );
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    /// Shift `next` into `current` and pull a fresh token.
    #[inline]
    fn advance(&mut self) {
        let fresh = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.next, fresh);
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    fn check_next(&self, kind: TokenKind) -> bool {
        self.next.is(kind)
    }

    /// Advance onto `next` if it has the given kind, otherwise record it as
    /// unexpected.
    fn expect_next(&mut self, kind: TokenKind) -> Option<()> {
        if self.check_next(kind) {
            self.advance();
            Some(())
        } else {
            self.unexpected_next();
            None
        }
    }

    fn error(&mut self, error: ParseError) {
        tracing::debug!(%error, span = %error.span(), "syntax error");
        self.errors.push(error);
    }

    fn unexpected_current(&mut self) {
        self.error(ParseError::unexpected(&self.current));
    }

    fn unexpected_next(&mut self) {
        self.error(ParseError::unexpected(&self.next));
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> ParseOutput {
    let buffer = SourceBuffer::new(source);
    Parser::new(&buffer).parse_program()
}

#[cfg(test)]
mod tests;
