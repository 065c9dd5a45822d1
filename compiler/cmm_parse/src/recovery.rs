//! Resynchronisation after a failed top-level statement.

use crate::Parser;
use cmm_ir::TokenKind;

impl Parser<'_> {
    /// Skip to the start of the next top-level statement.
    ///
    /// `start` is the offset the failed statement began at; if the parser
    /// never moved past it, one token is skipped first so the loop always
    /// makes progress. Blocks still open at the failure point, and braces
    /// opened while skipping, are balanced before a statement start is
    /// accepted.
    pub(crate) fn recover(&mut self, start: u32) {
        if self.current.span.start == start {
            self.advance();
        }

        let mut depth = self.brace_depth;
        loop {
            match self.current.kind {
                TokenKind::End => break,
                _ if depth == 0 && self.at_statement_start() => break,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }

        tracing::trace!(at = %self.current.span, "resynchronised");
    }

    /// `if`, `while`, `print`, or an assignment `name =`.
    fn at_statement_start(&self) -> bool {
        match self.current.kind {
            TokenKind::If | TokenKind::While | TokenKind::Print => true,
            TokenKind::Identifier => self.check_next(TokenKind::Assign),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;

    #[test]
    fn resumes_at_next_statement() {
        let output = parse("x = + 1\ny = 2");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.program.len(), 1);
        assert_eq!(output.program.statements[0].to_string(), "y = 2");
    }

    #[test]
    fn skips_whole_braced_region() {
        let output = parse("if x { y = 1 }\nprint 3");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].to_string(), "Syntax error, didn't expect x");
        assert_eq!(output.program.len(), 1);
        assert_eq!(output.program.statements[0].to_string(), "print 3");
    }

    #[test]
    fn failure_inside_block_skips_to_its_closing_brace() {
        let output = parse("while (1) { print 1\n x = )\n y = 2 }\nprint 3");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].to_string(), "Syntax error, didn't expect )");
        assert_eq!(output.program.len(), 1);
        assert_eq!(output.program.statements[0].to_string(), "print 3");
    }

    #[test]
    fn failure_in_nested_block_balances_every_level() {
        let output = parse("if (1) { while (1) { x = ( } }\ny = 4");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.program.len(), 1);
        assert_eq!(output.program.statements[0].to_string(), "y = 4");
    }

    #[test]
    fn gives_up_at_end_of_input() {
        let output = parse("+ + +");
        assert_eq!(output.errors.len(), 1);
        assert!(output.program.is_empty());
    }
}
