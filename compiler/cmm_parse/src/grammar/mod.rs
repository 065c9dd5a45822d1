//! Grammar productions.
//!
//! Every statement production leaves `current` on the last token it
//! consumed. The caller advances past it, except after `if` and `while`
//! inside a block: a nested block consumes its own `}`, so those leave
//! `current` on the first token after the statement.

mod block;
mod expr;
mod stmt;

/// Where a statement is being parsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum StmtMode {
    /// Program level: a leading identifier always starts an assignment.
    TopLevel,
    /// Inside braces: only `name =` is an assignment, other identifiers
    /// start an expression statement.
    Block,
}

/// Whether an expression is a `print` argument.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ExprContext {
    /// An operand directly followed by another operand is an error.
    Normal,
    /// Commas separate operands, so the missing-operator check is off.
    Print,
}
