//! Shared representation types for the C-- interpreter.
//!
//! Everything the lexer, parser and evaluator agree on lives here:
//! source spans, tokens, binary operators and the AST.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! cmm_lexer ──► Token stream
//!     │
//!     ▼
//! cmm_parse ──► Program (AST)
//!     │
//!     ▼
//! cmm_eval  ──► Value + print output
//! ```

pub mod ast;
mod operators;
mod span;
mod token;

pub use ast::{
    Block, Expr, ExpressionStmt, Identifier, IfStmt, InfixExpr, IntegerLiteral, PrintStmt,
    Program, Stmt, VariableStmt, WhileStmt,
};
pub use operators::{BinaryOp, Precedence};
pub use span::Span;
pub use token::{Token, TokenKind};
