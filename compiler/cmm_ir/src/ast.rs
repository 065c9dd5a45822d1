//! Abstract syntax tree.
//!
//! Each parent exclusively owns its children, so the tree is acyclic and
//! dropped as a unit. Every node records the span it was parsed from.

use crate::{BinaryOp, Span};
use std::fmt;

/// A parsed program: top-level statements in source order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// Statements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    /// `name = expr`
    Variable(VariableStmt),
    /// A bare expression.
    Expression(ExpressionStmt),
    /// `if (cond) { ... } else { ... }`
    If(IfStmt),
    /// `while (cond) { ... }`
    While(WhileStmt),
    /// `print a, b, ...`
    Print(PrintStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Variable(s) => s.span,
            Stmt::Expression(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::Print(s) => s.span,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableStmt {
    pub name: Identifier,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpressionStmt {
    pub expr: Expr,
    pub span: Span,
}

/// Braced statement sequence used as a branch or loop body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

/// Print statement. `values` is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrintStmt {
    pub values: Vec<Expr>,
    pub span: Span,
}

/// Expressions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Infix(InfixExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(e) => e.span,
            Expr::Integer(e) => e.span,
            Expr::Infix(e) => e.span,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InfixExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

impl InfixExpr {
    /// Build an infix node spanning both operands.
    pub fn new(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = left.span().merge(right.span());
        InfixExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }
}

// Display renders a fully parenthesised form; the parse dump and
// precedence tests compare against it.

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(id) => f.write_str(&id.name),
            Expr::Integer(lit) => write!(f, "{}", lit.value),
            Expr::Infix(infix) => {
                write!(f, "({} {} {})", infix.left, infix.op, infix.right)
            }
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for stmt in &self.statements {
            write!(f, " {stmt};")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Variable(var) => write!(f, "{} = {}", var.name.name, var.value),
            Stmt::Expression(expr) => write!(f, "{}", expr.expr),
            Stmt::If(stmt) => {
                write!(f, "if {} {}", stmt.condition, stmt.then_branch)?;
                if let Some(else_branch) = &stmt.else_branch {
                    write!(f, " else {else_branch}")?;
                }
                Ok(())
            }
            Stmt::While(stmt) => write!(f, "while {} {}", stmt.condition, stmt.body),
            Stmt::Print(stmt) => {
                f.write_str("print")?;
                for (i, value) in stmt.values.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}{value}")?;
                }
                Ok(())
            }
        }
    }
}
