//! The interpreter: structural recursion over the AST.

use crate::errors::undefined_variable;
use crate::operators::evaluate_binary;
use crate::{Environment, SharedPrintHandler, Value};
use cmm_ir::{Block, Expr, IfStmt, InfixExpr, PrintStmt, Program, Stmt, VariableStmt, WhileStmt};
use cmm_stack::ensure_sufficient_stack;

/// Returns early with the value if it is an `Error`.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_error() {
            return value;
        }
        value
    }};
}

/// Evaluator state for one run.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with an empty environment.
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print_handler,
        }
    }

    /// Run every top-level statement and return the last result.
    ///
    /// Stops at the first statement that produces an error value.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn eval_program(&mut self, program: &Program) -> Value {
        let result = self.eval_sequence(&program.statements);
        tracing::debug!(result = %result, variables = self.env.len(), "evaluation finished");
        result
    }

    fn eval_sequence(&mut self, statements: &[Stmt]) -> Value {
        let mut last = Value::Unit;
        for stmt in statements {
            last = propagate!(self.eval_stmt(stmt));
        }
        last
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> Value {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Variable(var) => self.eval_variable(var),
            Stmt::Expression(stmt) => self.eval_expr(&stmt.expr),
            Stmt::If(stmt) => self.eval_if(stmt),
            Stmt::While(stmt) => self.eval_while(stmt),
            Stmt::Print(stmt) => self.eval_print(stmt),
        })
    }

    fn eval_block(&mut self, block: &Block) -> Value {
        self.eval_sequence(&block.statements)
    }

    fn eval_variable(&mut self, var: &VariableStmt) -> Value {
        let value = propagate!(self.eval_expr(&var.value));
        tracing::trace!(name = %var.name.name, %value, "assign");
        self.env.set(&var.name.name, value.clone());
        value
    }

    fn eval_if(&mut self, stmt: &IfStmt) -> Value {
        let condition = propagate!(self.eval_expr(&stmt.condition));
        if condition.is_true() {
            self.eval_block(&stmt.then_branch)
        } else if condition.is_false() {
            match &stmt.else_branch {
                Some(else_branch) => self.eval_block(else_branch),
                None => Value::Unit,
            }
        } else {
            Value::Unit
        }
    }

    /// Loops while the condition is `1`. There is no iteration limit.
    fn eval_while(&mut self, stmt: &WhileStmt) -> Value {
        loop {
            let condition = propagate!(self.eval_expr(&stmt.condition));
            if !condition.is_true() {
                return Value::Unit;
            }
            propagate!(self.eval_block(&stmt.body));
        }
    }

    /// Emits each argument in order. An error argument stops the statement
    /// before it is printed.
    fn eval_print(&mut self, stmt: &PrintStmt) -> Value {
        for expr in &stmt.values {
            let value = propagate!(self.eval_expr(expr));
            self.print_handler.print_value(&value);
        }
        Value::Unit
    }

    pub fn eval_expr(&mut self, expr: &Expr) -> Value {
        ensure_sufficient_stack(|| match expr {
            Expr::Identifier(id) => self
                .env
                .get(&id.name)
                .cloned()
                .unwrap_or_else(|| undefined_variable(&id.name)),
            Expr::Integer(lit) => Value::Integer(lit.value),
            Expr::Infix(infix) => self.eval_infix(infix),
        })
    }

    fn eval_infix(&mut self, infix: &InfixExpr) -> Value {
        let left = propagate!(self.eval_expr(&infix.left));
        let right = propagate!(self.eval_expr(&infix.right));
        evaluate_binary(infix.op, &left, &right)
    }
}
