//! Tree-walking evaluator for C--.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime value sum type (`Integer`, `Error`, `Unit`)
//! - [`Environment`]: flat name-to-value storage, one per run
//! - [`Interpreter`]: structural recursion over the AST
//! - `evaluate_binary`: operator semantics on integers
//! - [`SharedPrintHandler`]: where `print` output goes
//!
//! Runtime failures are ordinary [`Value::Error`] values. Any construct that
//! receives one stops and hands it back unchanged, so the first error of a
//! run is the program's result.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::Environment;
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::Value;

use cmm_ir::Program;

/// Evaluate `program` in a fresh environment.
pub fn evaluate(program: &Program, print_handler: SharedPrintHandler) -> Value {
    Interpreter::new(print_handler).eval_program(program)
}

#[cfg(test)]
mod tests;
