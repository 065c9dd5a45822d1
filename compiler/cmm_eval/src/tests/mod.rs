//! Evaluator tests, driven through the parser.

mod control_tests;

use crate::{buffer_handler, Interpreter, Value};

/// Parse and evaluate `source`, returning the final value and captured output.
pub(crate) fn run(source: &str) -> (Value, String) {
    let output = cmm_parse::parse(source);
    assert!(
        !output.has_errors(),
        "syntax errors in {source:?}: {:?}",
        output.errors
    );
    let handler = buffer_handler();
    let mut interpreter = Interpreter::new(handler.clone());
    let value = interpreter.eval_program(&output.program);
    (value, handler.get_output())
}

pub(crate) fn eval(source: &str) -> Value {
    run(source).0
}
