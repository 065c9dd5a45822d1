//! Error value constructors.
//!
//! Every runtime failure message the evaluator produces is built here.

use crate::Value;
use cmm_ir::BinaryOp;

pub fn undefined_variable(name: &str) -> Value {
    Value::Error(format!("Couldn't find identifier: {name}"))
}

pub fn division_by_zero() -> Value {
    Value::Error("division by zero".to_string())
}

pub fn modulo_by_zero() -> Value {
    Value::Error("modulo by zero".to_string())
}

/// An operator applied to something other than two integers.
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> Value {
    Value::Error(format!(
        "type mismatch: {} {} {}",
        left.type_name(),
        op.as_symbol(),
        right.type_name()
    ))
}
