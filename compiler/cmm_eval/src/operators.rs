//! Binary operator semantics.
//!
//! Arithmetic wraps on overflow. Division and remainder truncate toward
//! zero; a zero divisor yields an error value. Comparisons and logical
//! operators produce `1` or `0`, and the logical operators read exactly
//! `1` as true.

use crate::errors::{binary_type_mismatch, division_by_zero, modulo_by_zero};
use crate::Value;
use cmm_ir::BinaryOp;

/// Apply `op` to two already-evaluated operands.
///
/// Callers handle `Error` operands before getting here.
pub(crate) fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => evaluate_int_binary(op, *a, *b),
        _ => binary_type_mismatch(op, left, right),
    }
}

fn evaluate_int_binary(op: BinaryOp, a: i64, b: i64) -> Value {
    match op {
        BinaryOp::Add => Value::Integer(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Integer(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Integer(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                division_by_zero()
            } else {
                Value::Integer(a.wrapping_div(b))
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                modulo_by_zero()
            } else {
                Value::Integer(a.wrapping_rem(b))
            }
        }
        BinaryOp::Eq => Value::from_bool(a == b),
        BinaryOp::NotEq => Value::from_bool(a != b),
        BinaryOp::Lt => Value::from_bool(a < b),
        BinaryOp::LtEq => Value::from_bool(a <= b),
        BinaryOp::Gt => Value::from_bool(a > b),
        BinaryOp::GtEq => Value::from_bool(a >= b),
        BinaryOp::And => Value::from_bool(a == 1 && b == 1),
        BinaryOp::Or => Value::from_bool(a == 1 || b == 1),
    }
}
