//! Runtime values.

use std::fmt;

/// Result of evaluating any node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Integer(i64),
    /// A runtime failure carrying its message.
    Error(String),
    /// No meaningful value: loops, prints, empty sequences.
    Unit,
}

impl Value {
    /// Type tag: `INTEGER`, `ERROR` or `UNIT`.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Error(_) => "ERROR",
            Value::Unit => "UNIT",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Renders as `1`. Only `Integer(1)` does.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Integer(1))
    }

    /// Renders as `0`. Only `Integer(0)` does.
    #[inline]
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Integer(0))
    }

    pub fn from_bool(b: bool) -> Value {
        Value::Integer(i64::from(b))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Error(msg) => write!(f, "ERROR: {msg}"),
            Value::Unit => Ok(()),
        }
    }
}
