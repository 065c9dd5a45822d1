//! Binary operators and their binding strength.

use std::fmt;

/// Binding strength used by the Pratt parser.
///
/// Higher binds tighter. `LOWEST` is the bound passed in when parsing a
/// complete expression: every real operator exceeds it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Precedence(pub u8);

impl Precedence {
    pub const LOWEST: Precedence = Precedence(0);
}

/// Binary (infix) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// - 6: `*` `/` `%`
    /// - 5: `+` `-`
    /// - 4: `<` `>` `<=` `>=`
    /// - 3: `==` `!=`
    /// - 2: `&&`
    /// - 1: `||`
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Mul | Self::Div | Self::Mod => Precedence(6),
            Self::Add | Self::Sub => Precedence(5),
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => Precedence(4),
            Self::Eq | Self::NotEq => Precedence(3),
            Self::And => Precedence(2),
            Self::Or => Precedence(1),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
