//! Syntax errors.

use cmm_ir::{Span, Token};

/// A recorded syntax error.
///
/// The `Display` text is the user-facing diagnostic line.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot appear where it was found.
    #[error("Syntax error, didn't expect {found}")]
    UnexpectedToken { found: String, span: Span },

    /// An integer literal outside the `i64` range.
    #[error("Unable to parse {literal:?} as an integer")]
    InvalidInteger { literal: String, span: Span },
}

impl ParseError {
    pub fn unexpected(token: &Token) -> Self {
        ParseError::UnexpectedToken {
            found: token.describe().to_string(),
            span: token.span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } | ParseError::InvalidInteger { span, .. } => {
                *span
            }
        }
    }
}
