//! Token types shared by the lexer and parser.

use crate::{BinaryOp, Span};
use std::fmt;

/// A token: its kind, the exact source text it was scanned from, and where.
///
/// Tokens are immutable once produced. The end-of-input token carries
/// empty text and a zero-width span at the end of the source.
#[derive(Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input token positioned at `offset`.
    pub fn end(offset: u32) -> Self {
        Token {
            kind: TokenKind::End,
            text: String::new(),
            span: Span::point(offset),
        }
    }

    /// How this token is named in syntax error messages.
    ///
    /// Returns the source text, or `end of input` for [`TokenKind::End`].
    pub fn describe(&self) -> &str {
        if self.kind == TokenKind::End {
            "end of input"
        } else {
            &self.text
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Lexical categories of C--.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Literals and names ===
    Identifier,
    Integer,

    // === Keywords ===
    If,
    Else,
    While,
    Print,

    // === Operators ===
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    // === Delimiters ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    // === Control ===
    End,
    Invalid,
}

impl TokenKind {
    /// Look up a reserved keyword by text.
    ///
    /// Returns `None` for anything that is a plain identifier.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "print" => Some(TokenKind::Print),
            _ => None,
        }
    }

    /// Classify a scanned word: keyword kind if reserved, otherwise identifier.
    pub fn identifier_or_keyword(text: &str) -> TokenKind {
        Self::keyword(text).unwrap_or(TokenKind::Identifier)
    }

    /// The infix operator this token denotes, if any.
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::AmpAmp => Some(BinaryOp::And),
            TokenKind::PipePipe => Some(BinaryOp::Or),
            _ => None,
        }
    }

    /// Upper-case category name used by the token dump.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::Assign => "ASSIGNMENT",
            TokenKind::EqEq => "EQUAL",
            TokenKind::NotEq => "NOTEQUAL",
            TokenKind::Lt => "LESSTHAN",
            TokenKind::LtEq => "LESSTHANEQUAL",
            TokenKind::Gt => "GREATERTHAN",
            TokenKind::GtEq => "GREATERTHANEQUAL",
            TokenKind::AmpAmp => "AND",
            TokenKind::PipePipe => "OR",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Percent => "MODULO",
            TokenKind::LParen => "LEFTPARENTHESES",
            TokenKind::RParen => "RIGHTPARENTHESES",
            TokenKind::LBrace => "LEFTCURLYBRACE",
            TokenKind::RBrace => "RIGHTCURLYBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::End => "END",
            TokenKind::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
