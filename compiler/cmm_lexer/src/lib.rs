//! Lexer for C--.
//!
//! Pull-based: [`Lexer::next_token`] scans one token per call and keeps
//! returning [`TokenKind::End`] once the input is exhausted. The
//! [`Iterator`] impl yields a single `End` and then stops, and [`lex`]
//! collects a whole stream.
//!
//! There is no error recovery here. Anything the grammar does not know
//! becomes an [`TokenKind::Invalid`] token carrying the offending
//! character, and the parser reports it.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;

use cmm_ir::{Span, Token, TokenKind};

/// Tokenizer over a [`SourceBuffer`].
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    len: u32,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        Lexer {
            cursor: source.cursor(),
            len: source.len(),
            finished: false,
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_whitespace());

        if self.cursor.is_eof() {
            return Token::end(self.len);
        }

        let start = self.cursor.pos();
        let kind = self.scan(self.cursor.current());
        let text = self.cursor.slice_from(start);
        let token = Token::new(kind, text, Span::new(start, self.cursor.pos()));
        tracing::trace!(?token, "scanned");
        token
    }

    fn scan(&mut self, first: u8) -> TokenKind {
        match first {
            b'0'..=b'9' => {
                self.cursor.eat_while(|b| b.is_ascii_digit());
                TokenKind::Integer
            }
            b'a'..=b'z' | b'A'..=b'Z' => {
                let start = self.cursor.pos();
                self.cursor.eat_while(|b| b.is_ascii_alphabetic());
                TokenKind::identifier_or_keyword(self.cursor.slice_from(start))
            }
            b'=' => self.one_or_two(b'=', TokenKind::Assign, TokenKind::EqEq),
            b'<' => self.one_or_two(b'=', TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.one_or_two(b'=', TokenKind::Gt, TokenKind::GtEq),
            b'!' => self.one_or_two(b'=', TokenKind::Invalid, TokenKind::NotEq),
            b'&' => self.one_or_two(b'&', TokenKind::Invalid, TokenKind::AmpAmp),
            b'|' => self.one_or_two(b'|', TokenKind::Invalid, TokenKind::PipePipe),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Percent),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            _ => {
                self.cursor.advance_char();
                TokenKind::Invalid
            }
        }
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `alone` unless the next byte is `second`, in which case both are
    /// consumed as `pair`.
    #[inline]
    fn one_or_two(&mut self, second: u8, alone: TokenKind, pair: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            pair
        } else {
            alone
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::End) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Tokenize `source` completely. The last token is always `End`.
pub fn lex(source: &str) -> Vec<Token> {
    let buffer = SourceBuffer::new(source);
    Lexer::new(&buffer).collect()
}
