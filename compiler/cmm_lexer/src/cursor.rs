//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! End of input is the sentinel: `current() == 0` with the position at or
//! past the source length. A `0x00` byte before that point is an interior
//! NUL and is scanned like any other unexpected character.

/// Position within a sentinel-terminated buffer.
///
/// `Copy`, so a scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!((source_len as usize) < buf.len(), "sentinel must be in bounds");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos as usize).copied().unwrap_or(0)
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos as usize + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Step over one whole UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos += utf8_char_width(self.current());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be false so the sentinel stops the scan.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Source text in `start..end`.
    ///
    /// Token boundaries always fall on character boundaries of the original
    /// `&str`, so the conversion cannot fail in practice; a malformed range
    /// yields an empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.source_len);
        let start = start.min(end);
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or_default()
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

/// Width of the UTF-8 character introduced by `byte`.
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
