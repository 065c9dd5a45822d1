//! Sentinel-terminated copy of the source text.
//!
//! The buffer always holds at least one `0x00` byte past the end of the
//! source, rounded up to a 64-byte boundary. Scanning code reads
//! `current()` and `peek()` without bounds checks and treats the sentinel
//! as end of input.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// Owned source bytes followed by zero padding.
///
/// ```text
/// [source_bytes..., 0x00, 0x00...]
///                   ^
///                   len() (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources over `u32::MAX` bytes saturate the recorded length; nothing
    /// past that point is ever scanned.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let padded_len = (bytes.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..bytes.len()].copy_from_slice(bytes);

        SourceBuffer {
            buf,
            source_len: u32::try_from(bytes.len()).unwrap_or(u32::MAX),
        }
    }

    /// Source bytes without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_follows_source() {
        let buf = SourceBuffer::new("x = 1");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.as_bytes(), b"x = 1");
        assert_eq!(buf.buf[5], 0);
        assert_eq!(buf.buf.len() % CACHE_LINE, 0);
    }

    #[test]
    fn exact_cache_line_source_still_gets_sentinel() {
        let source = "a".repeat(CACHE_LINE);
        let buf = SourceBuffer::new(&source);
        assert_eq!(buf.buf.len(), CACHE_LINE * 2);
        assert_eq!(buf.buf[CACHE_LINE], 0);
    }

    #[test]
    fn empty_source() {
        let buf = SourceBuffer::new("");
        assert!(buf.is_empty());
        assert!(buf.cursor().is_eof());
    }
}
