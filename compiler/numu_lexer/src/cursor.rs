//! Byte cursor over the source text with line/column bookkeeping.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, so scanning loops terminate at EOF without explicit bounds
//! checks at every call site.
//!
//! # Line Breaks
//!
//! `\n`, `\r\n`, and a lone `\r` each count as one line break. Columns count
//! characters, not bytes: UTF-8 continuation bytes do not advance the column.

/// Cursor over a source buffer.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
    /// 1-based line of `pos`.
    line: u32,
    /// 1-based column of `pos`.
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.source.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos as usize + 2)
    }

    /// Returns the character at the current position, if any.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos as usize..)?.chars().next()
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Advance the cursor by one byte, updating line and column.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        match self.current() {
            b'\n' => self.new_line(),
            // `\r\n` is one break; the `\n` will do the bookkeeping.
            b'\r' if self.peek() != b'\n' => self.new_line(),
            b if b & 0xC0 == 0x80 => {}
            _ => self.column += 1,
        }
        self.pos += 1;
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance past a full (possibly multi-byte) character.
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.advance_n(width as u32);
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Extract a source substring.
    ///
    /// `start..end` must fall on character boundaries; the scanner only
    /// splits at ASCII bytes, so this always holds for token boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
