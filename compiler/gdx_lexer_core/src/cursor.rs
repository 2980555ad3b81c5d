//! Forward-only byte cursor.
//!
//! The cursor never checks bounds against the source length while scanning
//! ordinary bytes: the zero byte after the source stops every predicate
//! loop. Only a zero byte at or past `end` means end of input; a zero byte
//! inside the source is just another unexpected character for the scanner.

/// A position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`, so a scanner can remember where a token started by value.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes followed by the zero sentinel and lookahead padding.
    bytes: &'a [u8],
    offset: u32,
    /// Offset of the sentinel.
    end: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], end: u32) -> Self {
        debug_assert!(bytes.len() > end as usize + 2, "missing lookahead padding");
        debug_assert_eq!(bytes[end as usize], 0, "missing sentinel");
        Cursor {
            bytes,
            offset: 0,
            end,
        }
    }

    /// Byte under the cursor; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.bytes[self.offset as usize]
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.bytes[self.offset as usize + 1]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.offset += 1;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.end
    }

    /// Byte offset from the start of the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.offset
    }

    /// Source text between two offsets.
    ///
    /// Both offsets must fall on character boundaries inside the source. The
    /// scanner only moves by whole characters, so its token bounds always do;
    /// a range that splits a character comes back empty.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.end, "bad slice {start}..{end}");
        std::str::from_utf8(&self.bytes[start as usize..end as usize]).unwrap_or_default()
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.offset)
    }

    /// Skip bytes while `pred` holds.
    ///
    /// `pred(0)` must be `false`, otherwise the loop walks into the padding.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.offset += 1;
        }
    }

    /// Step over the whole character under the cursor. Not at end of input.
    pub fn advance_char(&mut self) {
        debug_assert!(!self.is_eof(), "advance_char at end of input");
        self.offset = (self.offset + char_width(self.current())).min(self.end);
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let stop = (self.offset + char_width(self.current())).min(self.end);
        self.slice(self.offset, stop).chars().next()
    }

    /// Jump to the next `\n`, leaving it unconsumed, or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.offset = self.find(|rest| memchr::memchr(b'\n', rest));
    }

    /// Jump to the next `"` or `\n` and return it, or return `0` after
    /// jumping to end of input.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        self.offset = self.find(|rest| memchr::memchr2(b'"', b'\n', rest));
        self.current()
    }

    /// Offset of the first match of `search` in the unread source, or `end`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a match lies inside the source, whose length fits in u32"
    )]
    fn find(&self, search: impl Fn(&[u8]) -> Option<usize>) -> u32 {
        let rest = &self.bytes[self.offset as usize..self.end as usize];
        match search(rest) {
            Some(index) => self.offset + index as u32,
            None => self.end,
        }
    }
}

/// Length of the UTF-8 sequence a leading byte announces. Stray
/// continuation bytes count as one.
#[inline]
fn char_width(lead: u8) -> u32 {
    match lead {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
