//! Owned, zero-terminated copy of a source text.
//!
//! Scanning loops stop on the zero byte after the source instead of
//! comparing offsets, and a [`Cursor`] may look one byte past that zero
//! without leaving the allocation.

use crate::Cursor;

/// Allocation granularity of the padded buffer.
const CACHE_LINE: usize = 64;

/// Zero bytes kept after the sentinel for lookahead at end of input.
const LOOKAHEAD: usize = 2;

/// Source bytes followed by at least `1 + LOOKAHEAD` zero bytes.
///
/// ```text
/// b"a+"  ->  [b'a', b'+', 0, 0, 0, ..., 0]   (64 bytes)
///                         ^ sentinel at len()
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a fresh padded buffer.
    ///
    /// Only the first `u32::MAX` bytes of a larger source are reachable.
    pub fn new(source: &str) -> Self {
        let len = source.len();
        let padded = (len + 1 + LOOKAHEAD).next_multiple_of(CACHE_LINE);

        let mut bytes = Vec::with_capacity(padded);
        bytes.extend_from_slice(source.as_bytes());
        bytes.resize(padded, 0);

        SourceBuffer {
            bytes,
            len: u32::try_from(len).unwrap_or(u32::MAX),
        }
    }

    /// The source text's bytes, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Source bytes together with the sentinel and padding.
    pub fn padded_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A cursor at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
