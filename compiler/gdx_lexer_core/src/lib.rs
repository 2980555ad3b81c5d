//! Low-level scanning primitives for gdx.
//!
//! - [`SourceBuffer`]: owned copy of the source with a `0x00` sentinel and
//!   zero padding, so lookahead never needs a bounds check.
//! - [`Cursor`]: a `Copy` byte cursor over that buffer.
//!
//! Nothing here knows about tokens or keywords; that lives in `gdx_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
