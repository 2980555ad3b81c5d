//! Recoverable scanner errors.
//!
//! None of these stop the scan at the point they are recorded. The caller
//! decides whether a non-empty error list is fatal.

/// A lexical error, tagged with the line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ScanError {
    /// A character that starts no token. It is skipped.
    #[error("Unexpected character {ch:?}.")]
    UnexpectedCharacter { line: u32, ch: char },

    /// A string literal still open at end of input. `line` is where the
    /// opening quote was.
    #[error("Unterminated string.")]
    UnterminatedString { line: u32 },

    /// A number followed by `.` with no digit after it. The digits before
    /// the `.` are still emitted as a `NUMBER` token.
    #[error("No digit after the decimal point.")]
    MalformedNumber { line: u32 },
}

impl ScanError {
    /// 1-based line the error is reported against.
    pub fn line(&self) -> u32 {
        match self {
            ScanError::UnexpectedCharacter { line, .. }
            | ScanError::UnterminatedString { line }
            | ScanError::MalformedNumber { line } => *line,
        }
    }

    /// The character that could not be scanned, if any.
    pub fn offending_char(&self) -> Option<char> {
        match self {
            ScanError::UnexpectedCharacter { ch, .. } => Some(*ch),
            ScanError::UnterminatedString { .. } | ScanError::MalformedNumber { .. } => None,
        }
    }

    /// Whether the scan stopped producing tokens after this error.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanError::UnterminatedString { .. })
    }
}
