//! Scanner for gdx.
//!
//! Turns source text into a flat, `Eof`-terminated list of [`Token`]s plus
//! the [`ScanError`]s recorded along the way. Scanning never aborts early on
//! a bad character: the error is recorded and the scan carries on from the
//! next character. The one exception is an unterminated string, which runs
//! to the end of input.
//!
//! ```text
//! let output = gdx_lexer::scan_tokens("print 1 + 2;");
//! assert!(output.errors.is_empty());
//! assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

mod config;
mod keywords;
mod scan_error;
mod scanner;

use gdx_ir::{Token, TokenKind};

pub use config::{EndOfInput, ScanConfig};
pub use keywords::lookup as lookup_keyword;
pub use scan_error::ScanError;
pub use scanner::Scanner;

/// Everything a scan produces.
///
/// Callers must look at both lists: a non-empty `errors` does not mean
/// `tokens` is empty, it still holds every token scanned successfully.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutput {
    /// Scanned tokens, always terminated by exactly one `Eof` token.
    pub tokens: Vec<Token>,
    /// Recoverable errors, in source order.
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Token kinds in order, including the trailing `Eof`.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<ScanError>) {
        (self.tokens, self.errors)
    }
}

/// Scan `source` with the default configuration.
pub fn scan_tokens(source: &str) -> ScanOutput {
    scan_tokens_with(source, &ScanConfig::default())
}

/// Scan `source` with an explicit configuration.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_tokens_with(source: &str, config: &ScanConfig) -> ScanOutput {
    let output = Scanner::with_config(source, config).scan_tokens();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}
